use crate::ast::Background;
use crate::error::Diagnostics;
use crate::keyword::{Classification, Keyword};
use crate::line::Line;
use crate::location::Location;

use super::{
    Description, DocStringScanner, EXPECTED_BEFORE_STEPS, EXPECTED_IN_STEPS, ScanContext,
    StepList,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    ScanningBackground,
    ScanningSteps,
}

/// Scans a `Background:` block: name, description, then steps.
#[derive(Debug)]
pub struct BackgroundScanner {
    state: State,
    keyword: String,
    name: String,
    location: Location,
    description: Description,
    steps: StepList,
}

impl BackgroundScanner {
    /// Start from the `Background:` line.
    #[must_use]
    pub fn start(line: &Line<'_>, classification: &Classification<'_>) -> Self {
        log::trace!("background at line {}", line.number());
        Self {
            state: State::ScanningBackground,
            keyword: classification.text.to_string(),
            name: line.text_after(classification).to_string(),
            location: line.location(),
            description: Description::default(),
            steps: StepList::new(),
        }
    }

    #[must_use]
    pub fn in_doc_string(&self) -> bool {
        self.steps.in_doc_string()
    }

    /// Expected alternatives for an error raised in the current state.
    #[must_use]
    pub const fn expected(&self) -> &'static [&'static str] {
        match self.state {
            State::ScanningBackground => EXPECTED_BEFORE_STEPS,
            State::ScanningSteps => EXPECTED_IN_STEPS,
        }
    }

    pub fn scan(
        &mut self,
        line: &Line<'_>,
        classification: &Classification<'_>,
        ctx: &ScanContext<'_>,
        diag: &mut Diagnostics,
    ) {
        if self.steps.in_doc_string() {
            self.steps.continue_step(line, ctx, diag);
            return;
        }
        if self.steps.start(line, classification) {
            self.state = State::ScanningSteps;
            return;
        }
        match self.state {
            State::ScanningBackground => {
                if classification.keyword == Keyword::Table
                    || DocStringScanner::is_separator(line, ctx.separators)
                {
                    diag.mismatch(self.expected(), line.trimmed(), line.location());
                } else {
                    self.description.push(line);
                }
            }
            State::ScanningSteps => {
                if !self.steps.continue_step(line, ctx, diag) {
                    diag.mismatch(self.expected(), line.trimmed(), line.location());
                }
            }
        }
    }

    #[must_use]
    pub fn finish(self) -> Background {
        Background {
            keyword: self.keyword,
            name: self.name,
            description: self.description.finish(),
            steps: self.steps.finish(),
            location: self.location,
        }
    }
}
