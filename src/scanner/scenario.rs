use crate::ast::{Scenario, Tag};
use crate::error::Diagnostics;
use crate::keyword::{Classification, Keyword};
use crate::line::Line;
use crate::location::Location;

use super::{
    Description, DocStringScanner, EXPECTED_BEFORE_STEPS, EXPECTED_IN_EXAMPLES,
    EXPECTED_IN_OUTLINE_STEPS, EXPECTED_IN_STEPS, ExamplesScanner, ScanContext, StepList,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    ScanningDescription,
    ScanningSteps,
    ScanningExamples,
}

/// Scans a `Scenario:` or `Scenario Outline:` block.
///
/// Both share one state machine; only outlines accept `Examples:`
/// blocks.
#[derive(Debug)]
pub struct ScenarioScanner {
    state: State,
    supports_examples: bool,
    keyword: String,
    name: String,
    location: Location,
    tags: Vec<Tag>,
    description: Description,
    steps: StepList,
    examples: Vec<ExamplesScanner>,
}

impl ScenarioScanner {
    /// Start from a scenario or outline line with the tags that preceded
    /// it.
    #[must_use]
    pub fn start(line: &Line<'_>, classification: &Classification<'_>, tags: Vec<Tag>) -> Self {
        let supports_examples = classification.keyword == Keyword::ScenarioOutline;
        log::trace!(
            "{} at line {}",
            if supports_examples { "outline" } else { "scenario" },
            line.number()
        );
        Self {
            state: State::ScanningDescription,
            supports_examples,
            keyword: classification.text.to_string(),
            name: line.text_after(classification).to_string(),
            location: line.location(),
            tags,
            description: Description::default(),
            steps: StepList::new(),
            examples: Vec::new(),
        }
    }

    #[must_use]
    pub const fn supports_examples(&self) -> bool {
        self.supports_examples
    }

    #[must_use]
    pub fn in_doc_string(&self) -> bool {
        self.steps.in_doc_string()
    }

    /// Expected alternatives for an error raised in the current state.
    #[must_use]
    pub const fn expected(&self) -> &'static [&'static str] {
        match self.state {
            State::ScanningDescription => EXPECTED_BEFORE_STEPS,
            State::ScanningSteps if self.supports_examples => EXPECTED_IN_OUTLINE_STEPS,
            State::ScanningSteps => EXPECTED_IN_STEPS,
            State::ScanningExamples => EXPECTED_IN_EXAMPLES,
        }
    }

    /// Open an `Examples:` block; plain scenarios reject it.
    pub fn start_examples(
        &mut self,
        line: &Line<'_>,
        classification: &Classification<'_>,
        tags: Vec<Tag>,
        diag: &mut Diagnostics,
    ) {
        if !self.supports_examples {
            diag.mismatch(self.expected(), line.trimmed(), line.location());
            return;
        }
        self.state = State::ScanningExamples;
        self.examples
            .push(ExamplesScanner::start(line, classification, tags));
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
        if let Some(examples) = self.examples.last_mut() {
            examples.scan(line, classification, diag);
            return;
        }
        if self.steps.start(line, classification) {
            self.state = State::ScanningSteps;
            return;
        }
        match self.state {
            State::ScanningDescription => {
                if classification.keyword == Keyword::Table
                    || DocStringScanner::is_separator(line, ctx.separators)
                {
                    diag.mismatch(self.expected(), line.trimmed(), line.location());
                } else {
                    self.description.push(line);
                }
            }
            State::ScanningSteps | State::ScanningExamples => {
                if !self.steps.continue_step(line, ctx, diag) {
                    diag.mismatch(self.expected(), line.trimmed(), line.location());
                }
            }
        }
    }

    #[must_use]
    pub fn finish(self) -> Scenario {
        Scenario {
            keyword: self.keyword,
            name: self.name,
            description: self.description.finish(),
            tags: self.tags,
            steps: self.steps.finish(),
            examples: self
                .examples
                .into_iter()
                .map(ExamplesScanner::finish)
                .collect(),
            location: self.location,
        }
    }
}
