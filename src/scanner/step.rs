use crate::ast::{Step, StepArgument, StepType};
use crate::error::Diagnostics;
use crate::keyword::{Classification, Keyword};
use crate::line::Line;
use crate::location::Location;

use super::{DocStringScanner, ScanContext, TableScanner};

/// One step and its optional table or doc-string argument.
#[derive(Debug)]
pub struct StepScanner {
    step_type: StepType,
    keyword: String,
    text: String,
    location: Location,
    table: TableScanner,
    doc_string: DocStringScanner,
}

impl StepScanner {
    /// Start a step from a line classified as a step keyword.
    ///
    /// Returns `None` if the classification is not a step.
    #[must_use]
    pub fn start(line: &Line<'_>, classification: &Classification<'_>) -> Option<Self> {
        let step_type = match classification.keyword {
            Keyword::Given => StepType::Given,
            Keyword::When => StepType::When,
            Keyword::Then => StepType::Then,
            Keyword::And => StepType::And,
            Keyword::But => StepType::But,
            Keyword::Asterisk => StepType::Asterisk,
            _ => return None,
        };
        Some(Self {
            step_type,
            keyword: classification.text.to_string(),
            text: line.text_after(classification).to_string(),
            location: line.location(),
            table: TableScanner::new(),
            doc_string: DocStringScanner::new(),
        })
    }

    #[must_use]
    pub fn in_doc_string(&self) -> bool {
        self.doc_string.is_open()
    }

    /// Whether `line` continues this step's argument.
    #[must_use]
    pub fn accepts(&self, line: &Line<'_>, ctx: &ScanContext<'_>) -> bool {
        if self.doc_string.is_open() {
            return true;
        }
        if self.doc_string.has_started() {
            return false;
        }
        if line.classify(ctx.language).keyword == Keyword::Table {
            return true;
        }
        !self.table.has_started() && DocStringScanner::is_separator(line, ctx.separators)
    }

    /// Feed an accepted continuation line.
    pub fn scan(&mut self, line: &Line<'_>, ctx: &ScanContext<'_>, diag: &mut Diagnostics) {
        if self.doc_string.is_open() || DocStringScanner::is_separator(line, ctx.separators) {
            self.doc_string.scan(line, ctx.separators);
        } else {
            self.table.scan(line, diag);
        }
    }

    #[must_use]
    pub fn finish(self) -> Step {
        let argument = self
            .table
            .finish()
            .map(StepArgument::Table)
            .or_else(|| self.doc_string.finish().map(StepArgument::DocString));
        Step {
            step_type: self.step_type,
            keyword: self.keyword,
            text: self.text,
            argument,
            location: self.location,
        }
    }
}

/// Ordered steps of a background or scenario.
#[derive(Debug, Default)]
pub struct StepList {
    steps: Vec<StepScanner>,
}

impl StepList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    #[must_use]
    pub fn in_doc_string(&self) -> bool {
        self.steps.last().is_some_and(StepScanner::in_doc_string)
    }

    /// Start a new step; returns `false` if the line is not a step.
    pub fn start(&mut self, line: &Line<'_>, classification: &Classification<'_>) -> bool {
        match StepScanner::start(line, classification) {
            Some(step) => {
                self.steps.push(step);
                true
            }
            None => false,
        }
    }

    /// Offer a non-step line to the current step.
    ///
    /// Blank lines outside doc-strings are consumed silently. Returns
    /// `false` when the line belongs to no step.
    pub fn continue_step(
        &mut self,
        line: &Line<'_>,
        ctx: &ScanContext<'_>,
        diag: &mut Diagnostics,
    ) -> bool {
        match self.steps.last_mut() {
            Some(step) if step.accepts(line, ctx) => {
                step.scan(line, ctx, diag);
                true
            }
            _ => line.is_blank(),
        }
    }

    #[must_use]
    pub fn finish(self) -> Vec<Step> {
        self.steps.into_iter().map(StepScanner::finish).collect()
    }
}
