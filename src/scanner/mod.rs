//! Line-driven state machines, one per Gherkin construct.
//!
//! The [`FeatureScanner`] receives every physical line in order and hands
//! each one to exactly one owned child scanner. Children never look ahead;
//! every decision is made from the current line and accumulated state.
//! Errors go to the shared [`Diagnostics`](crate::error::Diagnostics) and
//! scanning continues with the next line.

pub mod background;
pub mod doc_string;
pub mod examples;
pub mod feature;
pub mod scenario;
pub mod step;
pub mod table;
pub mod tags;

pub use background::BackgroundScanner;
pub use doc_string::DocStringScanner;
pub use examples::ExamplesScanner;
pub use feature::FeatureScanner;
pub use scenario::ScenarioScanner;
pub use step::{StepList, StepScanner};
pub use table::TableScanner;
pub use tags::TagScanner;

use crate::config::DocStringSeparators;
use crate::language::Language;
use crate::line::Line;

/// Immutable configuration handed down with every line.
#[derive(Debug, Clone, Copy)]
pub struct ScanContext<'a> {
    pub language: &'a Language,
    pub separators: &'a DocStringSeparators,
}

pub(crate) const EXPECTED_BEFORE_FEATURE: &[&str] = &[
    "end-of-file",
    "language directive",
    "tag line",
    "feature line",
    "comment",
    "empty line",
];

pub(crate) const EXPECTED_IN_FEATURE_HEADER: &[&str] = &[
    "end-of-file",
    "background line",
    "tag line",
    "scenario line",
    "rule line",
    "comment",
    "empty line",
    "description line",
];

pub(crate) const EXPECTED_BEFORE_STEPS: &[&str] = &[
    "end-of-file",
    "step line",
    "tag line",
    "scenario line",
    "rule line",
    "comment",
    "empty line",
    "description line",
];

pub(crate) const EXPECTED_IN_STEPS: &[&str] = &[
    "end-of-file",
    "table row",
    "doc-string separator",
    "step line",
    "tag line",
    "scenario line",
    "rule line",
    "comment",
    "empty line",
];

pub(crate) const EXPECTED_IN_OUTLINE_STEPS: &[&str] = &[
    "end-of-file",
    "table row",
    "doc-string separator",
    "step line",
    "tag line",
    "examples line",
    "scenario line",
    "rule line",
    "comment",
    "empty line",
];

pub(crate) const EXPECTED_IN_EXAMPLES: &[&str] = &[
    "end-of-file",
    "table row",
    "tag line",
    "examples line",
    "scenario line",
    "rule line",
    "comment",
    "empty line",
];

pub(crate) const EXPECTED_AFTER_FEATURE_TAGS: &[&str] =
    &["tag line", "feature line", "comment", "empty line"];

pub(crate) const EXPECTED_AFTER_TAGS: &[&str] = &[
    "tag line",
    "scenario line",
    "examples line",
    "comment",
    "empty line",
];

pub(crate) const EXPECTED_DOC_STRING_END: &[&str] = &["doc-string separator", "other line"];

/// Free-form lines following a keyword line, up to the first step.
#[derive(Debug, Default)]
pub(crate) struct Description {
    lines: Vec<String>,
}

impl Description {
    pub(crate) fn push(&mut self, line: &Line<'_>) {
        if self.lines.is_empty() && line.is_blank() {
            return;
        }
        self.lines.push(line.text().trim_end().to_string());
    }

    pub(crate) fn finish(mut self) -> Option<String> {
        while self.lines.last().is_some_and(String::is_empty) {
            self.lines.pop();
        }
        if self.lines.is_empty() {
            None
        } else {
            Some(self.lines.join("\n"))
        }
    }
}
