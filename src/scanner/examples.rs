use crate::ast::{Examples, Tag};
use crate::error::Diagnostics;
use crate::keyword::{Classification, Keyword};
use crate::line::Line;
use crate::location::Location;

use super::{Description, EXPECTED_IN_EXAMPLES, TableScanner};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    ScanningDescription,
    ScanningTable,
}

/// Scans one `Examples:` block of a scenario outline.
#[derive(Debug)]
pub struct ExamplesScanner {
    state: State,
    keyword: String,
    name: String,
    location: Location,
    tags: Vec<Tag>,
    description: Description,
    table: TableScanner,
}

impl ExamplesScanner {
    /// Start from the `Examples:` line with the tags that preceded it.
    #[must_use]
    pub fn start(line: &Line<'_>, classification: &Classification<'_>, tags: Vec<Tag>) -> Self {
        log::trace!("examples at line {}", line.number());
        Self {
            state: State::ScanningDescription,
            keyword: classification.text.to_string(),
            name: line.text_after(classification).to_string(),
            location: line.location(),
            tags,
            description: Description::default(),
            table: TableScanner::new(),
        }
    }

    pub fn scan(
        &mut self,
        line: &Line<'_>,
        classification: &Classification<'_>,
        diag: &mut Diagnostics,
    ) {
        if classification.keyword == Keyword::Table {
            self.state = State::ScanningTable;
            self.table.scan(line, diag);
            return;
        }
        match self.state {
            State::ScanningTable if line.is_blank() => {}
            State::ScanningDescription if !classification.keyword.is_step() => {
                self.description.push(line);
            }
            _ => diag.mismatch(EXPECTED_IN_EXAMPLES, line.trimmed(), line.location()),
        }
    }

    #[must_use]
    pub fn finish(self) -> Examples {
        Examples {
            keyword: self.keyword,
            name: self.name,
            description: self.description.finish(),
            tags: self.tags,
            table: self.table.finish(),
            location: self.location,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::LanguageTable;

    fn scan(lines: &[&str]) -> (Examples, Diagnostics) {
        let languages = LanguageTable::builtin();
        let en = languages.default_language();
        let mut diag = Diagnostics::new("test.feature");
        let first = Line::new(lines[0], 1);
        let mut scanner = ExamplesScanner::start(&first, &first.classify(en), Vec::new());
        for (n, text) in lines.iter().enumerate().skip(1) {
            let line = Line::new(text, n + 1);
            scanner.scan(&line, &line.classify(en), &mut diag);
        }
        (scanner.finish(), diag)
    }

    #[test]
    fn description_and_table() {
        let (examples, diag) = scan(&[
            "    Examples: small numbers",
            "      Only a few.",
            "      | n |",
            "",
            "      | 1 |",
        ]);
        assert!(diag.is_empty());
        assert_eq!(examples.name, "small numbers");
        assert_eq!(examples.description.as_deref(), Some("      Only a few."));
        let table = examples.table.expect("table");
        assert_eq!(table.columns, vec!["n"]);
        assert_eq!(table.rows.len(), 1);
    }

    #[test]
    fn examples_without_table() {
        let (examples, diag) = scan(&["Scenarios:"]);
        assert!(diag.is_empty());
        assert_eq!(examples.keyword, "Scenarios");
        assert!(examples.table.is_none());
    }

    #[test]
    fn text_after_table_is_reported() {
        let (_, diag) = scan(&["Examples:", "  | a |", "  words"]);
        assert_eq!(diag.len(), 1);
    }

    #[test]
    fn step_in_examples_is_reported() {
        let (_, diag) = scan(&["Examples:", "  Given nope"]);
        assert_eq!(diag.len(), 1);
    }
}
