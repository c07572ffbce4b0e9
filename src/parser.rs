//! Entry points that turn feature-file text into a [`GherkinDocument`].

use std::path::Path;

use crate::Error;
use crate::ast::GherkinDocument;
use crate::config::ParserConfig;
use crate::error::{Diagnostics, ParseErrors};
use crate::line::Line;
use crate::scanner::FeatureScanner;

const BOM: char = '\u{feff}';

/// Reusable parser bound to one configuration.
///
/// Every call builds fresh scanner state, so nothing carries over from
/// one document to the next.
#[derive(Debug, Clone, Default)]
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    #[must_use]
    pub const fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse a sequence of lines (without terminators).
    ///
    /// # Errors
    ///
    /// Returns every diagnostic recorded while scanning, in detection
    /// order, if there was at least one.
    pub fn parse<I, S>(&self, lines: I, uri: &str) -> Result<GherkinDocument, ParseErrors>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        log::debug!("parsing {uri}");
        let mut diag = Diagnostics::new(uri);
        let mut scanner =
            FeatureScanner::new(&self.config.languages, &self.config.doc_string_separators);
        for (index, text) in lines.into_iter().enumerate() {
            scanner.scan(&Line::new(text.as_ref(), index + 1), &mut diag);
        }
        let document = scanner.finish(&mut diag);
        log::debug!("parsed {uri} with {} error(s)", diag.len());
        diag.into_result(document)
    }

    /// Parse a whole source string.
    ///
    /// The input is split on `\n`; a final empty fragment and a leading
    /// byte-order mark are dropped.
    ///
    /// # Errors
    ///
    /// See [`Parser::parse`].
    pub fn parse_str(&self, input: &str, uri: &str) -> Result<GherkinDocument, ParseErrors> {
        self.parse(split_lines(input), uri)
    }

    /// Read and parse a feature file; the path becomes the document URI.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<GherkinDocument, Error> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(self.parse_str(&source, &path.display().to_string())?)
    }
}

/// Parse `lines` with the given configuration.
///
/// # Errors
///
/// See [`Parser::parse`].
pub fn parse<I, S>(
    lines: I,
    uri: &str,
    config: &ParserConfig,
) -> Result<GherkinDocument, ParseErrors>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Parser::new(config.clone()).parse(lines, uri)
}

/// Parse a source string with the default configuration.
///
/// # Errors
///
/// See [`Parser::parse`].
pub fn parse_str(input: &str, uri: &str) -> Result<GherkinDocument, ParseErrors> {
    Parser::default().parse_str(input, uri)
}

fn split_lines(input: &str) -> Vec<&str> {
    let input = input.strip_prefix(BOM).unwrap_or(input);
    let mut lines: Vec<&str> = input.split('\n').collect();
    if lines.last().is_some_and(|last| last.is_empty()) {
        lines.pop();
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_drops_final_fragment() {
        assert_eq!(split_lines("a\nb\n"), vec!["a", "b"]);
        assert_eq!(split_lines("a\nb"), vec!["a", "b"]);
        assert_eq!(split_lines("a\n\n"), vec!["a", ""]);
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn split_strips_bom() {
        assert_eq!(split_lines("\u{feff}Feature: x\n"), vec!["Feature: x"]);
    }

    #[test]
    fn empty_input_has_no_feature() {
        let document = parse_str("", "empty.feature").unwrap();
        assert_eq!(document.uri, "empty.feature");
        assert!(document.feature.is_none());
        assert!(document.comments.is_empty());
    }

    #[test]
    fn lines_api_matches_string_api() {
        let source = "Feature: f\n  Scenario: s\n    Given x\n";
        let from_str = parse_str(source, "a").unwrap();
        let from_lines = parse(source.lines(), "a", &ParserConfig::default()).unwrap();
        assert_eq!(from_str, from_lines);
    }
}
