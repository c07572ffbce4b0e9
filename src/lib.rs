//! Gherkin feature-file scanner, parser, formatter and JSON projection.
//!
//! Feature files are read one line at a time by a tree of small state
//! machines, one per construct, with no lookahead. Every problem found
//! along the way is collected; a parse either yields a complete
//! [`GherkinDocument`] or the full list of [`ParseError`]s.
//!
//! # Quick start
//!
//! ## Parse a feature
//!
//! ```
//! use gherkin_scanner::parse_str;
//!
//! let input = "Feature: Cukes\n  Scenario: eat\n    Given 5 cukes\n";
//! let document = parse_str(input, "cukes.feature").unwrap();
//! let feature = document.feature.unwrap();
//! assert_eq!(feature.scenarios[0].steps[0].text, "5 cukes");
//! ```
//!
//! ## Parse with a custom configuration and re-format
//!
//! ```
//! use gherkin_scanner::{DocStringSeparators, Parser, ParserConfig, format};
//!
//! let config = ParserConfig::new()
//!     .with_doc_string_separators(DocStringSeparators::new("'''", "~~~"));
//! let parser = Parser::new(config);
//! let document = parser
//!     .parse_str("Feature: f\n  Scenario: s\n    Given a\n      '''\n      body\n      '''\n", "f")
//!     .unwrap();
//! assert!(format(&document).contains("      '''"));
//! ```

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

use std::path::{Path, PathBuf};

pub mod ast;
pub mod config;
pub mod error;
pub mod formatter;
pub mod json;
pub mod keyword;
pub mod language;
pub mod line;
pub mod location;
pub mod parser;
pub mod scanner;

pub use ast::{
    Background, Comment, DocString, Examples, Feature, GherkinDocument, Scenario, Step,
    StepArgument, StepType, Table, TableCell, TableRow, Tag,
};
pub use config::{DocStringSeparators, ParserConfig};
pub use error::{ParseError, ParseErrorKind, ParseErrors};
pub use formatter::format;
pub use keyword::{Classification, Keyword, classify};
pub use language::{DEFAULT_LANGUAGE, Language, LanguageTable};
pub use location::Location;
pub use parser::{Parser, parse, parse_str};

/// Unified error type for file-level operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The file could not be read.
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The file was read but did not parse.
    #[error("{0}")]
    Parse(#[from] ParseErrors),
    /// The document could not be serialized.
    #[error("{0}")]
    Json(#[from] serde_json::Error),
}

/// Read and parse a feature file with the default configuration.
///
/// The file path becomes the document URI.
pub fn parse_file(path: impl AsRef<Path>) -> Result<GherkinDocument, Error> {
    Parser::default().parse_file(path)
}
