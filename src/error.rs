use std::fmt;

use crate::location::Location;

/// Classifies a parse error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The line matches no production accepted in the current state.
    StructuralMismatch {
        expected: &'static [&'static str],
        found: String,
    },
    /// Input ended while a construct still expected more lines.
    UnexpectedEndOfFile { expected: &'static [&'static str] },
    /// A table row's cell count differs from its header's.
    InconsistentTableCellCount,
    /// The line-1 language directive names an unknown language.
    InvalidLanguageCode(String),
    /// A tag token contains whitespace.
    TagContainsWhitespace,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StructuralMismatch { expected, found } => {
                write!(f, "expected: {}, got '{found}'", expected.join(", "))
            }
            Self::UnexpectedEndOfFile { expected } => {
                write!(
                    f,
                    "unexpected end of file, \
                     expected: {}",
                    expected.join(", ")
                )
            }
            Self::InconsistentTableCellCount => {
                write!(f, "inconsistent cell count within the table")
            }
            Self::InvalidLanguageCode(code) => {
                write!(f, "Language not supported: {code}")
            }
            Self::TagContainsWhitespace => {
                write!(f, "A tag may not contain whitespace")
            }
        }
    }
}

/// A positioned parse diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{uri}:{}:{}: {kind}", location.line, location.column)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub location: Location,
    pub uri: String,
}

impl ParseError {
    /// The human-readable message, without position.
    #[must_use]
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

/// Every error found in one document, in the order they were detected.
///
/// Never empty.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", render(.0))]
pub struct ParseErrors(Vec<ParseError>);

impl ParseErrors {
    #[must_use]
    pub fn errors(&self) -> &[ParseError] {
        &self.0
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<ParseError> {
        self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ParseError> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a ParseErrors {
    type Item = &'a ParseError;
    type IntoIter = std::slice::Iter<'a, ParseError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

fn render(errors: &[ParseError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Sink for diagnostics shared by every scanner of one parse call.
///
/// Recording an error never interrupts scanning.
#[derive(Debug)]
pub struct Diagnostics {
    uri: String,
    errors: Vec<ParseError>,
}

impl Diagnostics {
    #[must_use]
    pub fn new(uri: &str) -> Self {
        Self {
            uri: uri.to_string(),
            errors: Vec::new(),
        }
    }

    pub fn push(&mut self, kind: ParseErrorKind, location: Location) {
        log::debug!("{}: recorded error at {location}: {kind}", self.uri);
        self.errors.push(ParseError {
            kind,
            location,
            uri: self.uri.clone(),
        });
    }

    pub fn mismatch(&mut self, expected: &'static [&'static str], found: &str, location: Location) {
        self.push(
            ParseErrorKind::StructuralMismatch {
                expected,
                found: found.to_string(),
            },
            location,
        );
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    #[must_use]
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// `Ok(value)` when nothing was recorded, every error otherwise.
    pub fn into_result<T>(self, value: T) -> Result<T, ParseErrors> {
        if self.errors.is_empty() {
            Ok(value)
        } else {
            Err(ParseErrors(self.errors))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_diagnostics_yield_value() {
        let diag = Diagnostics::new("a.feature");
        assert_eq!(diag.into_result(7), Ok(7));
    }

    #[test]
    fn errors_keep_order() {
        let mut diag = Diagnostics::new("a.feature");
        diag.push(ParseErrorKind::InconsistentTableCellCount, Location::new(3, 5));
        diag.mismatch(&["feature line"], "oops", Location::new(4, 1));
        let errors = diag.into_result(()).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.errors()[0].location, Location::new(3, 5));
        assert_eq!(errors.errors()[1].message(), "expected: feature line, got 'oops'");
    }

    #[test]
    fn display_includes_position() {
        let mut diag = Diagnostics::new("a.feature");
        diag.push(
            ParseErrorKind::InvalidLanguageCode("xx".to_string()),
            Location::new(1, 1),
        );
        let errors = diag.into_result(()).unwrap_err();
        assert_eq!(errors.to_string(), "a.feature:1:1: Language not supported: xx");
    }
}
