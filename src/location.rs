use std::fmt;

use serde::Serialize;

/// 1-based source position of a node or diagnostic.
///
/// A `column` of 0 means the position has no concrete column, which is
/// what unexpected end-of-file errors report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

impl Location {
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Position used for errors raised after the last line of input.
    #[must_use]
    pub const fn end_of_file(last_line: usize) -> Self {
        Self {
            line: last_line + 1,
            column: 0,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}:{})", self.line, self.column)
    }
}
