use crate::keyword::{self, Classification};
use crate::language::Language;
use crate::location::Location;

/// One physical line of input with its 1-based line number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    text: &'a str,
    number: usize,
}

impl<'a> Line<'a> {
    #[must_use]
    pub const fn new(text: &'a str, number: usize) -> Self {
        Self { text, number }
    }

    /// The raw, untrimmed text.
    #[must_use]
    pub const fn text(&self) -> &'a str {
        self.text
    }

    #[must_use]
    pub const fn number(&self) -> usize {
        self.number
    }

    #[must_use]
    pub fn trimmed(&self) -> &'a str {
        self.text.trim()
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.trimmed().is_empty()
    }

    /// Number of leading whitespace characters.
    #[must_use]
    pub fn indent(&self) -> usize {
        self.text.chars().take_while(|c| c.is_whitespace()).count()
    }

    /// Location of the first non-whitespace character.
    #[must_use]
    pub fn location(&self) -> Location {
        self.location_at(self.indent())
    }

    /// Location of the character at `offset` (counted in chars).
    #[must_use]
    pub const fn location_at(&self, offset: usize) -> Location {
        Location::new(self.number, offset + 1)
    }

    #[must_use]
    pub fn classify<'l>(&self, language: &'l Language) -> Classification<'l> {
        keyword::classify(self.text, language)
    }

    /// The trimmed text with the classified keyword removed.
    #[must_use]
    pub fn text_after(&self, classification: &Classification<'_>) -> &'a str {
        classification.strip(self.trimmed())
    }

    /// Whether the trimmed text starts with `prefix`.
    #[must_use]
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.trimmed().starts_with(prefix)
    }
}
