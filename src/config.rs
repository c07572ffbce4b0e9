use crate::language::LanguageTable;

/// Primary and alternative doc-string delimiters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocStringSeparators {
    pub primary: String,
    pub alternative: String,
}

impl DocStringSeparators {
    #[must_use]
    pub fn new(primary: &str, alternative: &str) -> Self {
        Self {
            primary: primary.to_string(),
            alternative: alternative.to_string(),
        }
    }

    /// The separator `trimmed` starts with, primary first.
    #[must_use]
    pub fn matching(&self, trimmed: &str) -> Option<&str> {
        [self.primary.as_str(), self.alternative.as_str()]
            .into_iter()
            .find(|sep| !sep.is_empty() && trimmed.starts_with(*sep))
    }
}

impl Default for DocStringSeparators {
    fn default() -> Self {
        Self::new("\"\"\"", "```")
    }
}

/// Everything a parse call needs besides its input.
#[derive(Debug, Clone, Default)]
pub struct ParserConfig {
    pub languages: LanguageTable,
    pub doc_string_separators: DocStringSeparators,
}

impl ParserConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_languages(mut self, languages: LanguageTable) -> Self {
        self.languages = languages;
        self
    }

    #[must_use]
    pub fn with_doc_string_separators(mut self, separators: DocStringSeparators) -> Self {
        self.doc_string_separators = separators;
        self
    }
}
