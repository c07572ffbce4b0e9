//! Keyword resolution: which grammar role a line starts with.

use crate::language::Language;

/// Grammar role a line was classified as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    /// No keyword or structural marker; plain text.
    None,
    Feature,
    Background,
    Scenario,
    ScenarioOutline,
    Examples,
    Given,
    When,
    Then,
    And,
    But,
    /// Step introduced by `*`.
    Asterisk,
    /// Table row (`|`).
    Table,
    /// Comment line (`#`).
    Comment,
    /// Tag line (`@`).
    Tag,
}

impl Keyword {
    /// Whether the keyword introduces a step.
    #[must_use]
    pub const fn is_step(self) -> bool {
        matches!(
            self,
            Self::Given | Self::When | Self::Then | Self::And | Self::But | Self::Asterisk
        )
    }

    /// Whether the keyword must be followed by a colon.
    #[must_use]
    pub const fn takes_colon(self) -> bool {
        matches!(
            self,
            Self::Feature
                | Self::Background
                | Self::Scenario
                | Self::ScenarioOutline
                | Self::Examples
        )
    }
}

/// Outcome of classifying one line.
///
/// `text` is the exact localized keyword that matched, without the colon
/// of structural keywords; it is empty for [`Keyword::None`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification<'a> {
    pub keyword: Keyword,
    pub text: &'a str,
}

impl Classification<'_> {
    const NONE: Self = Self {
        keyword: Keyword::None,
        text: "",
    };

    /// Remove the matched keyword (and its colon) from `trimmed` and
    /// trim what is left.
    #[must_use]
    pub fn strip<'t>(&self, trimmed: &'t str) -> &'t str {
        let rest = trimmed
            .strip_prefix(self.text)
            .or_else(|| trimmed.strip_prefix(self.text.trim_end()))
            .unwrap_or(trimmed);
        let rest = if self.keyword.takes_colon() {
            rest.strip_prefix(':').unwrap_or(rest)
        } else {
            rest
        };
        rest.trim()
    }
}

const ASTERISK: &str = "* ";

// Markers and English keywords recognized in every language once the
// localized lookup fails.
const FALLBACKS: [(Keyword, &str); 7] = [
    (Keyword::Tag, "@"),
    (Keyword::Comment, "#"),
    (Keyword::Table, "|"),
    (Keyword::And, "And "),
    (Keyword::But, "But "),
    (Keyword::Examples, "Examples"),
    (Keyword::Background, "Background"),
];

/// Classify `line` against `language`.
///
/// Roles are tried in a fixed priority order (feature, background,
/// scenario outline, scenario, examples, given, when, then, and, but) and
/// each role's synonyms in declaration order; the first synonym that is a
/// prefix of the trimmed line wins. Structural keywords only match when
/// directly followed by `:`.
#[must_use]
pub fn classify<'a>(line: &str, language: &'a Language) -> Classification<'a> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Classification::NONE;
    }

    let roles: [(Keyword, &'a [String]); 10] = [
        (Keyword::Feature, language.feature.as_slice()),
        (Keyword::Background, language.background.as_slice()),
        (Keyword::ScenarioOutline, language.scenario_outline.as_slice()),
        (Keyword::Scenario, language.scenario.as_slice()),
        (Keyword::Examples, language.examples.as_slice()),
        (Keyword::Given, language.given.as_slice()),
        (Keyword::When, language.when.as_slice()),
        (Keyword::Then, language.then.as_slice()),
        (Keyword::And, language.and.as_slice()),
        (Keyword::But, language.but.as_slice()),
    ];

    for (keyword, synonyms) in roles {
        for synonym in synonyms {
            if matches_keyword(trimmed, keyword, synonym) {
                return Classification {
                    keyword,
                    text: synonym,
                };
            }
        }
    }

    if trimmed == ASTERISK.trim_end() || trimmed.starts_with(ASTERISK) {
        return Classification {
            keyword: Keyword::Asterisk,
            text: ASTERISK,
        };
    }

    FALLBACKS
        .iter()
        .find(|(keyword, text)| matches_keyword(trimmed, *keyword, text))
        .map_or(Classification::NONE, |&(keyword, text)| Classification {
            keyword,
            text,
        })
}

fn matches_keyword(trimmed: &str, keyword: Keyword, synonym: &str) -> bool {
    if synonym.is_empty() {
        return false;
    }
    if keyword.takes_colon() {
        return trimmed
            .strip_prefix(synonym)
            .is_some_and(|rest| rest.starts_with(':'));
    }
    if trimmed.starts_with(synonym) {
        return true;
    }
    // A bare step keyword ("Given" with nothing after it) has lost its
    // trailing separator to trimming.
    let bare = synonym.trim_end();
    keyword.is_step() && bare.len() < synonym.len() && trimmed == bare
}
