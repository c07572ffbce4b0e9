//! Top-level document assembler.
//!
//! The [`FeatureScanner`] owns the comment list, the pending tags, the
//! optional background and the ordered scenario scanners. Each line is
//! routed to exactly one of them:
//!
//! 1. an open doc-string anywhere below takes the line verbatim;
//! 2. a language directive on line 1 switches the active language;
//! 3. comments are collected, tag lines feed the pending tags;
//! 4. keyword lines open their construct, which claims the pending tags;
//! 5. everything else goes to the innermost open construct.

use std::sync::LazyLock;

use regex::Regex;

use crate::ast::{Comment, Feature, GherkinDocument, Tag};
use crate::config::DocStringSeparators;
use crate::error::{Diagnostics, ParseErrorKind};
use crate::keyword::{Classification, Keyword};
use crate::language::{Language, LanguageTable};
use crate::line::Line;
use crate::location::Location;

use super::{
    BackgroundScanner, Description, DocStringScanner, EXPECTED_AFTER_FEATURE_TAGS,
    EXPECTED_AFTER_TAGS, EXPECTED_BEFORE_FEATURE, EXPECTED_DOC_STRING_END,
    EXPECTED_IN_FEATURE_HEADER, ScanContext, ScenarioScanner, TagScanner,
};

static LANGUAGE_DIRECTIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*#\s*language\s*:\s*([a-zA-Z0-9_-]+)\s*$")
        .unwrap_or_else(|e| unreachable!("directive pattern is valid: {e}"))
});

/// Language code named by a `# language: xx` directive, if `text` is one.
#[must_use]
pub fn language_directive(text: &str) -> Option<&str> {
    LANGUAGE_DIRECTIVE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    ExpectingLanguageOrTagsOrFeature,
    ExpectingBackgroundOrScenarios,
    InBackground,
    InScenarios,
}

#[derive(Debug)]
struct Header {
    keyword: String,
    name: String,
    location: Location,
    tags: Vec<Tag>,
}

/// Scans a whole document, one line at a time.
#[derive(Debug)]
pub struct FeatureScanner<'a> {
    languages: &'a LanguageTable,
    separators: &'a DocStringSeparators,
    language: &'a Language,
    state: State,
    last_line: usize,
    comments: Vec<Comment>,
    tags: TagScanner,
    header: Option<Header>,
    description: Description,
    background: Option<BackgroundScanner>,
    scenarios: Vec<ScenarioScanner>,
}

impl<'a> FeatureScanner<'a> {
    #[must_use]
    pub fn new(languages: &'a LanguageTable, separators: &'a DocStringSeparators) -> Self {
        Self {
            languages,
            separators,
            language: languages.default_language(),
            state: State::ExpectingLanguageOrTagsOrFeature,
            last_line: 0,
            comments: Vec::new(),
            tags: TagScanner::new(),
            header: None,
            description: Description::default(),
            background: None,
            scenarios: Vec::new(),
        }
    }

    /// The language keywords are currently matched against.
    #[must_use]
    pub const fn language(&self) -> &'a Language {
        self.language
    }

    const fn context(&self) -> ScanContext<'a> {
        ScanContext {
            language: self.language,
            separators: self.separators,
        }
    }

    fn in_doc_string(&self) -> bool {
        match self.state {
            State::InBackground => self
                .background
                .as_ref()
                .is_some_and(BackgroundScanner::in_doc_string),
            State::InScenarios => self
                .scenarios
                .last()
                .is_some_and(ScenarioScanner::in_doc_string),
            _ => false,
        }
    }

    fn expected(&self) -> &'static [&'static str] {
        match self.state {
            State::ExpectingLanguageOrTagsOrFeature => EXPECTED_BEFORE_FEATURE,
            State::ExpectingBackgroundOrScenarios => EXPECTED_IN_FEATURE_HEADER,
            State::InBackground => self
                .background
                .as_ref()
                .map_or(EXPECTED_IN_FEATURE_HEADER, BackgroundScanner::expected),
            State::InScenarios => self
                .scenarios
                .last()
                .map_or(EXPECTED_IN_FEATURE_HEADER, ScenarioScanner::expected),
        }
    }

    /// Feed the next physical line.
    pub fn scan(&mut self, line: &Line<'_>, diag: &mut Diagnostics) {
        self.last_line = line.number();

        if line.number() == 1 {
            if let Some(code) = language_directive(line.text()) {
                self.switch_language(code, diag);
                return;
            }
        }

        let classification = line.classify(self.language);

        if self.in_doc_string() {
            self.forward(line, &classification, diag);
            return;
        }

        match classification.keyword {
            Keyword::Comment => {
                let text = line.text();
                self.comments.push(Comment {
                    text: text.strip_suffix('\r').unwrap_or(text).to_string(),
                    location: line.location_at(0),
                });
                return;
            }
            Keyword::Tag => {
                self.tags.scan(line, diag);
                return;
            }
            _ => {}
        }

        if self.tags.has_pending() {
            if line.is_blank() {
                return;
            }
            if !matches!(
                classification.keyword,
                Keyword::Feature | Keyword::Scenario | Keyword::ScenarioOutline | Keyword::Examples
            ) {
                let expected = if self.header.is_none() {
                    EXPECTED_AFTER_FEATURE_TAGS
                } else {
                    EXPECTED_AFTER_TAGS
                };
                diag.mismatch(expected, line.trimmed(), line.location());
                self.tags.take();
                return;
            }
        }

        match classification.keyword {
            Keyword::Feature => self.start_feature(line, &classification, diag),
            Keyword::Background => self.start_background(line, &classification, diag),
            Keyword::Scenario | Keyword::ScenarioOutline => {
                self.start_scenario(line, &classification, diag);
            }
            Keyword::Examples => self.start_examples(line, &classification, diag),
            _ => self.forward(line, &classification, diag),
        }
    }

    fn switch_language(&mut self, code: &str, diag: &mut Diagnostics) {
        if let Some(language) = self.languages.get(code) {
            log::debug!("switching language to {code}");
            self.language = language;
        } else {
            diag.push(
                ParseErrorKind::InvalidLanguageCode(code.to_string()),
                Location::new(1, 1),
            );
        }
    }

    fn start_feature(
        &mut self,
        line: &Line<'_>,
        classification: &Classification<'_>,
        diag: &mut Diagnostics,
    ) {
        if self.state != State::ExpectingLanguageOrTagsOrFeature {
            diag.mismatch(self.expected(), line.trimmed(), line.location());
            self.tags.take();
            return;
        }
        log::trace!("feature at line {}", line.number());
        self.header = Some(Header {
            keyword: classification.text.to_string(),
            name: line.text_after(classification).to_string(),
            location: line.location(),
            tags: self.tags.take(),
        });
        self.state = State::ExpectingBackgroundOrScenarios;
    }

    fn start_background(
        &mut self,
        line: &Line<'_>,
        classification: &Classification<'_>,
        diag: &mut Diagnostics,
    ) {
        if self.state != State::ExpectingBackgroundOrScenarios {
            diag.mismatch(self.expected(), line.trimmed(), line.location());
            return;
        }
        self.background = Some(BackgroundScanner::start(line, classification));
        self.state = State::InBackground;
    }

    fn start_scenario(
        &mut self,
        line: &Line<'_>,
        classification: &Classification<'_>,
        diag: &mut Diagnostics,
    ) {
        if self.state == State::ExpectingLanguageOrTagsOrFeature {
            diag.mismatch(self.expected(), line.trimmed(), line.location());
            self.tags.take();
            return;
        }
        let tags = self.tags.take();
        self.scenarios
            .push(ScenarioScanner::start(line, classification, tags));
        self.state = State::InScenarios;
    }

    fn start_examples(
        &mut self,
        line: &Line<'_>,
        classification: &Classification<'_>,
        diag: &mut Diagnostics,
    ) {
        let tags = self.tags.take();
        if self.state != State::InScenarios {
            diag.mismatch(self.expected(), line.trimmed(), line.location());
            return;
        }
        if let Some(scenario) = self.scenarios.last_mut() {
            scenario.start_examples(line, classification, tags, diag);
        }
    }

    fn forward(
        &mut self,
        line: &Line<'_>,
        classification: &Classification<'_>,
        diag: &mut Diagnostics,
    ) {
        let ctx = self.context();
        match self.state {
            State::ExpectingLanguageOrTagsOrFeature => {
                if !line.is_blank() {
                    diag.mismatch(EXPECTED_BEFORE_FEATURE, line.trimmed(), line.location());
                }
            }
            State::ExpectingBackgroundOrScenarios => {
                if classification.keyword.is_step()
                    || classification.keyword == Keyword::Table
                    || DocStringScanner::is_separator(line, ctx.separators)
                {
                    diag.mismatch(EXPECTED_IN_FEATURE_HEADER, line.trimmed(), line.location());
                } else {
                    self.description.push(line);
                }
            }
            State::InBackground => {
                if let Some(background) = self.background.as_mut() {
                    background.scan(line, classification, &ctx, diag);
                }
            }
            State::InScenarios => {
                if let Some(scenario) = self.scenarios.last_mut() {
                    scenario.scan(line, classification, &ctx, diag);
                }
            }
        }
    }

    /// Close every open construct and assemble the document.
    #[must_use]
    pub fn finish(self, diag: &mut Diagnostics) -> GherkinDocument {
        let eof = Location::end_of_file(self.last_line);
        if self.in_doc_string() {
            diag.push(
                ParseErrorKind::UnexpectedEndOfFile {
                    expected: EXPECTED_DOC_STRING_END,
                },
                eof,
            );
        }
        if self.tags.has_pending() {
            let expected = if self.header.is_none() {
                EXPECTED_AFTER_FEATURE_TAGS
            } else {
                EXPECTED_AFTER_TAGS
            };
            diag.push(ParseErrorKind::UnexpectedEndOfFile { expected }, eof);
        }

        let language = self.language.code.clone();
        let feature = self.header.map(|header| Feature {
            keyword: header.keyword,
            language,
            name: header.name,
            description: self.description.finish(),
            tags: header.tags,
            background: self.background.map(BackgroundScanner::finish),
            scenarios: self
                .scenarios
                .into_iter()
                .map(ScenarioScanner::finish)
                .collect(),
            location: header.location,
        });

        GherkinDocument {
            uri: diag.uri().to_string(),
            comments: self.comments,
            feature,
        }
    }
}
