//! Localized Gherkin keywords.
//!
//! A [`Language`] lists, for every grammar role, the keyword synonyms
//! recognized in one natural language. Synonym order is significant: the
//! keyword resolver takes the first synonym that matches, even when a
//! later one would match a longer prefix.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Code of the language used when a document carries no directive.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Keyword synonyms for one natural language.
///
/// Structural keywords (`feature`, `background`, `scenario`,
/// `scenario_outline`, `examples`, `rule`) are stored without their
/// trailing colon. Step keywords carry their own trailing separator,
/// usually a space (`"Given "`), and none for languages that do not
/// separate words (`"前提"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Language {
    #[serde(default)]
    pub code: String,
    pub name: String,
    pub native: String,
    pub and: Vec<String>,
    pub background: Vec<String>,
    pub but: Vec<String>,
    pub examples: Vec<String>,
    pub feature: Vec<String>,
    pub given: Vec<String>,
    pub rule: Vec<String>,
    pub scenario: Vec<String>,
    pub scenario_outline: Vec<String>,
    pub then: Vec<String>,
    pub when: Vec<String>,
}

/// Immutable mapping from language code to [`Language`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageTable {
    languages: BTreeMap<String, Language>,
    default_code: String,
}

impl LanguageTable {
    /// Build a table around `default`, the language used when a document
    /// carries no directive or names an unknown one.
    ///
    /// Every language is keyed by its own `code`.
    #[must_use]
    pub fn new(default: Language, others: impl IntoIterator<Item = Language>) -> Self {
        let default_code = default.code.clone();
        let languages = std::iter::once(default)
            .chain(others)
            .map(|lang| (lang.code.clone(), lang))
            .collect();
        Self {
            languages,
            default_code,
        }
    }

    /// The table shipped with the crate: `en` (default), `fr`, `de`,
    /// `es` and `ja`.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(english(), [french(), german(), spanish(), japanese()])
    }

    /// Add or replace a language.
    #[must_use]
    pub fn with_language(mut self, language: Language) -> Self {
        self.languages.insert(language.code.clone(), language);
        self
    }

    #[must_use]
    pub fn get(&self, code: &str) -> Option<&Language> {
        self.languages.get(code)
    }

    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.languages.contains_key(code)
    }

    #[must_use]
    pub fn default_code(&self) -> &str {
        &self.default_code
    }

    /// The fallback language.
    #[must_use]
    pub fn default_language(&self) -> &Language {
        self.languages
            .get(&self.default_code)
            .unwrap_or_else(|| unreachable!("default language is inserted by `new`"))
    }

    /// Iterate over the known language codes in sorted order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.languages.keys().map(String::as_str)
    }
}

impl Default for LanguageTable {
    fn default() -> Self {
        Self::builtin()
    }
}

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| (*w).to_string()).collect()
}

fn english() -> Language {
    Language {
        code: "en".to_string(),
        name: "English".to_string(),
        native: "English".to_string(),
        and: words(&["And "]),
        background: words(&["Background"]),
        but: words(&["But "]),
        examples: words(&["Examples", "Scenarios"]),
        feature: words(&["Feature", "Business Need", "Ability"]),
        given: words(&["Given "]),
        rule: words(&["Rule"]),
        scenario: words(&["Example", "Scenario"]),
        scenario_outline: words(&["Scenario Outline", "Scenario Template"]),
        then: words(&["Then "]),
        when: words(&["When "]),
    }
}

fn french() -> Language {
    Language {
        code: "fr".to_string(),
        name: "French".to_string(),
        native: "français".to_string(),
        and: words(&["Et que ", "Et qu'", "Et "]),
        background: words(&["Contexte"]),
        but: words(&["Mais que ", "Mais qu'", "Mais "]),
        examples: words(&["Exemples"]),
        feature: words(&["Fonctionnalité"]),
        given: words(&[
            "Soit ",
            "Sachant que ",
            "Sachant qu'",
            "Sachant ",
            "Etant donné que ",
            "Etant donné qu'",
            "Etant donné ",
            "Etant donnée ",
            "Etant donnés ",
            "Etant données ",
            "Étant donné que ",
            "Étant donné qu'",
            "Étant donné ",
            "Étant donnée ",
            "Étant donnés ",
            "Étant données ",
        ]),
        rule: words(&["Règle"]),
        scenario: words(&["Exemple", "Scénario"]),
        scenario_outline: words(&["Plan du scénario", "Plan du Scénario"]),
        then: words(&["Alors ", "Donc "]),
        when: words(&["Quand ", "Lorsque ", "Lorsqu'"]),
    }
}

fn german() -> Language {
    Language {
        code: "de".to_string(),
        name: "German".to_string(),
        native: "Deutsch".to_string(),
        and: words(&["Und "]),
        background: words(&["Grundlage", "Hintergrund", "Voraussetzungen", "Vorbedingungen"]),
        but: words(&["Aber "]),
        examples: words(&["Beispiele"]),
        feature: words(&["Funktionalität", "Funktion"]),
        given: words(&["Angenommen ", "Gegeben sei ", "Gegeben seien "]),
        rule: words(&["Regel"]),
        scenario: words(&["Beispiel", "Szenario"]),
        scenario_outline: words(&["Szenariogrundriss", "Szenarien"]),
        then: words(&["Dann "]),
        when: words(&["Wenn "]),
    }
}

fn spanish() -> Language {
    Language {
        code: "es".to_string(),
        name: "Spanish".to_string(),
        native: "español".to_string(),
        and: words(&["Y ", "E "]),
        background: words(&["Antecedentes"]),
        but: words(&["Pero "]),
        examples: words(&["Ejemplos"]),
        feature: words(&["Característica", "Necesidad del negocio", "Requisito"]),
        given: words(&["Dado ", "Dada ", "Dados ", "Dadas "]),
        rule: words(&["Regla"]),
        scenario: words(&["Ejemplo", "Escenario"]),
        scenario_outline: words(&["Esquema del escenario"]),
        then: words(&["Entonces "]),
        when: words(&["Cuando "]),
    }
}

fn japanese() -> Language {
    Language {
        code: "ja".to_string(),
        name: "Japanese".to_string(),
        native: "日本語".to_string(),
        and: words(&["かつ"]),
        background: words(&["背景"]),
        but: words(&["しかし", "但し", "ただし"]),
        examples: words(&["例", "サンプル"]),
        feature: words(&["フィーチャ", "機能"]),
        given: words(&["前提"]),
        rule: words(&["ルール"]),
        scenario: words(&["シナリオ"]),
        scenario_outline: words(&[
            "シナリオアウトライン",
            "シナリオテンプレート",
            "テンプレ",
            "シナリオテンプレ",
        ]),
        then: words(&["ならば"]),
        when: words(&["もし"]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_default() {
        let table = LanguageTable::builtin();
        assert_eq!(table.default_code(), "en");
        let en = table.default_language();
        assert_eq!(en.feature[0], "Feature");
    }

    #[test]
    fn builtin_codes_sorted() {
        let table = LanguageTable::builtin();
        let codes: Vec<_> = table.codes().collect();
        assert_eq!(codes, vec!["de", "en", "es", "fr", "ja"]);
    }

    #[test]
    fn every_keyword_list_non_empty() {
        let table = LanguageTable::builtin();
        for code in table.codes() {
            let lang = table.get(code).expect("listed code");
            for list in [
                &lang.and,
                &lang.background,
                &lang.but,
                &lang.examples,
                &lang.feature,
                &lang.given,
                &lang.rule,
                &lang.scenario,
                &lang.scenario_outline,
                &lang.then,
                &lang.when,
            ] {
                assert!(!list.is_empty(), "empty keyword list in {code}");
            }
        }
    }

    #[test]
    fn with_language_replaces() {
        let mut custom = english();
        custom.code = "en".to_string();
        custom.feature = words(&["Story"]);
        let table = LanguageTable::builtin().with_language(custom);
        assert_eq!(table.get("en").expect("en").feature, vec!["Story"]);
    }

    #[test]
    fn deserializes_camel_case() {
        let json = r#"{
            "code": "xx", "name": "X", "native": "X",
            "and": ["A "], "background": ["B"], "but": ["C "],
            "examples": ["E"], "feature": ["F"], "given": ["G "],
            "rule": ["R"], "scenario": ["S"], "scenarioOutline": ["SO"],
            "then": ["T "], "when": ["W "]
        }"#;
        let lang: Language = serde_json::from_str(json).expect("valid language");
        assert_eq!(lang.scenario_outline, vec!["SO"]);
    }
}
