//! Keyword resolution across the built-in languages.

use gherkin_scanner::{
    Keyword, LanguageTable, Parser, ParserConfig, StepType, classify, parse_str,
};
use rstest::rstest;

#[rstest]
#[case("en", "Feature: x", Keyword::Feature, "Feature")]
#[case("en", "Ability: x", Keyword::Feature, "Ability")]
#[case("en", "Scenario Template: x", Keyword::ScenarioOutline, "Scenario Template")]
#[case("en", "Scenarios:", Keyword::Examples, "Scenarios")]
#[case("en", "  Given x", Keyword::Given, "Given ")]
#[case("fr", "Plan du scénario: x", Keyword::ScenarioOutline, "Plan du scénario")]
#[case("fr", "Etant donné qu'il pleut", Keyword::Given, "Etant donné qu'")]
#[case("fr", "Et que ça marche", Keyword::And, "Et que ")]
#[case("de", "Szenariogrundriss: x", Keyword::ScenarioOutline, "Szenariogrundriss")]
#[case("de", "Gegeben sei x", Keyword::Given, "Gegeben sei ")]
#[case("es", "Esquema del escenario: x", Keyword::ScenarioOutline, "Esquema del escenario")]
#[case("es", "Dadas x", Keyword::Given, "Dadas ")]
#[case("ja", "もし何か", Keyword::When, "もし")]
#[case("ja", "ならば結果", Keyword::Then, "ならば")]
fn classifies_localized_keywords(
    #[case] code: &str,
    #[case] line: &str,
    #[case] keyword: Keyword,
    #[case] text: &str,
) {
    let languages = LanguageTable::builtin();
    let language = languages.get(code).expect("built-in language");
    let classification = classify(line, language);
    assert_eq!(classification.keyword, keyword);
    assert_eq!(classification.text, text);
}

#[rstest]
#[case("| a |", Keyword::Table)]
#[case("@tag", Keyword::Tag)]
#[case("# comment", Keyword::Comment)]
#[case("* step", Keyword::Asterisk)]
#[case("And more", Keyword::And)]
#[case("But less", Keyword::But)]
#[case("Examples:", Keyword::Examples)]
#[case("Background:", Keyword::Background)]
#[case("plain words", Keyword::None)]
#[case("Feature without colon", Keyword::None)]
#[case("", Keyword::None)]
fn classifies_markers_in_every_language(#[case] line: &str, #[case] keyword: Keyword) {
    let languages = LanguageTable::builtin();
    let french = languages.get("fr").expect("french");
    assert_eq!(classify(line, french).keyword, keyword);
}

#[test]
fn first_synonym_wins() {
    let mut language = LanguageTable::builtin().default_language().clone();
    language.code = "xx".to_string();
    language.given = vec!["A".to_string(), "AB".to_string()];

    let classification = classify("AB: something", &language);
    assert_eq!(classification.keyword, Keyword::Given);
    assert_eq!(classification.text, "A");
}

#[test]
fn structural_keyword_needs_colon() {
    let languages = LanguageTable::builtin();
    let english = languages.default_language();
    assert_eq!(classify("Scenario outline", english).keyword, Keyword::None);
    assert_eq!(classify("Scenario: x", english).keyword, Keyword::Scenario);
    // "Example" is a scenario synonym, but "Examples:" is not "Example:".
    assert_eq!(classify("Examples:", english).keyword, Keyword::Examples);
}

#[test]
fn custom_language_table() {
    let mut pirate = LanguageTable::builtin().default_language().clone();
    pirate.code = "en-pirate".to_string();
    pirate.feature = vec!["Ahoy matey!".to_string()];
    pirate.scenario = vec!["Heave to".to_string()];
    pirate.given = vec!["Gangway! ".to_string()];

    let config = ParserConfig::new().with_languages(LanguageTable::builtin().with_language(pirate));
    let parser = Parser::new(config);
    let input = "# language: en-pirate\nAhoy matey!: treasure\n  Heave to: dig\n    Gangway! a map\n";
    let document = parser.parse_str(input, "pirate.feature").expect("parses");
    let feature = document.feature.expect("feature");
    assert_eq!(feature.language, "en-pirate");
    assert_eq!(feature.name, "treasure");
    assert_eq!(feature.scenarios[0].steps[0].step_type, StepType::Given);
    assert_eq!(feature.scenarios[0].steps[0].text, "a map");

    // The default parser knows nothing about it.
    let errors = parse_str(input, "pirate.feature").unwrap_err();
    assert_eq!(errors.errors()[0].message(), "Language not supported: en-pirate");
}

#[test]
fn builtin_languages_are_listed() {
    let table = LanguageTable::builtin();
    let codes: Vec<_> = table.codes().collect();
    assert_eq!(codes, vec!["de", "en", "es", "fr", "ja"]);
    assert_eq!(table.default_code(), "en");
}
