//! Formatter-specific tests.

mod common;

use common::parse_ok;
use gherkin_scanner::format;

#[test]
fn format_trailing_newline() {
    let output = format(&parse_ok("Feature: f"));
    assert_eq!(output, "Feature: f\n");
}

#[test]
fn format_blank_line_between_scenarios() {
    let output = format(&parse_ok(
        "Feature: f\nScenario: a\nGiven x\nScenario: b\nGiven y\n",
    ));
    assert!(output.contains("    Given x\n\n  Scenario: b\n"));
}

#[test]
fn format_normalizes_indentation() {
    let output = format(&parse_ok(
        "Feature: f\n\t\tBackground:\n Given x\n      Scenario:    s   \nThen y\n",
    ));
    assert_eq!(
        output,
        "Feature: f\n\n  Background:\n    Given x\n\n  Scenario: s\n    Then y\n"
    );
}

#[test]
fn format_pads_table_columns() {
    let output = format(&parse_ok(
        "Feature: f\n  Scenario: s\n    Given t\n      |a|long value|\n      |bbbb|c|\n",
    ));
    assert!(output.contains("      | a    | long value |\n"));
    assert!(output.contains("      | bbbb | c          |\n"));
}

#[test]
fn format_pads_by_characters() {
    let output = format(&parse_ok(
        "Feature: f\n  Scenario: s\n    Given t\n      | été | x |\n      | a | y |\n",
    ));
    assert!(output.contains("      | été | x |\n      | a   | y |\n"));
}

#[test]
fn format_escapes_table_cells() {
    let output = format(&parse_ok(
        "Feature: f\n  Scenario: s\n    Given t\n      | a \\| b | c\\\\d |\n",
    ));
    assert!(output.contains("      | a \\| b | c\\\\d |\n"));
}

#[test]
fn format_tags_on_their_own_line() {
    let output = format(&parse_ok(
        "@a @b\nFeature: f\n  @c\n  Scenario Outline: o\n    Given <x>\n    @d\n    Examples:\n      | x |\n      | 1 |\n",
    ));
    assert!(output.starts_with("@a @b\nFeature: f\n"));
    assert!(output.contains("\n  @c\n  Scenario Outline: o\n"));
    assert!(output.contains("\n\n    @d\n    Examples:\n"));
}

#[test]
fn format_language_header() {
    let output = format(&parse_ok("# language: es\nCaracterística: f\n"));
    assert_eq!(output, "# language: es\nCaracterística: f\n");
}

#[test]
fn format_doc_string_with_media_type() {
    let output = format(&parse_ok(
        "Feature: f\n  Scenario: s\n    Given p\n    ```xml\n    <a>\n      <b/>\n    </a>\n    ```\n",
    ));
    assert!(output.contains("      ```xml\n      <a>\n        <b/>\n      </a>\n      ```\n"));
}

#[test]
fn format_escapes_doc_string_separator() {
    let output = format(&parse_ok(
        "Feature: f\n  Scenario: s\n    Given p\n      \"\"\"\n      \\\"\\\"\\\"\n      \"\"\"\n",
    ));
    assert!(output.contains("      \"\"\"\n      \\\"\\\"\\\"\n      \"\"\"\n"));
}

#[test]
fn format_bare_step_keyword() {
    let output = format(&parse_ok("Feature: f\n  Scenario: s\n    Given\n"));
    assert!(output.ends_with("    Given\n"));
}

#[test]
fn format_drops_comments() {
    let output = format(&parse_ok("# top\nFeature: f\n  # inside\n"));
    assert_eq!(output, "Feature: f\n");
}
