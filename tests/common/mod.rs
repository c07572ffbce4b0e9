#![allow(dead_code)]

use gherkin_scanner::{
    Examples, Feature, GherkinDocument, Location, Scenario, Step, StepArgument, Table, TableRow,
    Tag, format, parse_str,
};

/// Parse `input`, panicking with every diagnostic on failure.
pub fn parse_ok(input: &str) -> GherkinDocument {
    parse_str(input, "test.feature").unwrap_or_else(|e| {
        panic!("parse failed:\n{e}\n--- input ---\n{input}");
    })
}

/// Parse `input` and return its feature.
pub fn feature(input: &str) -> Feature {
    parse_ok(input).feature.expect("document has a feature")
}

/// Parse then format should reproduce `input` exactly.
pub fn roundtrip(input: &str) {
    let document = parse_ok(input);
    let output = format(&document);
    assert_eq!(
        output, input,
        "round-trip mismatch:\n--- expected ---\n{input}\n--- got ---\n{output}"
    );
}

/// Helper: format a document, parse it back, assert structural equality.
///
/// Locations, comments and the URI are ignored.
pub fn assert_document_roundtrip(original: &GherkinDocument) {
    let formatted = format(original);
    let parsed = parse_str(&formatted, &original.uri).unwrap_or_else(|e| {
        panic!(
            "failed to re-parse formatted output: {e}\n\
             --- formatted ---\n{formatted}"
        )
    });

    assert_eq!(
        normalize(original).feature,
        normalize(&parsed).feature,
        "feature mismatch\n--- formatted ---\n{formatted}"
    );
}

/// Copy of `document` with every location zeroed and comments dropped.
pub fn normalize(document: &GherkinDocument) -> GherkinDocument {
    let mut document = document.clone();
    document.comments.clear();
    if let Some(feature) = document.feature.as_mut() {
        feature.location = Location::default();
        tags(&mut feature.tags);
        if let Some(background) = feature.background.as_mut() {
            background.location = Location::default();
            background.steps.iter_mut().for_each(step);
        }
        feature.scenarios.iter_mut().for_each(scenario);
    }
    document
}

fn scenario(scenario: &mut Scenario) {
    scenario.location = Location::default();
    tags(&mut scenario.tags);
    scenario.steps.iter_mut().for_each(step);
    scenario.examples.iter_mut().for_each(examples);
}

fn examples(examples: &mut Examples) {
    examples.location = Location::default();
    tags(&mut examples.tags);
    if let Some(table) = examples.table.as_mut() {
        self::table(table);
    }
}

fn step(step: &mut Step) {
    step.location = Location::default();
    match step.argument.as_mut() {
        Some(StepArgument::Table(table)) => self::table(table),
        Some(StepArgument::DocString(doc)) => doc.location = Location::default(),
        None => {}
    }
}

fn table(table: &mut Table) {
    table.header_location = Location::default();
    table.body_location = table.body_location.map(|_| Location::default());
    row(&mut table.header);
    table.rows.iter_mut().for_each(row);
}

fn row(row: &mut TableRow) {
    row.location = Location::default();
    for cell in &mut row.cells {
        cell.location = Location::default();
    }
}

fn tags(tags: &mut [Tag]) {
    for tag in tags {
        tag.location = Location::default();
    }
}
