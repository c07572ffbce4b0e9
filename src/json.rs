//! JSON projection of a parsed document.
//!
//! The projection borrows from the tree and omits what is empty:
//! `comments` and `feature` at the top, and tag lists, step lists,
//! example blocks and table bodies further down. Tags are written with
//! their `@` marker. A feature's `children` list starts with its
//! background, each child keyed by `background` or `scenario`.

use std::io::Write;

use serde::Serialize;

use crate::ast::{
    Background, Comment, DocString, Examples, Feature, GherkinDocument, Scenario, Step, Table,
    TableCell, TableRow, Tag,
};
use crate::error::{ParseError, ParseErrors};
use crate::location::Location;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonDocument<'a> {
    uri: &'a str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    comments: Vec<JsonComment<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    feature: Option<JsonFeature<'a>>,
}

#[derive(Serialize)]
struct JsonComment<'a> {
    location: Location,
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonFeature<'a> {
    keyword: &'a str,
    language: &'a str,
    location: Location,
    #[serde(skip_serializing_if = "is_empty")]
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tags: Vec<String>,
    children: Vec<JsonChild<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
enum JsonChild<'a> {
    Background(JsonBackground<'a>),
    Scenario(JsonScenario<'a>),
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonBackground<'a> {
    keyword: &'a str,
    location: Location,
    #[serde(skip_serializing_if = "is_empty")]
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    steps: Vec<JsonStep<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonScenario<'a> {
    keyword: &'a str,
    location: Location,
    #[serde(skip_serializing_if = "is_empty")]
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tags: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    steps: Vec<JsonStep<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    examples: Vec<JsonExamples<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonExamples<'a> {
    keyword: &'a str,
    location: Location,
    #[serde(skip_serializing_if = "is_empty")]
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    table_header: Option<JsonRow<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    table_body: Vec<JsonRow<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonStep<'a> {
    keyword: &'a str,
    text: &'a str,
    location: Location,
    #[serde(skip_serializing_if = "Option::is_none")]
    data_table: Option<JsonTable<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    doc_string: Option<JsonDocString<'a>>,
}

#[derive(Serialize)]
struct JsonTable<'a> {
    location: Location,
    rows: Vec<JsonRow<'a>>,
}

#[derive(Serialize)]
struct JsonRow<'a> {
    location: Location,
    cells: Vec<JsonCell<'a>>,
}

#[derive(Serialize)]
struct JsonCell<'a> {
    location: Location,
    value: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonDocString<'a> {
    location: Location,
    content: &'a str,
    delimiter: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    media_type: Option<&'a str>,
}

#[derive(Serialize)]
struct JsonError<'a> {
    uri: &'a str,
    location: Location,
    message: String,
}

fn is_empty(value: &&str) -> bool {
    value.is_empty()
}

fn marked(tags: &[Tag]) -> Vec<String> {
    tags.iter().map(Tag::marked).collect()
}

fn steps(steps: &[Step]) -> Vec<JsonStep<'_>> {
    steps.iter().map(JsonStep::from).collect()
}

impl<'a> From<&'a GherkinDocument> for JsonDocument<'a> {
    fn from(document: &'a GherkinDocument) -> Self {
        Self {
            uri: &document.uri,
            comments: document.comments.iter().map(JsonComment::from).collect(),
            feature: document.feature.as_ref().map(JsonFeature::from),
        }
    }
}

impl<'a> From<&'a Comment> for JsonComment<'a> {
    fn from(comment: &'a Comment) -> Self {
        Self {
            location: comment.location,
            text: &comment.text,
        }
    }
}

impl<'a> From<&'a Feature> for JsonFeature<'a> {
    fn from(feature: &'a Feature) -> Self {
        let children = feature
            .background
            .iter()
            .map(|bg| JsonChild::Background(JsonBackground::from(bg)))
            .chain(
                feature
                    .scenarios
                    .iter()
                    .map(|s| JsonChild::Scenario(JsonScenario::from(s))),
            )
            .collect();
        Self {
            keyword: &feature.keyword,
            language: &feature.language,
            location: feature.location,
            name: &feature.name,
            description: feature.description.as_deref(),
            tags: marked(&feature.tags),
            children,
        }
    }
}

impl<'a> From<&'a Background> for JsonBackground<'a> {
    fn from(background: &'a Background) -> Self {
        Self {
            keyword: &background.keyword,
            location: background.location,
            name: &background.name,
            description: background.description.as_deref(),
            steps: steps(&background.steps),
        }
    }
}

impl<'a> From<&'a Scenario> for JsonScenario<'a> {
    fn from(scenario: &'a Scenario) -> Self {
        Self {
            keyword: &scenario.keyword,
            location: scenario.location,
            name: &scenario.name,
            description: scenario.description.as_deref(),
            tags: marked(&scenario.tags),
            steps: steps(&scenario.steps),
            examples: scenario.examples.iter().map(JsonExamples::from).collect(),
        }
    }
}

impl<'a> From<&'a Examples> for JsonExamples<'a> {
    fn from(examples: &'a Examples) -> Self {
        let table = examples.table.as_ref();
        Self {
            keyword: &examples.keyword,
            location: examples.location,
            name: &examples.name,
            description: examples.description.as_deref(),
            tags: marked(&examples.tags),
            table_header: table.map(|t| JsonRow::from(&t.header)),
            table_body: table
                .map(|t| t.rows.iter().map(JsonRow::from).collect())
                .unwrap_or_default(),
        }
    }
}

impl<'a> From<&'a Step> for JsonStep<'a> {
    fn from(step: &'a Step) -> Self {
        Self {
            keyword: &step.keyword,
            text: &step.text,
            location: step.location,
            data_table: step.table().map(JsonTable::from),
            doc_string: step.doc_string().map(JsonDocString::from),
        }
    }
}

impl<'a> From<&'a Table> for JsonTable<'a> {
    fn from(table: &'a Table) -> Self {
        Self {
            location: table.header_location,
            rows: table.all_rows().map(JsonRow::from).collect(),
        }
    }
}

impl<'a> From<&'a TableRow> for JsonRow<'a> {
    fn from(row: &'a TableRow) -> Self {
        Self {
            location: row.location,
            cells: row.cells.iter().map(JsonCell::from).collect(),
        }
    }
}

impl<'a> From<&'a TableCell> for JsonCell<'a> {
    fn from(cell: &'a TableCell) -> Self {
        Self {
            location: cell.location,
            value: &cell.value,
        }
    }
}

impl<'a> From<&'a DocString> for JsonDocString<'a> {
    fn from(doc: &'a DocString) -> Self {
        Self {
            location: doc.location,
            content: &doc.content,
            delimiter: &doc.separator,
            media_type: doc.media_type.as_deref(),
        }
    }
}

impl<'a> From<&'a ParseError> for JsonError<'a> {
    fn from(error: &'a ParseError) -> Self {
        Self {
            uri: &error.uri,
            location: error.location,
            message: error.message(),
        }
    }
}

/// Project a document into a [`serde_json::Value`].
///
/// # Errors
/// Returns an error when serialization fails.
pub fn to_value(document: &GherkinDocument) -> serde_json::Result<serde_json::Value> {
    serde_json::to_value(JsonDocument::from(document))
}

/// Produce a compact JSON string for a document.
///
/// # Examples
/// ```rust
/// let document = gherkin_scanner::parse_str("Feature: Hello\n", "hello.feature").unwrap();
/// let json = gherkin_scanner::json::to_string(&document).unwrap();
/// assert!(json.contains("\"name\":\"Hello\""));
/// ```
///
/// # Errors
/// Returns an error when serialization fails.
pub fn to_string(document: &GherkinDocument) -> serde_json::Result<String> {
    serde_json::to_string(&JsonDocument::from(document))
}

/// Serialize a document into the supplied writer, pretty-printed.
///
/// # Errors
/// Returns an error when serialization or writing fails.
pub fn write<W: Write>(writer: &mut W, document: &GherkinDocument) -> serde_json::Result<()> {
    serde_json::to_writer_pretty(writer, &JsonDocument::from(document))
}

/// Project parse errors into a JSON array of `{uri, location, message}`.
///
/// # Errors
/// Returns an error when serialization fails.
pub fn errors_to_value(errors: &ParseErrors) -> serde_json::Result<serde_json::Value> {
    let errors: Vec<JsonError<'_>> = errors.iter().map(JsonError::from).collect();
    serde_json::to_value(errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_str;

    #[test]
    fn minimal_feature_omits_empty_fields() {
        let document = parse_str("Feature: x\n", "a.feature").unwrap();
        let value = to_value(&document).unwrap();
        assert!(value.get("comments").is_none());
        let feature = &value["feature"];
        assert_eq!(feature["keyword"], "Feature");
        assert_eq!(feature["language"], "en");
        assert_eq!(feature["location"]["line"], 1);
        assert_eq!(feature["location"]["column"], 1);
        assert!(feature.get("tags").is_none());
        assert!(feature.get("description").is_none());
        assert_eq!(feature["children"], serde_json::json!([]));
    }

    #[test]
    fn document_without_feature_keeps_uri() {
        let document = parse_str("# only a comment\n", "c.feature").unwrap();
        let value = to_value(&document).unwrap();
        assert_eq!(value["uri"], "c.feature");
        assert!(value.get("feature").is_none());
        assert_eq!(value["comments"][0]["text"], "# only a comment");
    }

    #[test]
    fn errors_project_message_and_location() {
        let errors = parse_str("nope\n", "e.feature").unwrap_err();
        let value = errors_to_value(&errors).unwrap();
        assert_eq!(value[0]["uri"], "e.feature");
        assert_eq!(value[0]["location"]["line"], 1);
        assert!(
            value[0]["message"]
                .as_str()
                .is_some_and(|m| m.ends_with("got 'nope'"))
        );
    }
}
