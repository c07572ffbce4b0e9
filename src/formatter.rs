//! Pretty-printer that serializes a Gherkin tree back into canonical text.
//!
//! Produces two-space indentation, a blank line before every background,
//! scenario and examples block, and tables padded to their widest cell.
//! Comments are not reproduced.

use std::fmt::Write as _;

use crate::ast::{
    Background, DocString, Examples, Feature, GherkinDocument, Scenario, Step, StepArgument,
    Table, Tag,
};
use crate::language::DEFAULT_LANGUAGE;

const BLOCK_INDENT: usize = 2;
const STEP_INDENT: usize = 4;
const ARGUMENT_INDENT: usize = 6;

/// Format a document into feature-file text.
///
/// A `# language:` header is written when the feature's language is not
/// the default one. The output always ends with a newline unless the
/// document has no feature.
#[must_use]
pub fn format(document: &GherkinDocument) -> String {
    let mut out = String::new();
    if let Some(feature) = &document.feature {
        format_feature(&mut out, feature);
    }
    out
}

fn format_feature(out: &mut String, feature: &Feature) {
    if feature.language != DEFAULT_LANGUAGE {
        let _ = writeln!(out, "# language: {}", feature.language);
    }
    format_tags(out, &feature.tags, 0);
    format_header(out, &feature.keyword, &feature.name, 0);
    format_description(out, feature.description.as_deref());

    if let Some(background) = &feature.background {
        out.push('\n');
        format_background(out, background);
    }
    for scenario in &feature.scenarios {
        out.push('\n');
        format_scenario(out, scenario);
    }
}

fn format_background(out: &mut String, background: &Background) {
    format_header(out, &background.keyword, &background.name, BLOCK_INDENT);
    format_description(out, background.description.as_deref());
    format_steps(out, &background.steps);
}

fn format_scenario(out: &mut String, scenario: &Scenario) {
    format_tags(out, &scenario.tags, BLOCK_INDENT);
    format_header(out, &scenario.keyword, &scenario.name, BLOCK_INDENT);
    format_description(out, scenario.description.as_deref());
    format_steps(out, &scenario.steps);
    for examples in &scenario.examples {
        out.push('\n');
        format_examples(out, examples);
    }
}

fn format_examples(out: &mut String, examples: &Examples) {
    format_tags(out, &examples.tags, STEP_INDENT);
    format_header(out, &examples.keyword, &examples.name, STEP_INDENT);
    format_description(out, examples.description.as_deref());
    if let Some(table) = &examples.table {
        format_table(out, table, ARGUMENT_INDENT);
    }
}

fn format_tags(out: &mut String, tags: &[Tag], indent: usize) {
    if tags.is_empty() {
        return;
    }
    let marked: Vec<String> = tags.iter().map(Tag::marked).collect();
    let _ = writeln!(out, "{}{}", pad(indent), marked.join(" "));
}

fn format_header(out: &mut String, keyword: &str, name: &str, indent: usize) {
    if name.is_empty() {
        let _ = writeln!(out, "{}{keyword}:", pad(indent));
    } else {
        let _ = writeln!(out, "{}{keyword}: {name}", pad(indent));
    }
}

/// Description lines keep their own indentation.
fn format_description(out: &mut String, description: Option<&str>) {
    if let Some(description) = description {
        for line in description.split('\n') {
            out.push_str(line);
            out.push('\n');
        }
    }
}

fn format_steps(out: &mut String, steps: &[Step]) {
    for step in steps {
        format_step(out, step);
    }
}

fn format_step(out: &mut String, step: &Step) {
    let prefix = pad(STEP_INDENT);
    if step.text.is_empty() {
        let _ = writeln!(out, "{prefix}{}", step.keyword.trim_end());
    } else {
        let _ = writeln!(out, "{prefix}{}{}", step.keyword, step.text);
    }
    match &step.argument {
        Some(StepArgument::Table(table)) => format_table(out, table, ARGUMENT_INDENT),
        Some(StepArgument::DocString(doc)) => format_doc_string(out, doc, ARGUMENT_INDENT),
        None => {}
    }
}

fn format_table(out: &mut String, table: &Table, indent: usize) {
    let rows: Vec<Vec<String>> = table
        .all_rows()
        .map(|row| row.cells.iter().map(|c| escape_cell(&c.value)).collect())
        .collect();

    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    let widths: Vec<usize> = (0..columns)
        .map(|i| {
            rows.iter()
                .filter_map(|row| row.get(i))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let prefix = pad(indent);
    for row in &rows {
        out.push_str(&prefix);
        out.push('|');
        for (cell, width) in row.iter().zip(&widths) {
            let _ = write!(out, " {cell}{} |", pad(width - cell.chars().count()));
        }
        out.push('\n');
    }
}

fn format_doc_string(out: &mut String, doc: &DocString, indent: usize) {
    let prefix = pad(indent);
    let escaped: String = doc.separator.chars().flat_map(|c| ['\\', c]).collect();
    let _ = writeln!(
        out,
        "{prefix}{}{}",
        doc.separator,
        doc.media_type.as_deref().unwrap_or_default()
    );
    let lines = doc.content.split('\n').filter(|_| !doc.content.is_empty());
    for line in lines {
        if line.trim().is_empty() {
            // Whitespace-only lines are never dedented on the way back in.
            let _ = writeln!(out, "{line}");
        } else {
            let _ = writeln!(out, "{prefix}{}", line.replace(&doc.separator, &escaped));
        }
    }
    let _ = writeln!(out, "{prefix}{}", doc.separator);
}

fn escape_cell(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '|' => escaped.push_str("\\|"),
            '\n' => escaped.push_str("\\n"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn pad(width: usize) -> String {
    " ".repeat(width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_special_cells() {
        assert_eq!(escape_cell("a|b"), "a\\|b");
        assert_eq!(escape_cell("back\\slash"), "back\\\\slash");
        assert_eq!(escape_cell("two\nlines"), "two\\nlines");
    }

    #[test]
    fn empty_document_formats_to_nothing() {
        let document = GherkinDocument {
            uri: "x".to_string(),
            comments: Vec::new(),
            feature: None,
        };
        assert_eq!(format(&document), "");
    }
}
