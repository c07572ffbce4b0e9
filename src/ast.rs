use crate::location::Location;

/// A parsed feature file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GherkinDocument {
    pub uri: String,
    pub comments: Vec<Comment>,
    pub feature: Option<Feature>,
}

/// Comment line, including its `#` marker and leading whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub text: String,
    pub location: Location,
}

/// Tag attached to a feature, scenario or examples block.
///
/// `name` is stored without the leading `@`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
    pub location: Location,
}

/// Top-level `Feature:` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feature {
    pub keyword: String,
    pub language: String,
    pub name: String,
    pub description: Option<String>,
    pub tags: Vec<Tag>,
    pub background: Option<Background>,
    pub scenarios: Vec<Scenario>,
    pub location: Location,
}

/// `Background:` block shared by every scenario of a feature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Background {
    pub keyword: String,
    pub name: String,
    pub description: Option<String>,
    pub steps: Vec<Step>,
    pub location: Location,
}

/// `Scenario:` or `Scenario Outline:` block.
///
/// Plain scenarios have no examples. Outline placeholders are kept
/// verbatim; nothing is expanded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub keyword: String,
    pub name: String,
    pub description: Option<String>,
    pub tags: Vec<Tag>,
    pub steps: Vec<Step>,
    pub examples: Vec<Examples>,
    pub location: Location,
}

/// `Examples:` block of a scenario outline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Examples {
    pub keyword: String,
    pub name: String,
    pub description: Option<String>,
    pub tags: Vec<Tag>,
    pub table: Option<Table>,
    pub location: Location,
}

/// Step keyword category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepType {
    Given,
    When,
    Then,
    And,
    But,
    /// Step introduced by `*`.
    Asterisk,
}

/// A single step line with its optional argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub step_type: StepType,
    /// Localized keyword as written, including its trailing separator.
    pub keyword: String,
    pub text: String,
    pub argument: Option<StepArgument>,
    pub location: Location,
}

/// Block argument attached to a step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepArgument {
    Table(Table),
    DocString(DocString),
}

/// Multi-line string delimited by `"""` or an alternative separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocString {
    pub separator: String,
    pub content: String,
    pub media_type: Option<String>,
    pub location: Location,
}

/// Pipe-delimited table.
///
/// Every row normally has `columns.len()` cells; rows that do not are
/// kept and reported as errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub columns: Vec<String>,
    pub header: TableRow,
    pub rows: Vec<TableRow>,
    pub header_location: Location,
    pub body_location: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub cells: Vec<TableCell>,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableCell {
    pub value: String,
    pub location: Location,
}

impl Step {
    /// The table argument, if any.
    #[must_use]
    pub const fn table(&self) -> Option<&Table> {
        match &self.argument {
            Some(StepArgument::Table(table)) => Some(table),
            _ => None,
        }
    }

    /// The doc-string argument, if any.
    #[must_use]
    pub const fn doc_string(&self) -> Option<&DocString> {
        match &self.argument {
            Some(StepArgument::DocString(doc)) => Some(doc),
            _ => None,
        }
    }
}

impl Table {
    /// Header followed by body rows.
    pub fn all_rows(&self) -> impl Iterator<Item = &TableRow> {
        std::iter::once(&self.header).chain(&self.rows)
    }

    /// Cell values of every row, header first.
    #[must_use]
    pub fn values(&self) -> Vec<Vec<&str>> {
        self.all_rows()
            .map(|row| row.cells.iter().map(|c| c.value.as_str()).collect())
            .collect()
    }
}

impl Feature {
    /// Every step of the feature, background first.
    pub fn steps(&self) -> impl Iterator<Item = &Step> {
        self.background
            .iter()
            .flat_map(|bg| &bg.steps)
            .chain(self.scenarios.iter().flat_map(|s| &s.steps))
    }
}

impl Tag {
    /// The tag as written, with its `@` marker.
    #[must_use]
    pub fn marked(&self) -> String {
        format!("@{}", self.name)
    }
}
