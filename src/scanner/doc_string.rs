use crate::ast::DocString;
use crate::config::DocStringSeparators;
use crate::line::Line;
use crate::location::Location;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Started,
    ScanningBody,
    Done,
}

/// Accumulates one delimited doc-string.
///
/// Body lines lose up to as much leading whitespace as the opening
/// separator was indented by, so relative indentation survives.
#[derive(Debug)]
pub struct DocStringScanner {
    state: State,
    separator: String,
    media_type: Option<String>,
    baseline: usize,
    location: Location,
    lines: Vec<String>,
}

impl Default for DocStringScanner {
    fn default() -> Self {
        Self {
            state: State::Started,
            separator: String::new(),
            media_type: None,
            baseline: 0,
            location: Location::new(1, 1),
            lines: Vec::new(),
        }
    }
}

impl DocStringScanner {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `line` opens (or closes) a doc-string.
    #[must_use]
    pub fn is_separator(line: &Line<'_>, separators: &DocStringSeparators) -> bool {
        separators.matching(line.trimmed()).is_some()
    }

    /// Whether the opening separator has been seen.
    #[must_use]
    pub fn has_started(&self) -> bool {
        self.state != State::Started
    }

    /// Whether lines are currently body content.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state == State::ScanningBody
    }

    pub fn scan(&mut self, line: &Line<'_>, separators: &DocStringSeparators) {
        match self.state {
            State::Started => {
                let trimmed = line.trimmed();
                let Some(separator) = separators.matching(trimmed) else {
                    return;
                };
                let media_type = trimmed[separator.len()..].trim();
                self.separator = separator.to_string();
                self.media_type = (!media_type.is_empty()).then(|| media_type.to_string());
                self.baseline = line.indent();
                self.location = line.location();
                self.state = State::ScanningBody;
                log::trace!("doc-string opened at {}", self.location);
            }
            State::ScanningBody => {
                if line.starts_with(&self.separator) {
                    self.state = State::Done;
                } else {
                    let body = self.dedent(line.text());
                    self.lines.push(body);
                }
            }
            State::Done => {}
        }
    }

    fn dedent(&self, text: &str) -> String {
        if text.trim().is_empty() {
            return text.to_string();
        }
        let mut removed = 0;
        let rest = text.trim_start_matches(|c: char| {
            let strip = removed < self.baseline && c.is_whitespace();
            if strip {
                removed += 1;
            }
            strip
        });
        let escaped: String = self.separator.chars().flat_map(|c| ['\\', c]).collect();
        rest.replace(&escaped, &self.separator)
    }

    /// The doc-string, or `None` if no opening separator was seen.
    #[must_use]
    pub fn finish(self) -> Option<DocString> {
        if self.state == State::Started {
            return None;
        }
        let is_blank = |l: &String| l.trim().is_empty();
        let start = self.lines.iter().position(|l| !is_blank(l));
        let end = self.lines.iter().rposition(|l| !is_blank(l));
        let content = match (start, end) {
            (Some(start), Some(end)) => self.lines[start..=end].join("\n"),
            _ => String::new(),
        };
        Some(DocString {
            separator: self.separator,
            content,
            media_type: self.media_type,
            location: self.location,
        })
    }
}
