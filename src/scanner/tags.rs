use crate::ast::Tag;
use crate::error::{Diagnostics, ParseErrorKind};
use crate::line::Line;

/// Collects tags until the next taggable construct claims them.
#[derive(Debug, Default)]
pub struct TagScanner {
    tags: Vec<Tag>,
    pending: bool,
}

impl TagScanner {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a tag line was scanned since the last [`take`](Self::take).
    #[must_use]
    pub const fn has_pending(&self) -> bool {
        self.pending
    }

    /// Parse one tag line.
    ///
    /// Tags are separated by `@`; a trailing ` #comment` is ignored. A tag
    /// whose name contains whitespace is reported and dropped.
    pub fn scan(&mut self, line: &Line<'_>, diag: &mut Diagnostics) {
        self.pending = true;
        let text = strip_comment(line.text());
        let mut seen = 0;
        let mut at = 0;
        for (index, part) in text.split('@').enumerate() {
            if index > 0 {
                let name = part.trim();
                if name.contains(char::is_whitespace) {
                    diag.push(ParseErrorKind::TagContainsWhitespace, line.location_at(at));
                } else if !name.is_empty() {
                    self.tags.push(Tag {
                        name: name.to_string(),
                        location: line.location_at(at),
                    });
                }
            }
            seen += part.chars().count();
            at = seen;
            seen += 1;
        }
    }

    /// Hand over the collected tags and reset.
    pub fn take(&mut self) -> Vec<Tag> {
        self.pending = false;
        std::mem::take(&mut self.tags)
    }
}

fn strip_comment(text: &str) -> &str {
    text.match_indices('#')
        .find(|(i, _)| text[..*i].ends_with(char::is_whitespace))
        .map_or(text, |(i, _)| &text[..i])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::Location;

    #[test]
    fn multiple_tags_with_columns() {
        let mut diag = Diagnostics::new("t");
        let mut scanner = TagScanner::new();
        scanner.scan(&Line::new("  @fast @db", 3), &mut diag);
        let tags = scanner.take();
        assert!(diag.is_empty());
        assert_eq!(tags.len(), 2);
        assert_eq!(tags[0].name, "fast");
        assert_eq!(tags[0].location, Location::new(3, 3));
        assert_eq!(tags[1].name, "db");
        assert_eq!(tags[1].location, Location::new(3, 9));
        assert!(!scanner.has_pending());
    }

    #[test]
    fn inline_comment_is_ignored() {
        let mut diag = Diagnostics::new("t");
        let mut scanner = TagScanner::new();
        scanner.scan(&Line::new("@a #@not-a-tag", 1), &mut diag);
        let names: Vec<_> = scanner.take().into_iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["a"]);
    }

    #[test]
    fn whitespace_in_tag_is_reported() {
        let mut diag = Diagnostics::new("t");
        let mut scanner = TagScanner::new();
        scanner.scan(&Line::new("@a b @c", 1), &mut diag);
        let tags = scanner.take();
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].name, "c");
        let errors = diag.into_result(()).unwrap_err();
        assert_eq!(errors.errors()[0].kind, ParseErrorKind::TagContainsWhitespace);
        assert_eq!(errors.errors()[0].location, Location::new(1, 1));
    }

    #[test]
    fn lines_accumulate_until_taken() {
        let mut diag = Diagnostics::new("t");
        let mut scanner = TagScanner::new();
        scanner.scan(&Line::new("@one", 1), &mut diag);
        scanner.scan(&Line::new("@two", 2), &mut diag);
        assert!(scanner.has_pending());
        assert_eq!(scanner.take().len(), 2);
        assert!(scanner.take().is_empty());
    }
}
