use crate::ast::{Table, TableCell, TableRow};
use crate::error::{Diagnostics, ParseErrorKind};
use crate::line::Line;
use crate::location::Location;

/// Accumulates the rows of one pipe-delimited table.
///
/// The first row seen is the header and fixes the column count; later
/// rows of a different width are kept and reported.
#[derive(Debug, Default)]
pub struct TableScanner {
    header: Option<(TableRow, Location)>,
    rows: Vec<TableRow>,
}

impl TableScanner {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a header row has been seen.
    #[must_use]
    pub const fn has_started(&self) -> bool {
        self.header.is_some()
    }

    pub fn scan(&mut self, line: &Line<'_>, diag: &mut Diagnostics) {
        let (row, first_pipe) = split_row(line);
        match &self.header {
            None => {
                log::trace!("table header at line {}", line.number());
                self.header = Some((row, first_pipe));
            }
            Some((header, _)) => {
                if row.cells.len() != header.cells.len() {
                    diag.push(ParseErrorKind::InconsistentTableCellCount, row.location);
                }
                self.rows.push(row);
            }
        }
    }

    /// The table, or `None` when no row was ever scanned.
    #[must_use]
    pub fn finish(self) -> Option<Table> {
        let (header, header_location) = self.header?;
        let columns = header.cells.iter().map(|c| c.value.clone()).collect();
        let body_location = self.rows.first().map(|row| row.location);
        Some(Table {
            columns,
            header,
            rows: self.rows,
            header_location,
            body_location,
        })
    }
}

#[derive(Default)]
struct CellBuilder {
    value: String,
    start: Option<usize>,
    keep: usize,
}

impl CellBuilder {
    // `literal` marks characters produced by an escape sequence, which
    // survive trimming.
    fn push(&mut self, offset: usize, ch: char, literal: bool) {
        let blank = !literal && ch.is_whitespace();
        if self.start.is_none() {
            if blank {
                return;
            }
            self.start = Some(offset);
        }
        self.value.push(ch);
        if !blank {
            self.keep = self.value.len();
        }
    }

    fn finish(mut self, line: &Line<'_>, closing: usize) -> TableCell {
        self.value.truncate(self.keep);
        TableCell {
            value: self.value,
            location: line.location_at(self.start.unwrap_or(closing)),
        }
    }
}

/// Split a table line into cells.
///
/// Text before the first and after the last unescaped `|` is dropped.
/// Returns the row and the location of its first `|`.
fn split_row(line: &Line<'_>) -> (TableRow, Location) {
    let mut cells = Vec::new();
    let mut first_pipe = None;
    let mut cell: Option<CellBuilder> = None;
    let mut chars = line.text().chars().enumerate();

    while let Some((offset, ch)) = chars.next() {
        let Some(current) = cell.as_mut() else {
            if ch == '|' {
                first_pipe = Some(offset);
                cell = Some(CellBuilder::default());
            }
            continue;
        };
        match ch {
            '|' => {
                if let Some(done) = cell.replace(CellBuilder::default()) {
                    cells.push(done.finish(line, offset));
                }
            }
            '\\' => match chars.next() {
                Some((_, '|')) => current.push(offset, '|', true),
                Some((_, '\\')) => current.push(offset, '\\', true),
                Some((_, 'n')) => current.push(offset, '\n', true),
                Some((_, other)) => {
                    current.push(offset, '\\', true);
                    current.push(offset + 1, other, false);
                }
                None => current.push(offset, '\\', true),
            },
            other => current.push(offset, other, false),
        }
    }

    let pipe = line.location_at(first_pipe.unwrap_or_else(|| line.indent()));
    let location = cells.first().map_or(pipe, |c: &TableCell| c.location);
    (TableRow { cells, location }, pipe)
}
