//! Row buffering and aligned rendering.
//!
//! A [`Table`] pairs an immutable [`TableSpec`] with the rows collected since
//! the last flush. Column widths are tracked incrementally as rows arrive and
//! thrown away on [`Table::reset`], so consecutive listings never share width
//! state.

use std::io::{self, Write};

use crate::types::{Align, TableSpec};
use crate::util::{display_width, pad_left, pad_right};

/// Column boundary marker accepted by [`Table::add_line`].
pub const DELIMITER: char = '\t';

/// A buffered, column-aligned table.
///
/// # Example
///
/// ```rust
/// use lister_table::{Column, Table, TableSpec};
///
/// let spec = TableSpec::builder()
///     .column(Column::left())
///     .column(Column::right())
///     .gap(1)
///     .build();
/// let mut table = Table::new(spec);
/// table.add_row(["alpha", "3"]);
/// table.add_row(["b", "120"]);
///
/// assert_eq!(table.render(), vec!["alpha   3", "b     120"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Table {
    spec: TableSpec,
    rows: Vec<Vec<String>>,
    observed: Vec<usize>,
}

impl Table {
    /// Create an empty table governed by `spec`.
    pub fn new(spec: TableSpec) -> Self {
        Table {
            spec,
            rows: Vec::new(),
            observed: Vec::new(),
        }
    }

    /// The policy this table renders with.
    pub fn spec(&self) -> &TableSpec {
        &self.spec
    }

    /// Append a row of already split cells.
    ///
    /// Cells are stored as given; minimum widths are applied when rendering.
    /// Rows may have any number of cells.
    pub fn add_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let row: Vec<String> = cells.into_iter().map(Into::into).collect();
        for (i, cell) in row.iter().enumerate() {
            let width = display_width(cell);
            match self.observed.get_mut(i) {
                Some(seen) => *seen = (*seen).max(width),
                None => self.observed.push(width),
            }
        }
        self.rows.push(row);
    }

    /// Append a row given as a single [`DELIMITER`]-separated line.
    pub fn add_line(&mut self, line: &str) {
        self.add_row(line.split(DELIMITER));
    }

    /// Rows buffered since the last reset.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of buffered rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if no rows are buffered.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Effective render width of the column at `index`.
    ///
    /// This is the widest cell seen at that position, raised to the
    /// configured minimum.
    pub fn width(&self, index: usize) -> usize {
        let seen = self.observed.get(index).copied().unwrap_or(0);
        seen.max(self.spec.min_width_at(index))
    }

    /// Effective widths of every column seen so far.
    pub fn widths(&self) -> Vec<usize> {
        (0..self.observed.len()).map(|i| self.width(i)).collect()
    }

    /// Render every buffered row into an aligned line.
    pub fn render(&self) -> Vec<String> {
        self.rows.iter().map(|row| self.render_row(row)).collect()
    }

    fn render_row(&self, row: &[String]) -> String {
        let gap = " ".repeat(self.spec.gap);
        let last = row.len().saturating_sub(1);
        let mut line = String::new();

        for (i, cell) in row.iter().enumerate() {
            if i > 0 {
                line.push_str(&gap);
            }
            let width = self.width(i);
            match self.spec.align_at(i) {
                Align::Right => line.push_str(&pad_left(cell, width)),
                // No trailing padding after the final cell of a row.
                Align::Left if i == last => line.push_str(cell),
                Align::Left => line.push_str(&pad_right(cell, width)),
            }
        }
        line
    }

    /// Write every buffered row to `out`, one line each, then reset.
    ///
    /// Flushing an empty table writes nothing.
    pub fn flush<W: Write + ?Sized>(&mut self, out: &mut W) -> io::Result<()> {
        for line in self.render() {
            writeln!(out, "{}", line)?;
        }
        self.reset();
        Ok(())
    }

    /// Drop buffered rows and width state, keeping the spec.
    pub fn reset(&mut self) {
        self.rows.clear();
        self.observed.clear();
    }
}
