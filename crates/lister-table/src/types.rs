//! Formatting policy for tables.
//!
//! A [`TableSpec`] is configured once and describes, per column position,
//! how cells are aligned and the minimum width reserved for them, plus the
//! gap written between columns. The spec carries no row data; see
//! [`Table`](crate::Table) for that.

use serde::{Deserialize, Serialize};

/// Text alignment within a column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    /// Left-align text (pad on the right).
    Left,
    /// Right-align text (pad on the left).
    #[default]
    Right,
}

/// Policy for a single column position.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Alignment of cells in this column.
    #[serde(default)]
    pub align: Align,
    /// Minimum display width, applied at render time.
    #[serde(default)]
    pub min_width: usize,
}

impl Column {
    /// Create a column with the given alignment and no minimum width.
    pub fn new(align: Align) -> Self {
        Column {
            align,
            min_width: 0,
        }
    }

    /// Left-aligned column.
    pub fn left() -> Self {
        Column::new(Align::Left)
    }

    /// Right-aligned column.
    pub fn right() -> Self {
        Column::new(Align::Right)
    }

    /// Create a column builder.
    pub fn builder() -> ColumnBuilder {
        ColumnBuilder::default()
    }

    /// Set the minimum width.
    pub fn min(mut self, min_width: usize) -> Self {
        self.min_width = min_width;
        self
    }
}

/// Builder for constructing `Column` instances.
#[derive(Clone, Debug, Default)]
pub struct ColumnBuilder {
    align: Option<Align>,
    min_width: Option<usize>,
}

impl ColumnBuilder {
    /// Set the text alignment.
    pub fn align(mut self, align: Align) -> Self {
        self.align = Some(align);
        self
    }

    /// Set alignment to left.
    pub fn left(self) -> Self {
        self.align(Align::Left)
    }

    /// Set alignment to right.
    pub fn right(self) -> Self {
        self.align(Align::Right)
    }

    /// Set the minimum width.
    pub fn min(mut self, min_width: usize) -> Self {
        self.min_width = Some(min_width);
        self
    }

    /// Build the `Column` instance.
    pub fn build(self) -> Column {
        let default = Column::default();
        Column {
            align: self.align.unwrap_or(default.align),
            min_width: self.min_width.unwrap_or(default.min_width),
        }
    }
}

/// Complete formatting policy for a table.
///
/// Columns past the end of `columns` are right-aligned with no minimum width,
/// so rows may carry more cells than the spec describes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSpec {
    /// Per-position column policy.
    pub columns: Vec<Column>,
    /// Number of spaces written between adjacent columns.
    #[serde(default)]
    pub gap: usize,
}

impl TableSpec {
    /// Create a spec with the given columns and gap.
    pub fn new(columns: Vec<Column>, gap: usize) -> Self {
        TableSpec { columns, gap }
    }

    /// Create a spec builder.
    pub fn builder() -> TableSpecBuilder {
        TableSpecBuilder::default()
    }

    /// Build a spec from parallel alignment and minimum-width sequences.
    ///
    /// The two sequences may differ in length; a position missing from one
    /// of them takes the default (right-aligned, zero minimum).
    ///
    /// ```rust
    /// use lister_table::{Align, TableSpec};
    ///
    /// let spec = TableSpec::configure(1, &[Align::Left], &[11, 1]);
    /// assert_eq!(spec.align_at(0), Align::Left);
    /// assert_eq!(spec.align_at(1), Align::Right);
    /// assert_eq!(spec.min_width_at(1), 1);
    /// assert_eq!(spec.min_width_at(7), 0);
    /// ```
    pub fn configure(gap: usize, alignment: &[Align], min_width: &[usize]) -> Self {
        let len = alignment.len().max(min_width.len());
        let columns = (0..len)
            .map(|i| Column {
                align: alignment.get(i).copied().unwrap_or_default(),
                min_width: min_width.get(i).copied().unwrap_or(0),
            })
            .collect();
        TableSpec { columns, gap }
    }

    /// Get the number of configured columns.
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// Alignment for the column at `index`.
    pub fn align_at(&self, index: usize) -> Align {
        self.columns
            .get(index)
            .map(|c| c.align)
            .unwrap_or_default()
    }

    /// Minimum width for the column at `index`.
    pub fn min_width_at(&self, index: usize) -> usize {
        self.columns.get(index).map(|c| c.min_width).unwrap_or(0)
    }
}

/// Builder for constructing `TableSpec` instances.
#[derive(Clone, Debug, Default)]
pub struct TableSpecBuilder {
    columns: Vec<Column>,
    gap: usize,
}

impl TableSpecBuilder {
    /// Add a column to the table.
    pub fn column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    /// Add multiple columns from an iterator.
    pub fn columns(mut self, columns: impl IntoIterator<Item = Column>) -> Self {
        self.columns.extend(columns);
        self
    }

    /// Set the gap between columns.
    pub fn gap(mut self, gap: usize) -> Self {
        self.gap = gap;
        self
    }

    /// Build the `TableSpec` instance.
    pub fn build(self) -> TableSpec {
        TableSpec {
            columns: self.columns,
            gap: self.gap,
        }
    }
}
