//! # Lister Table - column-aligned report formatting
//!
//! `lister-table` buffers rows of pre-split cells and renders them as an
//! aligned table. Column widths come from the data: each column is as wide
//! as its widest cell, raised to a configured minimum.
//!
//! Policy and data are kept apart:
//!
//! - [`TableSpec`]: alignment, minimum width and inter-column gap, set once
//! - [`Table`]: rows and measured widths, cleared on every flush
//!
//! ## Quick Start
//!
//! ```rust
//! use lister_table::{Align, Table, TableSpec};
//!
//! let spec = TableSpec::configure(1, &[Align::Left, Align::Right], &[0, 3]);
//! let mut table = Table::new(spec);
//! table.add_line("a.txt\t3");
//! table.add_line("b.txt\t10");
//!
//! let mut out = Vec::new();
//! table.flush(&mut out).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "a.txt   3\nb.txt  10\n");
//! assert!(table.is_empty());
//! ```
//!
//! Widths are measured with [`display_width`], which skips ANSI escape
//! codes and counts wide characters as two columns.

mod table;
mod types;
mod util;

pub use table::{Table, DELIMITER};
pub use types::{Align, Column, ColumnBuilder, TableSpec, TableSpecBuilder};
pub use util::{display_width, pad_left, pad_right};
