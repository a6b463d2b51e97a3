//! Long-form row assembly.
//!
//! Each entry becomes nine cells, in order: mode, link count, owner, group,
//! size, month, day, time-or-year, name. The column policy for those cells
//! is fixed and lives in [`long_form_spec`].

use chrono::{DateTime, Local};
use humansize::{format_size, BINARY};
use lister_table::{Column, TableSpec};

use crate::entry::Entry;
use crate::paint::Painter;
use crate::time::{day_of_month, month_abbrev, time_or_year};

/// Column policy for `-l` output.
pub fn long_form_spec() -> TableSpec {
    TableSpec::builder()
        .column(Column::left().min(10)) // mode
        .column(Column::right()) // links
        .column(Column::left()) // owner
        .column(Column::left()) // group
        .column(Column::right()) // size
        .column(Column::left()) // month
        .column(Column::right().min(2)) // day
        .column(Column::right().min(5)) // time or year
        .column(Column::left()) // name
        .gap(1)
        .build()
}

/// Column policy for name-only output: `columns` left-aligned names, two
/// spaces apart.
pub fn short_form_spec(columns: usize) -> TableSpec {
    TableSpec::new(vec![Column::left(); columns], 2)
}

/// Per-run settings that affect cell text.
#[derive(Debug, Clone, Copy, Default)]
pub struct RowStyle {
    pub human_readable: bool,
    pub painter: Painter,
}

/// Cells for one entry, in column order.
pub fn cells(entry: &Entry, now: &DateTime<Local>, style: &RowStyle) -> Vec<String> {
    vec![
        entry.mode_string(),
        entry.links.to_string(),
        entry.owner.clone(),
        entry.group.clone(),
        size_cell(entry.size, style.human_readable),
        month_abbrev(&entry.modified),
        day_of_month(&entry.modified),
        time_or_year(&entry.modified, now),
        name_cell(entry, &style.painter),
    ]
}

/// Size in bytes, or a binary-prefixed size for `-h`.
pub fn size_cell(size: u64, human_readable: bool) -> String {
    if human_readable {
        format_size(size, BINARY)
    } else {
        size.to_string()
    }
}

/// Entry name, with ` -> target` for symlinks.
pub fn name_cell(entry: &Entry, painter: &Painter) -> String {
    let name = painter.paint(entry);
    match entry.symlink_target() {
        Some(target) => format!("{} -> {}", name, target),
        None => name,
    }
}

/// Sum of allocated space in 1 KiB blocks, for the `total` line.
pub fn total_blocks(entries: &[Entry]) -> u64 {
    entries.iter().map(|e| e.blocks.div_ceil(2)).sum()
}
