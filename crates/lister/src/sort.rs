//! Entry ordering.
//!
//! Entries are sorted once by the primary key and then, for `-r`, mirrored
//! end to end. Reversal is a separate pass rather than an inverted
//! comparator, so `-r` is always the exact mirror of the unreversed listing.

use std::cmp::Ordering;
use std::path::PathBuf;

use crate::entry::Entry;
use crate::options::{ListOptions, SortKey};

/// Compares two entries by `key`.
///
/// Time order is newest first; equal times fall back to name order so the
/// result does not depend on directory read order.
pub fn compare(a: &Entry, b: &Entry, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => a.name.cmp(&b.name),
        SortKey::Time => b
            .modified
            .cmp(&a.modified)
            .then_with(|| a.name.cmp(&b.name)),
    }
}

/// Sorts entries in place according to `opts`.
pub fn sort_entries(entries: &mut [Entry], opts: &ListOptions) {
    entries.sort_by(|a, b| compare(a, b, opts.sort));
    if opts.reverse {
        entries.reverse();
    }
}

/// Orders command-line targets by name, mirrored for `-r`.
pub fn sort_paths(paths: &mut [PathBuf], opts: &ListOptions) {
    paths.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
    if opts.reverse {
        paths.reverse();
    }
}
