//! Turns paths into [`Entry`] records.
//!
//! The collector only reads: it stats entries, resolves owners through an
//! [`Identity`] and reads link targets. Lookup failures degrade a single
//! field; a failure to read the directory itself is returned to the caller.

use std::fs;
use std::os::unix::fs::MetadataExt;
use std::path::Path;

use chrono::{DateTime, Local, TimeZone};

use crate::attrs;
use crate::entry::{Entry, FileKind, Permissions};
use crate::error::{ListError, Result};
use crate::identity::{display_group, display_user, Identity};
use crate::options::ListOptions;
use crate::sort::sort_entries;

/// Reads directories and single paths into entries.
pub struct Collector<I> {
    identity: I,
}

impl<I: Identity> Collector<I> {
    pub fn new(identity: I) -> Self {
        Collector { identity }
    }

    /// List the contents of the directory at `path`, filtered and sorted.
    ///
    /// Entries that vanish or cannot be stat'ed between `readdir` and
    /// `lstat` are skipped with a warning.
    pub fn list_directory(&self, path: &Path, opts: &ListOptions) -> Result<Vec<Entry>> {
        let read = fs::read_dir(path).map_err(|e| ListError::from_io(path, e))?;
        let mut entries = Vec::new();

        if opts.show_dot_links() {
            for name in [".", ".."] {
                match self.stat_named(name.to_string(), &path.join(name)) {
                    Ok(entry) => entries.push(entry),
                    Err(err) => tracing::warn!(%err, "skipping {}", name),
                }
            }
        }

        for dirent in read {
            let dirent = match dirent {
                Ok(dirent) => dirent,
                Err(err) => {
                    tracing::warn!(%err, dir = %path.display(), "unreadable directory entry");
                    continue;
                }
            };
            let name = dirent.file_name().to_string_lossy().into_owned();
            if name.starts_with('.') && !opts.show_hidden() {
                continue;
            }
            match self.stat_named(name, &dirent.path()) {
                Ok(entry) => entries.push(entry),
                Err(err) => tracing::warn!(%err, "skipping entry"),
            }
        }

        sort_entries(&mut entries, opts);
        tracing::debug!(dir = %path.display(), count = entries.len(), "collected");
        Ok(entries)
    }

    /// Describe a single path, named as given.
    ///
    /// Fails only if the path does not exist (or cannot be stat'ed); a
    /// dangling symlink still produces an entry.
    pub fn list_single_file(&self, path: &Path) -> Result<Entry> {
        self.stat_named(path.to_string_lossy().into_owned(), path)
    }

    fn stat_named(&self, name: String, path: &Path) -> Result<Entry> {
        let meta = fs::symlink_metadata(path).map_err(|e| ListError::from_io(path, e))?;
        let kind = FileKind::from_file_type(meta.file_type());

        let entry = Entry::new(name, kind, mtime(meta.mtime()))
            .with_permissions(Permissions::from_mode(meta.mode()))
            .with_links(meta.nlink())
            .with_owner(
                display_user(&self.identity, meta.uid()),
                display_group(&self.identity, meta.gid()),
            )
            .with_size(meta.size(), meta.blocks())
            .with_attr_marker(attrs::marker(path))
            .with_path(path);

        if kind != FileKind::Symlink {
            return Ok(entry);
        }
        let target = fs::read_link(path)
            .map(|t| t.to_string_lossy().into_owned())
            .unwrap_or_else(|err| {
                tracing::debug!(%err, path = %path.display(), "unreadable link target");
                String::new()
            });
        Ok(entry.with_target(target))
    }
}

fn mtime(secs: i64) -> DateTime<Local> {
    Local
        .timestamp_opt(secs, 0)
        .earliest()
        .unwrap_or_else(|| DateTime::from(std::time::UNIX_EPOCH))
}
