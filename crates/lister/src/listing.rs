//! The listing driver.
//!
//! [`Lister`] takes the command-line targets, splits them into missing
//! paths, plain files and directories, and prints each group in turn. Every
//! directory gets its own table pass: rows are added, the table is flushed,
//! and the flush resets the column widths before the next directory. The
//! short form builds a fresh one-row table each time.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use lister_table::Table;

use crate::collect::Collector;
use crate::entry::{Entry, FileKind};
use crate::error::ListError;
use crate::identity::Identity;
use crate::long::{self, long_form_spec, short_form_spec, RowStyle};
use crate::options::ListOptions;
use crate::paint::Painter;
use crate::sort::{sort_entries, sort_paths};

/// Program name used as the prefix of diagnostic lines.
pub const PROGRAM: &str = "lister";

/// Summary of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Outcome {
    /// Number of paths that could not be listed.
    pub errors: usize,
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        self.errors == 0
    }

    /// Process exit status: 0 on success, 1 if any path failed.
    pub fn exit_code(&self) -> u8 {
        if self.is_success() {
            0
        } else {
            1
        }
    }
}

/// Prints listings to `out` and diagnostics to `err`.
pub struct Lister<W, E, I> {
    out: W,
    err: E,
    collector: Collector<I>,
    opts: ListOptions,
    style: RowStyle,
    long: Table,
    now: DateTime<Local>,
    outcome: Outcome,
}

impl<W: Write, E: Write, I: Identity> Lister<W, E, I> {
    pub fn new(out: W, err: E, identity: I, opts: ListOptions) -> Self {
        let style = RowStyle {
            human_readable: opts.human_readable,
            painter: Painter::new(opts.color),
        };
        Lister {
            out,
            err,
            collector: Collector::new(identity),
            opts,
            style,
            long: Table::new(long_form_spec()),
            now: Local::now(),
            outcome: Outcome::default(),
        }
    }

    /// Pin the clock used for the time-or-year decision.
    pub fn with_now(mut self, now: DateTime<Local>) -> Self {
        self.now = now;
        self
    }

    /// Flush the output writer and hand both writers back.
    pub fn finish(mut self) -> io::Result<(W, E)> {
        self.out.flush()?;
        self.err.flush()?;
        Ok((self.out, self.err))
    }

    /// List every target.
    ///
    /// Missing paths are reported first, then plain files as one table, then
    /// each directory. Only write failures on `out`/`err` are returned;
    /// per-path problems are printed and counted in the [`Outcome`].
    pub fn run(&mut self, targets: &[PathBuf]) -> io::Result<Outcome> {
        let mut unusable = Vec::new();
        let mut files = Vec::new();
        let mut dirs = Vec::new();

        for target in targets {
            match fs::symlink_metadata(target) {
                Err(err) => unusable.push(ListError::from_io(target, err)),
                Ok(meta) => {
                    let is_link = meta.file_type().is_symlink();
                    let points_at_dir = fs::metadata(target).map(|m| m.is_dir()).unwrap_or(false);
                    // With -l a link given on the command line is shown as itself.
                    if points_at_dir && !(is_link && self.opts.long_form) {
                        dirs.push(target.clone());
                    } else {
                        files.push(target.clone());
                    }
                }
            }
        }

        unusable.sort_by(|a, b| a.path().cmp(&b.path()));
        for err in &unusable {
            self.report(err)?;
        }

        sort_paths(&mut dirs, &self.opts);
        let show_headers = targets.len() > 1 || self.opts.recursive;

        if !files.is_empty() {
            self.list_files(&files)?;
        }
        for (i, dir) in dirs.iter().enumerate() {
            if i > 0 || !files.is_empty() {
                writeln!(self.out)?;
            }
            self.list_dir(dir, show_headers)?;
        }

        Ok(self.outcome)
    }

    fn list_files(&mut self, paths: &[PathBuf]) -> io::Result<()> {
        let mut entries = Vec::with_capacity(paths.len());
        for path in paths {
            match self.collector.list_single_file(path) {
                Ok(entry) => entries.push(entry),
                Err(err) => self.report(&err)?,
            }
        }
        sort_entries(&mut entries, &self.opts);
        self.print_entries(&entries)
    }

    fn list_dir(&mut self, path: &Path, header: bool) -> io::Result<()> {
        if header {
            writeln!(self.out, "{}:", path.display())?;
        }
        let entries = match self.collector.list_directory(path, &self.opts) {
            Ok(entries) => entries,
            Err(err) => return self.report_dir(&err),
        };

        if self.opts.long_form {
            writeln!(self.out, "total {}", long::total_blocks(&entries))?;
        }
        self.print_entries(&entries)?;

        if self.opts.recursive {
            let children = entries
                .iter()
                .filter(|e| e.kind == FileKind::Directory && !e.is_dot_link());
            for child in children {
                writeln!(self.out)?;
                self.list_dir(child.path(), true)?;
            }
        }
        Ok(())
    }

    fn print_entries(&mut self, entries: &[Entry]) -> io::Result<()> {
        if self.opts.long_form {
            for entry in entries {
                self.long.add_row(long::cells(entry, &self.now, &self.style));
            }
            self.long.flush(&mut self.out)
        } else {
            if entries.is_empty() {
                return Ok(());
            }
            // The short form sizes its policy to the row, so it gets a fresh table.
            let mut short = Table::new(short_form_spec(entries.len()));
            short.add_row(entries.iter().map(|e| self.style.painter.paint(e)));
            short.flush(&mut self.out)
        }
    }

    fn report(&mut self, err: &ListError) -> io::Result<()> {
        self.outcome.errors += 1;
        // Keep diagnostics in order with listing output on a shared terminal.
        self.out.flush()?;
        writeln!(self.err, "{}: {}", PROGRAM, err)
    }

    fn report_dir(&mut self, err: &ListError) -> io::Result<()> {
        match err {
            ListError::NotReadable { path, source } => {
                self.outcome.errors += 1;
                self.out.flush()?;
                writeln!(
                    self.err,
                    "{}: cannot open directory '{}': {}",
                    PROGRAM,
                    path.display(),
                    source
                )
            }
            other => self.report(other),
        }
    }
}
