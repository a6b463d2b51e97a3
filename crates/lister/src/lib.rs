//! # Lister - an `ls`-style directory lister
//!
//! `lister` collects directory entries, sorts them, and prints either a
//! name-only listing or the long form with permissions, owner, group, size
//! and modification time. Long-form columns are aligned per directory with
//! [`lister_table`].
//!
//! ## Pipeline
//!
//! 1. [`Collector`] reads a directory into [`Entry`] records, applying the
//!    dotfile policy and resolving owners through an [`Identity`].
//! 2. [`sort::sort_entries`] orders them by name or time; `-r` mirrors the result.
//! 3. [`long::cells`] turns each entry into one row of cells.
//! 4. The table is flushed, which prints it and resets the column widths.
//!
//! [`Lister`] drives those steps over the command-line targets.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::io;
//! use std::path::PathBuf;
//! use lister::{Lister, ListOptions, SystemIdentity};
//!
//! let opts = ListOptions { long_form: true, ..Default::default() };
//! let mut lister = Lister::new(io::stdout(), io::stderr(), SystemIdentity::new(), opts);
//! let outcome = lister.run(&[PathBuf::from(".")]).unwrap();
//! assert!(outcome.is_success());
//! ```

mod attrs;
pub mod cli;
pub mod collect;
pub mod entry;
pub mod error;
pub mod identity;
pub mod listing;
pub mod long;
pub mod options;
pub mod paint;
pub mod sort;
pub mod time;

pub use collect::Collector;
pub use entry::{Entry, FileKind, Permissions};
pub use error::{IdKind, ListError, Result};
pub use identity::{Identity, SystemIdentity};
pub use listing::{Lister, Outcome};
pub use options::{ColorChoice, Hidden, ListOptions, SortKey};
