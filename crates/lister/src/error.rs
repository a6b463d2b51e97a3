//! Error types for listing operations.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur while collecting entries.
#[derive(Debug, Error)]
pub enum ListError {
    /// The path does not exist.
    #[error("{}: No such file or directory", path.display())]
    NotFound { path: PathBuf },

    /// The path exists but could not be read.
    #[error("{}: {source}", path.display())]
    NotReadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A uid or gid has no name on this system.
    #[error("no {kind} name for id {id}")]
    LookupFailed { kind: IdKind, id: u32 },
}

/// Which identity table a failed lookup was made against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdKind {
    User,
    Group,
}

impl std::fmt::Display for IdKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IdKind::User => f.write_str("user"),
            IdKind::Group => f.write_str("group"),
        }
    }
}

impl ListError {
    /// Classify an IO error raised while accessing `path`.
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::NotFound {
            ListError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            ListError::NotReadable {
                path: path.to_path_buf(),
                source: err,
            }
        }
    }

    /// The path an error is about, if it has one.
    pub fn path(&self) -> Option<&Path> {
        match self {
            ListError::NotFound { path } | ListError::NotReadable { path, .. } => Some(path),
            ListError::LookupFailed { .. } => None,
        }
    }

    /// Returns `true` for errors that mean the path is absent.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ListError::NotFound { .. })
    }
}

/// Result type for listing operations.
pub type Result<T> = std::result::Result<T, ListError>;
