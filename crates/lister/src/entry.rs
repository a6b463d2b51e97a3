//! Normalized records for the objects being listed.

use std::fs::FileType;
use std::os::unix::fs::FileTypeExt;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use serde::Serialize;

/// The type of a filesystem object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileKind {
    Regular,
    Directory,
    Symlink,
    BlockDevice,
    CharDevice,
    Pipe,
    Socket,
}

impl FileKind {
    /// Classify a file type as reported by `lstat`.
    pub fn from_file_type(ft: FileType) -> Self {
        if ft.is_symlink() {
            FileKind::Symlink
        } else if ft.is_dir() {
            FileKind::Directory
        } else if ft.is_block_device() {
            FileKind::BlockDevice
        } else if ft.is_char_device() {
            FileKind::CharDevice
        } else if ft.is_fifo() {
            FileKind::Pipe
        } else if ft.is_socket() {
            FileKind::Socket
        } else {
            FileKind::Regular
        }
    }

    /// The leading character of a mode string.
    pub fn type_char(self) -> char {
        match self {
            FileKind::Regular => '-',
            FileKind::Directory => 'd',
            FileKind::Symlink => 'l',
            FileKind::BlockDevice => 'b',
            FileKind::CharDevice => 'c',
            FileKind::Pipe => 'p',
            FileKind::Socket => 's',
        }
    }
}

/// Permission bits: the rwx triples plus setuid, setgid and sticky.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct Permissions(u32);

impl Permissions {
    const SETUID: u32 = 0o4000;
    const SETGID: u32 = 0o2000;
    const STICKY: u32 = 0o1000;

    /// Keep the low twelve bits of a raw `st_mode`.
    pub fn from_mode(mode: u32) -> Self {
        Permissions(mode & 0o7777)
    }

    pub fn bits(self) -> u32 {
        self.0
    }

    /// Any execute bit set.
    pub fn is_executable(self) -> bool {
        self.0 & 0o111 != 0
    }

    /// Render the nine-character `rwxr-xr-x` form.
    ///
    /// Special bits replace the matching execute slot: `s`/`S` for setuid
    /// and setgid, `t`/`T` for sticky (lowercase when execute is also set).
    pub fn render(self) -> String {
        let bits = self.0;
        let mut out = String::with_capacity(9);
        let triples = [
            (0o400, 0o200, 0o100, Self::SETUID, 's'),
            (0o040, 0o020, 0o010, Self::SETGID, 's'),
            (0o004, 0o002, 0o001, Self::STICKY, 't'),
        ];
        for (r, w, x, special, marker) in triples {
            out.push(if bits & r != 0 { 'r' } else { '-' });
            out.push(if bits & w != 0 { 'w' } else { '-' });
            let exec = bits & x != 0;
            out.push(match (bits & special != 0, exec) {
                (true, true) => marker,
                (true, false) => marker.to_ascii_uppercase(),
                (false, true) => 'x',
                (false, false) => '-',
            });
        }
        out
    }
}

/// One filesystem object, ready for display.
///
/// A symlink target is present exactly when `kind` is [`FileKind::Symlink`];
/// the constructor and [`Entry::with_target`] keep that true. An unreadable
/// link target is stored as an empty string.
///
/// `name` is lossily decoded for display; `path` keeps the exact bytes and is
/// what the entry is reopened by.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entry {
    pub name: String,
    #[serde(skip)]
    path: PathBuf,
    pub kind: FileKind,
    pub permissions: Permissions,
    /// Extended-attribute marker appended to the mode string (`+` or `.`).
    pub attr_marker: Option<char>,
    pub links: u64,
    pub owner: String,
    pub group: String,
    pub size: u64,
    /// Allocated 512-byte blocks.
    pub blocks: u64,
    pub modified: DateTime<Local>,
    symlink_target: Option<String>,
}

impl Entry {
    pub fn new(name: impl Into<String>, kind: FileKind, modified: DateTime<Local>) -> Self {
        let name = name.into();
        Entry {
            path: PathBuf::from(&name),
            name,
            kind,
            permissions: Permissions::default(),
            attr_marker: None,
            links: 1,
            owner: String::new(),
            group: String::new(),
            size: 0,
            blocks: 0,
            modified,
            symlink_target: (kind == FileKind::Symlink).then(String::new),
        }
    }

    /// Set the on-disk path, when it differs from the display name.
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn with_permissions(mut self, permissions: Permissions) -> Self {
        self.permissions = permissions;
        self
    }

    pub fn with_links(mut self, links: u64) -> Self {
        self.links = links;
        self
    }

    pub fn with_owner(mut self, owner: impl Into<String>, group: impl Into<String>) -> Self {
        self.owner = owner.into();
        self.group = group.into();
        self
    }

    pub fn with_size(mut self, size: u64, blocks: u64) -> Self {
        self.size = size;
        self.blocks = blocks;
        self
    }

    pub fn with_attr_marker(mut self, marker: Option<char>) -> Self {
        self.attr_marker = marker;
        self
    }

    /// Set the link target. Ignored unless this entry is a symlink.
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        if self.kind == FileKind::Symlink {
            self.symlink_target = Some(target.into());
        }
        self
    }

    pub fn symlink_target(&self) -> Option<&str> {
        self.symlink_target.as_deref()
    }

    pub fn is_dir(&self) -> bool {
        self.kind == FileKind::Directory
    }

    /// `.` and `..`, which recursion never descends into.
    pub fn is_dot_link(&self) -> bool {
        self.name == "." || self.name == ".."
    }

    /// Type character, permission triples and any attribute marker.
    pub fn mode_string(&self) -> String {
        let mut mode = String::with_capacity(11);
        mode.push(self.kind.type_char());
        mode.push_str(&self.permissions.render());
        if let Some(marker) = self.attr_marker {
            mode.push(marker);
        }
        mode
    }
}
