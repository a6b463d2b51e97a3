//! Name coloring for `--color`.

use console::Style;

use crate::entry::{Entry, FileKind};
use crate::options::ColorChoice;

/// Applies per-kind styles to entry names, or passes them through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Painter {
    enabled: bool,
}

impl Painter {
    /// Resolve `choice` against the current stdout.
    pub fn new(choice: ColorChoice) -> Self {
        let enabled = match choice {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => console::colors_enabled(),
        };
        Painter { enabled }
    }

    /// A painter that never styles.
    pub fn plain() -> Self {
        Painter { enabled: false }
    }

    /// Style for an entry, if it gets one.
    pub fn style_for(entry: &Entry) -> Option<Style> {
        let style = match entry.kind {
            FileKind::Directory => Style::new().blue().bold(),
            FileKind::Symlink => Style::new().cyan(),
            FileKind::Pipe => Style::new().yellow(),
            FileKind::Socket => Style::new().magenta(),
            FileKind::BlockDevice | FileKind::CharDevice => Style::new().yellow().bold(),
            FileKind::Regular if entry.permissions.is_executable() => Style::new().green(),
            FileKind::Regular => return None,
        };
        Some(style)
    }

    /// The entry name, styled when colors are on.
    pub fn paint(&self, entry: &Entry) -> String {
        if !self.enabled {
            return entry.name.clone();
        }
        match Self::style_for(entry) {
            Some(style) => style.force_styling(true).apply_to(&entry.name).to_string(),
            None => entry.name.clone(),
        }
    }
}

impl Default for Painter {
    fn default() -> Self {
        Painter::plain()
    }
}
