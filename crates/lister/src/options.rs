//! Listing configuration.
//!
//! [`ListOptions`] is built once from the command line and passed by
//! reference to the collector, the sorter and the listing driver.

use serde::{Deserialize, Serialize};

/// Which dot-prefixed entries to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Hidden {
    /// Skip every name starting with `.`.
    #[default]
    Skip,
    /// Show dotfiles, but not `.` and `..` (`-A`).
    AlmostAll,
    /// Show dotfiles plus `.` and `..` (`-a`).
    All,
}

/// Primary sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Byte-wise ascending by name.
    #[default]
    Name,
    /// Newest modification time first.
    Time,
}

/// When to color entry names.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Color when stdout is a terminal.
    Auto,
    Always,
    #[default]
    Never,
}

/// Display flags for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListOptions {
    pub hidden: Hidden,
    pub sort: SortKey,
    /// Mirror the sorted order.
    pub reverse: bool,
    /// Long form (`-l`).
    pub long_form: bool,
    /// Descend into subdirectories (`-R`).
    pub recursive: bool,
    /// Sizes like `4 KiB` instead of bytes (`-h`).
    pub human_readable: bool,
    pub color: ColorChoice,
}

impl ListOptions {
    /// Returns `true` if dotfiles are listed.
    pub fn show_hidden(&self) -> bool {
        self.hidden != Hidden::Skip
    }

    /// Returns `true` if `.` and `..` are listed.
    pub fn show_dot_links(&self) -> bool {
        self.hidden == Hidden::All
    }

    pub fn sort_by_time(&self) -> bool {
        self.sort == SortKey::Time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_plain_listing() {
        let opts = ListOptions::default();
        assert!(!opts.show_hidden());
        assert!(!opts.sort_by_time());
        assert!(!opts.long_form);
        assert_eq!(opts.color, ColorChoice::Never);
    }

    #[test]
    fn hidden_levels() {
        let almost = ListOptions {
            hidden: Hidden::AlmostAll,
            ..Default::default()
        };
        assert!(almost.show_hidden());
        assert!(!almost.show_dot_links());

        let all = ListOptions {
            hidden: Hidden::All,
            ..Default::default()
        };
        assert!(all.show_hidden());
        assert!(all.show_dot_links());
    }

    #[test]
    fn partial_config_deserializes() {
        let opts: ListOptions =
            serde_json::from_str(r#"{"long_form":true,"sort":"time","hidden":"almost_all"}"#)
                .unwrap();
        assert!(opts.long_form);
        assert!(opts.sort_by_time());
        assert_eq!(opts.hidden, Hidden::AlmostAll);
        assert!(!opts.reverse);
    }
}
