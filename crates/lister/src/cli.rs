//! Command-line surface.
//!
//! ```text
//! lister [-laARrth] [--color[=WHEN]] [PATH]...
//! ```
//!
//! `-h` means human-readable sizes, as in `ls`; help is `--help` only.

use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};

use crate::identity::SystemIdentity;
use crate::listing::{Lister, Outcome};
use crate::options::{ColorChoice, Hidden, ListOptions, SortKey};

#[derive(Debug, Parser)]
#[command(
    name = "lister",
    version,
    about = "List directory contents",
    disable_help_flag = true
)]
pub struct Cli {
    /// Use the long listing format
    #[arg(short = 'l')]
    pub long: bool,

    /// Show entries starting with `.`, including `.` and `..`
    #[arg(short = 'a', long = "all")]
    pub all: bool,

    /// Show entries starting with `.`, except `.` and `..`
    #[arg(short = 'A', long = "almost-all")]
    pub almost_all: bool,

    /// List subdirectories recursively
    #[arg(short = 'R', long = "recursive")]
    pub recursive: bool,

    /// Reverse the sort order
    #[arg(short = 'r', long = "reverse")]
    pub reverse: bool,

    /// Sort by modification time, newest first
    #[arg(short = 't')]
    pub time: bool,

    /// Print sizes like 4 KiB
    #[arg(short = 'h', long = "human-readable")]
    pub human_readable: bool,

    /// Color entry names
    #[arg(
        long,
        value_enum,
        value_name = "WHEN",
        num_args = 0..=1,
        require_equals = true,
        default_value_t = ColorChoice::Never,
        default_missing_value = "always"
    )]
    pub color: ColorChoice,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,

    /// Files or directories to list
    #[arg(value_name = "PATH", default_value = ".")]
    pub paths: Vec<PathBuf>,
}

impl Cli {
    /// Fold the flags into one configuration value.
    pub fn options(&self) -> ListOptions {
        let hidden = if self.all {
            Hidden::All
        } else if self.almost_all {
            Hidden::AlmostAll
        } else {
            Hidden::Skip
        };
        ListOptions {
            hidden,
            sort: if self.time { SortKey::Time } else { SortKey::Name },
            reverse: self.reverse,
            long_form: self.long,
            recursive: self.recursive,
            human_readable: self.human_readable,
            color: self.color,
        }
    }
}

/// List the requested paths to stdout, diagnostics to stderr.
pub fn run(cli: &Cli) -> Result<Outcome> {
    let opts = cli.options();
    tracing::debug!(?opts, paths = cli.paths.len(), "starting listing");

    let out = BufWriter::new(io::stdout().lock());
    let err = io::stderr().lock();
    let mut lister = Lister::new(out, err, SystemIdentity::new(), opts);
    let outcome = lister.run(&cli.paths).context("failed to write listing")?;
    lister.finish().context("failed to flush output")?;
    Ok(outcome)
}
