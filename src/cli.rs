//! CLI argument definitions.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::listing::ListOptions;

/// Top-level CLI parser for `natsort-ls`.
#[derive(Debug, Parser)]
#[command(name = "natsort-ls", version, about = "List directory entries in natural order")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List files (or directories) in a directory, sorted naturally.
    List {
        /// Directory to list.
        path: PathBuf,
        /// Only include entries with this extension (repeatable, comma-separated).
        #[arg(short = 'e', long = "ext", value_name = "EXT", value_delimiter = ',')]
        extensions: Vec<String>,
        /// Exclude entries with exactly this name (repeatable).
        #[arg(short, long, value_name = "NAME")]
        ignore: Vec<OsString>,
        /// List subdirectories instead of regular files.
        #[arg(short, long)]
        dirs: bool,
        /// Print the result as a JSON array.
        #[arg(long)]
        json: bool,
    },
    /// Print the extension of each file name.
    Ext {
        /// File names to inspect.
        #[arg(required = true)]
        filenames: Vec<String>,
    },
}

impl Command {
    /// Builds listing options from the `list` flags.
    ///
    /// Returns `None` for commands that do not list a directory.
    #[must_use]
    pub fn list_options(&self) -> Option<ListOptions> {
        match self {
            Self::List { extensions, ignore, dirs, .. } => Some(
                ListOptions::new()
                    .with_extensions(extensions)
                    .with_ignore(ignore.iter().cloned())
                    .directories(*dirs),
            ),
            Self::Ext { .. } => None,
        }
    }
}
