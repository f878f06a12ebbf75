//! Natural-order directory listing.
//!
//! [`sorted_alphanumeric`] lists the files (or subdirectories) of a
//! directory, keeps those passing an extension filter and an ignore list, and
//! returns their names sorted so that embedded numbers compare by value:
//! `page2.png` comes before `page10.png`.
//!
//! The crate also ships the `natsort-ls` binary; [`run`] is its entry point.

pub mod adapters;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod extension;
pub mod listing;
pub mod natural;
pub mod ports;

pub use error::ListError;
pub use extension::get_extension;
pub use listing::{sorted_alphanumeric, DirectoryLister, ListOptions};
pub use ports::EntryKind;

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        // --help and --version are reported by clap as errors that belong on stdout.
        Err(err) if !err.use_stderr() => {
            print!("{err}");
            return Ok(());
        }
        Err(err) => return Err(err.to_string()),
    };
    commands::dispatch(&cli.command)
}
