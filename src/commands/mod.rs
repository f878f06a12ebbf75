//! Command dispatch and handlers.

pub mod ext;
pub mod list;

use crate::cli::Command;
use crate::context::ServiceContext;

/// Dispatch a parsed command to its handler against the live filesystem.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(command: &Command) -> Result<(), String> {
    dispatch_with_context(command, &ServiceContext::live())
}

/// Dispatch a command with the given service context.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch_with_context(command: &Command, ctx: &ServiceContext) -> Result<(), String> {
    match command {
        Command::List { path, json, .. } => {
            let options = command.list_options().unwrap_or_default();
            list::run_with_context(ctx, path, &options, *json)
        }
        Command::Ext { filenames } => {
            ext::run(filenames);
            Ok(())
        }
    }
}
