//! `natsort-ls list` command.

use std::ffi::{OsStr, OsString};
use std::io::Write;
use std::path::Path;

use crate::context::ServiceContext;
use crate::listing::{DirectoryLister, ListOptions};

/// Execute the `list` command against the given context.
///
/// # Errors
///
/// Returns an error string if the directory cannot be read or stdout cannot
/// be written.
pub fn run_with_context(
    ctx: &ServiceContext,
    path: &Path,
    options: &ListOptions,
    json: bool,
) -> Result<(), String> {
    let names = DirectoryLister::new(ctx).list(path, options).map_err(|e| e.to_string())?;
    let out = render(&names, json)?;
    std::io::stdout().lock().write_all(&out).map_err(|e| format!("Failed to write listing: {e}"))
}

/// Formats listed names, one per line or as a pretty JSON array.
///
/// Plain output keeps each name's bytes as the OS reported them. JSON must
/// be UTF-8, so names that are not valid UTF-8 are converted lossily there.
///
/// # Errors
///
/// Returns an error string if JSON serialization fails.
pub fn render(names: &[OsString], json: bool) -> Result<Vec<u8>, String> {
    if json {
        let lossy: Vec<_> = names.iter().map(|name| name.to_string_lossy()).collect();
        let mut out = serde_json::to_vec_pretty(&lossy)
            .map_err(|e| format!("Failed to serialize listing: {e}"))?;
        out.push(b'\n');
        return Ok(out);
    }

    let mut out = Vec::new();
    for name in names {
        out.extend_from_slice(&name_bytes(name));
        out.push(b'\n');
    }
    Ok(out)
}

#[cfg(unix)]
fn name_bytes(name: &OsStr) -> std::borrow::Cow<'_, [u8]> {
    use std::os::unix::ffi::OsStrExt;

    std::borrow::Cow::Borrowed(name.as_bytes())
}

#[cfg(not(unix))]
fn name_bytes(name: &OsStr) -> std::borrow::Cow<'_, [u8]> {
    std::borrow::Cow::Owned(name.to_string_lossy().into_owned().into_bytes())
}
