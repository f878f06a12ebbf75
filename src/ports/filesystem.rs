//! Filesystem port for directory listing.

use std::ffi::OsString;
use std::path::Path;

/// Boxed error returned across port boundaries.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// The type of a directory entry, as seen after following symlinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A regular file.
    File,
    /// A directory.
    Directory,
}

/// Provides the directory reads the lister needs.
///
/// Abstracting the filesystem lets the lister be tested without touching
/// the real disk.
pub trait FileSystem: Send + Sync {
    /// Lists the names of the entries in a directory, in no particular order.
    ///
    /// Names are returned as the OS reports them, including names that are
    /// not valid UTF-8.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is not a directory or cannot be read.
    fn list_dir(&self, path: &Path) -> Result<Vec<OsString>, BoxError>;

    /// Returns the kind of the entry at `path`.
    ///
    /// Returns `None` when the entry does not exist, cannot be inspected, or
    /// is neither a regular file nor a directory.
    fn entry_kind(&self, path: &Path) -> Option<EntryKind>;
}
