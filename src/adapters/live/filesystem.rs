//! Live filesystem adapter using `std::fs`.

use std::ffi::OsString;
use std::path::Path;

use crate::ports::filesystem::{BoxError, EntryKind, FileSystem};

/// Live filesystem adapter backed by real disk I/O.
pub struct LiveFileSystem;

impl FileSystem for LiveFileSystem {
    fn list_dir(&self, path: &Path) -> Result<Vec<OsString>, BoxError> {
        let mut entries = Vec::new();
        for entry in std::fs::read_dir(path)? {
            entries.push(entry?.file_name());
        }
        Ok(entries)
    }

    fn entry_kind(&self, path: &Path) -> Option<EntryKind> {
        let metadata = std::fs::metadata(path).ok()?;
        if metadata.is_dir() {
            Some(EntryKind::Directory)
        } else if metadata.is_file() {
            Some(EntryKind::File)
        } else {
            None
        }
    }
}
