//! Error types for directory listing.

use std::path::PathBuf;

/// Errors returned when listing a directory.
#[derive(Debug, thiserror::Error)]
pub enum ListError {
    /// The directory is missing, unreadable, or not a directory.
    #[error("Failed to read directory {}: {source}", path.display())]
    ReadDir {
        /// Directory that was being listed.
        path: PathBuf,
        /// Underlying filesystem error.
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl ListError {
    /// Returns the directory the failed listing was asked for.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::ReadDir { path, .. } => path,
        }
    }
}
