//! Service context bundling the port trait objects.

use crate::adapters::live::LiveFileSystem;
use crate::ports::filesystem::FileSystem;

/// Bundles the port trait objects into a single context.
///
/// Library and CLI code reach the filesystem only through `fs`, so tests can
/// substitute an in-memory implementation.
pub struct ServiceContext {
    /// Filesystem for directory reads.
    pub fs: Box<dyn FileSystem>,
}

impl ServiceContext {
    /// Creates a live context backed by the real filesystem.
    #[must_use]
    pub fn live() -> Self {
        Self { fs: Box::new(LiveFileSystem) }
    }
}
