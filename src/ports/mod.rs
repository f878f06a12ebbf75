//! Port traits defining external boundaries.
//!
//! The filesystem is the only external system the lister touches.
//! Implementations live in `src/adapters/`.

pub mod filesystem;

pub use filesystem::{BoxError, EntryKind, FileSystem};
