//! Filtered, naturally sorted directory listings.
//!
//! Entries are read fresh from the filesystem port on every call. An entry is
//! kept when its kind matches the request (files or directories), its name is
//! not ignored, and its lowercased extension is accepted. Entries whose kind
//! cannot be determined are skipped.

use std::collections::BTreeSet;
use std::ffi::{OsStr, OsString};
use std::path::Path;

use tracing::debug;

use crate::context::ServiceContext;
use crate::error::ListError;
use crate::extension::get_extension;
use crate::natural;
use crate::ports::EntryKind;

/// Filters applied to a directory listing.
///
/// The default lists every regular file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOptions {
    extensions: BTreeSet<String>,
    ignore: BTreeSet<OsString>,
    dirs: bool,
}

impl ListOptions {
    /// Options listing every regular file.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Only accept entries with one of these extensions (case-insensitive).
    ///
    /// An empty set accepts every extension.
    #[must_use]
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extensions = extensions.into_iter().map(|e| e.as_ref().to_lowercase()).collect();
        self
    }

    /// Exclude entries with exactly these names.
    #[must_use]
    pub fn with_ignore<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.ignore = names.into_iter().map(Into::into).collect();
        self
    }

    /// List directories instead of regular files.
    #[must_use]
    pub fn directories(mut self, dirs: bool) -> Self {
        self.dirs = dirs;
        self
    }

    /// Lowercased extensions accepted by these options.
    #[must_use]
    pub fn extensions(&self) -> &BTreeSet<String> {
        &self.extensions
    }

    /// Names excluded by these options.
    #[must_use]
    pub fn ignore(&self) -> &BTreeSet<OsString> {
        &self.ignore
    }

    /// The entry kind these options select.
    #[must_use]
    pub fn kind(&self) -> EntryKind {
        if self.dirs {
            EntryKind::Directory
        } else {
            EntryKind::File
        }
    }

    /// Returns `true` if `name` passes the ignore and extension filters.
    ///
    /// The extension of a name that is not valid UTF-8 is taken from its
    /// lossy conversion.
    #[must_use]
    pub fn accepts_name(&self, name: &OsStr) -> bool {
        if self.ignore.contains(name) {
            return false;
        }
        self.extensions.is_empty()
            || self.extensions.contains(get_extension(&name.to_string_lossy().to_lowercase()))
    }
}

/// Lists directories through the context's filesystem port.
pub struct DirectoryLister<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> DirectoryLister<'a> {
    /// Creates a lister reading through `ctx.fs`.
    #[must_use]
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Returns the names in `path` that pass `options`, in natural order.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::ReadDir`] if `path` is missing, unreadable, or
    /// not a directory.
    pub fn list(&self, path: &Path, options: &ListOptions) -> Result<Vec<OsString>, ListError> {
        let raw = self
            .ctx
            .fs
            .list_dir(path)
            .map_err(|source| ListError::ReadDir { path: path.to_path_buf(), source })?;
        let total = raw.len();

        let wanted = options.kind();
        let mut names: Vec<OsString> = raw
            .into_iter()
            .filter(|name| options.accepts_name(name))
            .filter(|name| match self.ctx.fs.entry_kind(&path.join(name)) {
                Some(kind) => kind == wanted,
                None => {
                    debug!(entry = ?name, "skipping entry of unknown kind");
                    false
                }
            })
            .collect();

        natural::sort(&mut names);
        debug!(dir = %path.display(), total, kept = names.len(), "listed directory");
        Ok(names)
    }
}

/// Lists `path` on the real filesystem, filtered by `options`, in natural order.
///
/// ```no_run
/// use natsort_ls::{sorted_alphanumeric, ListOptions};
///
/// let images = sorted_alphanumeric("photos", &ListOptions::new().with_extensions(["png"]))?;
/// # Ok::<(), natsort_ls::ListError>(())
/// ```
///
/// # Errors
///
/// Returns [`ListError::ReadDir`] if `path` is missing, unreadable, or not a
/// directory.
pub fn sorted_alphanumeric(
    path: impl AsRef<Path>,
    options: &ListOptions,
) -> Result<Vec<OsString>, ListError> {
    let ctx = ServiceContext::live();
    DirectoryLister::new(&ctx).list(path.as_ref(), options)
}
