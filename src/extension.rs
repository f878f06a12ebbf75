//! File name extension extraction.

/// Returns the part of `filename` after its last `.`.
///
/// A name without any `.` is returned unchanged, and a trailing `.` yields
/// an empty extension.
///
/// ```
/// use natsort_ls::get_extension;
///
/// assert_eq!(get_extension("archive.tar.gz"), "gz");
/// assert_eq!(get_extension("README"), "README");
/// ```
#[must_use]
pub fn get_extension(filename: &str) -> &str {
    filename.rsplit('.').next().unwrap_or(filename)
}
