//! Target file discovery.

use crate::error::{LintError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File name searched for when the target is a directory.
pub const TARGET_FILE_NAME: &str = "AGENTS.md";

/// Resolves the command-line path into the list of files to validate.
///
/// - A file is returned as-is, whatever its name.
/// - A directory is walked recursively and every file (or symlink to a file)
///   named exactly
///   [`TARGET_FILE_NAME`] is returned, sorted by path so reports come out in
///   the same order on every run. An empty list is not an error.
///
/// # Errors
///
/// Returns [`LintError::PathNotFound`] when `root` does not exist.
///
/// # Examples
///
/// ```rust,no_run
/// use std::path::Path;
/// use agents_md_lint::discovery::discover;
///
/// for file in discover(Path::new("."))? {
///     println!("{}", file.display());
/// }
/// # Ok::<(), agents_md_lint::error::LintError>(())
/// ```
pub fn discover(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.exists() {
        return Err(LintError::PathNotFound(root.to_path_buf()));
    }

    if root.is_file() {
        return Ok(vec![root.to_path_buf()]);
    }

    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|e| match e {
            Ok(entry) => Some(entry),
            Err(err) => {
                tracing::warn!("skipping unreadable entry: {err}");
                None
            }
        })
        // `path().is_file()` follows symlinks; `file_type()` would not.
        .filter(|e| e.file_name() == TARGET_FILE_NAME && e.path().is_file())
        .map(|e| e.into_path())
        .collect();

    files.sort();
    Ok(files)
}
