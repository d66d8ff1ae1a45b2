//! Error types shared by the library and the binary.

use std::path::PathBuf;

/// Everything that can stop a lint run or a single file's validation.
///
/// Rule violations are **not** errors: they are reported as
/// [`Finding`](crate::finding::Finding)s. A `LintError` means the tool could
/// not get far enough to look at the text.
#[derive(Debug, thiserror::Error)]
pub enum LintError {
    /// The path given on the command line does not exist.
    #[error("{} does not exist", .0.display())]
    PathNotFound(PathBuf),

    /// A discovered file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An explicit `--config` path does not exist.
    #[error("config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("failed to read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, LintError>;
