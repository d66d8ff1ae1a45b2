//! Document loading.
//!
//! A [`Document`] is the immutable input every check reads: the raw file
//! contents plus the same text split into lines.

use crate::error::{LintError, Result};
use std::path::{Path, PathBuf};

/// An `AGENTS.md` file loaded into memory.
///
/// Lines are produced with a plain split on `'\n'`, so a file ending in a
/// newline has a trailing empty line and an empty file has exactly one line.
/// Carriage returns are left in place.
#[derive(Debug, Clone)]
pub struct Document {
    path: PathBuf,
    content: String,
    lines: Vec<String>,
}

impl Document {
    /// Reads `path` from disk in full.
    ///
    /// # Errors
    ///
    /// Returns [`LintError::Read`] when the file cannot be read (missing,
    /// permission denied, broken symlink, invalid UTF-8).
    pub fn load(path: &Path) -> Result<Document> {
        let content = std::fs::read_to_string(path).map_err(|source| LintError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Document::from_text(path, content))
    }

    /// Builds a document from text already in memory.
    ///
    /// ```
    /// use agents_md_lint::document::Document;
    ///
    /// let doc = Document::from_text("AGENTS.md", "# Title\nbody\n");
    /// assert_eq!(doc.line_count(), 3);
    /// assert_eq!(doc.lines()[2], "");
    /// ```
    pub fn from_text(path: impl Into<PathBuf>, content: impl Into<String>) -> Document {
        let content = content.into();
        let lines = content.split('\n').map(str::to_string).collect();
        Document {
            path: path.into(),
            content,
            lines,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Iterates over `(line_number, line)` with 1-based line numbers.
    pub fn numbered_lines(&self) -> impl Iterator<Item = (usize, &str)> {
        self.lines
            .iter()
            .enumerate()
            .map(|(i, line)| (i + 1, line.as_str()))
    }
}
