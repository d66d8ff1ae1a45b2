//! Configuration loading.
//!
//! Configuration is optional and only read from a path passed explicitly with
//! `--config`. It can switch individual checks off and enable strict mode;
//! rule thresholds are fixed and not configurable.
//!
//! ```toml
//! [strict]
//! enabled = true
//!
//! [checks]
//! anti_patterns = false
//! ```

use crate::error::{LintError, Result};
use std::path::Path;

/// Main configuration. Every field has a default, so an empty file is valid.
///
/// # Examples
///
/// ```
/// use agents_md_lint::config::Config;
///
/// let config = Config::default();
/// assert!(config.is_check_enabled("length"));
/// assert!(!config.strict.enabled);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Config {
    /// When strict mode is enabled, warnings also fail a file.
    pub strict: StrictConfig,
    /// Per-check on/off toggles.
    pub checks: ChecksConfig,
}

/// Strict-mode configuration.
///
/// When [`enabled`](StrictConfig::enabled) is `true`, any finding with
/// [`Severity::Warning`](crate::finding::Severity::Warning) fails the file.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct StrictConfig {
    pub enabled: bool,
}

/// Per-check on/off toggles. Every check defaults to enabled.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct ChecksConfig {
    pub length: bool,
    pub tokens: bool,
    pub anti_patterns: bool,
    pub vague_language: bool,
    pub structure: bool,
    pub code_blocks: bool,
    pub progressive_disclosure: bool,
}

impl Default for ChecksConfig {
    fn default() -> Self {
        ChecksConfig {
            length: true,
            tokens: true,
            anti_patterns: true,
            vague_language: true,
            structure: true,
            code_blocks: true,
            progressive_disclosure: true,
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file, or returns defaults for `None`.
    ///
    /// # Errors
    ///
    /// - [`LintError::ConfigNotFound`] when the path does not exist.
    /// - [`LintError::ConfigRead`] when it cannot be read.
    /// - [`LintError::ConfigParse`] when the TOML is malformed or has a field
    ///   of the wrong type.
    pub fn load(path: Option<&Path>) -> Result<Config> {
        let Some(path) = path else {
            return Ok(Config::default());
        };

        if !path.exists() {
            return Err(LintError::ConfigNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path).map_err(|source| LintError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| LintError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Returns `true` if the named check is enabled.
    ///
    /// Unknown check names are considered enabled.
    pub fn is_check_enabled(&self, name: &str) -> bool {
        match name {
            "length" => self.checks.length,
            "tokens" => self.checks.tokens,
            "anti_patterns" => self.checks.anti_patterns,
            "vague_language" => self.checks.vague_language,
            "structure" => self.checks.structure,
            "code_blocks" => self.checks.code_blocks,
            "progressive_disclosure" => self.checks.progressive_disclosure,
            _ => true,
        }
    }
}
