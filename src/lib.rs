//! # agents-md-lint
//!
//! Style linter for `AGENTS.md` agent instruction files.
//!
//! `agents-md-lint` checks a file (or every `AGENTS.md` under a directory)
//! against fixed heuristics for length, token budget, anti-patterns, vague
//! language, heading structure, code-fence balance, and progressive
//! disclosure. A file fails when any finding has
//! [`Severity::Error`](finding::Severity::Error).
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use agents_md_lint::{config::Config, discovery, output, validate};
//!
//! let config = Config::default();
//! for file in discovery::discover(Path::new("."))? {
//!     let report = validate::validate_file(&file, &config)?;
//!     print!("{}", output::pretty::format(&report));
//! }
//! # Ok::<(), agents_md_lint::error::LintError>(())
//! ```
//!
//! ## Architecture
//!
//! 1. **[`discovery`]** — resolve the target path into files.
//! 2. **[`document`]** — load a file into text and lines.
//! 3. **[`checks`]** — the [`checks::Check`] trait and the seven rule passes.
//! 4. **[`validate`]** — run enabled checks and build a report.
//! 5. **[`finding`]** — [`finding::Finding`], [`finding::ValidationReport`].
//! 6. **[`output`]** — render reports as pretty text, JSON, or SARIF.
//!
//! [`config`] and [`error`] are shared by all of the above.

pub mod checks;
pub mod config;
pub mod discovery;
pub mod document;
pub mod error;
pub mod finding;
pub mod output;
pub mod validate;
