//! Validation orchestration.
//!
//! [`validate_file`] is the main entry point: it loads one file, runs every
//! enabled [`Check`](crate::checks::Check) against it in order, and builds a
//! [`ValidationReport`]. Each call starts from an empty findings list, so
//! nothing carries over between files.

use crate::checks;
use crate::config::Config;
use crate::document::Document;
use crate::error::Result;
use crate::finding::{Finding, ValidationReport};
use std::path::Path;

/// Loads and validates a single file.
///
/// # Errors
///
/// Returns [`LintError::Read`](crate::error::LintError::Read) when the file
/// cannot be read. Rule violations are never errors; they end up in the
/// report.
///
/// # Examples
///
/// ```rust,no_run
/// use std::path::Path;
/// use agents_md_lint::{config::Config, validate};
///
/// let report = validate::validate_file(Path::new("AGENTS.md"), &Config::default())?;
/// std::process::exit(if report.passed { 0 } else { 1 });
/// # Ok::<(), agents_md_lint::error::LintError>(())
/// ```
pub fn validate_file(path: &Path, config: &Config) -> Result<ValidationReport> {
    let doc = Document::load(path)?;
    Ok(validate_document(&doc, config))
}

/// Runs every enabled check against an already loaded document.
pub fn validate_document(doc: &Document, config: &Config) -> ValidationReport {
    let mut findings: Vec<Finding> = Vec::new();

    for check in checks::all_checks() {
        if !config.is_check_enabled(check.name()) {
            tracing::debug!(check = check.name(), "check disabled by config");
            continue;
        }

        let before = findings.len();
        check.check(doc, &mut findings);
        tracing::debug!(
            check = check.name(),
            file = %doc.path().display(),
            findings = findings.len() - before,
            "check finished"
        );
    }

    ValidationReport::from_findings(
        doc.path().to_path_buf(),
        doc.line_count(),
        findings,
        config.strict.enabled,
    )
}
