//! JSON output formatter.
//!
//! Produces one pretty-printed document for the whole run: overall verdict,
//! per-file severity counts, and every finding (no display truncation).

use crate::finding::{Finding, ValidationReport};
use std::path::Path;

#[derive(serde::Serialize)]
struct JsonOutput<'a> {
    passed: bool,
    files_validated: usize,
    files: Vec<JsonFile<'a>>,
}

#[derive(serde::Serialize)]
struct JsonFile<'a> {
    file: &'a Path,
    line_count: usize,
    passed: bool,
    summary: Summary,
    findings: &'a [Finding],
}

#[derive(serde::Serialize)]
struct Summary {
    errors: usize,
    warnings: usize,
    info: usize,
}

/// Formats the reports of a run as pretty-printed JSON.
///
/// # Panics
///
/// Panics if the reports cannot be serialized (should not happen with valid data).
pub fn format(reports: &[ValidationReport]) -> String {
    let files = reports
        .iter()
        .map(|report| {
            let (errors, warnings, info) = report.count_by_severity();
            JsonFile {
                file: &report.file,
                line_count: report.line_count,
                passed: report.passed,
                summary: Summary {
                    errors,
                    warnings,
                    info,
                },
                findings: &report.findings,
            }
        })
        .collect();

    let output = JsonOutput {
        passed: reports.iter().all(|r| r.passed),
        files_validated: reports.len(),
        files,
    };

    serde_json::to_string_pretty(&output).expect("JSON serialization failed")
}
