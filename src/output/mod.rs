//! Output formatting for validation reports.
//!
//! | Format | Module | Use case |
//! |--------|--------|----------|
//! | [`Pretty`](OutputFormat::Pretty) | [`pretty`] | Terminal / human review |
//! | [`Json`](OutputFormat::Json)     | [`json`]   | Automation / scripting  |
//! | [`Sarif`](OutputFormat::Sarif)   | [`sarif`]  | CI/CD integration       |
//!
//! Pretty output is streamed: one report per file as soon as it is validated.
//! JSON and SARIF describe the whole run, so they are rendered once from all
//! reports with [`format_run`].

pub mod json;
pub mod pretty;
pub mod sarif;

use crate::finding::ValidationReport;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text grouped by severity.
    Pretty,
    /// Machine-readable JSON.
    Json,
    /// [SARIF 2.1.0](https://sarifweb.azurewebsites.net/) for CI/CD tool integration.
    Sarif,
}

impl OutputFormat {
    /// `true` for formats printed per file while the run is in progress.
    pub fn is_streaming(&self) -> bool {
        matches!(self, OutputFormat::Pretty)
    }
}

/// Formats all reports of a run in the requested [`OutputFormat`].
///
/// For [`OutputFormat::Pretty`] this concatenates the per-file reports and
/// the closing summary, matching what the binary streams.
///
/// # Examples
///
/// ```rust,no_run
/// use agents_md_lint::output::{format_run, OutputFormat};
/// # use agents_md_lint::finding::ValidationReport;
/// # fn example(reports: &[ValidationReport]) {
/// let json = format_run(reports, &OutputFormat::Json);
/// println!("{json}");
/// # }
/// ```
pub fn format_run(reports: &[ValidationReport], format: &OutputFormat) -> String {
    match format {
        OutputFormat::Pretty => {
            let mut out = pretty::format_header(reports.len());
            for report in reports {
                out.push_str(&pretty::format(report));
            }
            out.push_str(&pretty::format_summary(reports.iter().all(|r| r.passed)));
            out
        }
        OutputFormat::Json => json::format(reports),
        OutputFormat::Sarif => sarif::format(reports),
    }
}
