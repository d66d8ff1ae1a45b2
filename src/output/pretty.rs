//! Human-readable text formatter.
//!
//! A file with no findings renders as a single success line. Otherwise the
//! report lists Errors, Warnings and Info in that order, each section only
//! when it has entries. Info is capped at [`INFO_DISPLAY_LIMIT`] entries; the
//! remainder is summarized as a count.

use crate::finding::{Finding, Severity, ValidationReport};
use colored::Colorize;

/// Maximum number of Info findings listed per file.
pub const INFO_DISPLAY_LIMIT: usize = 5;

const RULE_WIDTH: usize = 60;

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// Formats one file's report. The result ends with a newline.
pub fn format(report: &ValidationReport) -> String {
    let file = report.file.display();

    if report.findings.is_empty() {
        return format!("{} {file}: All checks passed\n", "✅".green());
    }

    let mut out = String::new();
    out.push_str(&format!(
        "\n📄 {}\n",
        format!("Validation Report: {file}").bold()
    ));
    out.push_str(&format!("{}\n", rule()));

    let errors: Vec<&Finding> = report.with_severity(Severity::Error).collect();
    let warnings: Vec<&Finding> = report.with_severity(Severity::Warning).collect();
    let info: Vec<&Finding> = report.with_severity(Severity::Info).collect();

    if !errors.is_empty() {
        let title = format!("Errors ({}):", errors.len());
        out.push_str(&format!("\n❌ {}\n", title.red().bold()));
        for finding in &errors {
            out.push_str(&bullet(finding));
        }
    }

    if !warnings.is_empty() {
        let title = format!("Warnings ({}):", warnings.len());
        out.push_str(&format!("\n⚠️  {}\n", title.yellow().bold()));
        for finding in &warnings {
            out.push_str(&bullet(finding));
        }
    }

    if !info.is_empty() {
        let title = format!("Info ({}):", info.len());
        out.push_str(&format!("\nℹ️  {}\n", title.blue().bold()));
        for finding in info.iter().take(INFO_DISPLAY_LIMIT) {
            out.push_str(&bullet(finding));
        }
        if info.len() > INFO_DISPLAY_LIMIT {
            let hidden = info.len() - INFO_DISPLAY_LIMIT;
            out.push_str(&format!("  {}\n", format!("... and {hidden} more").dimmed()));
        }
    }

    out.push_str(&format!("\n{}\n", rule()));
    out
}

fn bullet(finding: &Finding) -> String {
    match finding.line {
        Some(line) if line > 0 => format!("  • {} (line {line})\n", finding.message),
        _ => format!("  • {}\n", finding.message),
    }
}

/// Opening line printed before the per-file reports.
pub fn format_header(file_count: usize) -> String {
    format!("Found {file_count} AGENTS.md file(s) to validate\n\n")
}

/// Closing line printed after every file has been reported.
pub fn format_summary(all_passed: bool) -> String {
    let verdict = if all_passed {
        format!(
            "✅ {}",
            "All AGENTS.md files passed validation".green().bold()
        )
    } else {
        format!("❌ {}", "Some AGENTS.md files have errors".red().bold())
    };
    format!("\n{}\n{verdict}\n", rule())
}
