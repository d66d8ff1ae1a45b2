//! File length check.
//!
//! Emits at most one document-scoped finding whose severity grows with the
//! line count. Brackets are exclusive and tested from the largest down.

use crate::checks::{Check, RuleInfo};
use crate::document::Document;
use crate::finding::{Finding, Severity};

const NAME: &str = "length";

pub const ERROR_LINES: usize = 1000;
pub const WARNING_LINES: usize = 500;
pub const INFO_LINES: usize = 300;

pub struct LengthCheck;

impl Check for LengthCheck {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "File length against the 200-300 line recommendation"
    }

    fn check(&self, doc: &Document, findings: &mut Vec<Finding>) {
        let lines = doc.line_count();

        let (rule_id, severity, message) = if lines > ERROR_LINES {
            (
                "length/critical",
                Severity::Error,
                format!(
                    "File is {lines} lines. Strongly consider splitting into modular .opencode/rules/ files (recommended max: 300 lines)"
                ),
            )
        } else if lines > WARNING_LINES {
            (
                "length/long",
                Severity::Warning,
                format!(
                    "File is {lines} lines. Consider splitting for better maintainability (recommended: 200-300 lines)"
                ),
            )
        } else if lines > INFO_LINES {
            (
                "length/above-optimal",
                Severity::Info,
                format!(
                    "File is {lines} lines. Optimal range is 200-300 lines for best context efficiency"
                ),
            )
        } else {
            return;
        };

        findings.push(Finding::document(rule_id, NAME, severity, message));
    }
}

pub fn rules() -> Vec<RuleInfo> {
    vec![
        RuleInfo {
            id: "length/critical",
            severity: Severity::Error,
            check: NAME,
            message: "File is longer than 1000 lines",
            remediation: "Split the file into modular rule files and reference them from AGENTS.md",
        },
        RuleInfo {
            id: "length/long",
            severity: Severity::Warning,
            check: NAME,
            message: "File is longer than 500 lines",
            remediation: "Move rarely needed sections into separate files (target 200-300 lines)",
        },
        RuleInfo {
            id: "length/above-optimal",
            severity: Severity::Info,
            check: NAME,
            message: "File is longer than 300 lines",
            remediation: "Trim or split content to stay within 200-300 lines",
        },
    ]
}
