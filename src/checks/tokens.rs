//! Estimated token budget check.
//!
//! The estimate is a fixed heuristic of four tokens per line. Like the length
//! check it emits at most one document-scoped finding, but its brackets sit at
//! different line counts, so the two checks can disagree on severity.

use crate::checks::{Check, RuleInfo};
use crate::document::Document;
use crate::finding::{Finding, Severity};

const NAME: &str = "tokens";

pub const TOKENS_PER_LINE: usize = 4;

pub const ERROR_TOKENS: usize = 4000;
pub const WARNING_TOKENS: usize = 2000;
pub const INFO_TOKENS: usize = 1200;

/// Rough token estimate for a document of `lines` lines.
pub fn estimate(lines: usize) -> usize {
    lines * TOKENS_PER_LINE
}

pub struct TokenCheck;

impl Check for TokenCheck {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Estimated token budget (lines × 4)"
    }

    fn check(&self, doc: &Document, findings: &mut Vec<Finding>) {
        let lines = doc.line_count();
        let tokens = estimate(lines);
        let basis = format!("Estimated {tokens} tokens ({lines} lines × {TOKENS_PER_LINE})");

        let (rule_id, severity, advice) = if tokens > ERROR_TOKENS {
            (
                "tokens/critical",
                Severity::Error,
                "Critical: May cause opencode to ignore rules (recommended <1200 tokens)",
            )
        } else if tokens > WARNING_TOKENS {
            (
                "tokens/over-budget",
                Severity::Warning,
                "Consider splitting (recommended <1200 tokens)",
            )
        } else if tokens > INFO_TOKENS {
            (
                "tokens/near-limit",
                Severity::Info,
                "Approaching recommended limit of 1200 tokens",
            )
        } else {
            return;
        };

        findings.push(Finding::document(
            rule_id,
            NAME,
            severity,
            format!("{basis}. {advice}"),
        ));
    }
}

pub fn rules() -> Vec<RuleInfo> {
    vec![
        RuleInfo {
            id: "tokens/critical",
            severity: Severity::Error,
            check: NAME,
            message: "Estimated token count above 4000",
            remediation: "Split the file; agents may ignore rules buried in oversized context",
        },
        RuleInfo {
            id: "tokens/over-budget",
            severity: Severity::Warning,
            check: NAME,
            message: "Estimated token count above 2000",
            remediation: "Split the file to stay under roughly 1200 tokens",
        },
        RuleInfo {
            id: "tokens/near-limit",
            severity: Severity::Info,
            check: NAME,
            message: "Estimated token count above 1200",
            remediation: "Keep new additions short or move detail into referenced files",
        },
    ]
}
