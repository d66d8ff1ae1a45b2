//! Vague language detection.
//!
//! Flags hedge words, passive obligations and non-committal qualifiers that
//! leave an agent guessing. Fence delimiter lines and lines indented by four
//! or more spaces are treated as literal text and skipped. Lines *between*
//! fences are still scanned; only the delimiter line itself is exempt.

use crate::checks::{is_fence, Check, RuleInfo};
use crate::document::Document;
use crate::finding::{Finding, Severity};
use regex::Regex;
use std::sync::LazyLock;

const NAME: &str = "vague_language";

struct VaguePattern {
    id: &'static str,
    regex: &'static LazyLock<Regex>,
    message: &'static str,
    remediation: &'static str,
}

static RE_HEDGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(properly|correctly|appropriately|adequately)\b").unwrap()
});

static RE_PASSIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(should be|needs to be|must be)\s+\w+ed\b").unwrap());

static RE_NONCOMMITTAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(as needed|when necessary|where appropriate)\b").unwrap()
});

static PATTERNS: &[VaguePattern] = &[
    VaguePattern {
        id: "vague/hedge-word",
        regex: &RE_HEDGE,
        message: "Hedge word (properly, correctly, appropriately, adequately)",
        remediation: "State the concrete criterion that makes the result correct",
    },
    VaguePattern {
        id: "vague/passive-obligation",
        regex: &RE_PASSIVE,
        message: "Passive obligation (should be / needs to be / must be ...ed)",
        remediation: "Name who does what: use an imperative with an explicit action",
    },
    VaguePattern {
        id: "vague/non-committal",
        regex: &RE_NONCOMMITTAL,
        message: "Non-committal qualifier (as needed, when necessary, where appropriate)",
        remediation: "Spell out the condition under which the rule applies",
    },
];

/// Four-space indentation marks an indented code line.
fn is_literal_line(line: &str) -> bool {
    is_fence(line) || line.starts_with("    ")
}

pub struct VagueLanguageCheck;

impl Check for VagueLanguageCheck {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Hedge words and non-committal phrasing outside code"
    }

    fn check(&self, doc: &Document, findings: &mut Vec<Finding>) {
        for (line_num, line) in doc.numbered_lines() {
            if is_literal_line(line) {
                continue;
            }

            for pattern in PATTERNS {
                if pattern.regex.is_match(line) {
                    findings.push(Finding::at_line(
                        pattern.id,
                        NAME,
                        Severity::Info,
                        format!(
                            "Vague language detected. Consider being more specific: \"{}\"",
                            line.trim()
                        ),
                        line_num,
                    ));
                }
            }
        }
    }
}

pub fn rules() -> Vec<RuleInfo> {
    PATTERNS
        .iter()
        .map(|p| RuleInfo {
            id: p.id,
            severity: Severity::Info,
            check: NAME,
            message: p.message,
            remediation: p.remediation,
        })
        .collect()
}
