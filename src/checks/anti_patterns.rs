//! Token-wasting anti-pattern detection.
//!
//! Each line is lowercased and tested against every entry of [`PATTERNS`];
//! every match is its own warning, so one line can produce several findings.
//! Lines inside code fences are scanned too (unlike [`vague_language`]).
//!
//! [`vague_language`]: crate::checks::vague_language

use crate::checks::{Check, RuleInfo};
use crate::document::Document;
use crate::finding::{Finding, Severity};
use regex::Regex;
use std::sync::LazyLock;

const NAME: &str = "anti_patterns";

struct AntiPattern {
    id: &'static str,
    regex: &'static LazyLock<Regex>,
    description: &'static str,
    remediation: &'static str,
}

// Patterns are written in lowercase and run against a lowercased line.

static RE_GENERIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(clean code|good code|best practices|write good|code quality)\b").unwrap()
});

static RE_HISTORY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(is a|are a|was a|were a).+(created by|developed by|written by)").unwrap()
});

static RE_INTRO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*#+\s*(introduction|overview|about this)").unwrap());

// `\b` cannot follow a comma followed by a space, so the ordinal words carry
// their comma outside the boundary group.
static RE_TUTORIAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(step \d+|let's)\b|\b(first|second|third|finally),").unwrap()
});

static RE_EXHAUSTIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(workspace \d+|command \d+|keybinding \d+)").unwrap());

static PATTERNS: &[AntiPattern] = &[
    AntiPattern {
        id: "anti-pattern/generic-advice",
        regex: &RE_GENERIC,
        description: "Generic advice opencode already knows",
        remediation: "Replace platitudes with project-specific, checkable rules",
    },
    AntiPattern {
        id: "anti-pattern/historical-background",
        regex: &RE_HISTORY,
        description: "Historical background opencode doesn't need",
        remediation: "Drop provenance narration; keep only what changes agent behavior",
    },
    AntiPattern {
        id: "anti-pattern/introduction-section",
        regex: &RE_INTRO,
        description: "Unnecessary introduction sections",
        remediation: "Remove introduction/overview headings and start with the rules",
    },
    AntiPattern {
        id: "anti-pattern/tutorial-language",
        regex: &RE_TUTORIAL,
        description: "Tutorial language (be directive, not educational)",
        remediation: "Rewrite sequenced prose as direct imperative instructions",
    },
    AntiPattern {
        id: "anti-pattern/exhaustive-list",
        regex: &RE_EXHAUSTIVE,
        description: "Exhaustive list detected (document patterns, not every item)",
        remediation: "Describe the naming pattern once instead of enumerating every item",
    },
];

pub struct AntiPatternCheck;

impl Check for AntiPatternCheck {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Generic advice, history, intros, tutorial tone, and exhaustive lists"
    }

    fn check(&self, doc: &Document, findings: &mut Vec<Finding>) {
        for (line_num, line) in doc.numbered_lines() {
            let lower = line.to_lowercase();
            for pattern in PATTERNS {
                if pattern.regex.is_match(&lower) {
                    findings.push(Finding::at_line(
                        pattern.id,
                        NAME,
                        Severity::Warning,
                        format!("Possible anti-pattern: {}", pattern.description),
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
            severity: Severity::Warning,
            check: NAME,
            message: p.description,
            remediation: p.remediation,
        })
        .collect()
}
