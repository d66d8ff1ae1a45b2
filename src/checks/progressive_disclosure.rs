//! Progressive disclosure check.
//!
//! Large files should point at smaller ones instead of inlining everything,
//! either with `@path/to/file.md` imports or with prose cross-references such
//! as "see docs/testing.md".

use crate::checks::{Check, RuleInfo};
use crate::document::Document;
use crate::finding::{Finding, Severity};
use regex::Regex;
use std::sync::LazyLock;

const NAME: &str = "progressive_disclosure";

const MIN_LINES: usize = 300;

static RE_IMPORT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"@[\w/.~-]+\.md").unwrap());

static RE_CROSS_REF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(see|refer to|details in|documented in)\s+[`\[]?[\w/.-]+\.md").unwrap()
});

/// Returns `true` if the line contains an `@file.md` import.
pub fn has_import(line: &str) -> bool {
    RE_IMPORT.is_match(line)
}

/// Returns `true` if the line cross-references another markdown file.
pub fn has_cross_ref(line: &str) -> bool {
    RE_CROSS_REF.is_match(line)
}

pub struct ProgressiveDisclosureCheck;

impl Check for ProgressiveDisclosureCheck {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Large files reference split-out content"
    }

    fn check(&self, doc: &Document, findings: &mut Vec<Finding>) {
        if doc.line_count() <= MIN_LINES {
            return;
        }

        let references = doc
            .lines()
            .iter()
            .any(|line| has_import(line) || has_cross_ref(line));

        if !references {
            findings.push(Finding::document(
                "disclosure/missing-references",
                NAME,
                Severity::Info,
                "Large file without progressive disclosure. Consider using @imports or cross-references to split content"
                    .to_string(),
            ));
        }
    }
}

pub fn rules() -> Vec<RuleInfo> {
    vec![RuleInfo {
        id: "disclosure/missing-references",
        severity: Severity::Info,
        check: NAME,
        message: "File over 300 lines with no @imports or cross-references",
        remediation: "Move detail into separate .md files and link them with @file.md or \"see file.md\"",
    }]
}
