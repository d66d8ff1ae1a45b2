//! Heading structure check.
//!
//! Two rules:
//!
//! - `structure/heading-skip` (Info): a heading lands on H4 or deeper while
//!   skipping at least one level. Skips that land on H1-H3 are tolerated.
//! - `structure/few-headings` (Warning): a long document with fewer than
//!   three headings.
//!
//! Headings are matched line by line, including lines inside code fences.

use crate::checks::{Check, RuleInfo};
use crate::document::Document;
use crate::finding::{Finding, Severity};
use regex::Regex;
use std::sync::LazyLock;

const NAME: &str = "structure";

/// Deepest level a skip may land on without being reported.
const MAX_TOLERATED_SKIP_LEVEL: usize = 3;
const MIN_HEADINGS: usize = 3;
const MIN_LINES_FOR_HEADINGS: usize = 100;

static RE_HEADING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(#{1,6})\s+(.+)$").unwrap());

/// A markdown ATX heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    pub level: usize,
    pub text: String,
    pub line: usize,
}

/// Collects every heading in document order.
pub fn headings(doc: &Document) -> Vec<Heading> {
    doc.numbered_lines()
        .filter_map(|(line_num, line)| {
            let caps = RE_HEADING.captures(line)?;
            Some(Heading {
                level: caps[1].len(),
                text: caps[2].to_string(),
                line: line_num,
            })
        })
        .collect()
}

pub struct StructureCheck;

impl Check for StructureCheck {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Heading hierarchy skips and heading density"
    }

    fn check(&self, doc: &Document, findings: &mut Vec<Finding>) {
        let headings = headings(doc);

        let mut prev_level = 0;
        for heading in &headings {
            if heading.level > prev_level + 1 && heading.level > MAX_TOLERATED_SKIP_LEVEL {
                findings.push(Finding::at_line(
                    "structure/heading-skip",
                    NAME,
                    Severity::Info,
                    format!(
                        "Heading hierarchy skip: jumped from H{prev_level} to H{}",
                        heading.level
                    ),
                    heading.line,
                ));
            }
            prev_level = heading.level;
        }

        if headings.len() < MIN_HEADINGS && doc.line_count() > MIN_LINES_FOR_HEADINGS {
            findings.push(Finding::document(
                "structure/few-headings",
                NAME,
                Severity::Warning,
                "Few headings for file length. Consider adding more structure for scannability."
                    .to_string(),
            ));
        }
    }
}

pub fn rules() -> Vec<RuleInfo> {
    vec![
        RuleInfo {
            id: "structure/heading-skip",
            severity: Severity::Info,
            check: NAME,
            message: "Heading jumps to H4 or deeper, skipping a level",
            remediation: "Insert the missing intermediate heading level or promote the heading",
        },
        RuleInfo {
            id: "structure/few-headings",
            severity: Severity::Warning,
            check: NAME,
            message: "Fewer than 3 headings in a file longer than 100 lines",
            remediation: "Break the content into headed sections so agents can scan it",
        },
    ]
}
