//! Fenced code block balance.

use crate::checks::{is_fence, Check, RuleInfo};
use crate::document::Document;
use crate::finding::{Finding, Severity};

const NAME: &str = "code_blocks";

/// Scanner state while walking lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FenceState {
    Outside,
    Inside { start: usize },
}

impl FenceState {
    fn toggle(self, line_num: usize) -> Self {
        match self {
            FenceState::Outside => FenceState::Inside { start: line_num },
            FenceState::Inside { .. } => FenceState::Outside,
        }
    }
}

pub struct CodeBlockCheck;

impl Check for CodeBlockCheck {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Every ``` fence is closed"
    }

    fn check(&self, doc: &Document, findings: &mut Vec<Finding>) {
        let state = doc
            .numbered_lines()
            .filter(|(_, line)| is_fence(line))
            .fold(FenceState::Outside, |state, (line_num, _)| {
                state.toggle(line_num)
            });

        if let FenceState::Inside { start } = state {
            findings.push(Finding::at_line(
                "code-blocks/unclosed",
                NAME,
                Severity::Error,
                "Unclosed code block".to_string(),
                start,
            ));
        }
    }
}

pub fn rules() -> Vec<RuleInfo> {
    vec![RuleInfo {
        id: "code-blocks/unclosed",
        severity: Severity::Error,
        check: NAME,
        message: "Code fence opened but never closed",
        remediation: "Add the closing ``` line; everything after an open fence renders as code",
    }]
}
