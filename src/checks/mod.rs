//! Style checks for `AGENTS.md` files.
//!
//! Every check implements the [`Check`] trait and appends its findings to a
//! shared list. The checks are independent of each other; [`all_checks`]
//! returns them in the fixed order the validator runs them:
//!
//! | Check | Module | Looks at |
//! |-------|--------|----------|
//! | `length` | [`length`] | total line count |
//! | `tokens` | [`tokens`] | estimated token budget (lines × 4) |
//! | `anti_patterns` | [`anti_patterns`] | token-wasting phrases, every line |
//! | `vague_language` | [`vague_language`] | hedge words, non-code lines |
//! | `structure` | [`structure`] | heading hierarchy and density |
//! | `code_blocks` | [`code_blocks`] | balanced ```` ``` ```` fences |
//! | `progressive_disclosure` | [`progressive_disclosure`] | `@imports` / cross-references |
//!
//! All thresholds are constants. They can be switched off per check in the
//! config file, never tuned.

pub mod anti_patterns;
pub mod code_blocks;
pub mod length;
pub mod progressive_disclosure;
pub mod structure;
pub mod tokens;
pub mod vague_language;

use crate::document::Document;
use crate::finding::{Finding, Severity};

/// A single validation pass over a [`Document`].
///
/// Implementations must be deterministic: the same document always yields the
/// same findings in the same order.
pub trait Check {
    /// Stable identifier, also used as the config key (e.g. `"length"`).
    fn name(&self) -> &'static str;

    /// Short, human-readable description.
    fn description(&self) -> &'static str;

    /// Inspects `doc` and appends zero or more findings.
    fn check(&self, doc: &Document, findings: &mut Vec<Finding>);
}

/// Returns every check in execution order.
pub fn all_checks() -> Vec<Box<dyn Check>> {
    vec![
        Box::new(length::LengthCheck),
        Box::new(tokens::TokenCheck),
        Box::new(anti_patterns::AntiPatternCheck),
        Box::new(vague_language::VagueLanguageCheck),
        Box::new(structure::StructureCheck),
        Box::new(code_blocks::CodeBlockCheck),
        Box::new(progressive_disclosure::ProgressiveDisclosureCheck),
    ]
}

/// Returns `true` if the trimmed line opens or closes a fenced code block.
pub fn is_fence(line: &str) -> bool {
    line.trim().starts_with("```")
}

/// Metadata for a single rule.
///
/// Used by the `list-rules` and `explain` commands. Each check module exposes
/// a `rules()` function returning its entries.
pub struct RuleInfo {
    /// Unique rule identifier (e.g. `"length/too-long"`).
    pub id: &'static str,
    pub severity: Severity,
    /// Check that emits this rule.
    pub check: &'static str,
    pub message: &'static str,
    pub remediation: &'static str,
}

/// Aggregates [`RuleInfo`] from every check module, in check order.
pub fn all_rules() -> Vec<RuleInfo> {
    let mut rules = Vec::new();
    rules.extend(length::rules());
    rules.extend(tokens::rules());
    rules.extend(anti_patterns::rules());
    rules.extend(vague_language::rules());
    rules.extend(structure::rules());
    rules.extend(code_blocks::rules());
    rules.extend(progressive_disclosure::rules());
    rules
}

/// Looks up a rule by id.
pub fn find_rule(id: &str) -> Option<RuleInfo> {
    all_rules().into_iter().find(|r| r.id == id)
}
