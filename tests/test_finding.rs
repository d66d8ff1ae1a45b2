use std::path::PathBuf;

use agents_md_lint::config::Config;
use agents_md_lint::document::Document;
use agents_md_lint::finding::{Finding, Severity, ValidationReport};
use agents_md_lint::validate::validate_document;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn finding(severity: Severity) -> Finding {
    Finding::document("test/rule", "test", severity, "message".to_string())
}

fn report(findings: Vec<Finding>, strict: bool) -> ValidationReport {
    ValidationReport::from_findings(PathBuf::from("AGENTS.md"), 10, findings, strict)
}

// --- Pass / fail ---

#[test]
fn empty_report_passes() {
    assert!(report(vec![], false).passed);
}

#[test]
fn warnings_and_info_pass() {
    let r = report(
        vec![finding(Severity::Warning), finding(Severity::Info)],
        false,
    );
    assert!(r.passed);
}

#[test]
fn any_error_fails() {
    let r = report(
        vec![finding(Severity::Info), finding(Severity::Error)],
        false,
    );
    assert!(!r.passed);
}

#[test]
fn strict_mode_fails_on_warning() {
    assert!(!report(vec![finding(Severity::Warning)], true).passed);
    assert!(report(vec![finding(Severity::Info)], true).passed);
}

#[test]
fn counts_by_severity() {
    let r = report(
        vec![
            finding(Severity::Error),
            finding(Severity::Info),
            finding(Severity::Warning),
            finding(Severity::Info),
        ],
        false,
    );
    assert_eq!(r.count_by_severity(), (1, 1, 2));
    assert_eq!(r.error_count(), 1);
    assert_eq!(r.warning_count(), 1);
    assert_eq!(r.info_count(), 2);
}

#[test]
fn severity_ranks_error_first() {
    assert!(Severity::Error < Severity::Warning);
    assert!(Severity::Warning < Severity::Info);
    assert_eq!(Severity::Warning.to_string(), "warning");
}

#[test]
fn at_line_sets_line_number() {
    let f = Finding::at_line("a/b", "a", Severity::Info, "m".to_string(), 7);
    assert_eq!(f.line, Some(7));
    assert_eq!(f.rule_id, "a/b");
}

// --- Full validation ---

fn end_to_end_document() -> Document {
    let mut lines = vec!["plain line"; 1200];
    lines[10] = "Update the cache as needed";
    lines[500] = "Rotate logs as needed";
    lines[1100] = "Ping the on-call as needed";
    Document::from_text("AGENTS.md", lines.join("\n"))
}

#[test]
fn end_to_end_1200_line_document() {
    let doc = end_to_end_document();
    assert_eq!(doc.line_count(), 1200);

    let r = validate_document(&doc, &Config::default());
    let summary: Vec<(&str, Severity, Option<usize>)> = r
        .findings
        .iter()
        .map(|f| (f.rule_id.as_str(), f.severity, f.line))
        .collect();

    assert_eq!(
        summary,
        [
            ("length/critical", Severity::Error, None),
            ("tokens/critical", Severity::Error, None),
            ("vague/non-committal", Severity::Info, Some(11)),
            ("vague/non-committal", Severity::Info, Some(501)),
            ("vague/non-committal", Severity::Info, Some(1101)),
            ("structure/few-headings", Severity::Warning, None),
            ("disclosure/missing-references", Severity::Info, None),
        ]
    );
    assert!(r.findings[1].message.contains("4800"));
    assert_eq!(r.count_by_severity(), (2, 1, 4));
    assert!(!r.passed);
}

#[test]
fn validation_is_deterministic() {
    let doc = end_to_end_document();
    let config = Config::default();
    let first = validate_document(&doc, &config);
    let second = validate_document(&doc, &config);
    assert_eq!(first.findings, second.findings);
}

#[test]
fn disabled_checks_do_not_run() {
    let mut config = Config::default();
    config.checks.length = false;
    config.checks.tokens = false;

    let r = validate_document(&end_to_end_document(), &config);
    assert_eq!(r.error_count(), 0);
    assert!(r.passed);
}
