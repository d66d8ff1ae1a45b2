use agents_md_lint::checks::anti_patterns::AntiPatternCheck;
use agents_md_lint::checks::Check;
use agents_md_lint::document::Document;
use agents_md_lint::finding::{Finding, Severity};

fn scan(text: &str) -> Vec<Finding> {
    let doc = Document::from_text("AGENTS.md", text);
    let mut findings = Vec::new();
    AntiPatternCheck.check(&doc, &mut findings);
    findings
}

fn rule_ids(findings: &[Finding]) -> Vec<&str> {
    findings.iter().map(|f| f.rule_id.as_str()).collect()
}

#[test]
fn clean_text_has_no_findings() {
    let findings = scan("# Build\n\nRun `cargo test` before pushing.\nUse snake_case for modules.");
    assert!(findings.is_empty(), "got: {findings:?}");
}

#[test]
fn detects_generic_advice() {
    let findings = scan("Always write clean code.");
    assert_eq!(rule_ids(&findings), ["anti-pattern/generic-advice"]);
    assert_eq!(findings[0].severity, Severity::Warning);
    assert_eq!(findings[0].line, Some(1));
    assert_eq!(
        findings[0].message,
        "Possible anti-pattern: Generic advice opencode already knows"
    );
}

#[test]
fn matching_is_case_insensitive() {
    let findings = scan("Follow BEST PRACTICES everywhere");
    assert_eq!(rule_ids(&findings), ["anti-pattern/generic-advice"]);
}

#[test]
fn detects_historical_background() {
    let findings = scan("This is a tool that was created by the platform team.");
    assert!(rule_ids(&findings).contains(&"anti-pattern/historical-background"));
}

#[test]
fn detects_introduction_heading() {
    let findings = scan("## Introduction\nText");
    assert_eq!(rule_ids(&findings), ["anti-pattern/introduction-section"]);
    assert_eq!(findings[0].line, Some(1));
}

#[test]
fn detects_tutorial_language() {
    for line in ["Step 1: install deps", "First, clone the repo", "Let's get started"] {
        let findings = scan(line);
        assert_eq!(
            rule_ids(&findings),
            ["anti-pattern/tutorial-language"],
            "line: {line}"
        );
    }
}

#[test]
fn ordinal_without_comma_is_not_tutorial_language() {
    assert!(scan("The first argument is the path").is_empty());
}

#[test]
fn detects_exhaustive_lists() {
    let findings = scan("- Workspace 1: browser\n- Workspace 2: terminal");
    assert_eq!(findings.len(), 2);
    assert_eq!(findings[0].line, Some(1));
    assert_eq!(findings[1].line, Some(2));
    assert!(findings
        .iter()
        .all(|f| f.rule_id == "anti-pattern/exhaustive-list"));
}

#[test]
fn one_line_with_two_patterns_yields_two_findings() {
    let findings = scan("Step 1: follow best practices");
    assert_eq!(
        rule_ids(&findings),
        ["anti-pattern/generic-advice", "anti-pattern/tutorial-language"]
    );
    assert!(findings.iter().all(|f| f.line == Some(1)));
}

#[test]
fn lines_inside_code_fences_are_still_scanned() {
    let findings = scan("```\n# best practices\n```");
    assert_eq!(rule_ids(&findings), ["anti-pattern/generic-advice"]);
    assert_eq!(findings[0].line, Some(2));
}
