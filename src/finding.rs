use std::fmt;
use std::path::PathBuf;

/// How serious a finding is. Variants are ordered from most to least severe,
/// so `Severity::Error < Severity::Warning` under `Ord`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One reported issue.
///
/// `line` is 1-based; `None` marks a document-scoped finding (file length,
/// token budget, missing structure) that has no single line to point at.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Finding {
    pub rule_id: String,
    pub check: String,
    pub severity: Severity,
    pub message: String,
    pub line: Option<usize>,
}

impl Finding {
    /// A finding that applies to the whole document.
    pub fn document(rule_id: &str, check: &str, severity: Severity, message: String) -> Self {
        Finding {
            rule_id: rule_id.to_string(),
            check: check.to_string(),
            severity,
            message,
            line: None,
        }
    }

    /// A finding anchored to a 1-based line number.
    pub fn at_line(
        rule_id: &str,
        check: &str,
        severity: Severity,
        message: String,
        line: usize,
    ) -> Self {
        Finding {
            line: Some(line),
            ..Finding::document(rule_id, check, severity, message)
        }
    }
}

/// The outcome of validating a single file.
///
/// `findings` holds every finding in the order the checks produced them;
/// renderers may truncate what they display but the report never does.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ValidationReport {
    pub file: PathBuf,
    pub line_count: usize,
    pub findings: Vec<Finding>,
    pub passed: bool,
}

impl ValidationReport {
    pub fn from_findings(
        file: PathBuf,
        line_count: usize,
        findings: Vec<Finding>,
        strict: bool,
    ) -> Self {
        let passed = compute_passed(&findings, strict);
        ValidationReport {
            file,
            line_count,
            findings,
            passed,
        }
    }

    /// Findings of one severity, in insertion order.
    pub fn with_severity(&self, severity: Severity) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(move |f| f.severity == severity)
    }

    pub fn error_count(&self) -> usize {
        self.with_severity(Severity::Error).count()
    }

    pub fn warning_count(&self) -> usize {
        self.with_severity(Severity::Warning).count()
    }

    pub fn info_count(&self) -> usize {
        self.with_severity(Severity::Info).count()
    }

    /// Count errors, warnings, and info findings in a single pass.
    ///
    /// Returns `(errors, warnings, info)`.
    pub fn count_by_severity(&self) -> (usize, usize, usize) {
        self.findings
            .iter()
            .fold((0, 0, 0), |(e, w, i), f| match f.severity {
                Severity::Error => (e + 1, w, i),
                Severity::Warning => (e, w + 1, i),
                Severity::Info => (e, w, i + 1),
            })
    }
}

fn compute_passed(findings: &[Finding], strict: bool) -> bool {
    !findings.iter().any(|f| match f.severity {
        Severity::Error => true,
        Severity::Warning => strict,
        Severity::Info => false,
    })
}
