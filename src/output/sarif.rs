//! [SARIF 2.1.0](https://sarifweb.azurewebsites.net/) output formatter.
//!
//! The whole run becomes a single SARIF run. Rules referenced by at least one
//! finding are listed in the tool driver, sorted by id; every finding becomes
//! a result pointing at its file and, when line-scoped, its line.

use crate::checks;
use crate::finding::{Finding, Severity, ValidationReport};
use serde_sarif::sarif::{
    ArtifactLocation, Location, Message, MultiformatMessageString, PhysicalLocation, Region,
    ReportingDescriptor, Result as SarifResult, ResultLevel, Run, Sarif, Tool, ToolComponent,
};
use std::collections::{BTreeSet, HashMap};
use std::path::Path;

pub fn format(reports: &[ValidationReport]) -> String {
    let all_findings: Vec<(&Path, &Finding)> = reports
        .iter()
        .flat_map(|r| r.findings.iter().map(move |f| (r.file.as_path(), f)))
        .collect();

    let rule_ids: BTreeSet<&str> = all_findings
        .iter()
        .map(|(_, f)| f.rule_id.as_str())
        .collect();

    let rule_index: HashMap<&str, i64> = rule_ids
        .iter()
        .enumerate()
        .map(|(i, id)| (*id, i as i64))
        .collect();

    let rules: Vec<ReportingDescriptor> = rule_ids
        .iter()
        .map(|id| {
            let mut rule = ReportingDescriptor::builder().id(id.to_string()).build();
            if let Some(info) = checks::find_rule(id) {
                rule.short_description = Some(
                    MultiformatMessageString::builder()
                        .text(info.message.to_string())
                        .build(),
                );
                rule.help = Some(
                    MultiformatMessageString::builder()
                        .text(info.remediation.to_string())
                        .build(),
                );
            }
            rule
        })
        .collect();

    let results: Vec<SarifResult> = all_findings
        .iter()
        .map(|(file, f)| {
            let level = match f.severity {
                Severity::Error => ResultLevel::Error,
                Severity::Warning => ResultLevel::Warning,
                Severity::Info => ResultLevel::Note,
            };

            let mut result = SarifResult::builder()
                .message(Message::builder().text(f.message.clone()).build())
                .build();

            result.rule_id = Some(f.rule_id.clone());
            result.level = Some(level);
            result.rule_index = rule_index.get(f.rule_id.as_str()).copied();

            let uri = file.to_string_lossy().replace('\\', "/");
            let mut location = Location::builder().build();
            let mut physical = PhysicalLocation::builder().build();

            physical.artifact_location = Some(ArtifactLocation::builder().uri(uri).build());

            if let Some(line) = f.line {
                physical.region = Some(Region::builder().start_line(line as i64).build());
            }

            location.physical_location = Some(physical);
            result.locations = Some(vec![location]);

            result
        })
        .collect();

    let driver = ToolComponent::builder()
        .name("agents-md-lint")
        .version(env!("CARGO_PKG_VERSION").to_string())
        .rules(rules)
        .build();

    let tool = Tool::builder().driver(driver).build();

    let run = Run::builder().tool(tool).results(results).build();

    let sarif = Sarif::builder().version("2.1.0").runs(vec![run]).build();

    serde_json::to_string_pretty(&sarif).expect("SARIF serialization failed")
}
