mod cli;

use agents_md_lint::error::LintError;
use agents_md_lint::finding::{Severity, ValidationReport};
use agents_md_lint::output::{self, pretty, OutputFormat};
use agents_md_lint::{checks, config, discovery, validate};
use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use colored::Colorize;
use std::path::Path;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Some(Commands::ListRules) => list_rules(),
        Some(Commands::Explain { rule_id }) => explain(&rule_id),
        None => {
            let Some(path) = cli.path else {
                println!("{}", Cli::command().render_usage());
                println!("  <PATH> can be an AGENTS.md file or a directory to search");
                std::process::exit(1);
            };
            let passed = run(&path, cli.format, cli.strict, cli.config.as_deref());
            std::process::exit(if passed { 0 } else { 1 });
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

/// Validates every file under `path`. Returns `true` when all files passed.
///
/// Fatal conditions (missing path, bad config) exit the process directly.
fn run(path: &Path, format: OutputFormat, strict: bool, config_path: Option<&Path>) -> bool {
    let mut config = config::Config::load(config_path).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(2);
    });

    if strict {
        config.strict.enabled = true;
    }

    let files = match discovery::discover(path) {
        Ok(files) => files,
        Err(e @ LintError::PathNotFound(_)) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(2);
        }
    };

    if files.is_empty() {
        println!("No AGENTS.md files found in {}", path.display());
        return true;
    }

    if format.is_streaming() {
        print!("{}", pretty::format_header(files.len()));
    }

    let mut all_passed = true;
    let mut reports: Vec<ValidationReport> = Vec::new();

    for file in &files {
        let report = match validate::validate_file(file, &config) {
            Ok(report) => report,
            Err(e) => {
                tracing::debug!(file = %file.display(), "validation aborted");
                eprintln!("Error: {e}");
                all_passed = false;
                continue;
            }
        };

        tracing::info!(
            file = %file.display(),
            findings = report.findings.len(),
            passed = report.passed,
            "validated"
        );

        if format.is_streaming() {
            print!("{}", pretty::format(&report));
        }

        all_passed &= report.passed;
        reports.push(report);
    }

    match format {
        OutputFormat::Pretty => print!("{}", pretty::format_summary(all_passed)),
        OutputFormat::Json | OutputFormat::Sarif => {
            println!("{}", output::format_run(&reports, &format))
        }
    }

    all_passed
}

fn list_rules() {
    let rules = checks::all_rules();
    let all = checks::all_checks();
    println!("{}", "Built-in Rules".bold().underline());
    println!();

    let mut current_check = "";
    for rule in &rules {
        if rule.check != current_check {
            if !current_check.is_empty() {
                println!();
            }
            let description = all
                .iter()
                .find(|c| c.name() == rule.check)
                .map(|c| c.description())
                .unwrap_or_default();
            println!("  {}  {}", rule.check.bold(), description.dimmed());
            current_check = rule.check;
        }

        println!(
            "    [{severity}] {id:<36} {message}",
            severity = severity_label(rule.severity),
            id = rule.id,
            message = rule.message,
        );
    }

    println!();
    println!("  Total: {} rules", rules.len());
}

fn explain(rule_id: &str) {
    match checks::find_rule(rule_id) {
        Some(rule) => {
            println!("{}", rule.id.bold());
            println!();
            println!("  Check:        {}", rule.check);
            println!("  Severity:     {}", rule.severity);
            println!("  Description:  {}", rule.message);
            println!("  Remediation:  {}", rule.remediation);
        }
        None => {
            eprintln!("Unknown rule: {rule_id}");
            eprintln!("Use 'agents-md-lint list-rules' to see all available rules.");
            std::process::exit(2);
        }
    }
}

fn severity_label(severity: Severity) -> String {
    match severity {
        Severity::Error => "ERROR".red().bold().to_string(),
        Severity::Warning => " WARN".yellow().bold().to_string(),
        Severity::Info => " INFO".blue().to_string(),
    }
}
