use agents_md_lint::output::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "agents-md-lint",
    version,
    about = "Validate AGENTS.md files against style best practices",
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// AGENTS.md file, or a directory to search recursively
    pub path: Option<PathBuf>,

    /// Output format
    #[arg(long, short, default_value = "pretty", value_enum)]
    pub format: OutputFormat,

    /// Treat warnings as errors
    #[arg(long)]
    pub strict: bool,

    /// Config file path
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Increase diagnostic output on stderr (-v, -vv, -vvv)
    #[arg(long, short, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all built-in rules
    ListRules,

    /// Show full explanation for a rule
    Explain {
        /// Rule ID (e.g., "code-blocks/unclosed")
        rule_id: String,
    },
}
