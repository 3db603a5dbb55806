//! CLI command definitions and argument parsing.

use clap::Parser;

/// Arguendo CLI - Turn an argument-analysis completion into structured output.
#[derive(Debug, Parser)]
#[command(name = "arguendo")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Completion text file to analyze; reads stdin when omitted
    pub input: Option<String>,

    /// The original argument submitted to the model, if the completion
    /// does not echo it back
    #[arg(short, long)]
    pub argument: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = CliFormat::Table)]
    pub format: CliFormat,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Analyzer configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Colored summary with breakdown table (default)
    Table,
    /// The full analysis record as JSON
    Json,
    /// One-line summary only
    Quiet,
}
