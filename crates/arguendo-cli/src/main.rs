//! Arguendo CLI - command-line front end for the argument-analysis pipeline.

use arguendo_cli::{load_config, Cli, Formatter};
use arguendo_extractor::Analyzer;
use clap::Parser;
use std::io::Read;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> arguendo_cli::Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;

    let raw_text = match &cli.input {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let analyzer = Analyzer::new(config)?;
    let record = analyzer.analyze_to_record(&raw_text, cli.argument.as_deref())?;

    let formatter = Formatter::new(cli.format, !cli.no_color);
    println!("{}", formatter.format_record(&record)?);

    Ok(())
}
