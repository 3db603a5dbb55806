//! Output formatting for the CLI.

use crate::cli::CliFormat;
use crate::error::Result;
use arguendo_domain::{AnalysisRecord, SegmentRole, Severity};
use arguendo_highlight::{highlight, DEFAULT_MAX_LEN};
use colored::*;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: CliFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: CliFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format an analysis record.
    pub fn format_record(&self, record: &AnalysisRecord) -> Result<String> {
        match self.format {
            CliFormat::Json => Ok(serde_json::to_string_pretty(record)?),
            CliFormat::Table => Ok(self.format_record_table(record)),
            CliFormat::Quiet => Ok(self.format_record_quiet(record)),
        }
    }

    /// One-line summary: id, key flaw, assumption count.
    fn format_record_quiet(&self, record: &AnalysisRecord) -> String {
        format!(
            "{}\t{}\t{} assumptions",
            record.id, record.key_flaw, record.assumptions_count
        )
    }

    /// Full colored summary with the breakdown table.
    fn format_record_table(&self, record: &AnalysisRecord) -> String {
        let mut out = String::new();

        if !record.original_argument.is_empty() {
            out.push_str(&self.colorize("Argument:", "bold"));
            out.push(' ');
            out.push_str(&self.emphasize_indicators(&record.original_argument));
            out.push_str("\n\n");
        }

        out.push_str(&self.colorize("Conclusion:", "bold"));
        out.push(' ');
        out.push_str(&record.structure.conclusion_text);
        if !record.structure.conclusion_type.is_empty() {
            out.push_str(&format!(
                " ({})",
                self.colorize(&record.structure.conclusion_type, "cyan")
            ));
        }
        out.push('\n');

        out.push_str(&self.colorize("Key flaw:", "bold"));
        out.push(' ');
        out.push_str(&self.colorize(&record.key_flaw, "red"));
        out.push('\n');

        out.push_str(&format!(
            "{} {}\n\n",
            self.colorize("Assumptions:", "bold"),
            record.assumptions_count
        ));

        out.push_str(&self.colorize("Premises:", "bold"));
        out.push('\n');
        for (idx, premise) in record.structure.premises.iter().enumerate() {
            out.push_str(&format!(
                "  {}. {}\n",
                idx + 1,
                self.emphasize_indicators(premise)
            ));
        }

        if !record.breakdown.is_empty() {
            out.push('\n');
            out.push_str(&self.breakdown_table(record));
            out.push('\n');
        }

        if !record.improved_argument.is_empty() {
            out.push('\n');
            out.push_str(&self.colorize("Improved version:", "bold"));
            out.push(' ');
            out.push_str(&self.emphasize_indicators(&record.improved_argument));
            out.push('\n');
        }

        out
    }

    /// Render the breakdown findings as a table.
    fn breakdown_table(&self, record: &AnalysisRecord) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Kind", "Category", "Severity", "Finding"]);

        for item in &record.breakdown {
            let severity = match item.severity {
                Severity::High => self.colorize(item.severity.as_str(), "red"),
                Severity::Medium => self.colorize(item.severity.as_str(), "yellow"),
                Severity::Low => item.severity.as_str().to_string(),
            };
            builder.push_record([
                item.kind.as_str().to_string(),
                item.category.clone(),
                severity,
                item.text.clone(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Re-render display text with premise and conclusion indicator
    /// words emphasized.
    fn emphasize_indicators(&self, text: &str) -> String {
        let highlighted = highlight(text, DEFAULT_MAX_LEN);
        let mut out = String::with_capacity(text.len());

        for sentence in &highlighted.sentences {
            for segment in sentence {
                match segment.role {
                    SegmentRole::Plain => out.push_str(&segment.text),
                    SegmentRole::PremiseIndicator => {
                        out.push_str(&self.colorize(&segment.text, "cyan"))
                    }
                    SegmentRole::ConclusionIndicator => {
                        out.push_str(&self.colorize(&segment.text, "yellow"))
                    }
                }
            }
        }
        if highlighted.truncated {
            out.push_str(" [truncated]");
        }
        out
    }

    /// Apply a color or style if colors are enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }
        match color {
            "bold" => text.bold().to_string(),
            "red" => text.red().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}
