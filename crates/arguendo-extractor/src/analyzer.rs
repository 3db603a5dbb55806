//! Core Analyzer implementation

use crate::config::AnalyzerConfig;
use crate::error::ExtractorError;
use crate::extract::extract_fields;
use crate::normalize::normalize;
use arguendo_domain::{AnalysisId, AnalysisRecord, ArgumentStructure, BreakdownItem, BreakdownKind};
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tracing::{debug, info};

/// The Analyzer converts one raw completion into a structured argument
/// analysis.
///
/// It holds no state across calls; concurrent analyses are independent.
pub struct Analyzer {
    config: AnalyzerConfig,
}

/// Everything derived from one completion: the canonical structure, the
/// breakdown findings, and the summary fields consumed by stat displays.
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    /// The canonical, always-complete argument structure.
    pub structure: ArgumentStructure,

    /// The flat, classified breakdown findings, in fixed order.
    pub breakdown: Vec<BreakdownItem>,

    /// First logical flaw, or the fixed no-flaws placeholder.
    pub key_flaw: String,

    /// Count of unstated assumptions plus implicit premises.
    pub assumptions_count: usize,

    /// The `Argument:` block the model echoed back, if any.
    pub echoed_argument: Option<String>,
}

impl Analyzer {
    /// Create a new Analyzer with a validated configuration.
    pub fn new(config: AnalyzerConfig) -> Result<Self, ExtractorError> {
        config.validate().map_err(ExtractorError::Config)?;
        Ok(Self { config })
    }

    /// Analyze a raw completion.
    ///
    /// The only failure is input exceeding the configured maximum length.
    /// Everything past that guard degrades to placeholders: the worst
    /// outcome for malformed text is a structure full of defaults.
    pub fn analyze(&self, raw_text: &str) -> Result<AnalysisOutcome, ExtractorError> {
        if raw_text.len() > self.config.max_text_length {
            return Err(ExtractorError::TextTooLong(
                raw_text.len(),
                self.config.max_text_length,
            ));
        }

        info!(text_length = raw_text.len(), "starting analysis");

        let fields = extract_fields(raw_text);
        debug!(labels_found = fields.len(), "extracted field blocks");

        let echoed_argument = fields.argument_block().map(str::to_string);
        let (structure, breakdown) = normalize(&fields, &self.config);

        let key_flaw = structure.key_flaw().to_string();
        let assumptions_count = structure.unstated_assumptions.len()
            + breakdown
                .iter()
                .filter(|item| item.kind == BreakdownKind::ImplicitPremise)
                .count();

        info!(
            premises = structure.premises.len(),
            breakdown_items = breakdown.len(),
            assumptions_count,
            "analysis complete"
        );

        Ok(AnalysisOutcome {
            structure,
            breakdown,
            key_flaw,
            assumptions_count,
            echoed_argument,
        })
    }

    /// Analyze a raw completion and assemble the persisted record.
    ///
    /// `original_argument` is the argument text the caller submitted to
    /// the model; when absent, the record falls back to the `Argument:`
    /// block echoed in the completion.
    pub fn analyze_to_record(
        &self,
        raw_text: &str,
        original_argument: Option<&str>,
    ) -> Result<AnalysisRecord, ExtractorError> {
        let outcome = self.analyze(raw_text)?;

        let original_argument = original_argument
            .map(str::to_string)
            .or(outcome.echoed_argument)
            .unwrap_or_default();

        let created_at = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or(Duration::ZERO)
            .as_secs();

        Ok(AnalysisRecord {
            id: AnalysisId::new(),
            created_at,
            original_argument,
            improved_argument: outcome.structure.improved_version.clone(),
            structure: outcome.structure,
            breakdown: outcome.breakdown,
            key_flaw: outcome.key_flaw,
            assumptions_count: outcome.assumptions_count,
        })
    }
}
