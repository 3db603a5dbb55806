//! Arguendo Extractor
//!
//! Converts a free-form argument-analysis completion into a structured,
//! render-ready representation: premises, conclusion, hidden assumptions,
//! logical flaws, quantifiers, and a rewritten version.
//!
//! # Overview
//!
//! The completion text follows a known prompt contract: fourteen labeled
//! fields (`Explicit Premises:`, `Logical Flaw:`, ...), each followed by
//! free text, with numbered sub-items inside list fields. Models violate
//! that contract routinely - labels go missing, lists arrive unsplit,
//! fields get reordered - so every stage here has a deterministic fallback
//! chain and the pipeline never fails outright. The worst outcome is a
//! structure full of documented placeholders.
//!
//! # Architecture
//!
//! ```text
//! Completion text → Label Block Extractor → List Segmenter
//!                 → Premise Re-segmenter (premises only)
//!                 → Structure Normalizer → (ArgumentStructure, BreakdownItems)
//! ```
//!
//! # Example Usage
//!
//! ```
//! use arguendo_extractor::{Analyzer, AnalyzerConfig};
//!
//! # fn example() -> Result<(), arguendo_extractor::ExtractorError> {
//! let analyzer = Analyzer::new(AnalyzerConfig::default())?;
//!
//! let completion = "\
//! Explicit Premises:
//! 1. Crime fell after gun laws.
//! 2. Other countries show the same trend.
//!
//! Logical Flaw: Correlation mistaken for causation";
//!
//! let outcome = analyzer.analyze(completion)?;
//! assert_eq!(outcome.structure.premises.len(), 2);
//! assert_eq!(outcome.key_flaw, "Correlation mistaken for causation");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod analyzer;
mod config;
mod error;
mod extract;
mod label;
mod normalize;
mod segment;

pub use analyzer::{AnalysisOutcome, Analyzer};
pub use config::AnalyzerConfig;
pub use error::ExtractorError;
pub use extract::{extract_fields, ExtractedFields};
pub use label::FieldLabel;
pub use normalize::normalize;
pub use segment::{resplit_long_premise, segment_items};
