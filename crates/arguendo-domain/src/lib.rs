//! Arguendo Domain Layer
//!
//! This crate contains the canonical value types shared by the extraction
//! pipeline, the highlighter, and the rendering/persistence boundaries.
//! It carries no business logic beyond the fixed mappings the rest of the
//! system must agree on.
//!
//! ## Key Concepts
//!
//! - **ArgumentStructure**: the always-complete record of an argument's
//!   premises, conclusion, assumptions, and flaws
//! - **BreakdownItem**: one categorized finding (flaw, assumption, rule,
//!   or implicit premise) with a severity fixed by its kind
//! - **HighlightedSegment**: one word or whitespace run of display text,
//!   tagged as plain or as a premise/conclusion indicator
//! - **AnalysisRecord**: the persisted unit handed to storage, combining
//!   the structure, the breakdown, and the derived summary fields
//!
//! ## Architecture
//!
//! All types here are immutable value records: created by one pipeline
//! stage, owned thereafter by the next, never shared-mutable. Defaults and
//! placeholder text live here so that no consumer ever needs to
//! null-coalesce.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod breakdown;
pub mod highlight;
pub mod structure;

// Re-exports for convenience
pub use analysis::{AnalysisId, AnalysisRecord};
pub use breakdown::{BreakdownItem, BreakdownKind, Severity};
pub use highlight::{HighlightedSegment, SegmentRole};
pub use structure::ArgumentStructure;
