//! Arguendo Highlight
//!
//! Splits display text into sentences and words and classifies premise-
//! and conclusion-indicator words for presentational emphasis.
//!
//! The input is untrusted (it comes from model output or user text), so
//! the highlighter sanitizes markup-like tags and enforces a length cap
//! before doing any per-word work. Output segments are lossless:
//! concatenating every segment's text reproduces the sanitized, possibly
//! truncated input exactly.
//!
//! # Example Usage
//!
//! ```
//! use arguendo_highlight::{highlight, DEFAULT_MAX_LEN};
//! use arguendo_domain::SegmentRole;
//!
//! let result = highlight("Crime fell, therefore laws worked.", DEFAULT_MAX_LEN);
//! let therefore = result.sentences[0]
//!     .iter()
//!     .find(|seg| seg.text == "therefore")
//!     .unwrap();
//! assert_eq!(therefore.role, SegmentRole::ConclusionIndicator);
//! ```

#![warn(missing_docs)]

mod highlighter;
mod sanitize;

pub use highlighter::{highlight, highlight_bytes, Highlighted, DEFAULT_MAX_LEN, INVALID_INPUT_MARKER};
pub use sanitize::strip_markup;
