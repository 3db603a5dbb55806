//! Error types for the extraction pipeline

use thiserror::Error;

/// Errors that can occur at the analyzer boundary.
///
/// Everything inside the pipeline degrades to placeholders instead of
/// failing; only the outer guards are fallible.
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Completion text exceeds the configured maximum length
    #[error("Completion text too long: {0} chars (max: {1})")]
    TextTooLong(usize, usize),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
