//! Arguendo CLI library.
//!
//! Command-line front end for the Arguendo argument-analysis pipeline:
//! reads a completion text, runs extraction and normalization, and
//! renders the result.

pub mod cli;
pub mod config;
pub mod error;
pub mod output;

pub use cli::{Cli, CliFormat};
pub use config::load_config;
pub use error::{CliError, Result};
pub use output::Formatter;
