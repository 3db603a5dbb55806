//! Analyzer configuration loading for the CLI.

use crate::error::Result;
use arguendo_extractor::AnalyzerConfig;

/// Parse an analyzer configuration from TOML text.
pub fn parse_config(toml_str: &str) -> Result<AnalyzerConfig> {
    Ok(toml::from_str(toml_str)?)
}

/// Load the analyzer configuration from an optional TOML file path,
/// falling back to the defaults when no path is given.
pub fn load_config(path: Option<&str>) -> Result<AnalyzerConfig> {
    match path {
        Some(path) => parse_config(&std::fs::read_to_string(path)?),
        None => Ok(AnalyzerConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;

    #[test]
    fn test_parse_valid_config() {
        let config =
            parse_config("max_text_length = 10000\npremise_resplit_threshold = 400\n").unwrap();
        assert_eq!(config.max_text_length, 10_000);
        assert_eq!(config.premise_resplit_threshold, 400);
    }

    #[test]
    fn test_parse_invalid_config_is_toml_error() {
        let result = parse_config("max_text_length = \"not a number\"");
        assert!(matches!(result, Err(CliError::Toml(_))));
    }

    #[test]
    fn test_load_without_path_uses_defaults() {
        let config = load_config(None).unwrap();
        assert_eq!(config.max_text_length, AnalyzerConfig::default().max_text_length);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let result = load_config(Some("/nonexistent/arguendo.toml"));
        assert!(matches!(result, Err(CliError::Io(_))));
    }
}
