//! Configuration for the analyzer

use serde::{Deserialize, Serialize};

/// Configuration for the [`crate::Analyzer`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Maximum completion text length (characters)
    pub max_text_length: usize,

    /// Length above which a lone premise item is suspected of being an
    /// unsegmented paragraph and re-split on embedded markers. This is
    /// tunable policy, not a validated constant.
    pub premise_resplit_threshold: usize,
}

impl AnalyzerConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_text_length == 0 {
            return Err("max_text_length must be greater than 0".to_string());
        }
        if self.premise_resplit_threshold == 0 {
            return Err("premise_resplit_threshold must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Conservative preset: re-split only very long lone premises, so a
    /// legitimately long single premise is less likely to be broken up.
    pub fn conservative() -> Self {
        Self {
            premise_resplit_threshold: 2_000,
            ..Self::default()
        }
    }

    /// Lenient preset: re-split eagerly and accept larger completions.
    pub fn lenient() -> Self {
        Self {
            max_text_length: 100_000,
            premise_resplit_threshold: 300,
        }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            max_text_length: 50_000,
            premise_resplit_threshold: 500,
        }
    }
}
