//! The canonical argument-structure record

use serde::{Deserialize, Serialize};

/// Placeholder premise emitted when no explicit premises could be found.
pub const NO_PREMISES_PLACEHOLDER: &str = "No explicit premises detected.";

/// Placeholder conclusion emitted when no conclusion label was found.
pub const NO_CONCLUSION_PLACEHOLDER: &str = "No clear conclusion identified";

/// Placeholder shown in summary displays when no flaw was extracted.
pub const NO_FLAWS_PLACEHOLDER: &str = "No significant logical flaws detected";

/// The canonical, always-complete record of an analyzed argument.
///
/// Every string field is trimmed; list fields never contain empty or
/// whitespace-only entries. `premises` is never empty: the normalizer
/// substitutes [`NO_PREMISES_PLACEHOLDER`] when extraction yields nothing.
/// Consumers can rely on every field being present and never need to
/// supply their own fallbacks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArgumentStructure {
    /// Explicit premises in argument order. Never empty.
    pub premises: Vec<String>,

    /// The conclusion text, or [`NO_CONCLUSION_PLACEHOLDER`].
    pub conclusion_text: String,

    /// Classification of the conclusion (e.g. "causal claim").
    pub conclusion_type: String,

    /// Hidden assumptions the argument depends on. May be empty.
    pub unstated_assumptions: Vec<String>,

    /// Identified logical flaws. The current label contract yields at
    /// most one, but the field is a list for extensibility.
    pub logical_flaws: Vec<String>,

    /// Quantifier usage notes ("all", "some", "most", ...).
    pub quantifiers: String,

    /// The argument restated as an if-then conditional.
    pub if_then_structure: String,

    /// An assumption the argument requires to hold.
    pub necessary_assumption: String,

    /// An assumption that, if true, would make the argument valid.
    pub sufficient_assumption: String,

    /// A general rule the argument implicitly relies on.
    pub unstated_rule: String,

    /// Description of the argument's method of reasoning.
    pub method_of_reasoning: String,

    /// A counter argument to the original.
    pub counter_argument: String,

    /// The rewritten, improved version of the argument.
    pub improved_version: String,
}

impl ArgumentStructure {
    /// The first logical flaw, or [`NO_FLAWS_PLACEHOLDER`] if none was
    /// extracted. This is the `key_flaw` summary field consumed by stat
    /// displays.
    pub fn key_flaw(&self) -> &str {
        self.logical_flaws
            .first()
            .map(String::as_str)
            .unwrap_or(NO_FLAWS_PLACEHOLDER)
    }

    /// Whether the premises list holds only the placeholder entry.
    pub fn premises_are_placeholder(&self) -> bool {
        self.premises.len() == 1 && self.premises[0] == NO_PREMISES_PLACEHOLDER
    }
}

impl Default for ArgumentStructure {
    /// The all-placeholder structure: what a completely unparseable
    /// completion normalizes to.
    fn default() -> Self {
        Self {
            premises: vec![NO_PREMISES_PLACEHOLDER.to_string()],
            conclusion_text: NO_CONCLUSION_PLACEHOLDER.to_string(),
            conclusion_type: String::new(),
            unstated_assumptions: Vec::new(),
            logical_flaws: Vec::new(),
            quantifiers: String::new(),
            if_then_structure: String::new(),
            necessary_assumption: String::new(),
            sufficient_assumption: String::new(),
            unstated_rule: String::new(),
            method_of_reasoning: String::new(),
            counter_argument: String::new(),
            improved_version: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_complete() {
        let s = ArgumentStructure::default();
        assert!(!s.premises.is_empty());
        assert!(!s.conclusion_text.is_empty());
        assert!(s.premises_are_placeholder());
    }

    #[test]
    fn test_key_flaw_placeholder() {
        let s = ArgumentStructure::default();
        assert_eq!(s.key_flaw(), NO_FLAWS_PLACEHOLDER);
    }

    #[test]
    fn test_key_flaw_first_entry() {
        let s = ArgumentStructure {
            logical_flaws: vec![
                "Correlation mistaken for causation".to_string(),
                "Hasty generalization".to_string(),
            ],
            ..Default::default()
        };
        assert_eq!(s.key_flaw(), "Correlation mistaken for causation");
    }
}
