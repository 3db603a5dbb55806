//! Breakdown items - normalized findings derived from an argument structure

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of a breakdown finding.
///
/// Kinds appear in the breakdown list in a fixed order (flaws first,
/// implicit premises last) so downstream rendering is deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BreakdownKind {
    /// A logical flaw in the argument.
    Flaw,
    /// An assumption the argument requires to hold.
    NecessaryAssumption,
    /// An assumption that would make the argument valid.
    SufficientAssumption,
    /// A general rule the argument implicitly relies on.
    UnstatedRule,
    /// A premise the argument uses without stating it.
    ImplicitPremise,
}

impl BreakdownKind {
    /// Severity for this kind. The mapping is fixed by kind, not derived
    /// from content.
    pub fn severity(&self) -> Severity {
        match self {
            BreakdownKind::Flaw => Severity::High,
            BreakdownKind::NecessaryAssumption
            | BreakdownKind::SufficientAssumption
            | BreakdownKind::UnstatedRule => Severity::Medium,
            BreakdownKind::ImplicitPremise => Severity::Low,
        }
    }

    /// Display category for this kind.
    pub fn category(&self) -> &'static str {
        match self {
            BreakdownKind::Flaw => "Logical",
            BreakdownKind::NecessaryAssumption | BreakdownKind::SufficientAssumption => {
                "Assumption"
            }
            BreakdownKind::UnstatedRule => "Rule",
            BreakdownKind::ImplicitPremise => "Premise",
        }
    }

    /// Human-readable name.
    pub fn as_str(&self) -> &'static str {
        match self {
            BreakdownKind::Flaw => "Flaw",
            BreakdownKind::NecessaryAssumption => "Necessary Assumption",
            BreakdownKind::SufficientAssumption => "Sufficient Assumption",
            BreakdownKind::UnstatedRule => "Unstated Rule",
            BreakdownKind::ImplicitPremise => "Implicit Premise",
        }
    }
}

impl fmt::Display for BreakdownKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Severity of a breakdown finding.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Severity {
    /// Informational; the argument works without addressing it.
    Low,
    /// The argument leans on it; worth addressing.
    Medium,
    /// The argument fails without addressing it.
    High,
}

impl Severity {
    /// Human-readable name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One normalized, categorized finding derived from an argument structure.
///
/// Items are derived fresh from an [`crate::ArgumentStructure`] each time
/// and never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownItem {
    /// What kind of finding this is.
    pub kind: BreakdownKind,

    /// The finding text.
    pub text: String,

    /// Display category, fixed by kind.
    pub category: String,

    /// Severity, fixed by kind.
    pub severity: Severity,
}

impl BreakdownItem {
    /// Create a breakdown item, deriving category and severity from the
    /// kind.
    pub fn new(kind: BreakdownKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            category: kind.category().to_string(),
            severity: kind.severity(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_mapping_is_fixed() {
        assert_eq!(BreakdownKind::Flaw.severity(), Severity::High);
        assert_eq!(BreakdownKind::NecessaryAssumption.severity(), Severity::Medium);
        assert_eq!(BreakdownKind::SufficientAssumption.severity(), Severity::Medium);
        assert_eq!(BreakdownKind::UnstatedRule.severity(), Severity::Medium);
        assert_eq!(BreakdownKind::ImplicitPremise.severity(), Severity::Low);
    }

    #[test]
    fn test_category_mapping() {
        assert_eq!(BreakdownKind::Flaw.category(), "Logical");
        assert_eq!(BreakdownKind::NecessaryAssumption.category(), "Assumption");
        assert_eq!(BreakdownKind::SufficientAssumption.category(), "Assumption");
        assert_eq!(BreakdownKind::UnstatedRule.category(), "Rule");
        assert_eq!(BreakdownKind::ImplicitPremise.category(), "Premise");
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Low < Severity::Medium);
        assert!(Severity::Medium < Severity::High);
    }

    #[test]
    fn test_new_fills_derived_fields() {
        let item = BreakdownItem::new(BreakdownKind::Flaw, "Ad hominem");
        assert_eq!(item.category, "Logical");
        assert_eq!(item.severity, Severity::High);
        assert_eq!(item.text, "Ad hominem");
    }
}
