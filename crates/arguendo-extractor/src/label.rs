//! The fixed field-label vocabulary of the analysis prompt

/// The label that echoes the original argument back in a completion.
/// Not part of the field vocabulary; used only as a premises fallback.
pub(crate) const ARGUMENT_LABEL: &str = "Argument";

/// A field label from the analysis prompt's closed vocabulary.
///
/// Variant declaration order matches the order the labels appear in the
/// governing prompt. Each variant carries its prompt text and whether its
/// value is a list of items; adding a label is a data change here, not
/// new control flow in the extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldLabel {
    /// `If-Then Structure:` - the argument restated as a conditional
    IfThenStructure,
    /// `Necessary Assumption:`
    NecessaryAssumption,
    /// `Sufficient Assumption:`
    SufficientAssumption,
    /// `Conclusion:` - the conclusion text
    Conclusion,
    /// `Conclusion Type:` - classification of the conclusion
    ConclusionType,
    /// `Implied Rule:` - a rule the argument relies on without stating
    ImpliedRule,
    /// `Method of Reasoning:`
    MethodOfReasoning,
    /// `Logical Flaw:`
    LogicalFlaw,
    /// `Quantifiers:` - quantifier usage notes
    Quantifiers,
    /// `Explicit Premises:` - multi-item
    ExplicitPremises,
    /// `Unspoken Reasons:` - implicit premises, multi-item
    UnspokenReasons,
    /// `Hidden Assumptions:` - multi-item
    HiddenAssumptions,
    /// `Counter Argument:`
    CounterArgument,
    /// `Improved Version:` - the rewritten argument
    ImprovedVersion,
}

impl FieldLabel {
    /// All labels, in prompt order.
    pub const ALL: [FieldLabel; 14] = [
        FieldLabel::IfThenStructure,
        FieldLabel::NecessaryAssumption,
        FieldLabel::SufficientAssumption,
        FieldLabel::Conclusion,
        FieldLabel::ConclusionType,
        FieldLabel::ImpliedRule,
        FieldLabel::MethodOfReasoning,
        FieldLabel::LogicalFlaw,
        FieldLabel::Quantifiers,
        FieldLabel::ExplicitPremises,
        FieldLabel::UnspokenReasons,
        FieldLabel::HiddenAssumptions,
        FieldLabel::CounterArgument,
        FieldLabel::ImprovedVersion,
    ];

    /// The exact label text as it appears in the prompt, without the
    /// trailing colon. Matching is case-sensitive.
    pub fn prompt_text(&self) -> &'static str {
        match self {
            FieldLabel::IfThenStructure => "If-Then Structure",
            FieldLabel::NecessaryAssumption => "Necessary Assumption",
            FieldLabel::SufficientAssumption => "Sufficient Assumption",
            FieldLabel::Conclusion => "Conclusion",
            FieldLabel::ConclusionType => "Conclusion Type",
            FieldLabel::ImpliedRule => "Implied Rule",
            FieldLabel::MethodOfReasoning => "Method of Reasoning",
            FieldLabel::LogicalFlaw => "Logical Flaw",
            FieldLabel::Quantifiers => "Quantifiers",
            FieldLabel::ExplicitPremises => "Explicit Premises",
            FieldLabel::UnspokenReasons => "Unspoken Reasons",
            FieldLabel::HiddenAssumptions => "Hidden Assumptions",
            FieldLabel::CounterArgument => "Counter Argument",
            FieldLabel::ImprovedVersion => "Improved Version",
        }
    }

    /// Whether the field's value is a list of items that should be run
    /// through the list segmenter.
    pub fn is_multi_item(&self) -> bool {
        matches!(
            self,
            FieldLabel::ExplicitPremises
                | FieldLabel::UnspokenReasons
                | FieldLabel::HiddenAssumptions
        )
    }
}
