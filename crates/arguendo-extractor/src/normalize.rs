//! Normalization of extracted fields into the canonical structure
//!
//! All defaulting lives here. Consumers receive an already-complete
//! [`ArgumentStructure`] and never need their own fallbacks.

use crate::config::AnalyzerConfig;
use crate::extract::ExtractedFields;
use crate::label::FieldLabel;
use arguendo_domain::structure::{NO_CONCLUSION_PLACEHOLDER, NO_PREMISES_PLACEHOLDER};
use arguendo_domain::{ArgumentStructure, BreakdownItem, BreakdownKind};
use std::panic::{catch_unwind, AssertUnwindSafe};
use tracing::warn;

/// Assemble the canonical structure and the flat breakdown list from the
/// extracted field blocks.
///
/// Absent fields get their documented defaults: the empty string for
/// free-text fields, [`NO_CONCLUSION_PLACEHOLDER`] for the conclusion,
/// empty lists for assumptions and flaws, and the premises fallback
/// chain for premises. A field whose extraction step panics is treated
/// as absent; the rest of the structure is unaffected.
pub fn normalize(
    fields: &ExtractedFields,
    config: &AnalyzerConfig,
) -> (ArgumentStructure, Vec<BreakdownItem>) {
    let premises = guarded(
        "explicit_premises",
        vec![NO_PREMISES_PLACEHOLDER.to_string()],
        || fields.premises(config.premise_resplit_threshold),
    );
    let unstated_assumptions = guarded("hidden_assumptions", Vec::new(), || {
        fields.items(FieldLabel::HiddenAssumptions)
    });
    let implicit_premises = guarded("unspoken_reasons", Vec::new(), || {
        fields.items(FieldLabel::UnspokenReasons)
    });

    // Single-flaw label contract, modeled as a list for extensibility
    let logical_flaws: Vec<String> = fields
        .get(FieldLabel::LogicalFlaw)
        .map(|flaw| vec![flaw.to_string()])
        .unwrap_or_default();

    let structure = ArgumentStructure {
        premises,
        conclusion_text: text_or(fields, FieldLabel::Conclusion, NO_CONCLUSION_PLACEHOLDER),
        conclusion_type: text_or(fields, FieldLabel::ConclusionType, ""),
        unstated_assumptions,
        logical_flaws,
        quantifiers: text_or(fields, FieldLabel::Quantifiers, ""),
        if_then_structure: text_or(fields, FieldLabel::IfThenStructure, ""),
        necessary_assumption: text_or(fields, FieldLabel::NecessaryAssumption, ""),
        sufficient_assumption: text_or(fields, FieldLabel::SufficientAssumption, ""),
        unstated_rule: text_or(fields, FieldLabel::ImpliedRule, ""),
        method_of_reasoning: text_or(fields, FieldLabel::MethodOfReasoning, ""),
        counter_argument: text_or(fields, FieldLabel::CounterArgument, ""),
        improved_version: text_or(fields, FieldLabel::ImprovedVersion, ""),
    };

    let breakdown = build_breakdown(&structure, &implicit_premises);
    (structure, breakdown)
}

/// Derive the breakdown list in its fixed, stable order: flaws, necessary
/// assumption, sufficient assumption, unstated rule, implicit premises.
fn build_breakdown(structure: &ArgumentStructure, implicit_premises: &[String]) -> Vec<BreakdownItem> {
    let mut items = Vec::new();

    for flaw in &structure.logical_flaws {
        items.push(BreakdownItem::new(BreakdownKind::Flaw, flaw.clone()));
    }
    if !structure.necessary_assumption.is_empty() {
        items.push(BreakdownItem::new(
            BreakdownKind::NecessaryAssumption,
            structure.necessary_assumption.clone(),
        ));
    }
    if !structure.sufficient_assumption.is_empty() {
        items.push(BreakdownItem::new(
            BreakdownKind::SufficientAssumption,
            structure.sufficient_assumption.clone(),
        ));
    }
    if !structure.unstated_rule.is_empty() {
        items.push(BreakdownItem::new(
            BreakdownKind::UnstatedRule,
            structure.unstated_rule.clone(),
        ));
    }
    for premise in implicit_premises {
        items.push(BreakdownItem::new(
            BreakdownKind::ImplicitPremise,
            premise.clone(),
        ));
    }

    items
}

fn text_or(fields: &ExtractedFields, label: FieldLabel, default: &str) -> String {
    fields
        .get(label)
        .unwrap_or(default)
        .to_string()
}

/// Run one field's extraction step, containing a panic to that field.
fn guarded<T>(field: &'static str, default: T, f: impl FnOnce() -> T) -> T {
    match catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => value,
        Err(_) => {
            warn!(field, "field extraction panicked, treating the field as absent");
            default
        }
    }
}
