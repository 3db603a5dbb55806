//! Label-block extraction from raw completion text
//!
//! The governing prompt asks the model to answer with fourteen labeled
//! fields, each `Label:` followed by free text and separated by blank
//! lines. This module slices those blocks out without assuming the model
//! honored the contract: labels may be missing, reordered, or run
//! together, and a missing label is simply an absent field, never an
//! error.

use crate::label::{FieldLabel, ARGUMENT_LABEL};
use crate::segment::{resplit_long_premise, segment_items};
use arguendo_domain::structure::NO_PREMISES_PLACEHOLDER;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// A blank line: two line breaks with nothing but horizontal whitespace
/// between them. Covers CRLF completions (`\r\n\r\n`) as well.
static BLANK_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n[ \t\r]*\n").expect("valid blank-line regex"));

/// The raw field blocks sliced out of one completion.
#[derive(Debug, Clone, Default)]
pub struct ExtractedFields {
    fields: BTreeMap<FieldLabel, String>,
    argument_block: Option<String>,
}

impl ExtractedFields {
    /// The raw block for a label, if the label was found and its value
    /// was non-empty.
    pub fn get(&self, label: FieldLabel) -> Option<&str> {
        self.fields.get(&label).map(String::as_str)
    }

    /// The echoed `Argument:` block from the original prompt, if present.
    pub fn argument_block(&self) -> Option<&str> {
        self.argument_block.as_deref()
    }

    /// Number of labels that were found with non-empty values.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether no labels at all were found.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Segment a multi-item field's block into discrete items. Returns an
    /// empty list for absent fields and for labels that are not
    /// multi-item.
    pub fn items(&self, label: FieldLabel) -> Vec<String> {
        if !label.is_multi_item() {
            return Vec::new();
        }
        self.get(label).map(segment_items).unwrap_or_default()
    }

    /// The explicit premises, with the full fallback chain applied:
    ///
    /// 1. segment the `Explicit Premises:` block, re-splitting a lone
    ///    item longer than `resplit_threshold` on embedded markers
    /// 2. else restate the echoed `Argument:` block as a single premise
    /// 3. else a single placeholder item
    ///
    /// Never returns an empty list.
    pub fn premises(&self, resplit_threshold: usize) -> Vec<String> {
        let items = self.items(FieldLabel::ExplicitPremises);
        let items = resplit_long_premise(items, resplit_threshold);
        if !items.is_empty() {
            return items;
        }

        if let Some(argument) = self.argument_block() {
            warn!("no explicit premises found, restating the argument block as one premise");
            return vec![argument.to_string()];
        }

        warn!("no explicit premises or argument block found, using placeholder");
        vec![NO_PREMISES_PLACEHOLDER.to_string()]
    }

    #[cfg(test)]
    fn insert(&mut self, label: FieldLabel, value: impl Into<String>) {
        self.fields.insert(label, value.into());
    }
}

/// Slice the labeled field blocks out of a raw completion.
///
/// For each label in the vocabulary, the value is the text after the
/// first case-sensitive occurrence of `Label:`, running to the next
/// recognized label or a blank line, whichever comes first. Absent and
/// empty-valued labels are left out of the result.
pub fn extract_fields(raw: &str) -> ExtractedFields {
    // (position of label, position right after the colon, label)
    let mut hits: Vec<(usize, usize, Option<FieldLabel>)> = Vec::new();

    for label in FieldLabel::ALL {
        let pattern_len = label.prompt_text().len() + 1;
        if let Some(pos) = find_label(raw, label.prompt_text()) {
            hits.push((pos, pos + pattern_len, Some(label)));
        }
    }
    if let Some(pos) = find_label(raw, ARGUMENT_LABEL) {
        hits.push((pos, pos + ARGUMENT_LABEL.len() + 1, None));
    }

    hits.sort_by_key(|h| h.0);

    let mut extracted = ExtractedFields::default();
    for (idx, &(_, value_start, label)) in hits.iter().enumerate() {
        let next_label_start = hits
            .get(idx + 1)
            .map(|h| h.0)
            .unwrap_or(raw.len());
        let blank_line = BLANK_LINE
            .find(&raw[value_start..next_label_start])
            .map(|m| value_start + m.start())
            .unwrap_or(next_label_start);

        let value = raw[value_start..blank_line].trim();
        if value.is_empty() {
            continue;
        }

        match label {
            Some(label) => {
                extracted.fields.insert(label, value.to_string());
            }
            None => extracted.argument_block = Some(value.to_string()),
        }
    }

    debug!(
        labels_found = extracted.len(),
        has_argument_block = extracted.argument_block.is_some(),
        "label extraction complete"
    );

    extracted
}

/// Position of the first case-sensitive occurrence of `label` followed
/// by a colon, at the start of a line (indentation allowed). Line
/// anchoring keeps label text inside prose from opening a field, and
/// keeps `Argument:` from matching inside `Counter Argument:`.
fn find_label(raw: &str, label: &str) -> Option<usize> {
    let mut pattern = String::with_capacity(label.len() + 1);
    pattern.push_str(label);
    pattern.push(':');

    let mut search_from = 0;
    while let Some(rel) = raw[search_from..].find(&pattern) {
        let pos = search_from + rel;
        if at_line_start(raw, pos) {
            return Some(pos);
        }
        search_from = pos + 1;
    }
    None
}

fn at_line_start(raw: &str, pos: usize) -> bool {
    raw[..pos]
        .chars()
        .rev()
        .take_while(|c| *c != '\n')
        .all(char::is_whitespace)
}
