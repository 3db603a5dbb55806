//! List segmentation and premise re-segmentation
//!
//! Models asked for a list answer with one item per line and `N. `
//! numbering, but deliver anything from a clean numbered list to a single
//! run-on paragraph. [`segment_items`] turns a label's block of text into
//! discrete items by trying strategies in a fixed priority order;
//! [`resplit_long_premise`] recovers items from a lone paragraph that was
//! never split at all.

use once_cell::sync::Lazy;
use regex::Regex;

/// `N. ` numbering at the start of a line.
static NUMBERED_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^\s*\d+\.\s+").expect("valid numbered-item regex"));

/// A numbering or bullet marker embedded mid-paragraph: `N. `, `- `, `* `
/// or `• `, preceded by start of text, a line break, or whitespace, and
/// with whitespace after the marker. Decimals like `3.5` have no
/// whitespace after the period and never match.
static EMBEDDED_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:^|\s)(\d+\.\s+|[-*•]\s+)").expect("valid embedded-marker regex")
});

/// Ordered segmentation strategies. The first one that produces usable
/// items wins; a strategy that yields nothing falls through.
const STRATEGIES: &[fn(&str) -> Option<Vec<String>>] = &[try_numbered, try_lines];

/// Split a label's block of text into discrete items.
///
/// Strategy order:
/// 1. numbered-list markers (`N. ` at line starts), numbering stripped
/// 2. line breaks, blank lines discarded
/// 3. the whole block as a single item
///
/// Every item is trimmed and empty items are dropped. Non-empty input
/// never produces an empty list; empty or whitespace-only input produces
/// an empty one.
pub fn segment_items(block: &str) -> Vec<String> {
    let trimmed = block.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    for strategy in STRATEGIES {
        if let Some(items) = strategy(trimmed) {
            return items;
        }
    }

    vec![trimmed.to_string()]
}

/// Split on `N. ` line-start numbering, stripping the numbers.
fn try_numbered(text: &str) -> Option<Vec<String>> {
    if !NUMBERED_ITEM.is_match(text) {
        return None;
    }
    let items = collect_items(NUMBERED_ITEM.split(text));
    if items.is_empty() {
        None
    } else {
        Some(items)
    }
}

/// Split on line breaks, discarding blank lines.
fn try_lines(text: &str) -> Option<Vec<String>> {
    if !text.contains('\n') {
        return None;
    }
    let items = collect_items(text.lines());
    if items.is_empty() {
        None
    } else {
        Some(items)
    }
}

fn collect_items<'a>(parts: impl Iterator<Item = &'a str>) -> Vec<String> {
    parts
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Re-split a lone, anomalously long premise on embedded markers.
///
/// Triggers only when `items` holds exactly one entry longer than
/// `threshold` characters - the signature of a model emitting an
/// unsegmented paragraph instead of a list. The split happens at embedded
/// `N. ` numbering or bullet markers; each marker itself is stripped and
/// any sentence punctuation before it stays with the preceding item.
///
/// Best effort: if fewer than two non-empty items result, the input is
/// returned unchanged. A legitimately long single premise that happens to
/// contain markers will be split; that risk is accepted policy, and the
/// threshold is configurable for that reason.
pub fn resplit_long_premise(items: Vec<String>, threshold: usize) -> Vec<String> {
    if items.len() != 1 || !exceeds_chars(&items[0], threshold) {
        return items;
    }

    let single = &items[0];
    let mut pieces: Vec<String> = Vec::new();
    let mut start = 0;

    for caps in EMBEDDED_MARKER.captures_iter(single) {
        let marker = caps.get(1).expect("marker group always present");
        let piece = single[start..marker.start()].trim();
        if !piece.is_empty() {
            pieces.push(piece.to_string());
        }
        start = marker.end();
    }

    let tail = single[start..].trim();
    if !tail.is_empty() {
        pieces.push(tail.to_string());
    }

    if pieces.len() >= 2 {
        pieces
    } else {
        items
    }
}

/// Whether `text` is longer than `max` characters. The threshold is
/// stated in characters, not bytes, so multi-byte text does not trip it
/// early; counting stops at `max + 1`.
fn exceeds_chars(text: &str, max: usize) -> bool {
    text.chars().nth(max).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbered_list() {
        let block = "1. Crime fell after gun laws.\n2. Other countries show the same trend.";
        let items = segment_items(block);
        assert_eq!(
            items,
            vec![
                "Crime fell after gun laws.",
                "Other countries show the same trend."
            ]
        );
    }

    #[test]
    fn test_numbered_list_with_leading_whitespace() {
        let block = "  1. First item\n  2. Second item";
        let items = segment_items(block);
        assert_eq!(items, vec!["First item", "Second item"]);
    }

    #[test]
    fn test_line_break_fallback() {
        let block = "First reason\n\nSecond reason\nThird reason";
        let items = segment_items(block);
        assert_eq!(items, vec!["First reason", "Second reason", "Third reason"]);
    }

    #[test]
    fn test_single_block_fallback() {
        let block = "Just one unbroken premise without markers";
        let items = segment_items(block);
        assert_eq!(items, vec![block]);
    }

    #[test]
    fn test_empty_input_yields_empty_list() {
        assert!(segment_items("").is_empty());
        assert!(segment_items("   \n  ").is_empty());
    }

    #[test]
    fn test_non_empty_input_never_yields_empty_list() {
        // Numbering with nothing after it falls through to the line
        // strategy, and from there to the whole-block fallback.
        let items = segment_items("x");
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn test_segmentation_is_idempotent_under_newline_join() {
        let items = vec![
            "Crime fell after gun laws.".to_string(),
            "Other countries show the same trend.".to_string(),
        ];
        let rejoined = items.join("\n");
        assert_eq!(segment_items(&rejoined), items);
    }

    #[test]
    fn test_resplit_triggers_on_long_lone_item() {
        let filler = "x".repeat(260);
        let single = format!("1. First premise {f} 2. Second premise {f} 3. Third premise {f}", f = filler);
        assert!(single.len() > 500);

        let items = resplit_long_premise(vec![single], 500);
        assert_eq!(items.len(), 3);
        assert!(items[0].starts_with("First premise"));
        assert!(items[1].starts_with("Second premise"));
        assert!(items[2].starts_with("Third premise"));
    }

    #[test]
    fn test_resplit_leaves_markerless_text_alone() {
        let single = "y".repeat(800);
        let items = resplit_long_premise(vec![single.clone()], 500);
        assert_eq!(items, vec![single]);
    }

    #[test]
    fn test_resplit_ignores_short_items() {
        let single = "1. short 2. also short".to_string();
        let items = resplit_long_premise(vec![single.clone()], 500);
        assert_eq!(items, vec![single]);
    }

    #[test]
    fn test_resplit_ignores_multi_item_input() {
        let items = vec!["a".repeat(600), "b".repeat(600)];
        assert_eq!(resplit_long_premise(items.clone(), 500), items);
    }

    #[test]
    fn test_resplit_on_bullets_after_line_breaks() {
        let filler = "z".repeat(300);
        let single = format!("- First {f}\n- Second {f}", f = filler);
        let items = resplit_long_premise(vec![single], 500);
        assert_eq!(items.len(), 2);
        assert!(items[0].starts_with("First"));
    }

    #[test]
    fn test_resplit_does_not_split_on_decimals() {
        // "3.5" has no whitespace after the period, so it is not a marker.
        let single = format!("The rate rose by 3.5 percent {}", "w".repeat(600));
        let items = resplit_long_premise(vec![single.clone()], 500);
        assert_eq!(items, vec![single]);
    }

    #[test]
    fn test_resplit_threshold_counts_chars_not_bytes() {
        // ~310 chars but ~620 bytes: under the 500-char threshold, so the
        // markers must not trigger a re-split.
        let single = format!("First premise {f} 2. Second premise {f}", f = "é".repeat(140));
        assert!(single.len() > 500);
        assert!(single.chars().count() <= 500);

        let items = resplit_long_premise(vec![single.clone()], 500);
        assert_eq!(items, vec![single]);

        // The same text over the char threshold does split.
        let single = format!("First premise {f} 2. Second premise {f}", f = "é".repeat(260));
        assert!(single.chars().count() > 500);
        let items = resplit_long_premise(vec![single], 500);
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn test_resplit_keeps_sentence_punctuation() {
        let filler = "q".repeat(300);
        let single = format!("First premise ends here {f}. 2. Second premise {f}", f = filler);
        let items = resplit_long_premise(vec![single], 500);
        assert_eq!(items.len(), 2);
        assert!(items[0].ends_with('.'));
    }
}
