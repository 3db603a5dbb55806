//! Sentence and word classification

use crate::sanitize::{strip_markup, truncate_chars};
use arguendo_domain::{HighlightedSegment, SegmentRole};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Default length cap: effectively unbounded for normal arguments.
/// Callers displaying short labels pass smaller caps.
pub const DEFAULT_MAX_LEN: usize = 100_000;

/// Fixed marker returned when the input bytes are not valid text.
pub const INVALID_INPUT_MARKER: &str = "[Invalid input]";

/// Words that signal a premise.
const PREMISE_INDICATORS: &[&str] = &["because", "since", "for", "as"];

/// Words that signal a conclusion.
const CONCLUSION_INDICATORS: &[&str] = &["therefore", "thus", "so", "hence", "consequently"];

static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\W").expect("valid non-word regex"));

/// The classified output of [`highlight`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Highlighted {
    /// Sentences, each an ordered list of word and whitespace segments.
    /// Concatenating every segment reproduces the sanitized input.
    pub sentences: Vec<Vec<HighlightedSegment>>,

    /// Whether the input was cut at the length cap. The caller is
    /// responsible for indicating truncation to the user.
    pub truncated: bool,
}

impl Highlighted {
    /// Concatenate every segment back into the sanitized input text.
    pub fn flattened_text(&self) -> String {
        self.sentences
            .iter()
            .flatten()
            .map(|seg| seg.text.as_str())
            .collect()
    }

    fn invalid() -> Self {
        Self {
            sentences: vec![vec![HighlightedSegment::plain(INVALID_INPUT_MARKER)]],
            truncated: false,
        }
    }
}

/// Split display text into sentences of classified segments.
///
/// Processing order: strip angle-bracket markup, truncate to `max_len`
/// characters, split into sentences on sentence-ending punctuation
/// followed by whitespace, tokenize each sentence into word and
/// whitespace runs, then classify each word by lowercasing it, stripping
/// non-word characters, and testing membership in the fixed indicator
/// vocabularies. The multiword indicators `given that` and `as a result`
/// are matched across adjacent words.
///
/// Never panics for any input; cost is linear in the capped input length.
pub fn highlight(text: &str, max_len: usize) -> Highlighted {
    let sanitized = strip_markup(text);
    let (capped, truncated) = truncate_chars(&sanitized, max_len);

    let sentences = split_sentences(&capped)
        .into_iter()
        .map(classify_sentence)
        .collect();

    Highlighted {
        sentences,
        truncated,
    }
}

/// [`highlight`] for untrusted bytes.
///
/// Bytes that are not valid UTF-8 yield a single Plain segment holding
/// [`INVALID_INPUT_MARKER`] instead of an error.
pub fn highlight_bytes(raw: &[u8], max_len: usize) -> Highlighted {
    match std::str::from_utf8(raw) {
        Ok(text) => highlight(text, max_len),
        Err(_) => Highlighted::invalid(),
    }
}

/// Split on sentence-ending punctuation followed by whitespace. The
/// punctuation stays with its sentence; the following whitespace opens
/// the next one, so the split is lossless.
fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut prev_was_terminal = false;

    for (idx, c) in text.char_indices() {
        if prev_was_terminal && c.is_whitespace() {
            sentences.push(&text[start..idx]);
            start = idx;
        }
        prev_was_terminal = matches!(c, '.' | '!' | '?');
    }
    if start < text.len() {
        sentences.push(&text[start..]);
    }
    sentences
}

/// Tokenize a sentence into alternating whitespace and word runs and
/// classify the word runs.
fn classify_sentence(sentence: &str) -> Vec<HighlightedSegment> {
    let tokens = tokenize(sentence);

    // Word positions and normalized forms, for multiword lookahead
    let words: Vec<(usize, String)> = tokens
        .iter()
        .enumerate()
        .filter(|(_, tok)| !tok.chars().all(char::is_whitespace))
        .map(|(idx, tok)| (idx, normalize_word(tok)))
        .collect();

    let mut roles = vec![SegmentRole::Plain; tokens.len()];
    let mut w = 0;
    while w < words.len() {
        let norm = words[w].1.as_str();
        if norm == "as" && next_words_are(&words, w, &["a", "result"]) {
            for (idx, _) in &words[w..w + 3] {
                roles[*idx] = SegmentRole::ConclusionIndicator;
            }
            w += 3;
        } else if norm == "given" && next_words_are(&words, w, &["that"]) {
            for (idx, _) in &words[w..w + 2] {
                roles[*idx] = SegmentRole::PremiseIndicator;
            }
            w += 2;
        } else {
            if PREMISE_INDICATORS.contains(&norm) {
                roles[words[w].0] = SegmentRole::PremiseIndicator;
            } else if CONCLUSION_INDICATORS.contains(&norm) {
                roles[words[w].0] = SegmentRole::ConclusionIndicator;
            }
            w += 1;
        }
    }

    tokens
        .into_iter()
        .zip(roles)
        .map(|(tok, role)| HighlightedSegment::with_role(tok, role))
        .collect()
}

/// Split into maximal runs of whitespace and non-whitespace.
fn tokenize(sentence: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut in_whitespace = None;

    for (idx, c) in sentence.char_indices() {
        let ws = c.is_whitespace();
        if in_whitespace.is_some_and(|prev| prev != ws) {
            tokens.push(&sentence[start..idx]);
            start = idx;
        }
        in_whitespace = Some(ws);
    }
    if start < sentence.len() {
        tokens.push(&sentence[start..]);
    }
    tokens
}

fn normalize_word(token: &str) -> String {
    NON_WORD.replace_all(&token.to_lowercase(), "").into_owned()
}

fn next_words_are(words: &[(usize, String)], at: usize, expected: &[&str]) -> bool {
    expected
        .iter()
        .enumerate()
        .all(|(off, want)| words.get(at + 1 + off).map(|(_, w)| w.as_str()) == Some(*want))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn roles_of(text: &str) -> Vec<(String, SegmentRole)> {
        highlight(text, DEFAULT_MAX_LEN)
            .sentences
            .into_iter()
            .flatten()
            .map(|seg| (seg.text, seg.role))
            .collect()
    }

    #[test]
    fn test_therefore_is_conclusion_indicator() {
        let result = highlight("Crime fell, therefore laws worked.", 1000);
        assert_eq!(result.sentences.len(), 1);
        assert!(!result.truncated);

        for seg in &result.sentences[0] {
            if seg.text == "therefore" {
                assert_eq!(seg.role, SegmentRole::ConclusionIndicator);
            } else {
                assert_eq!(seg.role, SegmentRole::Plain);
            }
        }
    }

    #[test]
    fn test_because_is_premise_indicator() {
        let segs = roles_of("Laws worked because crime fell.");
        let because = segs.iter().find(|(t, _)| t == "because").unwrap();
        assert_eq!(because.1, SegmentRole::PremiseIndicator);
    }

    #[test]
    fn test_classification_strips_punctuation_and_case() {
        let segs = roles_of("Therefore, we conclude.");
        let therefore = segs.iter().find(|(t, _)| t == "Therefore,").unwrap();
        assert_eq!(therefore.1, SegmentRole::ConclusionIndicator);
    }

    #[test]
    fn test_given_that_bigram() {
        let segs = roles_of("Given that crime fell, laws worked.");
        let given = segs.iter().find(|(t, _)| t == "Given").unwrap();
        let that = segs.iter().find(|(t, _)| t == "that").unwrap();
        assert_eq!(given.1, SegmentRole::PremiseIndicator);
        assert_eq!(that.1, SegmentRole::PremiseIndicator);
    }

    #[test]
    fn test_as_a_result_trigram_beats_as_alone() {
        let segs = roles_of("As a result crime fell");
        for word in ["As", "a", "result"] {
            let seg = segs.iter().find(|(t, _)| t == word).unwrap();
            assert_eq!(seg.1, SegmentRole::ConclusionIndicator, "word {:?}", word);
        }
    }

    #[test]
    fn test_as_alone_is_premise_indicator() {
        let segs = roles_of("As crime fell, laws worked.");
        let as_word = segs.iter().find(|(t, _)| t == "As").unwrap();
        assert_eq!(as_word.1, SegmentRole::PremiseIndicator);
    }

    #[test]
    fn test_sentence_boundaries_preserved() {
        let result = highlight("Crime fell. Laws worked. So we are done.", 1000);
        assert_eq!(result.sentences.len(), 3);
    }

    #[test]
    fn test_round_trip_is_lossless() {
        let text = "Crime fell,   therefore laws worked.\nBecause of this, so it goes!  Done?";
        let result = highlight(text, DEFAULT_MAX_LEN);
        assert_eq!(result.flattened_text(), text);
    }

    #[test]
    fn test_markup_stripped_before_classification() {
        let result = highlight("Crime <b>fell</b>, therefore laws worked.", 1000);
        assert_eq!(
            result.flattened_text(),
            "Crime fell, therefore laws worked."
        );
    }

    #[test]
    fn test_truncation_flagged() {
        let result = highlight("a very long argument indeed", 6);
        assert!(result.truncated);
        assert_eq!(result.flattened_text(), "a very");
    }

    #[test]
    fn test_invalid_bytes_yield_marker() {
        let result = highlight_bytes(&[0xff, 0xfe, 0x80], DEFAULT_MAX_LEN);
        assert_eq!(result.sentences.len(), 1);
        assert_eq!(result.sentences[0].len(), 1);
        assert_eq!(result.sentences[0][0].text, INVALID_INPUT_MARKER);
        assert_eq!(result.sentences[0][0].role, SegmentRole::Plain);
    }

    #[test]
    fn test_valid_bytes_pass_through() {
        let result = highlight_bytes("so it goes".as_bytes(), DEFAULT_MAX_LEN);
        assert_eq!(result.flattened_text(), "so it goes");
    }

    #[test]
    fn test_empty_input() {
        let result = highlight("", DEFAULT_MAX_LEN);
        assert!(result.sentences.is_empty());
        assert!(!result.truncated);
    }

    proptest! {
        #[test]
        fn prop_round_trip_reproduces_sanitized_input(text in ".{0,400}") {
            let result = highlight(&text, DEFAULT_MAX_LEN);
            prop_assert_eq!(result.flattened_text(), strip_markup(&text));
        }

        #[test]
        fn prop_never_panics_on_bytes(raw in proptest::collection::vec(any::<u8>(), 0..200)) {
            let _ = highlight_bytes(&raw, 64);
        }
    }
}
