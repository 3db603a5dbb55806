//! Highlighted display segments

use serde::{Deserialize, Serialize};

/// Role of a display segment within a sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SegmentRole {
    /// Ordinary text, rendered without emphasis.
    Plain,
    /// A word that signals a premise ("because", "since", ...).
    PremiseIndicator,
    /// A word that signals a conclusion ("therefore", "thus", ...).
    ConclusionIndicator,
}

/// One word or whitespace run of display text.
///
/// Segments within a sentence are ordered; concatenating their `text`
/// fields reconstructs the sentence exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightedSegment {
    /// The segment text, including any whitespace run it represents.
    pub text: String,

    /// How the segment should be emphasized.
    pub role: SegmentRole,
}

impl HighlightedSegment {
    /// Create a plain segment.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            role: SegmentRole::Plain,
        }
    }

    /// Create a segment with the given role.
    pub fn with_role(text: impl Into<String>, role: SegmentRole) -> Self {
        Self {
            text: text.into(),
            role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_constructor() {
        let seg = HighlightedSegment::plain("hello");
        assert_eq!(seg.role, SegmentRole::Plain);
        assert_eq!(seg.text, "hello");
    }

    #[test]
    fn test_concatenation_reconstructs() {
        let segs = vec![
            HighlightedSegment::plain("Crime fell, "),
            HighlightedSegment::with_role("therefore", SegmentRole::ConclusionIndicator),
            HighlightedSegment::plain(" laws worked."),
        ];
        let joined: String = segs.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(joined, "Crime fell, therefore laws worked.");
    }
}
