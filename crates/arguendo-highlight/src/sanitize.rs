//! Input sanitization for untrusted display text

use tracing::warn;

/// Strip angle-bracket markup-like tags from untrusted text.
///
/// Everything from a `<` through the next `>` is dropped, including the
/// brackets. A `<` with no closing `>` is kept literally; a lone bracket
/// is harmless and dropping the remainder would eat legitimate text.
pub fn strip_markup(text: &str) -> String {
    if !text.contains('<') {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find('<') {
        out.push_str(&rest[..open]);
        match rest[open..].find('>') {
            Some(close) => rest = &rest[open + close + 1..],
            None => {
                out.push_str(&rest[open..]);
                return out;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Truncate to at most `max_chars` characters, reporting whether
/// anything was cut.
pub(crate) fn truncate_chars(text: &str, max_chars: usize) -> (String, bool) {
    let mut char_count = 0;
    for (idx, _) in text.char_indices() {
        if char_count == max_chars {
            warn!(
                max_chars,
                total_len = text.len(),
                "display text exceeds cap, truncating"
            );
            return (text[..idx].to_string(), true);
        }
        char_count += 1;
    }
    (text.to_string(), false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_simple_tag() {
        assert_eq!(strip_markup("a <b>bold</b> word"), "a bold word");
    }

    #[test]
    fn test_strip_script_tag() {
        assert_eq!(
            strip_markup("safe <script>alert(1)</script> text"),
            "safe alert(1) text"
        );
    }

    #[test]
    fn test_no_tags_unchanged() {
        assert_eq!(strip_markup("plain text"), "plain text");
    }

    #[test]
    fn test_unterminated_bracket_kept() {
        assert_eq!(strip_markup("x < y and x <"), "x < y and x <");
    }

    #[test]
    fn test_truncate_under_cap() {
        let (text, truncated) = truncate_chars("short", 100);
        assert_eq!(text, "short");
        assert!(!truncated);
    }

    #[test]
    fn test_truncate_at_cap() {
        let (text, truncated) = truncate_chars("abcdef", 4);
        assert_eq!(text, "abcd");
        assert!(truncated);
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        let (text, truncated) = truncate_chars("héllo wörld", 6);
        assert_eq!(text, "héllo ");
        assert!(truncated);
    }
}
