//! Fixed-width text shaping: pad, truncate, wrap.
//!
//! All three operations count in terminal cells via the measurer, so they
//! are safe to use on strings carrying the crate's color escapes and on
//! double-width CJK/emoji text.

use super::measure::{char_width, strip_ansi, visual_width};

/// Pad a string with trailing spaces up to `width` visual columns.
///
/// Never truncates: a string already at or past `width` is returned
/// unchanged. Idempotent.
pub fn pad(s: &str, width: usize) -> String {
    let current = visual_width(s);
    if current >= width {
        return s.to_string();
    }

    let mut out = String::with_capacity(s.len() + (width - current));
    out.push_str(s);
    for _ in 0..(width - current) {
        out.push(' ');
    }
    out
}

/// Truncate a string to at most `width` visual columns, appending `"..."`
/// when something was cut.
///
/// Below 3 columns there is no room for an ellipsis, so the string is
/// hard-cut to exactly `width` columns instead. Cuts always land on a code
/// point boundary; a double-width character is included only when it fully
/// fits. The cut operates on escape-stripped text, so color codes do not
/// survive truncation.
pub fn truncate(s: &str, width: usize) -> String {
    if visual_width(s) <= width {
        return s.to_string();
    }
    if width < 3 {
        return cut_to_width(s, width);
    }

    let mut out = cut_to_width(s, width - 3);
    out.push_str("...");
    out
}

/// Cut a string to exactly `width` visual columns, never splitting a wide
/// character across the boundary.
fn cut_to_width(s: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }

    let clean = strip_ansi(s);
    let mut out = String::new();
    let mut used = 0;

    for c in clean.chars() {
        let w = char_width(c);
        if used + w > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out
}

/// Word-wrap text to `width` visual columns.
///
/// Words (whitespace-separated) are packed greedily: a word joins the
/// current line while `line + space + word` still fits. A single word wider
/// than `width` is placed alone on its own line, untruncated; wrapping
/// never loses content. Empty input yields one empty line; `width == 0`
/// returns the input as a single line.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if visual_width(&current) + 1 + visual_width(word) <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ── pad ──

    #[test]
    fn pad_extends_to_width() {
        assert_eq!(pad("abc", 6), "abc   ");
        assert_eq!(visual_width(&pad("abc", 6)), 6);
    }

    #[test]
    fn pad_never_truncates() {
        assert_eq!(pad("abcdef", 3), "abcdef");
    }

    #[test]
    fn pad_counts_visual_width() {
        // Two CJK chars are 4 cells; only 2 spaces needed.
        assert_eq!(pad("你好", 6), "你好  ");
        // Color escapes are free.
        assert_eq!(pad("\x1b[31mab\x1b[0m", 4), "\x1b[31mab\x1b[0m  ");
    }

    #[test]
    fn pad_is_idempotent() {
        let once = pad("xy", 5);
        assert_eq!(pad(&once, 5), once);
    }

    // ── truncate ──

    #[test]
    fn truncate_fits_unchanged() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello", 5), "hello");
    }

    #[test]
    fn truncate_adds_ellipsis() {
        assert_eq!(truncate("hello world", 8), "hello...");
    }

    #[test]
    fn truncate_narrow_hard_cuts() {
        assert_eq!(truncate("hello", 2), "he");
        assert_eq!(truncate("hello", 1), "h");
        assert_eq!(truncate("hello", 0), "");
    }

    #[test]
    fn truncate_result_within_width() {
        for w in 0..12 {
            assert!(visual_width(&truncate("a longer sentence here", w)) <= w);
        }
    }

    #[test]
    fn truncate_accented_text() {
        let out = truncate("héllo wörld", 5);
        assert_eq!(visual_width(&out), 5);
        assert!(out.ends_with("..."));
    }

    #[test]
    fn truncate_never_splits_wide_char() {
        // "ab" (2) + "好" (2): a hard cut at 2 or 3 stops before 好.
        assert_eq!(truncate("ab好cd", 2), "ab");
        // With ellipsis room: cut target is 5-3=2 cells, "你" fits exactly.
        assert_eq!(truncate("你好世界", 5), "你...");
        // Cut target 6-3=3: the second wide char must not be split.
        assert_eq!(truncate("你好世界", 6), "你...");
        for w in 0..9 {
            assert!(visual_width(&truncate("你好世界", w)) <= w);
        }
    }

    #[test]
    fn truncate_is_idempotent() {
        for w in [0, 2, 5, 8] {
            let once = truncate("some sample input", w);
            assert_eq!(truncate(&once, w), once);
        }
    }

    // ── wrap ──

    #[test]
    fn wrap_empty_gives_one_empty_line() {
        assert_eq!(wrap("", 10), vec![String::new()]);
        assert_eq!(wrap("   ", 10), vec![String::new()]);
    }

    #[test]
    fn wrap_fits_single_line() {
        assert_eq!(wrap("hello world", 20), vec!["hello world"]);
    }

    #[test]
    fn wrap_greedy_packing() {
        assert_eq!(wrap("one two three four", 9), vec!["one two", "three", "four"]);
    }

    #[test]
    fn wrap_long_word_kept_whole() {
        assert_eq!(
            wrap("a verylongunbreakableword b", 8),
            vec!["a", "verylongunbreakableword", "b"]
        );
    }

    #[test]
    fn wrap_preserves_word_sequence() {
        let text = "the quick brown fox jumps over the lazy dog";
        let joined = wrap(text, 7).join(" ");
        let words: Vec<&str> = joined.split_whitespace().collect();
        let original: Vec<&str> = text.split_whitespace().collect();
        assert_eq!(words, original);
    }

    #[test]
    fn wrap_lines_within_width() {
        for line in wrap("several short words pack into lines", 10) {
            assert!(visual_width(&line) <= 10);
        }
    }

    #[test]
    fn wrap_counts_visual_width() {
        // Each word is 4 cells: both fit at 9 (4+1+4), wrap below that.
        assert_eq!(wrap("你好 世界", 9), vec!["你好 世界"]);
        assert_eq!(wrap("你好 世界", 8), vec!["你好", "世界"]);
    }

    #[test]
    fn wrap_width_zero_returns_input() {
        assert_eq!(wrap("anything at all", 0), vec!["anything at all"]);
    }

    #[test]
    fn wrap_is_pure() {
        assert_eq!(wrap("a b c d", 3), wrap("a b c d", 3));
    }
}
