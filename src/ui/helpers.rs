//! Shared rendering utilities.
//!
//! Low-level text helpers used by several components: cursor positioning, match
//! highlighting with ANSI escapes, truncation and word wrapping. Everything here
//! counts characters, not bytes, so spell names with accents or other multi-byte
//! characters line up correctly.

use crate::ui::theme::Theme;

/// Positions the cursor at a specific row and column (both 1-indexed).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Number of characters in `text`.
#[must_use]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Truncates `text` to at most `max` characters.
#[must_use]
pub fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

/// Styles `text` with match highlights on the given character ranges.
///
/// Ranges are half-open `(start, end)` character indices and must be sorted.
/// After each highlighted section the row's base colors are restored: selection
/// colors when `is_selected`, the normal text color otherwise.
///
/// # Example
///
/// ```rust
/// use spellbook::ui::helpers::highlighted_text;
/// use spellbook::ui::Theme;
///
/// let theme = Theme::default();
/// let out = highlighted_text("3 Fireball", &[(6, 10)], &theme, false);
/// assert!(out.starts_with("3 Fire"));
/// assert!(out.contains("ball"));
/// ```
#[must_use]
pub fn highlighted_text(
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
) -> String {
    if ranges.is_empty() {
        return text.to_string();
    }

    let (base_fg, base_bg) = if is_selected {
        (&theme.colors.selection_fg, Some(&theme.colors.selection_bg))
    } else {
        (&theme.colors.text_normal, None)
    };

    let chars: Vec<char> = text.chars().collect();
    let mut out = String::new();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start > current_pos {
            out.extend(&chars[current_pos..start]);
        }

        out.push_str(&Theme::fg(&theme.colors.match_highlight_fg));
        out.push_str(&Theme::bg(&theme.colors.match_highlight_bg));
        out.extend(chars.get(start.max(current_pos)..end).unwrap_or_default());
        out.push_str(Theme::reset());
        out.push_str(&Theme::fg(base_fg));
        if let Some(bg) = base_bg {
            out.push_str(&Theme::bg(bg));
        }

        current_pos = current_pos.max(end);
    }

    if current_pos < chars.len() {
        out.extend(&chars[current_pos..]);
    }

    out
}

/// Greedy word wrap to `width` characters.
///
/// Words longer than the width are split hard. Always returns at least one line.
/// A width of zero disables wrapping.
///
/// # Example
///
/// ```rust
/// use spellbook::ui::helpers::wrap_text;
///
/// assert_eq!(wrap_text("a bright streak", 8), vec!["a bright", "streak"]);
/// ```
#[must_use]
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();

        while word.len() > width {
            if line_len > 0 {
                lines.push(std::mem::take(&mut line));
                line_len = 0;
            }
            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }

        if line_len > 0 && line_len + 1 + word.len() > width {
            lines.push(std::mem::take(&mut line));
            line_len = 0;
        }
        if line_len > 0 {
            line.push(' ');
            line_len += 1;
        }
        line_len += word.len();
        line.extend(word);
    }

    if line_len > 0 || lines.is_empty() {
        lines.push(line);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_keeps_words_together() {
        assert_eq!(
            wrap_text("You touch a creature, and that creature must succeed", 16),
            vec!["You touch a", "creature, and", "that creature", "must succeed"]
        );
    }

    #[test]
    fn wrap_splits_overlong_words() {
        assert_eq!(wrap_text("abcdefghij xy", 4), vec!["abcd", "efgh", "ij", "xy"]);
    }

    #[test]
    fn wrap_empty_and_zero_width() {
        assert_eq!(wrap_text("", 10), vec![""]);
        assert_eq!(wrap_text("no wrap here", 0), vec!["no wrap here"]);
    }

    #[test]
    fn wrap_counts_chars_not_bytes() {
        assert_eq!(wrap_text("éééé ééé", 4), vec!["éééé", "ééé"]);
    }

    #[test]
    fn truncate_is_char_safe() {
        assert_eq!(truncate_chars("Éclair", 2), "Éc");
        assert_eq!(char_len("Éclair"), 6);
    }

    #[test]
    fn highlighted_text_without_ranges_is_plain() {
        let theme = Theme::default();
        assert_eq!(highlighted_text("Shield", &[], &theme, true), "Shield");
    }

    #[test]
    fn highlighted_text_preserves_visible_characters() {
        let theme = Theme::default();
        let out = highlighted_text("Fire Fire", &[(0, 4), (5, 9)], &theme, false);
        let visible: String = strip_ansi(&out);
        assert_eq!(visible, "Fire Fire");
        assert_eq!(out.matches(&Theme::bg(&theme.colors.match_highlight_bg)).count(), 2);
    }

    fn strip_ansi(text: &str) -> String {
        let mut out = String::new();
        let mut in_escape = false;
        for c in text.chars() {
            match (in_escape, c) {
                (false, '\u{1b}') => in_escape = true,
                (true, 'm') => in_escape = false,
                (true, _) => {}
                (false, c) => out.push(c),
            }
        }
        out
    }
}
