//! Empty state message.
//!
//! Drawn inside the list surface when there is nothing to show: either no
//! catalog has arrived yet or the query matches no spell.

use crate::ui::helpers::{char_len, position_cursor, truncate_chars};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Centers the message and its subtitle in the given area.
///
/// `top` and `left` are the 1-indexed origin of an area `width` x `height`.
pub fn render_empty_state(
    empty: &EmptyState,
    top: usize,
    left: usize,
    width: usize,
    height: usize,
    theme: &Theme,
) {
    let row = top + height.saturating_sub(2) / 2;

    position_cursor(row, left);
    print!(
        "{}{}{}",
        Theme::fg(&theme.colors.empty_state_fg),
        centered(&empty.message, width),
        Theme::reset()
    );

    if height < 2 {
        return;
    }
    position_cursor(row + 1, left);
    print!(
        "{}{}{}{}",
        Theme::dim(),
        Theme::fg(&theme.colors.text_dim),
        centered(&empty.subtitle, width),
        Theme::reset()
    );
}

/// `text` cut to `width` and padded on both sides to exactly `width` chars.
fn centered(text: &str, width: usize) -> String {
    let text = truncate_chars(text, width);
    let len = char_len(&text);
    let left = (width - len) / 2;
    format!("{}{text}{}", " ".repeat(left), " ".repeat(width - len - left))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centers_within_width() {
        assert_eq!(centered("No matches", 14), "  No matches  ");
        assert_eq!(centered("abc", 6), " abc  ");
    }

    #[test]
    fn cuts_when_too_wide() {
        assert_eq!(centered("No spells loaded", 5), "No sp");
    }
}
