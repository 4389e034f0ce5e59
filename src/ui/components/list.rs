//! Spell list surface.

use super::{render_box, render_empty_state};
use crate::ui::helpers::{char_len, highlighted_text, position_cursor, truncate_chars};
use crate::ui::layout::Layout;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DisplayItem, ListPane};

/// Draws the bordered list in the left column of the body.
pub fn render_list(pane: &ListPane, layout: &Layout, theme: &Theme) {
    render_box(
        1,
        1,
        layout.list_width,
        layout.body_height,
        &pane.title,
        "",
        pane.emphasized,
        theme,
    );

    let width = layout.list_inner_width();
    let height = layout.list_inner_height();
    if width == 0 || height == 0 {
        return;
    }

    if let Some(empty) = &pane.empty_state {
        render_empty_state(empty, 2, 2, width, height, theme);
        return;
    }

    for (offset, item) in pane.items.iter().take(height).enumerate() {
        position_cursor(2 + offset, 2);
        print!("{}", row_text(item, width, theme));
    }
}

/// One styled row, padded to `width` so the selection bar spans the pane.
fn row_text(item: &DisplayItem, width: usize, theme: &Theme) -> String {
    let label = truncate_chars(&item.label, width);
    let pad = " ".repeat(width - char_len(&label));

    let base = if item.is_selected {
        format!(
            "{}{}",
            Theme::fg(&theme.colors.selection_fg),
            Theme::bg(&theme.colors.selection_bg)
        )
    } else {
        Theme::fg(&theme.colors.text_normal)
    };

    // Ranges past the truncation point are clipped by highlighted_text.
    let body = highlighted_text(&label, &item.highlight_ranges, theme, item.is_selected);
    format!("{base}{body}{pad}{}", Theme::reset())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visible(text: &str) -> String {
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

    #[test]
    fn rows_are_padded_to_width() {
        let item = DisplayItem {
            label: "3 Fireball".into(),
            is_selected: false,
            highlight_ranges: vec![],
        };
        assert_eq!(visible(&row_text(&item, 14, &Theme::default())), "3 Fireball    ");
    }

    #[test]
    fn long_rows_are_cut() {
        let item = DisplayItem {
            label: "9 Mordenkainen's Magnificent Mansion".into(),
            is_selected: true,
            highlight_ranges: vec![(2, 40)],
        };
        let text = row_text(&item, 10, &Theme::default());
        assert_eq!(visible(&text), "9 Mordenka");
        assert!(text.contains(&Theme::bg(&Theme::default().colors.selection_bg)));
    }
}
