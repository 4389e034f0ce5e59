//! Detail pane surface.

use super::render_box;
use crate::ui::helpers::{char_len, position_cursor, truncate_chars};
use crate::ui::layout::Layout;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DetailLine, DetailPane, LineStyle};

/// Draws the bordered detail pane in the right column of the body.
///
/// When the content is taller than the pane, the bottom border shows the
/// visible line range, e.g. ` 4-24/57 `.
pub fn render_detail(pane: &DetailPane, layout: &Layout, theme: &Theme) {
    let height = layout.detail_inner_height();
    let note = pane
        .scroll
        .map(|(first, total)| scroll_note(first, height, total))
        .unwrap_or_default();

    render_box(
        1,
        layout.detail_column(),
        layout.detail_width,
        layout.body_height,
        &pane.title,
        &note,
        pane.emphasized,
        theme,
    );

    let width = layout.detail_inner_width();
    if width == 0 {
        return;
    }

    let column = layout.detail_column() + 2;
    for row in 0..height {
        position_cursor(2 + row, column);
        match pane.lines.get(row) {
            Some(line) => print!("{}", styled_line(line, width, theme)),
            None => print!("{}", " ".repeat(width)),
        }
    }
}

fn scroll_note(first: usize, height: usize, total: usize) -> String {
    let last = (first + height).min(total);
    format!(" {}-{last}/{total} ", first + 1)
}

fn styled_line(line: &DetailLine, width: usize, theme: &Theme) -> String {
    let text = truncate_chars(&line.text, width);
    let pad = " ".repeat(width - char_len(&text));
    let c = &theme.colors;

    let body = match line.style {
        LineStyle::Title => format!("{}{}{text}", Theme::bold(), Theme::fg(&c.title_fg)),
        LineStyle::Subtitle | LineStyle::Hint => {
            format!("{}{}{text}", Theme::dim(), Theme::fg(&c.text_dim))
        }
        LineStyle::Heading => format!("{}{}{text}", Theme::bold(), Theme::fg(&c.heading_fg)),
        LineStyle::Field => match text.split_once(": ") {
            Some((label, value)) => format!(
                "{}{label}:{} {value}",
                Theme::fg(&c.field_label_fg),
                Theme::fg(&c.text_normal)
            ),
            None => format!("{}{text}", Theme::fg(&c.text_normal)),
        },
        LineStyle::Body => format!("{}{text}", Theme::fg(&c.text_normal)),
    };

    format!("{body}{}{pad}", Theme::reset())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_note_is_one_based_and_clamped() {
        assert_eq!(scroll_note(0, 20, 57), " 1-20/57 ");
        assert_eq!(scroll_note(50, 20, 57), " 51-57/57 ");
    }

    #[test]
    fn field_label_gets_its_own_color() {
        let theme = Theme::default();
        let line = DetailLine {
            text: "Range: 150 feet".into(),
            style: LineStyle::Field,
        };
        let out = styled_line(&line, 30, &theme);
        assert!(out.starts_with(&format!("{}Range:", Theme::fg(&theme.colors.field_label_fg))));
        assert!(out.ends_with(&" ".repeat(15)));
    }
}
