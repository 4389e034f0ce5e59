//! Surface renderers.
//!
//! Each component draws one surface of the frame at absolute positions taken
//! from the view model's [`Layout`](crate::ui::Layout):
//!
//! - [`list`]: bordered spell list with selection and match highlights
//! - [`detail_view`]: bordered, scrollable detail pane
//! - [`input`]: query prompt on the bottom bar
//! - [`status`]: right-aligned status text on the bottom bar
//! - [`empty`]: message drawn inside the list when it has no rows
//!
//! The two bordered surfaces share [`render_box`]. A focused surface gets a heavy
//! border in the focus color; the other gets a light one.

pub mod detail_view;
pub mod empty;
pub mod input;
pub mod list;
pub mod status;

pub use detail_view::render_detail;
pub use empty::render_empty_state;
pub use input::render_input;
pub use list::render_list;
pub use status::render_status;

use crate::ui::helpers::{char_len, position_cursor, truncate_chars};
use crate::ui::theme::Theme;

/// Box-drawing glyphs: corners, horizontal and vertical edges.
struct BorderGlyphs {
    top_left: char,
    top_right: char,
    bottom_left: char,
    bottom_right: char,
    horizontal: char,
    vertical: char,
}

const LIGHT: BorderGlyphs = BorderGlyphs {
    top_left: '┌',
    top_right: '┐',
    bottom_left: '└',
    bottom_right: '┘',
    horizontal: '─',
    vertical: '│',
};

const HEAVY: BorderGlyphs = BorderGlyphs {
    top_left: '┏',
    top_right: '┓',
    bottom_left: '┗',
    bottom_right: '┛',
    horizontal: '━',
    vertical: '┃',
};

const fn glyphs(emphasized: bool) -> &'static BorderGlyphs {
    if emphasized {
        &HEAVY
    } else {
        &LIGHT
    }
}

/// A horizontal edge of `width` cells with `label` embedded after the corner.
///
/// The label is cut to fit between the corners. `right_aligned` puts it against
/// the right corner instead.
fn edge(width: usize, left: char, right: char, fill: char, label: &str, right_aligned: bool) -> String {
    if width < 2 {
        return String::new();
    }
    let inner = width - 2;
    let label = truncate_chars(label, inner);
    let fill_len = inner - char_len(&label);
    let fill: String = std::iter::repeat(fill).take(fill_len).collect();

    if right_aligned {
        format!("{left}{fill}{label}{right}")
    } else {
        format!("{left}{label}{fill}{right}")
    }
}

/// Top edge with the title on the left.
#[must_use]
pub fn box_top(width: usize, title: &str, emphasized: bool) -> String {
    let g = glyphs(emphasized);
    edge(width, g.top_left, g.top_right, g.horizontal, title, false)
}

/// Bottom edge with an optional note on the right.
#[must_use]
pub fn box_bottom(width: usize, note: &str, emphasized: bool) -> String {
    let g = glyphs(emphasized);
    edge(width, g.bottom_left, g.bottom_right, g.horizontal, note, true)
}

/// Draws an empty bordered box.
///
/// `top` and `left` are 1-indexed. Nothing is drawn if the box is smaller than
/// its own border.
#[allow(clippy::too_many_arguments)]
pub fn render_box(
    top: usize,
    left: usize,
    width: usize,
    height: usize,
    title: &str,
    note: &str,
    emphasized: bool,
    theme: &Theme,
) {
    if width < 2 || height < 2 {
        return;
    }

    let color = if emphasized {
        &theme.colors.border_focused
    } else {
        &theme.colors.border
    };
    let style = format!(
        "{}{}",
        if emphasized { Theme::bold() } else { "" },
        Theme::fg(color)
    );
    let vertical = glyphs(emphasized).vertical;

    position_cursor(top, left);
    print!("{style}{}{}", box_top(width, title, emphasized), Theme::reset());

    for row in top + 1..top + height - 1 {
        position_cursor(row, left);
        print!("{style}{vertical}{}", Theme::reset());
        position_cursor(row, left + width - 1);
        print!("{style}{vertical}{}", Theme::reset());
    }

    position_cursor(top + height - 1, left);
    print!("{style}{}{}", box_bottom(width, note, emphasized), Theme::reset());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_is_embedded_in_top_edge() {
        assert_eq!(box_top(12, " Spells ", false), "┌ Spells ──┐");
        assert_eq!(box_top(12, " Spells ", true), "┏ Spells ━━┓");
    }

    #[test]
    fn long_title_is_cut() {
        let top = box_top(6, " Spells (3/10) ", false);
        assert_eq!(char_len(&top), 6);
        assert_eq!(top, "┌ Spe┐");
    }

    #[test]
    fn note_sits_right() {
        assert_eq!(box_bottom(10, " 1/9 ", false), "└─── 1/9 ┘");
        assert_eq!(box_bottom(4, "", true), "┗━━┛");
    }

    #[test]
    fn degenerate_widths() {
        assert_eq!(box_top(1, "x", false), "");
        assert_eq!(box_top(2, "x", false), "┌┐");
    }
}
