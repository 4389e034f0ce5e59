//! Status text on the bottom bar.

use crate::ui::helpers::{char_len, position_cursor, truncate_chars};
use crate::ui::layout::Layout;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::StatusInfo;

/// Draws the status right-aligned under the detail pane. An empty status
/// blanks the area.
pub fn render_status(status: &StatusInfo, layout: &Layout, theme: &Theme) {
    if layout.rows == 0 || layout.detail_width == 0 {
        return;
    }

    position_cursor(layout.rows, layout.detail_column());
    print!(
        "{}{}{}",
        Theme::fg(&theme.colors.status_fg),
        right_aligned(&status.text, layout.detail_width),
        Theme::reset()
    );
}

/// `text` padded on the left to `width`, leaving one blank column at the edge.
fn right_aligned(text: &str, width: usize) -> String {
    let text = truncate_chars(text, width.saturating_sub(1));
    let pad = width - char_len(&text);
    format!("{}{text}", " ".repeat(pad.saturating_sub(1)))
        + if pad > 0 { " " } else { "" }
}
