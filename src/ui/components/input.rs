//! Query input on the bottom bar.

use crate::ui::helpers::{char_len, position_cursor};
use crate::ui::layout::Layout;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::InputInfo;

/// Draws the prompt and query under the list.
pub fn render_input(input: &InputInfo, layout: &Layout, theme: &Theme) {
    if layout.rows == 0 || layout.list_width == 0 {
        return;
    }

    let (prompt, query) = fit(input.label, &input.query, layout.list_width);
    let pad = layout.list_width - char_len(&prompt) - char_len(&query);

    position_cursor(layout.rows, 1);
    print!(
        "{}{}{prompt}{}{}{query}{}{}",
        Theme::bold(),
        Theme::fg(&theme.colors.prompt_fg),
        Theme::reset(),
        Theme::fg(&theme.colors.text_normal),
        " ".repeat(pad),
        Theme::reset()
    );
}

/// Fits prompt and query into `width` chars.
///
/// The end of the query is kept so the text being typed stays visible.
fn fit(prompt: &str, query: &str, width: usize) -> (String, String) {
    let prompt: String = prompt.chars().take(width).collect();
    let room = width - char_len(&prompt);
    let skip = char_len(query).saturating_sub(room);
    (prompt, query.chars().skip(skip).collect())
}
