//! Frame entry point.

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Draws the current state to stdout.
///
/// The caller must have applied the pane size (`Event::Resize`) first; the
/// frame is laid out for `state.layout`.
///
/// ```rust
/// use spellbook::app::AppState;
/// use spellbook::ui::{render, Theme};
///
/// let mut state = AppState::new(Theme::default(), "/host/spells.json");
/// state.resize(24, 80);
/// render(&state);
/// ```
pub fn render(state: &AppState) {
    let viewmodel = state.compute_viewmodel();
    render_viewmodel(&viewmodel, &state.theme);
}

fn render_viewmodel(vm: &UIViewModel, theme: &Theme) {
    if vm.layout.rows == 0 || vm.layout.cols == 0 {
        return;
    }

    components::render_list(&vm.list, &vm.layout, theme);
    components::render_detail(&vm.detail, &vm.layout, theme);
    components::render_input(&vm.input, &vm.layout, theme);
    components::render_status(&vm.status, &vm.layout, theme);
}
