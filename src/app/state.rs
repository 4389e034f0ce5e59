//! Session state and view model computation.
//!
//! [`AppState`] is the one context object every operation goes through. It owns
//! the catalog, the query, the derived visible rows, the selection, focus, the
//! status text and the detail pane. Only the plugin thread holds it; the worker
//! talks to it through events drained by `handle_event`, so no field is ever
//! shared across threads.
//!
//! Derived state (`rows`, `selected`) is recomputed inside the same call that
//! changes its inputs. There is no point between two events where the rows lag
//! behind the query or the catalog.
//!
//! # Example
//!
//! ```rust
//! use spellbook::app::AppState;
//! use spellbook::ui::Theme;
//! use spellbook::Spell;
//!
//! let mut state = AppState::new(Theme::default(), "/host/spells.json");
//! state.resize(24, 100);
//! state.replace_catalog(vec![
//!     Spell::new("Fireball", 3, false, false),
//!     Spell::new("Ice Storm", 4, false, false),
//! ]);
//! state.set_query("ice");
//! assert_eq!(state.rows.len(), 1);
//! assert_eq!(state.rows[0].source_index, 1);
//! ```

use super::filter::{self, VisibleRow};
use super::focus::Focus;
use crate::domain::error::{Result, SpellbookError};
use crate::domain::Spell;
use crate::ui::detail;
use crate::ui::layout::Layout;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    DetailPane, DisplayItem, EmptyState, InputInfo, ListPane, StatusInfo, UIViewModel,
};

/// Prompt drawn in front of the query.
pub const INPUT_LABEL: &str = ">>> ";

/// Session context for the plugin.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Every spell from the last catalog load, in catalog order.
    pub catalog: Vec<Spell>,

    /// Current search text.
    pub query: String,

    /// Catalog entries matching `query`, recomputed whenever catalog, query or
    /// list width change.
    pub rows: Vec<VisibleRow>,

    /// Index into `rows`. Always `< rows.len()` unless `rows` is empty, then 0.
    pub selected: usize,

    pub focus: Focus,

    /// Transient message from the worker. Cleared by any key press.
    pub status: String,

    /// Catalog index of the spell shown in the detail pane.
    pub detail: Option<usize>,

    /// First detail line inside the scroll window.
    pub detail_scroll: usize,

    pub layout: Layout,

    pub theme: Theme,

    /// Where the worker loads the catalog from. Reused on reload.
    pub catalog_path: String,
}

impl AppState {
    /// Creates an empty session: no catalog, empty query, list focused.
    #[must_use]
    pub fn new(theme: Theme, catalog_path: impl Into<String>) -> Self {
        Self {
            catalog: Vec::new(),
            query: String::new(),
            rows: Vec::new(),
            selected: 0,
            focus: Focus::default(),
            status: String::new(),
            detail: None,
            detail_scroll: 0,
            layout: Layout::default(),
            theme,
            catalog_path: catalog_path.into(),
        }
    }

    /// Text-change handler for the query input.
    ///
    /// Returns focus to the list, stores `text` and refilters.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.focus.focus_list();
        self.query = text.into();
        self.refresh_rows();
    }

    /// Replaces the whole catalog and refilters with the current query.
    ///
    /// The detail pane is cleared since its index referred to the old catalog.
    pub fn replace_catalog(&mut self, spells: Vec<Spell>) {
        tracing::debug!(spells = spells.len(), "catalog replaced");
        self.catalog = spells;
        self.detail = None;
        self.detail_scroll = 0;
        self.refresh_rows();
    }

    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status = text.into();
    }

    /// Clears the status text. Returns whether there was any.
    pub fn clear_status(&mut self) -> bool {
        if self.status.is_empty() {
            return false;
        }
        self.status.clear();
        true
    }

    /// Adapts to a new pane size. Returns whether the layout changed.
    ///
    /// Row labels depend on the list width, so they are rebuilt when it changes.
    pub fn resize(&mut self, rows: usize, cols: usize) -> bool {
        let layout = Layout::new(rows, cols);
        if layout == self.layout {
            return false;
        }

        let width_changed = layout.list_inner_width() != self.layout.list_inner_width();
        self.layout = layout;
        if width_changed {
            self.refresh_rows();
        }
        self.detail_scroll = self.detail_scroll.min(self.max_detail_scroll());
        true
    }

    /// Recomputes the visible rows and clamps the selection into them.
    pub fn refresh_rows(&mut self) {
        self.rows = filter::recompute(&self.catalog, &self.query, self.layout.list_inner_width());
        self.selected = self.selected.min(self.rows.len().saturating_sub(1));
    }

    /// Selects the previous row. Stops at the first row.
    pub fn move_selection_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Selects the next row, wrapping from the last row to the first.
    pub fn move_selection_down(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        self.selected = if self.selected + 1 >= self.rows.len() {
            0
        } else {
            self.selected + 1
        };
    }

    pub fn scroll_detail_up(&mut self) {
        self.detail_scroll = self.detail_scroll.saturating_sub(1);
    }

    /// Scrolls one line down, stopping once the last line is in view.
    pub fn scroll_detail_down(&mut self) {
        if self.detail_scroll < self.max_detail_scroll() {
            self.detail_scroll += 1;
        }
    }

    /// The spell under the selection, or `None` when no row is visible.
    ///
    /// # Errors
    ///
    /// Returns [`SpellbookError::Invariant`] if the selection or the row's source
    /// index points outside its collection. That means rows and catalog have
    /// diverged and the session cannot continue.
    pub fn selected_spell(&self) -> Result<Option<&Spell>> {
        if self.rows.is_empty() {
            return Ok(None);
        }

        let row = self.rows.get(self.selected).ok_or_else(|| {
            SpellbookError::Invariant(format!(
                "selection {} outside {} visible rows",
                self.selected,
                self.rows.len()
            ))
        })?;

        self.catalog.get(row.source_index).map(Some).ok_or_else(|| {
            SpellbookError::Invariant(format!(
                "row source index {} outside catalog of {}",
                row.source_index,
                self.catalog.len()
            ))
        })
    }

    /// Shows the selected spell in the detail pane. Focus is left alone.
    ///
    /// Returns `Ok(false)` when there is nothing to show.
    ///
    /// # Errors
    ///
    /// Propagates the invariant error from [`Self::selected_spell`].
    pub fn show_selected(&mut self) -> Result<bool> {
        if self.selected_spell()?.is_none() {
            return Ok(false);
        }

        let index = self.rows[self.selected].source_index;
        tracing::debug!(index, "detail shows spell");
        self.detail = Some(index);
        self.detail_scroll = 0;
        Ok(true)
    }

    /// The spell shown in the detail pane.
    #[must_use]
    pub fn detail_spell(&self) -> Option<&Spell> {
        self.detail.and_then(|index| self.catalog.get(index))
    }

    fn detail_content(&self) -> Vec<crate::ui::viewmodel::DetailLine> {
        let width = self.layout.detail_inner_width();
        self.detail_spell().map_or_else(
            || detail::placeholder_lines(width),
            |spell| detail::detail_lines(spell, width),
        )
    }

    fn max_detail_scroll(&self) -> usize {
        self.detail_content()
            .len()
            .saturating_sub(self.layout.detail_inner_height())
    }

    /// Builds the immutable snapshot the renderer draws.
    ///
    /// The list shows a window of rows kept around the selection; the detail
    /// pane shows the lines inside its scroll window.
    #[must_use]
    pub fn compute_viewmodel(&self) -> UIViewModel {
        let emphasis = self.focus.emphasis();

        UIViewModel {
            layout: self.layout,
            list: ListPane {
                title: format!(" Spells ({}/{}) ", self.rows.len(), self.catalog.len()),
                items: self.visible_items(),
                emphasized: emphasis.list,
                empty_state: self.empty_state(),
            },
            detail: self.detail_pane(emphasis.detail),
            input: InputInfo {
                label: INPUT_LABEL,
                query: self.query.clone(),
            },
            status: StatusInfo {
                text: self.status.clone(),
            },
        }
    }

    fn visible_items(&self) -> Vec<DisplayItem> {
        let available_rows = self.layout.list_inner_height();
        if available_rows == 0 || self.rows.is_empty() {
            return Vec::new();
        }

        let mut start = self.selected.saturating_sub(available_rows / 2);
        let end = (start + available_rows).min(self.rows.len());
        if end - start < available_rows {
            start = end.saturating_sub(available_rows);
        }

        self.rows[start..end]
            .iter()
            .enumerate()
            .map(|(offset, row)| DisplayItem {
                label: row.label.clone(),
                is_selected: start + offset == self.selected,
                highlight_ranges: row.highlight_ranges.clone(),
            })
            .collect()
    }

    fn empty_state(&self) -> Option<EmptyState> {
        if self.catalog.is_empty() {
            Some(EmptyState {
                message: "No spells loaded".to_string(),
                subtitle: "Ctrl+r reloads the catalog".to_string(),
            })
        } else if self.rows.is_empty() {
            Some(EmptyState {
                message: "No matches".to_string(),
                subtitle: format!("Nothing is named like \"{}\"", self.query),
            })
        } else {
            None
        }
    }

    fn detail_pane(&self, emphasized: bool) -> DetailPane {
        let content = self.detail_content();
        let height = self.layout.detail_inner_height();
        let total = content.len();
        let first = self.detail_scroll.min(total.saturating_sub(height));

        DetailPane {
            title: self
                .detail_spell()
                .map_or_else(|| " Details ".to_string(), |spell| format!(" {} ", spell.name)),
            lines: content.into_iter().skip(first).take(height).collect(),
            emphasized,
            scroll: (total > height).then_some((first, total)),
        }
    }
}
