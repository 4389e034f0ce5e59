//! View model types representing renderable UI state.
//!
//! View models are immutable snapshots computed from `AppState` by
//! `AppState::compute_viewmodel()`. The renderer consumes them and never reads
//! application state directly, so everything a frame shows was decided on the
//! plugin thread before drawing starts.
//!
//! # Example
//!
//! ```rust
//! use spellbook::app::AppState;
//! use spellbook::ui::Theme;
//!
//! let state = AppState::new(Theme::default(), "/host/spells.json");
//! let vm = state.compute_viewmodel();
//! assert!(vm.list.items.is_empty());
//! assert!(vm.list.empty_state.is_some());
//! ```

use super::layout::Layout;

/// Complete UI view model for one frame.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Geometry the frame was laid out for.
    pub layout: Layout,

    /// Left pane: filtered spell list.
    pub list: ListPane,

    /// Right pane: the spell picked with Enter, if any.
    pub detail: DetailPane,

    /// Bottom-left query input.
    pub input: InputInfo,

    /// Bottom-right status text.
    pub status: StatusInfo,
}

/// The spell list surface.
#[derive(Debug, Clone)]
pub struct ListPane {
    /// Border title, e.g. `" Spells (12/319) "`.
    pub title: String,

    /// Rows inside the visible window.
    pub items: Vec<DisplayItem>,

    /// Whether the border is drawn with emphasis (list has focus).
    pub emphasized: bool,

    /// Message shown instead of rows when there is nothing to list.
    pub empty_state: Option<EmptyState>,
}

/// Display information for a single list row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    /// Row label, already padded and suffixed.
    pub label: String,

    /// Whether this row is the current selection.
    pub is_selected: bool,

    /// Character ranges of `label` to highlight as query matches.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// The detail surface.
#[derive(Debug, Clone)]
pub struct DetailPane {
    /// Border title.
    pub title: String,

    /// Lines inside the scroll window, already wrapped.
    pub lines: Vec<DetailLine>,

    /// Whether the border is drawn with emphasis (detail has focus).
    pub emphasized: bool,

    /// `Some((first, total))` when the content is taller than the pane.
    pub scroll: Option<(usize, usize)>,
}

/// One wrapped line of detail text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailLine {
    pub text: String,
    pub style: LineStyle,
}

/// Visual role of a detail line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    /// Spell name.
    Title,
    /// Level/school subtitle.
    Subtitle,
    /// `Label: value` property line.
    Field,
    /// Section heading such as "At Higher Levels".
    Heading,
    /// Description prose.
    Body,
    /// Placeholder text when nothing is selected.
    Hint,
}

/// Empty state message display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message (e.g., "No spells loaded").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

/// Query input display information.
#[derive(Debug, Clone)]
pub struct InputInfo {
    /// Prompt drawn before the query.
    pub label: &'static str,

    /// Current query text.
    pub query: String,
}

/// Status text display information.
#[derive(Debug, Clone)]
pub struct StatusInfo {
    /// Text drawn right-aligned; empty when cleared.
    pub text: String,
}
