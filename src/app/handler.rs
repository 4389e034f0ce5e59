//! Event handling: the input dispatcher and the bridge deliveries.
//!
//! Every mutation of [`AppState`] goes through [`handle_event`], called on the
//! plugin thread one event at a time. Key presses, catalog deliveries, status
//! deliveries and resizes share this single entry point, so they are applied in
//! the order Zellij queued them and never race each other.
//!
//! # Key dispatch
//!
//! For [`Event::Key`] the steps run in a fixed order:
//!
//! 1. A non-empty status text is cleared.
//! 2. The key's own behavior runs (confirm, navigation, focus, clear).
//! 3. The key is offered to the query input, which appends printable characters
//!    and handles backspace. A real text change goes through
//!    [`AppState::set_query`], the text-change handler.
//!
//! # Example
//!
//! ```rust
//! use spellbook::app::{handle_event, AppState, Event, Key};
//! use spellbook::ui::Theme;
//! use spellbook::Spell;
//!
//! let mut state = AppState::new(Theme::default(), "/host/spells.json");
//! handle_event(&mut state, Event::CatalogLoaded {
//!     spells: vec![Spell::new("Fireball", 3, false, false)],
//! })?;
//! handle_event(&mut state, Event::Key(Key::Char('f')))?;
//! handle_event(&mut state, Event::Key(Key::Confirm))?;
//! assert_eq!(state.detail, Some(0));
//! # Ok::<(), spellbook::SpellbookError>(())
//! ```

use crate::app::{Action, AppState, Focus};
use crate::domain::error::Result;
use crate::domain::Spell;
use crate::worker::WorkerMessage;

/// Keys the dispatcher distinguishes. `main.rs` maps Zellij key events to these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Show the selected spell in the detail pane.
    Confirm,
    Up,
    Down,
    /// Empty the query.
    ClearInput,
    /// Focus the list.
    Left,
    /// Focus the detail pane.
    Right,
    SwitchFocus,
    Backspace,
    Char(char),
    /// Ask the worker to load the catalog again.
    Reload,
    Quit,
    /// Any key without a binding. Still clears the status.
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Key(Key),

    /// A catalog arrived on the catalog channel.
    CatalogLoaded { spells: Vec<Spell> },

    /// Text arrived on the status channel.
    StatusPosted { text: String },

    /// The pane was drawn at a new size.
    Resize { rows: usize, cols: usize },
}

impl Event {
    /// Short name for spans and logs. A catalog can hold thousands of spells,
    /// so the event itself is never formatted.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Key(_) => "key",
            Self::CatalogLoaded { .. } => "catalog_loaded",
            Self::StatusPosted { .. } => "status_posted",
            Self::Resize { .. } => "resize",
        }
    }
}

/// Applies one event to `state`.
///
/// The event is consumed so a delivered catalog moves into the state as is.
/// Returns whether the UI must be redrawn, plus the side effects to run.
///
/// # Errors
///
/// Returns [`crate::SpellbookError::Invariant`] when confirming a row whose
/// source index is not in the catalog. The caller must treat it as fatal.
pub fn handle_event(state: &mut AppState, event: Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = event.kind()).entered();

    match event {
        Event::Key(key) => dispatch_key(state, key),
        Event::CatalogLoaded { spells } => {
            state.replace_catalog(spells);
            tracing::debug!(
                visible = state.rows.len(),
                query = %state.query,
                "catalog applied"
            );
            Ok((true, vec![]))
        }
        Event::StatusPosted { text } => {
            state.set_status(text);
            Ok((true, vec![]))
        }
        Event::Resize { rows, cols } => Ok((state.resize(rows, cols), vec![])),
    }
}

fn dispatch_key(state: &mut AppState, key: Key) -> Result<(bool, Vec<Action>)> {
    let mut render = state.clear_status();
    let mut actions = vec![];

    match key {
        Key::Confirm => render |= state.show_selected()?,
        Key::Up if state.focus == Focus::Detail => state.scroll_detail_up(),
        Key::Up => state.move_selection_up(),
        Key::Down if state.focus == Focus::Detail => state.scroll_detail_down(),
        Key::Down => state.move_selection_down(),
        Key::ClearInput => state.set_query(""),
        Key::Left => state.focus.focus_list(),
        Key::Right => state.focus.focus_detail(),
        Key::SwitchFocus => state.focus.toggle(),
        Key::Reload => {
            tracing::debug!(path = %state.catalog_path, "reload requested");
            actions.push(Action::PostToWorker(WorkerMessage::load_catalog(
                state.catalog_path.clone(),
            )));
        }
        Key::Quit => actions.push(Action::CloseFocus),
        Key::Backspace | Key::Char(_) | Key::Other => {}
    }

    forward_to_input(state, key);

    render |= !matches!(key, Key::Confirm | Key::Reload | Key::Quit | Key::Other);
    Ok((render, actions))
}

/// Default handling of the query input. Only text edits get through.
fn forward_to_input(state: &mut AppState, key: Key) {
    let mut text = state.query.clone();
    match key {
        Key::Char(c) if !c.is_control() => text.push(c),
        Key::Backspace => {
            text.pop();
        }
        _ => return,
    }

    if text != state.query {
        tracing::trace!(query = %text, "query edited");
        state.set_query(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::Theme;

    fn loaded(spells: Vec<Spell>) -> AppState {
        let mut state = AppState::new(Theme::default(), "/host/spells.json");
        handle_event(&mut state, Event::Resize { rows: 24, cols: 100 }).unwrap();
        handle_event(&mut state, Event::CatalogLoaded { spells }).unwrap();
        state
    }

    fn press(state: &mut AppState, key: Key) -> (bool, Vec<Action>) {
        handle_event(state, Event::Key(key)).unwrap()
    }

    fn three() -> Vec<Spell> {
        vec![
            Spell::new("Fireball", 3, false, false),
            Spell::new("Fire Bolt", 0, false, false),
            Spell::new("Ice Storm", 4, false, false),
        ]
    }

    #[test]
    fn any_key_clears_status() {
        let mut state = loaded(three());
        handle_event(&mut state, Event::StatusPosted { text: "Loaded".into() }).unwrap();
        let (render, _) = press(&mut state, Key::Other);
        assert!(render);
        assert!(state.status.is_empty());
    }

    #[test]
    fn typing_filters_and_backspace_widens() {
        let mut state = loaded(three());
        for c in "fire".chars() {
            press(&mut state, Key::Char(c));
        }
        assert_eq!(state.query, "fire");
        assert_eq!(state.rows.len(), 2);

        for _ in 0..4 {
            press(&mut state, Key::Backspace);
        }
        assert_eq!(state.rows.len(), 3);
        let (render, _) = press(&mut state, Key::Backspace);
        assert!(render);
        assert!(state.query.is_empty());
    }

    #[test]
    fn confirm_shows_selected_without_changing_focus() {
        let mut state = loaded(three());
        press(&mut state, Key::Down);
        let (render, actions) = press(&mut state, Key::Confirm);
        assert!(render);
        assert!(actions.is_empty());
        assert_eq!(state.detail, Some(1));
        assert_eq!(state.focus, Focus::List);
    }

    #[test]
    fn confirm_on_empty_view_is_a_no_op() {
        let mut state = loaded(vec![]);
        let (render, _) = press(&mut state, Key::Confirm);
        assert!(!render);
        assert_eq!(state.detail, None);
    }

    #[test]
    fn up_and_down_scroll_detail_when_focused() {
        let mut spell = Spell::new("Long", 1, false, false);
        spell.description = (0..60).map(|i| format!("Line {i}")).collect();
        let mut state = loaded(vec![spell, Spell::new("Short", 1, false, false)]);
        press(&mut state, Key::Confirm);
        press(&mut state, Key::Right);

        press(&mut state, Key::Down);
        press(&mut state, Key::Down);
        assert_eq!(state.detail_scroll, 2);
        assert_eq!(state.selected, 0);

        press(&mut state, Key::Up);
        assert_eq!(state.detail_scroll, 1);
    }

    #[test]
    fn focus_keys() {
        let mut state = loaded(three());
        press(&mut state, Key::Right);
        assert_eq!(state.focus, Focus::Detail);
        press(&mut state, Key::Right);
        assert_eq!(state.focus, Focus::Detail);
        press(&mut state, Key::Left);
        assert_eq!(state.focus, Focus::List);
        press(&mut state, Key::SwitchFocus);
        assert_eq!(state.focus, Focus::Detail);
    }

    #[test]
    fn typing_while_detail_focused_returns_to_list() {
        let mut state = loaded(three());
        press(&mut state, Key::SwitchFocus);
        press(&mut state, Key::Char('i'));
        assert_eq!(state.focus, Focus::List);
    }

    #[test]
    fn clear_input_empties_query_and_refilters() {
        let mut state = loaded(three());
        press(&mut state, Key::Char('i'));
        press(&mut state, Key::Char('c'));
        assert_eq!(state.rows.len(), 1);
        press(&mut state, Key::ClearInput);
        assert!(state.query.is_empty());
        assert_eq!(state.rows.len(), 3);
    }

    #[test]
    fn reload_and_quit_emit_actions() {
        let mut state = loaded(three());
        let (_, actions) = press(&mut state, Key::Reload);
        assert_eq!(
            actions,
            vec![Action::PostToWorker(WorkerMessage::LoadCatalog {
                path: "/host/spells.json".into(),
                trace_context: None,
            })]
        );
        let (_, actions) = press(&mut state, Key::Quit);
        assert_eq!(actions, vec![Action::CloseFocus]);
    }

    #[test]
    fn catalog_delivery_keeps_current_query() {
        let mut state = loaded(three());
        press(&mut state, Key::Char('b'));
        handle_event(
            &mut state,
            Event::CatalogLoaded {
                spells: vec![
                    Spell::new("Bane", 1, false, true),
                    Spell::new("Aid", 2, false, false),
                ],
            },
        )
        .unwrap();
        let names: Vec<usize> = state.rows.iter().map(|r| r.source_index).collect();
        assert_eq!(names, vec![0]);
    }

    #[test]
    fn diverged_rows_are_fatal_on_confirm() {
        let mut state = loaded(three());
        state.catalog.truncate(1);
        state.selected = 2;
        let err = handle_event(&mut state, Event::Key(Key::Confirm)).unwrap_err();
        assert!(err.is_fatal());
    }

    #[test]
    fn control_chars_are_not_inserted() {
        let mut state = loaded(three());
        press(&mut state, Key::Char('\u{7}'));
        assert!(state.query.is_empty());
    }

    fn session(cols: usize, spells: Vec<Spell>) -> AppState {
        let mut state = AppState::new(Theme::default(), "/host/spells.json");
        handle_event(&mut state, Event::Resize { rows: 30, cols }).unwrap();
        handle_event(&mut state, Event::CatalogLoaded { spells }).unwrap();
        state
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            press(state, Key::Char(c));
        }
    }

    fn visible(state: &AppState) -> Vec<usize> {
        state.rows.iter().map(|r| r.source_index).collect()
    }

    #[test]
    fn fire_query_keeps_catalog_order_and_drops_ice_storm() {
        let mut state = loaded(three());
        type_text(&mut state, "fire");

        assert_eq!(visible(&state), vec![0, 1]);
        assert_eq!(state.rows[0].label, "3 Fireball");
        assert_eq!(state.rows[1].label, "0 Fire Bolt");
    }

    #[test]
    fn visible_rows_match_folded_substring_for_every_prefix() {
        let catalog = vec![
            Spell::new("Mage Hand", 0, false, false),
            Spell::new("Magic Missile", 1, false, false),
            Spell::new("Imprisonment", 9, false, false),
            Spell::new("Major Image", 3, false, true),
            Spell::new("MAGNIFICENT Mansion", 7, false, false),
        ];
        let mut state = session(120, catalog.clone());

        for query in ["m", "ma", "mag", "magi", "magic"] {
            state.set_query(query);
            let expected: Vec<usize> = catalog
                .iter()
                .enumerate()
                .filter(|(_, s)| s.name.to_lowercase().contains(query))
                .map(|(i, _)| i)
                .collect();
            assert_eq!(visible(&state), expected, "query {query:?}");
        }
    }

    #[test]
    fn full_lowercase_name_finds_exactly_that_spell() {
        let mut state = loaded(three());
        type_text(&mut state, "ice storm");
        assert_eq!(visible(&state), vec![2]);
    }

    #[test]
    fn bestow_curse_gets_suffix_only_with_room() {
        let bestow = || vec![Spell::new("Bestow Curse", 3, true, true)];

        let wide = session(200, bestow());
        let label = &wide.rows[0].label;
        assert!(label.starts_with("3 Bestow Curse "));
        assert!(label.ends_with(" CR"));
        assert_eq!(label.chars().count(), wide.layout.list_inner_width());

        // 60 columns leave 16 inside the list: the label plus two.
        let narrow = session(60, bestow());
        assert_eq!(narrow.layout.list_inner_width(), "3 Bestow Curse".len() + 2);
        assert_eq!(narrow.rows[0].label, "3 Bestow Curse");
    }

    #[test]
    fn empty_catalog_ignores_query_and_confirm() {
        let mut state = loaded(vec![]);
        type_text(&mut state, "anything");
        assert!(state.rows.is_empty());

        let (render, actions) = press(&mut state, Key::Confirm);
        assert!(!render);
        assert!(actions.is_empty());
        assert_eq!(state.detail, None);
    }

    #[test]
    fn down_wraps_at_the_end_and_up_stops_at_the_top() {
        let mut state = loaded(three());

        press(&mut state, Key::Up);
        assert_eq!(state.selected, 0);

        press(&mut state, Key::Down);
        press(&mut state, Key::Down);
        assert_eq!(state.selected, 2);
        press(&mut state, Key::Down);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn selection_is_clamped_when_the_filter_shrinks() {
        let mut state = loaded(three());
        press(&mut state, Key::Down);
        press(&mut state, Key::Down);
        assert_eq!(state.selected, 2);

        type_text(&mut state, "fire");
        assert_eq!(state.selected, 1);

        press(&mut state, Key::Confirm);
        assert_eq!(state.detail_spell().map(|s| s.name.as_str()), Some("Fire Bolt"));
    }

    #[test]
    fn toggling_twice_restores_focus_and_emphasis() {
        let mut state = loaded(three());
        press(&mut state, Key::SwitchFocus);
        assert_eq!(state.focus, Focus::Detail);
        let vm = state.compute_viewmodel();
        assert!(vm.detail.emphasized && !vm.list.emphasized);

        press(&mut state, Key::SwitchFocus);
        assert_eq!(state.focus, Focus::List);
        assert!(state.compute_viewmodel().list.emphasized);
    }

    #[test]
    fn status_arrives_between_keys_and_the_next_key_clears_it() {
        let mut state = loaded(three());
        let (render, _) = handle_event(
            &mut state,
            Event::StatusPosted {
                text: "Loaded 3 spells in 1 ms".into(),
            },
        )
        .unwrap();
        assert!(render);
        assert_eq!(state.compute_viewmodel().status.text, "Loaded 3 spells in 1 ms");

        press(&mut state, Key::Left);
        assert!(state.compute_viewmodel().status.text.is_empty());
    }

    #[test]
    fn reload_replaces_catalog_under_the_current_query() {
        let mut state = loaded(three());
        type_text(&mut state, "storm");
        press(&mut state, Key::Confirm);
        assert_eq!(state.detail, Some(2));

        let (_, actions) = press(&mut state, Key::Reload);
        assert!(matches!(actions.as_slice(), [Action::PostToWorker(_)]));

        handle_event(
            &mut state,
            Event::CatalogLoaded {
                spells: vec![
                    Spell::new("Storm Sphere", 4, false, true),
                    Spell::new("Storm of Vengeance", 9, false, true),
                    Spell::new("Wish", 9, false, false),
                ],
            },
        )
        .unwrap();
        assert_eq!(visible(&state), vec![0, 1]);
        assert_eq!(state.detail, None);
        assert_eq!(state.query, "storm");
    }

    #[test]
    fn delivered_catalog_is_moved_not_copied() {
        let mut state = loaded(vec![]);
        let spells = three();
        let buffer = spells.as_ptr();

        handle_event(&mut state, Event::CatalogLoaded { spells }).unwrap();
        assert_eq!(state.catalog.as_ptr(), buffer);
    }

    #[test]
    fn shrinking_the_pane_relabels_rows() {
        let mut state = session(200, vec![Spell::new("Alarm", 1, true, false)]);
        assert!(state.rows[0].label.ends_with('R'));

        let (render, _) = handle_event(&mut state, Event::Resize { rows: 30, cols: 30 }).unwrap();
        assert!(render);
        assert_eq!(state.rows[0].label, "1 Alarm");
    }

    #[test]
    fn event_kind_names() {
        assert_eq!(Event::Key(Key::Up).kind(), "key");
        assert_eq!(Event::CatalogLoaded { spells: vec![] }.kind(), "catalog_loaded");
        assert_eq!(Event::Resize { rows: 1, cols: 1 }.kind(), "resize");
    }
}
