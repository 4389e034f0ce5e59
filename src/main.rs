//! Zellij plugin shim.
//!
//! Translates Zellij events into [`spellbook::Event`]s, runs them through
//! [`handle_event`] and carries out the returned actions. Worker deliveries
//! arrive as `CustomMessage` events on the same queue as key presses and are
//! routed by `worker::bridge`.
//!
//! # Keybindings
//!
//! - `Enter`: show the selected spell
//! - `Up`/`Ctrl+k`, `Down`/`Ctrl+j`: move the selection, or scroll the details
//!   when they are focused
//! - `Left`/`Ctrl+h`, `Right`/`Ctrl+l`, `Tab`: focus list, details, toggle
//! - `Ctrl+d`: clear the query
//! - `Ctrl+r`: reload the catalog
//! - `Esc`/`Ctrl+c`: hide the plugin
//! - anything printable: edit the query

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;
use zellij_tile::shim::post_message_to;

use spellbook::worker::bridge::{route_delivery, REQUEST_CHANNEL};
use spellbook::worker::{SpellbookWorker, WorkerMessage};
use spellbook::{handle_event, Action, Config, Event, Key};

register_plugin!(State);
register_worker!(SpellbookWorker, spellbook_worker, SPELLBOOK_WORKER);

/// Name `register_worker!` derives from the `spellbook_worker` identifier.
const WORKER_NAME: &str = "spellbook";

struct State {
    app: spellbook::AppState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: spellbook::initialize(&Config::default()),
        }
    }
}

impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        spellbook::observability::init_tracing(&config);

        let _guard = tracing::debug_span!("plugin_load").entered();
        tracing::debug!(catalog_path = %config.catalog_path, "parsed configuration");
        self.app = spellbook::initialize(&config);

        request_permission(&[
            PermissionType::ReadApplicationState,
            PermissionType::FullHdAccess,
        ]);
        subscribe(&[
            EventType::Key,
            EventType::CustomMessage,
            EventType::PermissionRequestResult,
        ]);
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let _guard = tracing::debug_span!("plugin_update", event_type = %event_name(&event)).entered();

        let ours = match event {
            zellij_tile::prelude::Event::Key(key) => Event::Key(map_key(&key)),
            zellij_tile::prelude::Event::CustomMessage(name, payload) => {
                match route_delivery(&name, &payload) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(status) => {
                self.handle_permission_result(status);
                return false;
            }
            _ => return false,
        };

        self.dispatch(ours)
    }

    fn render(&mut self, rows: usize, cols: usize) {
        self.dispatch(Event::Resize { rows, cols });
        spellbook::ui::render(&self.app);
    }
}

impl State {
    /// Runs one event through the dispatcher. Returns whether to redraw.
    ///
    /// Fatal errors abort the frame.
    fn dispatch(&mut self, event: Event) -> bool {
        match handle_event(&mut self.app, event) {
            Ok((should_render, actions)) => {
                for action in &actions {
                    Self::execute_action(action);
                }
                should_render
            }
            Err(e) if e.is_fatal() => {
                tracing::error!(error = %e, "fatal error while handling event");
                panic!("spellbook: {e}");
            }
            Err(e) => {
                tracing::warn!(error = %e, "error handling event");
                false
            }
        }
    }

    fn handle_permission_result(&self, status: PermissionStatus) {
        match status {
            PermissionStatus::Granted => {
                tracing::debug!("permissions granted, loading catalog");
                post_worker_message(&WorkerMessage::load_catalog(self.app.catalog_path.clone()));
            }
            PermissionStatus::Denied => {
                tracing::warn!("permissions denied, the catalog cannot be read");
            }
        }
    }

    #[tracing::instrument(level = "debug")]
    fn execute_action(action: &Action) {
        match action {
            Action::CloseFocus => hide_self(),
            Action::PostToWorker(message) => post_worker_message(message),
        }
    }
}

fn post_worker_message(message: &WorkerMessage) {
    match serde_json::to_string(message) {
        Ok(payload) => post_message_to(PluginMessage {
            worker_name: Some(WORKER_NAME.to_string()),
            name: REQUEST_CHANNEL.to_string(),
            payload,
        }),
        Err(e) => tracing::warn!(error = %e, "failed to serialize worker message"),
    }
}

fn map_key(key: &KeyWithModifier) -> Key {
    if key.has_modifiers(&[KeyModifier::Ctrl]) {
        return match key.bare_key {
            BareKey::Char('k') => Key::Up,
            BareKey::Char('j') => Key::Down,
            BareKey::Char('h') => Key::Left,
            BareKey::Char('l') => Key::Right,
            BareKey::Char('d') => Key::ClearInput,
            BareKey::Char('r') => Key::Reload,
            BareKey::Char('c') => Key::Quit,
            _ => Key::Other,
        };
    }
    if !key.has_no_modifiers() && !key.has_modifiers(&[KeyModifier::Shift]) {
        return Key::Other;
    }

    match key.bare_key {
        BareKey::Enter => Key::Confirm,
        BareKey::Up => Key::Up,
        BareKey::Down => Key::Down,
        BareKey::Left => Key::Left,
        BareKey::Right => Key::Right,
        BareKey::Tab => Key::SwitchFocus,
        BareKey::Backspace => Key::Backspace,
        BareKey::Esc => Key::Quit,
        BareKey::Char(c) => Key::Char(c),
        _ => Key::Other,
    }
}

fn event_name(event: &zellij_tile::prelude::Event) -> String {
    match event {
        zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
        zellij_tile::prelude::Event::CustomMessage(name, _) => format!("CustomMessage({name})"),
        zellij_tile::prelude::Event::PermissionRequestResult(..) => {
            "PermissionRequestResult".to_string()
        }
        _ => "Other".to_string(),
    }
}
