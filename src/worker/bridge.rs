//! Async bridge between the worker and the plugin's event queue.
//!
//! The worker publishes on two logical channels, the catalog channel and the
//! status channel. Both travel as Zellij plugin messages, so they arrive as
//! `CustomMessage` events on the same queue that carries key presses. The plugin
//! thread turns each delivery into an [`Event`] with [`route_delivery`] and feeds
//! it to `handle_event` like any other event. That gives one ordered stream of
//! mutations and no state shared across threads.
//!
//! ```text
//!  worker ──encode──► spellbook::catalog ─┐
//!         ──encode──► spellbook::status  ─┼─► CustomMessage queue ─► route_delivery ─► handle_event
//!  keys ──────────────────────────────────┘
//! ```

use crate::app::Event;
use crate::domain::error::{Result, SpellbookError};
use crate::domain::Spell;
use crate::worker::WorkerResponse;

/// Message name of catalog deliveries. Payload: JSON array of spells.
pub const CATALOG_CHANNEL: &str = "spellbook::catalog";

/// Message name of status deliveries. Payload: the raw status text.
pub const STATUS_CHANNEL: &str = "spellbook::status";

/// Message name the plugin uses for requests to the worker.
pub const REQUEST_CHANNEL: &str = "spellbook::request";

/// Turns a worker response into a `(name, payload)` pair for `post_message_to_plugin`.
///
/// # Errors
///
/// Returns [`SpellbookError::Worker`] if the catalog cannot be serialized.
pub fn encode(response: &WorkerResponse) -> Result<(&'static str, String)> {
    match response {
        WorkerResponse::CatalogLoaded { spells } => serde_json::to_string(spells)
            .map(|payload| (CATALOG_CHANNEL, payload))
            .map_err(|e| SpellbookError::Worker(format!("failed to encode catalog: {e}"))),
        WorkerResponse::Status { text } => Ok((STATUS_CHANNEL, text.clone())),
    }
}

/// Maps a plugin message to the event it stands for.
///
/// Unknown names and undecodable payloads are logged and dropped.
///
/// # Example
///
/// ```rust
/// use spellbook::app::Event;
/// use spellbook::worker::bridge::{route_delivery, STATUS_CHANNEL};
///
/// let event = route_delivery(STATUS_CHANNEL, "Loaded 2 spells");
/// assert_eq!(event, Some(Event::StatusPosted { text: "Loaded 2 spells".into() }));
/// assert_eq!(route_delivery("someone::else", ""), None);
/// ```
#[must_use]
pub fn route_delivery(name: &str, payload: &str) -> Option<Event> {
    match name {
        CATALOG_CHANNEL => match serde_json::from_str::<Vec<Spell>>(payload) {
            Ok(spells) => Some(Event::CatalogLoaded { spells }),
            Err(e) => {
                tracing::warn!(error = %e, "dropping undecodable catalog delivery");
                None
            }
        },
        STATUS_CHANNEL => Some(Event::StatusPosted {
            text: payload.to_string(),
        }),
        other => {
            tracing::debug!(name = other, "ignoring message on unknown channel");
            None
        }
    }
}
