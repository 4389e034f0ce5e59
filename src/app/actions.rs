//! Side effects requested by the event handler.
//!
//! `handle_event` never calls into Zellij. It returns [`Action`]s and the plugin
//! shim in `main.rs` carries them out after the state mutation is complete.
//!
//! # Example
//!
//! ```rust
//! use spellbook::app::Action;
//! use spellbook::worker::WorkerMessage;
//!
//! let reload = Action::PostToWorker(WorkerMessage::load_catalog("/host/spells.json".into()));
//! assert_ne!(reload, Action::CloseFocus);
//! ```

use crate::worker::WorkerMessage;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Closes the plugin pane.
    CloseFocus,

    /// Hands a request to the background worker.
    PostToWorker(WorkerMessage),
}
