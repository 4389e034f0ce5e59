//! Application layer: session state, the filter engine and event handling.
//!
//! Data flows one way:
//!
//! ```text
//! Zellij event ─► Event ─► handle_event ─► AppState mutation ─► Actions
//!                                   │
//!                                   └─► compute_viewmodel ─► renderer
//! ```
//!
//! # Modules
//!
//! - [`highlight`]: case-insensitive match ranges on code points
//! - [`filter`]: visible rows for a catalog and a query
//! - [`focus`]: list/detail focus state machine
//! - [`state`]: the session context and view model computation
//! - [`handler`]: the input dispatcher and bridge deliveries
//! - [`actions`]: side effects returned to the plugin shim

pub mod actions;
pub mod filter;
pub mod focus;
pub mod handler;
pub mod highlight;
pub mod state;

pub use actions::Action;
pub use filter::VisibleRow;
pub use focus::{Focus, SurfaceEmphasis};
pub use handler::{handle_event, Event, Key};
pub use state::AppState;
