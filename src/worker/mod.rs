//! Background worker and the bridge that feeds its output into the UI.
//!
//! - `messages`: request/response types with trace context propagation
//! - `bridge`: channel names and the mapping from deliveries to app events
//! - `handler`: the Zellij worker that loads the catalog

pub mod bridge;
pub mod handler;
pub mod messages;

pub use handler::SpellbookWorker;
pub use messages::{TraceContext, WorkerMessage, WorkerResponse};
