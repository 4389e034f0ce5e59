//! Tracing with OTLP JSON export to a local file.
//!
//! The plugin runs in a sandbox without network access, so spans go through a
//! custom OpenTelemetry exporter into `<data_dir>/spellbook-otlp.json`, one OTLP
//! document per line:
//!
//! ```text
//! tracing ─► tracing-opentelemetry ─► opentelemetry_sdk ─► FileSpanExporter ─► FileWriter
//! ```
//!
//! The file is rotated at 10 MiB and three numbered backups are kept. The level
//! comes from the `trace_level` configuration key and defaults to `info`.
//!
//! # Usage
//!
//! ```no_run
//! use spellbook::observability::init_tracing;
//! use spellbook::Config;
//!
//! init_tracing(&Config::default());
//! tracing::info!("plugin loaded");
//! ```

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use file_writer::{FileWriter, RotationPolicy};
pub use init::{init_tracing, trace_file_path, SERVICE_NAME};
