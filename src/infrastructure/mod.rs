//! Filesystem conventions of the Zellij plugin sandbox.
//!
//! Inside the sandbox the host's home directory is mounted at `/host`.

pub mod paths;

pub use paths::{default_catalog_path, display_path, expand_tilde, get_data_dir};
