//! Catalog data source for the background worker.
//!
//! The plugin thread never touches the filesystem. The worker owns a
//! [`CatalogSource`], loads the spells and hands them over as owned values.
//!
//! # Modules
//!
//! - `source`: the [`CatalogSource`] trait
//! - `json`: JSON file implementation
//! - `models`: on-disk record types, kept apart from the domain `Spell`

pub mod json;
pub mod models;
pub mod source;

pub use json::JsonCatalog;
pub use models::SpellRecord;
pub use source::{sort_catalog, CatalogSource};
