//! Domain layer for the Spellbook plugin.
//!
//! Core types with no dependency on Zellij APIs.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`spell`]: Spell domain model
//!
//! # Examples
//!
//! ```
//! use spellbook::domain::{Result, Spell};
//!
//! fn cantrip() -> Result<Spell> {
//!     Ok(Spell::new("Fire Bolt", 0, false, false))
//! }
//! ```

pub mod error;
pub mod spell;

pub use error::{Result, SpellbookError};
pub use spell::Spell;
