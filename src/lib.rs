//! Spellbook: a Zellij plugin for browsing a spell catalog.
//!
//! The pane is split in two. The left side lists spells filtered by a
//! case-insensitive substring query with matches highlighted. The right side
//! shows the details of the spell picked with Enter. A query input sits under
//! the list and a status line under the details.
//!
//! ```text
//! ┌ Spells (3/312) ─────┐┌ Fireball ──────────────────────────┐
//! │3 Fireball           ││Fireball                            │
//! │0 Fire Bolt          ││3rd-level evocation                 │
//! │4 Wall of Fire    C  ││Casting Time: 1 action              │
//! └─────────────────────┘└────────────────────────────────────┘
//! >>> fire                          Loaded 312 spells in 4 ms
//! ```
//!
//! # Architecture
//!
//! ```text
//! main.rs (Zellij shim)
//!    │ key presses, CustomMessage deliveries, resizes
//!    ▼
//! app::handle_event ──► AppState ──► compute_viewmodel ──► ui::render
//!    │ Action::PostToWorker
//!    ▼
//! worker (catalog loading) ──► worker::bridge channels ──► back into handle_event
//! ```
//!
//! - [`app`]: session state, the event dispatcher, filtering and highlighting
//! - [`catalog`]: catalog sources and the JSON file format
//! - [`domain`]: the [`Spell`] model and [`SpellbookError`]
//! - [`infrastructure`]: sandbox paths
//! - [`ui`]: view model, layout, themes and ANSI components
//! - [`worker`]: the loader thread and its message bridge
//! - [`observability`]: tracing with OTLP file export
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/spellbook.wasm" {
//!         catalog_path "~/.local/share/zellij/spellbook/spells.json"
//!         theme "catppuccin-latte"
//!         trace_level "debug"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use spellbook::{handle_event, initialize, Config, Event, Key, Spell};
//!
//! let mut state = initialize(&Config::default());
//! handle_event(&mut state, Event::Resize { rows: 24, cols: 100 })?;
//! handle_event(&mut state, Event::CatalogLoaded {
//!     spells: vec![Spell::new("Bless", 1, false, true)],
//! })?;
//! let (render, actions) = handle_event(&mut state, Event::Key(Key::Char('b')))?;
//! assert!(render && actions.is_empty());
//! assert_eq!(state.rows.len(), 1);
//! # Ok::<(), spellbook::SpellbookError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod catalog;
pub mod domain;
pub mod infrastructure;
pub mod worker;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, Key};
pub use domain::{Result, Spell, SpellbookError};
pub use ui::Theme;

use std::collections::BTreeMap;
use ui::theme::BUILTIN_THEMES;

/// Plugin configuration, read from the KDL block of the plugin pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Catalog file, already expanded into the sandbox.
    pub catalog_path: String,

    /// Built-in theme. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// TOML theme file. See [`ui::theme`] for the format.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for tracing. Default: `"info"`.
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: infrastructure::default_catalog_path(),
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Reads the known keys; unknown keys are ignored and blank values count as
    /// unset.
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use spellbook::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("catalog_path".to_string(), "~/dnd/srd.json".to_string());
    /// map.insert("theme".to_string(), "catppuccin-latte".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.catalog_path, "/host/dnd/srd.json");
    /// assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let value = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };

        Self {
            catalog_path: value("catalog_path").map_or_else(
                infrastructure::default_catalog_path,
                |path| infrastructure::expand_tilde(&path),
            ),
            theme_name: value("theme"),
            theme_file: value("theme_file").map(|path| infrastructure::expand_tilde(&path)),
            trace_level: value("trace_level"),
        }
    }

    /// Resolves the configured theme: `theme_file`, then `theme`, then the
    /// default.
    ///
    /// # Errors
    ///
    /// [`SpellbookError::Theme`] if the theme file cannot be read or parsed,
    /// [`SpellbookError::Config`] for an unknown built-in name.
    pub fn theme(&self) -> Result<Theme> {
        if let Some(file) = &self.theme_file {
            return Theme::from_file(file);
        }
        match &self.theme_name {
            None => Ok(Theme::default()),
            Some(name) => Theme::from_name(name).ok_or_else(|| {
                SpellbookError::Config(format!(
                    "unknown theme \"{name}\" (expected one of {})",
                    BUILTIN_THEMES.join(", ")
                ))
            }),
        }
    }
}

/// Builds the starting session for `config`.
///
/// A theme that fails to load is logged and replaced by the default.
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(catalog_path = %config.catalog_path, "initializing spellbook");

    let theme = config.theme().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "falling back to default theme");
        Theme::default()
    });

    AppState::new(theme, config.catalog_path.clone())
}
