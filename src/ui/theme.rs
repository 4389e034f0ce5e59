//! Color themes and ANSI escape sequence generation.
//!
//! Themes are TOML documents. Two Catppuccin variants are built in and a custom
//! file can be supplied through the `theme_file` configuration key.
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! title_fg = "#cdd6f4"
//! selection_fg = "#1e1e2e"
//! selection_bg = "#cba6f7"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! border_focused = "#cba6f7"
//! match_highlight_fg = "#1e1e2e"
//! match_highlight_bg = "#f38ba8"
//! field_label_fg = "#89b4fa"
//! heading_fg = "#f9e2af"
//! prompt_fg = "#a6e3a1"
//! status_fg = "#fab387"
//! empty_state_fg = "#89b4fa"
//! ```

use crate::domain::error::{Result, SpellbookError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Names accepted by [`Theme::from_name`].
pub const BUILTIN_THEMES: [&str; 2] = ["catppuccin-mocha", "catppuccin-latte"];

/// Color scheme for UI rendering.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Hex color strings (e.g. `"#cdd6f4"`) for every UI element.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Pane titles and the spell name in the detail pane.
    pub title_fg: String,

    pub selection_fg: String,
    pub selection_bg: String,

    pub text_normal: String,
    /// Secondary text (subtitle, hints, scroll indicator).
    pub text_dim: String,

    /// Border of an unfocused pane.
    pub border: String,
    /// Border of the focused pane.
    pub border_focused: String,

    pub match_highlight_fg: String,
    pub match_highlight_bg: String,

    /// `Casting Time:` style labels in the detail pane.
    pub field_label_fg: String,
    /// Section headings in the detail pane.
    pub heading_fg: String,

    /// The `>>> ` prompt of the query input.
    pub prompt_fg: String,
    pub status_fg: String,
    pub empty_state_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// # Example
    ///
    /// ```rust
    /// use spellbook::ui::Theme;
    ///
    /// let theme = Theme::from_name("catppuccin-latte").unwrap();
    /// assert_eq!(theme.name, "catppuccin-latte");
    /// assert!(Theme::from_name("solarized").is_none());
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`SpellbookError::Theme`] if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            SpellbookError::Theme(format!("failed to read {}: {e}", path.display()))
        })?;

        toml::from_str(&contents)
            .map_err(|e| SpellbookError::Theme(format!("failed to parse {}: {e}", path.display())))
    }

    /// Parses `#rrggbb` (with or without `#`). Falls back to white.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(255);
        (channel(0..2), channel(2..4), channel(4..6))
    }

    /// ANSI 24-bit foreground escape for a hex color.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background escape for a hex color.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Clears all styling.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Catppuccin Mocha.
    ///
    /// # Panics
    ///
    /// Panics if the embedded theme fails to parse, which the theme tests rule out.
    fn default() -> Self {
        Self::from_name("catppuccin-mocha")
            .expect("Built-in catppuccin-mocha theme should always parse")
    }
}
