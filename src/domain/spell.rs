//! Spell domain model.
//!
//! A [`Spell`] is one entry of the catalog. It is produced by the worker thread,
//! handed to the plugin thread as an owned value and never mutated afterwards.

use serde::{Deserialize, Serialize};

/// A single spell in the catalog.
///
/// Only `name`, `level`, `ritual` and `concentration` take part in filtering and
/// list rendering. The remaining fields feed the detail pane and may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spell {
    pub name: String,
    pub level: u8,
    pub ritual: bool,
    pub concentration: bool,
    #[serde(default)]
    pub school: String,
    #[serde(default)]
    pub casting_time: String,
    #[serde(default)]
    pub range: String,
    #[serde(default)]
    pub components: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub description: Vec<String>,
    #[serde(default)]
    pub higher_level: Vec<String>,
    #[serde(default)]
    pub classes: Vec<String>,
}

impl Spell {
    /// Creates a spell with only the fields the list needs.
    ///
    /// # Examples
    ///
    /// ```
    /// use spellbook::Spell;
    ///
    /// let spell = Spell::new("Fireball", 3, false, false);
    /// assert_eq!(spell.level_label(), "3rd-level");
    /// ```
    #[must_use]
    pub fn new(name: impl Into<String>, level: u8, ritual: bool, concentration: bool) -> Self {
        Self {
            name: name.into(),
            level,
            ritual,
            concentration,
            ..Self::default()
        }
    }

    /// Human-readable level, e.g. "Cantrip", "1st-level", "9th-level".
    #[must_use]
    pub fn level_label(&self) -> String {
        let suffix = match self.level {
            0 => return "Cantrip".to_string(),
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        };
        format!("{}{suffix}-level", self.level)
    }

    /// Number of compact flags (`C`, `R`) shown next to the list label. The
    /// filter pads labels so the flags end at the right edge.
    #[must_use]
    pub const fn flag_count(&self) -> usize {
        self.concentration as usize + self.ritual as usize
    }
}
