//! On-disk spell records.
//!
//! Spell dumps found in the wild disagree on small details: components are a
//! string or a list, descriptions a string or a list of paragraphs, flags a bool
//! or `"yes"`/`"no"`. [`SpellRecord`] accepts all of these and normalizes them
//! when converted into a domain [`Spell`].

use crate::domain::Spell;
use serde::{Deserialize, Serialize};

/// A single string or a list of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl Default for OneOrMany {
    fn default() -> Self {
        Self::Many(Vec::new())
    }
}

impl OneOrMany {
    fn into_vec(self) -> Vec<String> {
        match self {
            Self::One(s) if s.trim().is_empty() => Vec::new(),
            Self::One(s) => vec![s],
            Self::Many(v) => v,
        }
    }

    fn join(self, sep: &str) -> String {
        self.into_vec().join(sep)
    }
}

/// A yes/no flag written as a bool or as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Flag {
    Bool(bool),
    Text(String),
}

impl Default for Flag {
    fn default() -> Self {
        Self::Bool(false)
    }
}

impl Flag {
    fn is_set(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Text(s) => matches!(s.trim().to_ascii_lowercase().as_str(), "yes" | "true" | "y"),
        }
    }
}

/// A spell as stored in the catalog file.
///
/// Only `name` and `level` are required.
///
/// # Examples
///
/// ```
/// use spellbook::catalog::SpellRecord;
/// use spellbook::Spell;
///
/// let record: SpellRecord = serde_json::from_str(
///     r#"{"name": "Alarm", "level": 1, "ritual": "yes", "components": ["V", "S", "M"]}"#,
/// ).unwrap();
/// let spell = Spell::from(record);
/// assert!(spell.ritual);
/// assert_eq!(spell.components, "V, S, M");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellRecord {
    pub name: String,
    pub level: u8,
    #[serde(default)]
    pub ritual: Flag,
    #[serde(default)]
    pub concentration: Flag,
    #[serde(default)]
    pub school: Option<String>,
    #[serde(default)]
    pub casting_time: Option<String>,
    #[serde(default)]
    pub range: Option<String>,
    #[serde(default)]
    pub components: OneOrMany,
    /// Material component detail, appended to `components` in parentheses.
    #[serde(default)]
    pub material: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default, alias = "description")]
    pub desc: OneOrMany,
    #[serde(default)]
    pub higher_level: OneOrMany,
    #[serde(default)]
    pub classes: OneOrMany,
}

impl From<SpellRecord> for Spell {
    fn from(record: SpellRecord) -> Self {
        let mut components = record.components.join(", ");
        if let Some(material) = record.material.filter(|m| !m.trim().is_empty()) {
            components = format!("{components} ({})", material.trim());
        }

        Self {
            name: record.name.trim().to_string(),
            level: record.level,
            ritual: record.ritual.is_set(),
            concentration: record.concentration.is_set(),
            school: record.school.unwrap_or_default(),
            casting_time: record.casting_time.unwrap_or_default(),
            range: record.range.unwrap_or_default(),
            components,
            duration: record.duration.unwrap_or_default(),
            description: record.desc.into_vec(),
            higher_level: record.higher_level.into_vec(),
            classes: record.classes.into_vec(),
        }
    }
}
