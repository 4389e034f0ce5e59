//! JSON file catalog.
//!
//! # File Format
//!
//! Either a bare array of spell records:
//!
//! ```json
//! [
//!   { "name": "Fireball", "level": 3, "school": "Evocation" },
//!   { "name": "Bless", "level": 1, "concentration": true }
//! ]
//! ```
//!
//! or a versioned document:
//!
//! ```json
//! { "version": 1, "spells": [ { "name": "Alarm", "level": 1, "ritual": true } ] }
//! ```
//!
//! Records with a blank name are skipped. The result is sorted by level, then
//! by name.

use crate::catalog::models::SpellRecord;
use crate::catalog::source::{sort_catalog, CatalogSource};
use crate::domain::error::{Result, SpellbookError};
use crate::domain::Spell;
use serde::Deserialize;
use std::path::PathBuf;

/// Highest versioned format this build understands.
const SUPPORTED_VERSION: u32 = 1;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    Versioned { version: u32, spells: Vec<SpellRecord> },
    Bare(Vec<SpellRecord>),
}

/// Catalog read from a JSON file on every [`CatalogSource::load`].
///
/// Nothing is cached, so a reload picks up edits to the file.
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    file_path: PathBuf,
    location: String,
}

impl JsonCatalog {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        let file_path = file_path.into();
        let location = file_path.display().to_string();
        Self {
            file_path,
            location,
        }
    }

    /// Parses catalog JSON into sorted spells.
    ///
    /// # Errors
    ///
    /// Returns [`SpellbookError::Catalog`] on malformed JSON or an unsupported
    /// version.
    pub fn parse(contents: &str) -> Result<Vec<Spell>> {
        let file: CatalogFile = serde_json::from_str(contents)
            .map_err(|e| SpellbookError::Catalog(format!("failed to parse JSON: {e}")))?;

        let records = match file {
            CatalogFile::Versioned { version, spells } if version <= SUPPORTED_VERSION => spells,
            CatalogFile::Versioned { version, .. } => {
                return Err(SpellbookError::Catalog(format!(
                    "unsupported catalog version {version} (expected at most {SUPPORTED_VERSION})"
                )));
            }
            CatalogFile::Bare(spells) => spells,
        };

        let total = records.len();
        let mut spells: Vec<Spell> = records
            .into_iter()
            .map(Spell::from)
            .filter(|spell| !spell.name.is_empty())
            .collect();

        if spells.len() < total {
            tracing::warn!(skipped = total - spells.len(), "skipped records without a name");
        }

        sort_catalog(&mut spells);
        Ok(spells)
    }
}

impl CatalogSource for JsonCatalog {
    fn location(&self) -> &str {
        &self.location
    }

    fn load(&mut self) -> Result<Vec<Spell>> {
        tracing::debug!(path = ?self.file_path, "reading catalog file");
        let contents = std::fs::read_to_string(&self.file_path)?;
        let spells = Self::parse(&contents)?;
        tracing::debug!(spells = spells.len(), "catalog parsed");
        Ok(spells)
    }
}
