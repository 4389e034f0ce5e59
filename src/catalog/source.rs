//! Catalog source abstraction.

use crate::domain::error::Result;
use crate::domain::Spell;

/// Something the worker can load a spell catalog from.
///
/// Implementations return spells already in catalog order (see
/// [`sort_catalog`]). A source is owned by the worker thread only.
///
/// # Examples
///
/// ```no_run
/// use spellbook::catalog::{CatalogSource, JsonCatalog};
///
/// let mut source = JsonCatalog::new("/host/.local/share/zellij/spellbook/spells.json");
/// let spells = source.load()?;
/// println!("{} spells from {}", spells.len(), source.location());
/// # Ok::<(), spellbook::SpellbookError>(())
/// ```
pub trait CatalogSource: Send {
    /// Where the catalog comes from, for status text and logs.
    fn location(&self) -> &str;

    /// Reads the whole catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be read or has the wrong shape.
    fn load(&mut self) -> Result<Vec<Spell>>;
}

/// Sorts spells into catalog order: by level, then by name.
pub fn sort_catalog(spells: &mut [Spell]) {
    spells.sort_by(|a, b| a.level.cmp(&b.level).then_with(|| a.name.cmp(&b.name)));
}
