//! Incremental filter producing the visible rows of the spell list.
//!
//! [`recompute`] is a pure function of the catalog, the query and the width of the
//! list's inner area. `AppState` calls it whenever one of those changes, so the
//! visible rows never lag behind the query or a freshly loaded catalog.
//!
//! # Row labels
//!
//! Each row reads `"<level> <name>"`. Ritual and concentration spells get a
//! compact flag suffix pushed to the right edge (`C`, `R`, or `CR`) when at least
//! three columns are left over; on narrower lists the suffix is dropped.
//!
//! ```text
//! 3 Fireball
//! 3 Bestow Curse          CR
//! 1 Detect Magic          CR
//! ```

use super::highlight::{contains_folded, highlight};
use crate::domain::Spell;

/// Minimum free columns after the label before the flag suffix is drawn.
const MIN_SUFFIX_ROOM: usize = 3;

/// One row of the filtered list.
///
/// `source_index` points back into the catalog the row was computed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleRow {
    /// Full label including padding and flag suffix.
    pub label: String,

    /// Character ranges of `label` matching the query.
    pub highlight_ranges: Vec<(usize, usize)>,

    /// Index of the spell in the catalog.
    pub source_index: usize,
}

/// Filters `catalog` by `query` and renders a label for every match.
///
/// Matching is a case-insensitive substring test on the spell name. Catalog order
/// is preserved.
///
/// # Example
///
/// ```rust
/// use spellbook::app::filter::recompute;
/// use spellbook::Spell;
///
/// let catalog = vec![
///     Spell::new("Fireball", 3, false, false),
///     Spell::new("Fire Bolt", 0, false, false),
///     Spell::new("Ice Storm", 4, false, false),
/// ];
/// let rows = recompute(&catalog, "fire", 30);
/// let indices: Vec<usize> = rows.iter().map(|r| r.source_index).collect();
/// assert_eq!(indices, vec![0, 1]);
/// assert_eq!(rows[0].label, "3 Fireball");
/// ```
#[must_use]
pub fn recompute(catalog: &[Spell], query: &str, available_width: usize) -> Vec<VisibleRow> {
    let _span = tracing::debug_span!(
        "filter_recompute",
        catalog_len = catalog.len(),
        query_len = query.chars().count(),
        available_width
    )
    .entered();

    let rows: Vec<VisibleRow> = catalog
        .iter()
        .enumerate()
        .filter(|(_, spell)| contains_folded(&spell.name, query))
        .map(|(source_index, spell)| build_row(spell, source_index, query, available_width))
        .collect();

    tracing::debug!(visible = rows.len(), "filter applied");
    rows
}

fn build_row(spell: &Spell, source_index: usize, query: &str, available_width: usize) -> VisibleRow {
    let mut label = format!("{} {}", spell.level, spell.name);
    let highlight_ranges = highlight(&label, query);

    if let Some(suffix) = flag_suffix(spell) {
        let label_len = label.chars().count();
        let room = available_width.saturating_sub(label_len);
        if room >= MIN_SUFFIX_ROOM {
            let pad = room - spell.flag_count();
            label.extend(std::iter::repeat(' ').take(pad));
            label.push_str(suffix);
        }
    }

    VisibleRow {
        label,
        highlight_ranges,
        source_index,
    }
}

/// Concentration is listed before ritual.
const fn flag_suffix(spell: &Spell) -> Option<&'static str> {
    match (spell.concentration, spell.ritual) {
        (true, true) => Some("CR"),
        (true, false) => Some("C"),
        (false, true) => Some("R"),
        (false, false) => None,
    }
}
