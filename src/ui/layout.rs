//! Screen geometry shared by state and renderer.
//!
//! The plugin pane is split into a body and a one-line bottom bar:
//!
//! ```text
//! ┌ Spells ──────┐┌ Details ─────────────────────────┐
//! │3 Fireball    ││ Fireball                         │
//! │0 Fire Bolt   ││ 3rd-level evocation              │
//! │              ││                                  │
//! └──────────────┘└──────────────────────────────────┘
//! >>> fire                          Loaded 319 spells
//! ```
//!
//! The list gets three tenths of the width, the detail pane the rest. The bottom
//! bar is split the same way between the query input and the status text.

/// Border width on each side of a boxed surface.
const BORDER: usize = 1;

/// Blank columns between the detail border and its text.
const DETAIL_PADDING: usize = 1;

/// Pane geometry derived from the terminal size Zellij hands to `render`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Layout {
    pub rows: usize,
    pub cols: usize,
    pub list_width: usize,
    pub detail_width: usize,
    pub body_height: usize,
}

impl Layout {
    /// Computes the layout for a pane of `rows` x `cols` cells.
    ///
    /// # Example
    ///
    /// ```rust
    /// use spellbook::ui::Layout;
    ///
    /// let layout = Layout::new(24, 100);
    /// assert_eq!(layout.list_width, 30);
    /// assert_eq!(layout.list_inner_width(), 28);
    /// assert_eq!(layout.body_height, 23);
    /// ```
    #[must_use]
    pub const fn new(rows: usize, cols: usize) -> Self {
        let list_width = cols * 3 / 10;
        Self {
            rows,
            cols,
            list_width,
            detail_width: cols - list_width,
            body_height: rows.saturating_sub(1),
        }
    }

    /// Columns available for a list label, inside the borders.
    #[must_use]
    pub const fn list_inner_width(&self) -> usize {
        self.list_width.saturating_sub(2 * BORDER)
    }

    /// Rows available for list entries, inside the borders.
    #[must_use]
    pub const fn list_inner_height(&self) -> usize {
        self.body_height.saturating_sub(2 * BORDER)
    }

    /// Columns available for detail text, inside borders and padding.
    #[must_use]
    pub const fn detail_inner_width(&self) -> usize {
        self.detail_width.saturating_sub(2 * (BORDER + DETAIL_PADDING))
    }

    /// Rows available for detail text, inside the borders.
    #[must_use]
    pub const fn detail_inner_height(&self) -> usize {
        self.body_height.saturating_sub(2 * BORDER)
    }

    /// First column (1-indexed) of the detail pane.
    #[must_use]
    pub const fn detail_column(&self) -> usize {
        self.list_width + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_three_to_seven() {
        let layout = Layout::new(40, 200);
        assert_eq!(layout.list_width, 60);
        assert_eq!(layout.detail_width, 140);
        assert_eq!(layout.detail_column(), 61);
        assert_eq!(layout.detail_inner_width(), 136);
        assert_eq!(layout.detail_inner_height(), 37);
    }

    #[test]
    fn tiny_panes_saturate_to_zero() {
        let layout = Layout::new(0, 3);
        assert_eq!(layout.list_width, 0);
        assert_eq!(layout.list_inner_width(), 0);
        assert_eq!(layout.body_height, 0);
        assert_eq!(layout.list_inner_height(), 0);
        assert_eq!(layout.detail_inner_width(), 0);
    }

    #[test]
    fn default_is_an_empty_pane() {
        assert_eq!(Layout::default(), Layout::new(0, 0));
    }
}
