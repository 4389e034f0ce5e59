//! Focus state machine for the two navigable surfaces.
//!
//! The query input always receives text. Navigation keys (up/down) go to
//! whichever surface owns focus: the spell list on the left or the detail pane on
//! the right. Exactly one of them is focused at any time.
//!
//! ```text
//!            focus_detail / toggle
//!     ┌──────┐ ─────────────────► ┌────────┐
//!     │ List │                    │ Detail │
//!     └──────┘ ◄───────────────── └────────┘
//!            focus_list / toggle
//! ```
//!
//! Changing focus also changes which surface is drawn with emphasis (a bold
//! border). The renderer reads that through [`Focus::emphasis`].
//!
//! # Example
//!
//! ```rust
//! use spellbook::app::Focus;
//!
//! let mut focus = Focus::default();
//! assert_eq!(focus, Focus::List);
//! focus.toggle();
//! assert_eq!(focus, Focus::Detail);
//! assert!(focus.emphasis().detail);
//! ```

/// Which surface currently owns navigation keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    /// The filtered spell list. Up/down move the selection.
    #[default]
    List,

    /// The detail pane. Up/down scroll its content.
    Detail,
}

/// Border emphasis requested for each surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceEmphasis {
    pub list: bool,
    pub detail: bool,
}

impl Focus {
    /// Focuses the list. Idempotent.
    pub fn focus_list(&mut self) {
        if *self != Self::List {
            tracing::debug!("focus -> list");
        }
        *self = Self::List;
    }

    /// Focuses the detail pane. Idempotent.
    pub fn focus_detail(&mut self) {
        if *self != Self::Detail {
            tracing::debug!("focus -> detail");
        }
        *self = Self::Detail;
    }

    /// Switches to the other surface.
    pub fn toggle(&mut self) {
        match self {
            Self::List => self.focus_detail(),
            Self::Detail => self.focus_list(),
        }
    }

    /// The emphasis each surface should be drawn with.
    #[must_use]
    pub const fn emphasis(self) -> SurfaceEmphasis {
        SurfaceEmphasis {
            list: matches!(self, Self::List),
            detail: matches!(self, Self::Detail),
        }
    }
}
