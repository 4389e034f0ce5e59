//! Terminal rendering.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI output
//! ```
//!
//! - [`viewmodel`]: what a frame shows
//! - [`layout`]: where the four surfaces sit for a pane size
//! - [`detail`]: spell details as styled, wrapped lines
//! - [`components`]: one renderer per surface
//! - [`helpers`]: cursor movement, truncation, highlighting, wrapping
//! - [`theme`]: TOML color schemes

pub mod components;
pub mod detail;
pub mod helpers;
pub mod layout;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use layout::Layout;
pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    DetailLine, DetailPane, DisplayItem, EmptyState, InputInfo, LineStyle, ListPane, StatusInfo,
    UIViewModel,
};
