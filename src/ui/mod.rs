//! Terminal output components.
//!
//! The showcases print through [`ScoutTheme`], which carries named style
//! slots and the line-formatting helpers they share. A plain (uncolored)
//! theme is substituted for non-TTY runs and when `NO_COLOR` is set.

pub mod theme;

pub use theme::{should_use_colors, ScoutTheme};
