#![forbid(unsafe_code)]

//! Colors and theme slots for the report log view.
//!
//! The view never hard-codes colors; it asks a [`Palette`] for the color of
//! a semantic [`ThemeSlot`]. This keeps theming external and makes the view
//! trivially testable with a fake color table.

pub mod color;
pub mod theme;

pub use color::Rgba;
pub use theme::{DefaultPalette, Palette, ThemeSlot};
