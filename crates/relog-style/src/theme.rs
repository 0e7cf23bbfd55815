#![forbid(unsafe_code)]

//! Semantic color slots and the palette capability.

use crate::color::Rgba;

/// Semantic color slots the report log view draws with.
///
/// Slots ending in `Text` are foregrounds; the matching bare slot is the
/// background for the same role (e.g. `Error` is the error icon backdrop,
/// `ErrorText` the glyph color on it).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeSlot {
    /// Default text color.
    Text,
    /// Text color for selected reports.
    SelectedText,
    /// View background.
    Back,
    /// Alternating-row tint; its alpha is the blend strength over `Back`.
    RowAlternate,
    /// Background of selected reports.
    Selected,
    /// Background of the selected report that is also the active one.
    Active,
    /// Error backdrop.
    Error,
    /// Error glyph color.
    ErrorText,
    /// Warning backdrop.
    Warning,
    /// Warning glyph color.
    WarningText,
    /// Info backdrop.
    Info,
    /// Info glyph color.
    InfoText,
    /// Property-change backdrop.
    Property,
    /// Property-change glyph color.
    PropertyText,
    /// Operator backdrop.
    Operator,
    /// Operator glyph color.
    OperatorText,
}

/// Read-only color lookup capability.
///
/// Implementations map semantic slots to concrete colors. The view takes a
/// `&dyn Palette`, so themes can be swapped without touching traversal code
/// and tests can substitute a fixed table.
pub trait Palette {
    /// Color for a semantic slot.
    fn color(&self, slot: ThemeSlot) -> Rgba;

    /// Blend of two slot colors, `t` of the way from `a` to `b`.
    fn blend(&self, a: ThemeSlot, b: ThemeSlot, t: f32) -> Rgba {
        self.color(a).lerp(self.color(b), t)
    }
}

/// Built-in dark palette.
///
/// Usable stand-alone and as a reference for what each slot means. The
/// `RowAlternate` alpha is deliberately low; it is the zebra-stripe blend
/// strength, not a drawable color on its own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultPalette;

impl Palette for DefaultPalette {
    fn color(&self, slot: ThemeSlot) -> Rgba {
        match slot {
            ThemeSlot::Text => Rgba::rgb(221, 221, 221),
            ThemeSlot::SelectedText => Rgba::rgb(255, 255, 255),
            ThemeSlot::Back => Rgba::rgb(24, 24, 24),
            ThemeSlot::RowAlternate => Rgba::new(255, 255, 255, 13),
            ThemeSlot::Selected => Rgba::rgb(96, 128, 255),
            ThemeSlot::Active => Rgba::rgb(63, 95, 221),
            ThemeSlot::Error => Rgba::rgb(189, 54, 54),
            ThemeSlot::ErrorText => Rgba::rgb(255, 255, 255),
            ThemeSlot::Warning => Rgba::rgb(172, 125, 0),
            ThemeSlot::WarningText => Rgba::rgb(255, 255, 255),
            ThemeSlot::Info => Rgba::rgb(67, 122, 57),
            ThemeSlot::InfoText => Rgba::rgb(255, 255, 255),
            ThemeSlot::Property => Rgba::rgb(110, 110, 110),
            ThemeSlot::PropertyText => Rgba::rgb(255, 255, 255),
            ThemeSlot::Operator => Rgba::rgb(77, 119, 139),
            ThemeSlot::OperatorText => Rgba::rgb(255, 255, 255),
        }
    }
}
