#![forbid(unsafe_code)]

//! The capability interface a text-view renderer drives.

use relog_style::Rgba;

use crate::highlight::HighlightSpans;

bitflags::bitflags! {
    /// Which parts of a line's presentation are populated.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct LineFlags: u8 {
        /// Foreground is a single flat color.
        const FG_SIMPLE = 1 << 0;
        /// Foreground is token-level (syntax highlighted).
        const FG_COMPLEX = 1 << 1;
        /// Background color is set.
        const BG = 1 << 2;
        /// The line carries an icon.
        const ICON = 1 << 3;
        /// Icon foreground color is set.
        const ICON_FG = 1 << 4;
        /// Icon background color is set.
        const ICON_BG = 1 << 5;
    }
}

/// Identity of the icon shown in a line's gutter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconId {
    /// Error badge.
    Cancel,
    /// Warning badge.
    Warning,
    /// Info badge.
    Info,
    /// Property-change badge.
    Options,
    /// Operator badge.
    Checkmark,
}

/// An icon plus its gutter colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Icon {
    /// Which glyph to draw.
    pub id: IconId,
    /// Glyph color.
    pub fg: Rgba,
    /// Backdrop color.
    pub bg: Rgba,
}

/// A zero-copy view of one display line within a report's message.
///
/// Valid only until the next `step`; never retained across iterations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSpan<'a> {
    /// The line's text, without the terminating newline.
    pub text: &'a str,
    /// Byte offset of the line's start within the message (inclusive).
    pub begin: usize,
    /// Byte offset of the line's end within the message (exclusive).
    pub end: usize,
}

impl LineSpan<'_> {
    /// Byte length of the line.
    #[must_use]
    pub fn len(&self) -> usize {
        self.end - self.begin
    }

    /// Whether the line is blank. Blank lines are still valid display
    /// lines (an empty message yields exactly one).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.begin == self.end
    }
}

/// Presentation attributes for the current display line.
///
/// Computed fresh per line, side-effect free, safe to recompute any number
/// of times for the same traversal state.
#[derive(Debug, Clone, PartialEq)]
pub struct Presentation {
    /// Which of the fields below are meaningful.
    pub flags: LineFlags,
    /// Flat foreground color (base color when `FG_COMPLEX`).
    pub foreground: Rgba,
    /// Background color.
    pub background: Rgba,
    /// Gutter icon, only on the line carrying the tail of a message.
    pub icon: Option<Icon>,
    /// Token colors when syntax highlighted, empty otherwise.
    pub tokens: HighlightSpans,
}

impl Presentation {
    /// Whether the foreground is token-level rather than flat.
    #[must_use]
    pub fn is_syntax_highlighted(&self) -> bool {
        self.flags.contains(LineFlags::FG_COMPLEX)
    }
}

/// A line-oriented text source driven by a text-view renderer.
///
/// The renderer owns the loop: it calls [`begin`](Self::begin) once, then
/// alternates between reading the current line and calling
/// [`step`](Self::step) until `step` returns `false`, then calls
/// [`end`](Self::end). Between two `step` calls, [`line`](Self::line) and
/// [`line_data`](Self::line_data) are idempotent.
///
/// Sources iterate newest entry first; within a multi-line entry, lines
/// come out in reverse reading order, consistent with the outer direction.
pub trait TextViewSource {
    /// Handle returned by hit-testing (for reports: the list index).
    type Item;

    /// Start a traversal. Returns whether a first valid line exists; when
    /// `false` the source is exhausted and only `end` may follow.
    fn begin(&mut self) -> bool;

    /// Advance one display line backward. Returns whether a new valid line
    /// exists; when `false` the traversal is exhausted.
    fn step(&mut self) -> bool;

    /// Finish the traversal. No state outlives it.
    fn end(&mut self);

    /// The current display line, `None` outside a valid traversal.
    fn line(&self) -> Option<LineSpan<'_>>;

    /// Presentation attributes for the current line, `None` outside a
    /// valid traversal.
    fn line_data(&self) -> Option<Presentation>;

    /// Handle of the entry owning the current line.
    fn current(&self) -> Option<Self::Item>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_span_is_valid() {
        let span = LineSpan {
            text: "",
            begin: 3,
            end: 3,
        };
        assert!(span.is_empty());
        assert_eq!(span.len(), 0);
    }

    #[test]
    fn complex_flag_marks_highlighting() {
        let simple = Presentation {
            flags: LineFlags::FG_SIMPLE | LineFlags::BG,
            foreground: Rgba::rgb(1, 1, 1),
            background: Rgba::rgb(0, 0, 0),
            icon: None,
            tokens: HighlightSpans::new(),
        };
        assert!(!simple.is_syntax_highlighted());

        let complex = Presentation {
            flags: LineFlags::FG_COMPLEX | LineFlags::BG,
            ..simple
        };
        assert!(complex.is_syntax_highlighted());
    }
}
