#![forbid(unsafe_code)]

//! Syntax-highlighting capability.
//!
//! The view does not know how to tokenize the embedded scripting language;
//! it invokes an opaque [`SyntaxFormatter`] supplied by the embedding
//! system and marks the resulting line as complex. Everything here is the
//! seam, not an implementation.

use std::ops::Range;

use relog_style::Rgba;
use smallvec::SmallVec;

/// One colored token within a display line.
///
/// `range` is a byte range into the line's text (not the whole message).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightSpan {
    /// Byte range of the token within the line.
    pub range: Range<usize>,
    /// Token color.
    pub color: Rgba,
}

impl HighlightSpan {
    /// Create a span covering `start..end` in the given color.
    #[must_use]
    pub fn new(start: usize, end: usize, color: Rgba) -> Self {
        Self {
            range: start..end,
            color,
        }
    }
}

/// Token spans for one line. Most lines fit inline without allocating.
pub type HighlightSpans = SmallVec<[HighlightSpan; 8]>;

/// Per-line tokenizer capability for the embedded scripting language.
pub trait SyntaxFormatter {
    /// Tokenize one display line into colored spans.
    ///
    /// `tab_width` is the column width a tab expands to. Implementations
    /// must not assume the line is a complete statement; messages are split
    /// at newlines before formatting.
    fn format_line(&self, line: &str, tab_width: u8) -> HighlightSpans;
}
