#![forbid(unsafe_code)]

//! Backward line iterator over a report list.
//!
//! [`ReportTextView`] walks the list newest to oldest, skipping reports the
//! filter hides, and splits multi-line messages lazily: each `step` exposes
//! exactly one line, scanning backward for the previous newline boundary.
//! No intermediate line list is built, so hit-testing can stop early
//! without paying for the whole history.

use memchr::memrchr;
use relog_core::{Report, ReportFilter, ReportKind, ReportList};
use relog_style::{Palette, ThemeSlot};

use crate::highlight::{HighlightSpans, SyntaxFormatter};
use crate::source::{Icon, IconId, LineFlags, LineSpan, Presentation, TextViewSource};

/// Tab expansion width handed to the syntax formatter.
const TAB_WIDTH: u8 = 4;

/// Stateful backward traversal over a [`ReportList`].
///
/// The view borrows the list for the duration of one redraw/measure/pick
/// pass; the caller must not mutate the list mid-traversal (single UI
/// thread owns both). Filter criteria are fixed for one traversal but may
/// differ between traversals, which is why visibility is re-evaluated for
/// every candidate instead of cached.
pub struct ReportTextView<'a> {
    reports: &'a ReportList,
    filter: ReportFilter,
    active_index: Option<usize>,
    palette: &'a dyn Palette,
    formatter: Option<&'a dyn SyntaxFormatter>,

    /// Index of the report owning the current line; `None` when exhausted.
    cursor: Option<usize>,
    /// Start of the current line within the message (inclusive).
    line_begin: usize,
    /// End of the current line within the message (exclusive).
    line_end: usize,
    /// Visible reports consumed so far; drives zebra striping.
    visited: usize,
    /// Selection-range bookkeeping, reset by `begin`.
    sel_start: usize,
    sel_end: usize,
}

/// Backward scan for the newline preceding `end`, yielding the line start.
///
/// Always lands in `[0, end]`, which is what keeps malformed offsets
/// unrepresentable: `line_begin` can never exceed `line_end`.
fn line_begin_for(message: &str, end: usize) -> usize {
    match memrchr(b'\n', &message.as_bytes()[..end]) {
        Some(newline) => newline + 1,
        None => 0,
    }
}

impl<'a> ReportTextView<'a> {
    /// Create a view over `reports` with the given filter and palette.
    #[must_use]
    pub fn new(reports: &'a ReportList, filter: ReportFilter, palette: &'a dyn Palette) -> Self {
        Self {
            reports,
            filter,
            active_index: None,
            palette,
            formatter: None,
            cursor: None,
            line_begin: 0,
            line_end: 0,
            visited: 0,
            sel_start: 0,
            sel_end: 0,
        }
    }

    /// Set the externally-tracked active report index.
    #[must_use]
    pub fn active_index(mut self, index: Option<usize>) -> Self {
        self.active_index = index;
        self
    }

    /// Supply the syntax formatter for script-origin reports. Without one,
    /// script reports fall back to flat coloring.
    #[must_use]
    pub fn formatter(mut self, formatter: &'a dyn SyntaxFormatter) -> Self {
        self.formatter = Some(formatter);
        self
    }

    /// Number of visible reports consumed so far in this traversal.
    #[must_use]
    pub fn visited(&self) -> usize {
        self.visited
    }

    /// Selection range within the view, empty until the renderer sets one.
    /// Reset by `begin`.
    #[must_use]
    pub fn selection(&self) -> std::ops::Range<usize> {
        self.sel_start..self.sel_end
    }

    /// Set the selection range the renderer tracks across the traversal.
    pub fn set_selection(&mut self, range: std::ops::Range<usize>) {
        self.sel_start = range.start;
        self.sel_end = range.end;
    }

    /// Move the cursor backward until it rests on a visible report.
    ///
    /// Returns the cursor's report index, or `None` when the list end was
    /// reached (traversal exhausted).
    fn skip_to_visible(&mut self) -> Option<usize> {
        while let Some(index) = self.cursor {
            if self.filter.is_visible(&self.reports[index]) {
                return Some(index);
            }
            self.cursor = index.checked_sub(1);
        }
        None
    }

    /// Position the line window on the last line of the report at `index`.
    fn rewind_to_tail(&mut self, index: usize) {
        let report = &self.reports[index];
        self.line_end = report.len();
        self.line_begin = line_begin_for(report.message(), self.line_end);
    }

    fn current_report(&self) -> Option<(usize, &'a Report)> {
        let index = self.cursor?;
        Some((index, &self.reports[index]))
    }

    /// Background color for the current line.
    ///
    /// Selected reports get the selected (or active) background; unselected
    /// ones zebra-stripe on the number of reports visited, so all lines of
    /// one report share a stripe.
    fn background(&self, index: usize, report: &Report) -> relog_style::Rgba {
        if report.is_selected() {
            let slot = if self.active_index == Some(index) {
                ThemeSlot::Active
            } else {
                ThemeSlot::Selected
            };
            self.palette.color(slot)
        } else if self.visited % 2 == 1 {
            self.palette.color(ThemeSlot::Back)
        } else {
            let strength = self.palette.color(ThemeSlot::RowAlternate).alpha_f32();
            self.palette
                .blend(ThemeSlot::Back, ThemeSlot::RowAlternate, strength)
        }
    }

    /// Icon for the current line, shown only on the line carrying the tail
    /// of the message; upper lines of a multi-line report get none.
    fn icon(&self, report: &Report) -> Option<Icon> {
        if self.line_end != report.len() {
            return None;
        }
        let kind = report.kind();
        let (id, fg_slot, bg_slot) = if kind.intersects(ReportKind::ERROR_ALL) {
            (IconId::Cancel, ThemeSlot::ErrorText, ThemeSlot::Error)
        } else if kind.intersects(ReportKind::WARNING_ALL) {
            (IconId::Warning, ThemeSlot::WarningText, ThemeSlot::Warning)
        } else if kind.intersects(ReportKind::INFO_ALL) {
            (IconId::Info, ThemeSlot::InfoText, ThemeSlot::Info)
        } else if kind.intersects(ReportKind::PROPERTY) {
            (IconId::Options, ThemeSlot::PropertyText, ThemeSlot::Property)
        } else if kind.intersects(ReportKind::OPERATOR) {
            (IconId::Checkmark, ThemeSlot::OperatorText, ThemeSlot::Operator)
        } else {
            return None;
        };
        // Selected reports swap in the selection pair, background slot as
        // the glyph color. Inherited behavior, kept as-is.
        let (fg_slot, bg_slot) = if report.is_selected() {
            (ThemeSlot::Selected, ThemeSlot::SelectedText)
        } else {
            (fg_slot, bg_slot)
        };
        Some(Icon {
            id,
            fg: self.palette.color(fg_slot),
            bg: self.palette.color(bg_slot),
        })
    }
}

impl TextViewSource for ReportTextView<'_> {
    type Item = usize;

    fn begin(&mut self) -> bool {
        self.sel_start = 0;
        self.sel_end = 0;
        self.visited = 0;
        self.cursor = self.reports.last_index();
        match self.skip_to_visible() {
            Some(index) => {
                self.rewind_to_tail(index);
                true
            }
            None => false,
        }
    }

    fn step(&mut self) -> bool {
        if self.line_begin == 0 {
            // No lines left in this report; find the previous visible one.
            self.cursor = self.cursor.and_then(|index| index.checked_sub(1));
            match self.skip_to_visible() {
                Some(index) => {
                    self.visited += 1;
                    self.rewind_to_tail(index);
                    true
                }
                None => false,
            }
        } else {
            // Step over the newline onto the preceding line.
            self.line_end = self.line_begin - 1;
            if let Some((_, report)) = self.current_report() {
                self.line_begin = line_begin_for(report.message(), self.line_end);
            }
            true
        }
    }

    fn end(&mut self) {
        // The list is borrowed, not owned; nothing to release.
    }

    fn line(&self) -> Option<LineSpan<'_>> {
        let (_, report) = self.current_report()?;
        Some(LineSpan {
            text: &report.message()[self.line_begin..self.line_end],
            begin: self.line_begin,
            end: self.line_end,
        })
    }

    fn line_data(&self) -> Option<Presentation> {
        let (index, report) = self.current_report()?;

        let mut flags = LineFlags::BG;
        let mut tokens = HighlightSpans::new();
        let foreground;
        if report.kind().contains(ReportKind::PYTHON)
            && let Some(formatter) = self.formatter
        {
            let text = &report.message()[self.line_begin..self.line_end];
            tokens = formatter.format_line(text, TAB_WIDTH);
            flags |= LineFlags::FG_COMPLEX;
            foreground = self.palette.color(ThemeSlot::Text);
        } else {
            flags |= LineFlags::FG_SIMPLE;
            let slot = if report.is_selected() {
                ThemeSlot::SelectedText
            } else {
                ThemeSlot::Text
            };
            foreground = self.palette.color(slot);
        }

        let background = self.background(index, report);
        let icon = self.icon(report);
        if icon.is_some() {
            flags |= LineFlags::ICON | LineFlags::ICON_FG | LineFlags::ICON_BG;
        }

        Some(Presentation {
            flags,
            foreground,
            background,
            icon,
            tokens,
        })
    }

    fn current(&self) -> Option<usize> {
        self.cursor
    }
}
