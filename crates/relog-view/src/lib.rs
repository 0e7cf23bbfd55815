#![forbid(unsafe_code)]

//! Backward, filter-aware line traversal over a report list.
//!
//! This crate adapts an append-only list of variable-length, possibly
//! multi-line reports into a sequence of display lines for a scrolling
//! text-view renderer. The same traversal serves three goals: drawing,
//! total-height measurement, and mouse-position hit-testing.
//!
//! # Architecture
//!
//! - [`TextViewSource`] is the capability interface the external renderer
//!   drives: a `begin`/`step`/`end` lifecycle plus per-line accessors.
//! - [`ReportTextView`] implements it over a `relog_core::ReportList`,
//!   walking newest to oldest, skipping filtered-out reports, and splitting
//!   multi-line messages lazily (one line per `step`, O(1) extra memory).
//! - [`textview_draw`], [`textview_height`] and [`textview_pick`] run the
//!   identical traversal for the three goals.
//!
//! # Example
//! ```
//! use relog_core::{Report, ReportFilter, ReportKind, ReportList};
//! use relog_style::DefaultPalette;
//! use relog_view::{ReportTextView, TextViewLayout, textview_height};
//!
//! let mut reports = ReportList::new();
//! reports.push(Report::new("saved\n2 objects", ReportKind::INFO));
//!
//! let palette = DefaultPalette;
//! let mut view = ReportTextView::new(&reports, ReportFilter::default(), &palette);
//! let height = textview_height(&mut view, &TextViewLayout::default());
//! assert_eq!(height, 2 * TextViewLayout::default().line_height);
//! ```

pub mod highlight;
pub mod report_view;
pub mod source;
pub mod textview;

pub use highlight::{HighlightSpan, HighlightSpans, SyntaxFormatter};
pub use report_view::ReportTextView;
pub use source::{Icon, IconId, LineFlags, LineSpan, Presentation, TextViewSource};
pub use textview::{TextViewLayout, textview_draw, textview_height, textview_pick};
