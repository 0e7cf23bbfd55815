#![forbid(unsafe_code)]

//! Report data model and visibility filtering for the report log view.
//!
//! A [`Report`] is one immutable log record with a category bit set and a
//! (possibly multi-line) message. Reports live in an append-only
//! [`ReportList`]; the view layer only ever reads the list. Which reports a
//! view shows is decided per traversal by a [`ReportFilter`].

pub mod filter;
pub mod list;
pub mod report;

pub use filter::ReportFilter;
pub use list::ReportList;
pub use report::{Report, ReportKind};
