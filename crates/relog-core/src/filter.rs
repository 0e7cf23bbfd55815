#![forbid(unsafe_code)]

//! Visibility predicate for reports.

use crate::report::{Report, ReportKind};

/// Decides which reports a traversal shows.
///
/// A report is visible when its category flags intersect the active mask
/// and, if a search string is set, its message contains the string
/// (ASCII case-insensitive substring match).
///
/// The predicate is pure and is re-evaluated for every candidate report;
/// visibility is never cached because the mask or search text may change
/// between traversals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportFilter {
    mask: ReportKind,
    search: String,
}

impl Default for ReportFilter {
    /// A filter that shows every report.
    fn default() -> Self {
        Self {
            mask: ReportKind::all(),
            search: String::new(),
        }
    }
}

impl ReportFilter {
    /// Create a filter with the given category mask and no search text.
    #[must_use]
    pub fn new(mask: ReportKind) -> Self {
        Self {
            mask,
            search: String::new(),
        }
    }

    /// Set the search substring. An empty string matches everything.
    #[must_use]
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// The active category mask.
    #[must_use]
    pub fn mask(&self) -> ReportKind {
        self.mask
    }

    /// The active search text.
    #[must_use]
    pub fn search_text(&self) -> &str {
        &self.search
    }

    /// Whether `report` passes the mask and search criteria.
    ///
    /// O(message length) when a search term is active, O(1) otherwise.
    #[must_use]
    pub fn is_visible(&self, report: &Report) -> bool {
        if !report.kind().intersects(self.mask) {
            return false;
        }
        if self.search.is_empty() {
            return true;
        }
        contains_ascii_case_insensitive(report.message(), &self.search)
    }
}

/// ASCII case-folded substring search.
fn contains_ascii_case_insensitive(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack
        .to_ascii_lowercase()
        .contains(&needle.to_ascii_lowercase())
}
