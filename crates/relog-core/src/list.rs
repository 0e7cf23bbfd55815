#![forbid(unsafe_code)]

//! Append-only ordered storage for reports.

use std::ops::Index;

use crate::report::Report;

/// Ordered sequence of reports, newest appended last.
///
/// The list supports append and clear only; records are immutable once
/// appended. Backward traversal (newest first) starts from
/// [`ReportList::last_index`].
#[derive(Debug, Clone, Default)]
pub struct ReportList {
    reports: Vec<Report>,
}

impl ReportList {
    /// Create an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a report at the newest end.
    pub fn push(&mut self, report: Report) {
        self.reports.push(report);
    }

    /// Remove all reports.
    pub fn clear(&mut self) {
        self.reports.clear();
    }

    /// Number of reports.
    #[must_use]
    pub fn len(&self) -> usize {
        self.reports.len()
    }

    /// Whether the list holds no reports.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    /// The report at `index`, if in range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Report> {
        self.reports.get(index)
    }

    /// Index of the newest report, if any.
    #[must_use]
    pub fn last_index(&self) -> Option<usize> {
        self.reports.len().checked_sub(1)
    }

    /// Iterate oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &Report> {
        self.reports.iter()
    }
}

impl Index<usize> for ReportList {
    type Output = Report;

    fn index(&self, index: usize) -> &Report {
        &self.reports[index]
    }
}

impl FromIterator<Report> for ReportList {
    fn from_iter<I: IntoIterator<Item = Report>>(iter: I) -> Self {
        Self {
            reports: iter.into_iter().collect(),
        }
    }
}
