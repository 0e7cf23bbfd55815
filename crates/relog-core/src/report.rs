#![forbid(unsafe_code)]

//! Report records and their category flags.

bitflags::bitflags! {
    /// Category/severity flags for a report.
    ///
    /// A report carries exactly one primary category in practice, but the
    /// type is a bit set so filter masks can select several categories at
    /// once. `PYTHON` marks reports whose message originated from the
    /// embedded scripting language and should be syntax highlighted.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ReportKind: u16 {
        /// Developer-facing debug output.
        const DEBUG                 = 1 << 0;
        /// Informational message.
        const INFO                  = 1 << 1;
        /// Operator/action trace.
        const OPERATOR              = 1 << 2;
        /// Property change notice.
        const PROPERTY              = 1 << 3;
        /// Warning.
        const WARNING               = 1 << 4;
        /// Generic error.
        const ERROR                 = 1 << 5;
        /// Error: input was rejected.
        const ERROR_INVALID_INPUT   = 1 << 6;
        /// Error: operation not valid in the current context.
        const ERROR_INVALID_CONTEXT = 1 << 7;
        /// Error: allocation failure.
        const ERROR_OUT_OF_MEMORY   = 1 << 8;
        /// Message originated from the embedded scripting language.
        const PYTHON                = 1 << 9;

        /// All error categories.
        const ERROR_ALL = Self::ERROR.bits()
            | Self::ERROR_INVALID_INPUT.bits()
            | Self::ERROR_INVALID_CONTEXT.bits()
            | Self::ERROR_OUT_OF_MEMORY.bits();
        /// All warning categories.
        const WARNING_ALL = Self::WARNING.bits();
        /// All info categories.
        const INFO_ALL = Self::INFO.bits();
    }
}

/// One immutable log record.
///
/// Identity is the report's position in its [`crate::ReportList`]; reports
/// are never mutated after being appended (aside from the selection flag,
/// which belongs to the UI, not the record's content).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    message: String,
    kind: ReportKind,
    selected: bool,
}

impl Report {
    /// Create a report with the given message and category flags.
    #[must_use]
    pub fn new(message: impl Into<String>, kind: ReportKind) -> Self {
        Self {
            message: message.into(),
            kind,
            selected: false,
        }
    }

    /// Mark the report as selected.
    #[must_use]
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// The message text. May contain embedded newlines.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Byte length of the message.
    #[must_use]
    pub fn len(&self) -> usize {
        self.message.len()
    }

    /// Whether the message is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.message.is_empty()
    }

    /// Category flags.
    #[must_use]
    pub fn kind(&self) -> ReportKind {
        self.kind
    }

    /// Whether the report is part of the current selection.
    #[must_use]
    pub fn is_selected(&self) -> bool {
        self.selected
    }
}
