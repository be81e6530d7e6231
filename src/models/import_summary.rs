//! Import summary returned by a loader run

use std::fmt;

/// Why ingestion stopped before the end of the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AbortReason {
    MissingFile,
    UnreadableInput,
    StoppedOnRowError,
}

impl fmt::Display for AbortReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            AbortReason::MissingFile => "missing file",
            AbortReason::UnreadableInput => "unreadable input",
            AbortReason::StoppedOnRowError => "stopped on row error",
        };
        f.write_str(reason)
    }
}

/// Counters collected while ingesting one CSV file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub rows_read: u64,
    pub books_inserted: u64,
    pub authors_created: u64,
    pub authors_reused: u64,
    pub links_created: u64,
    pub rows_failed: u64,
    pub aborted: Option<AbortReason>,
}

impl ImportSummary {
    pub fn is_clean(&self) -> bool {
        self.rows_failed == 0 && self.aborted.is_none()
    }
}
