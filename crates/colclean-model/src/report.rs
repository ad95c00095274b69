//! Per-column results of a cleaning pass.

use serde::{Deserialize, Serialize};

/// Outcome of cleaning one column across a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnReport {
    /// Zero-based column index that was cleaned.
    pub index: usize,
    /// Header name for the column, when the header row is wide enough.
    pub header: Option<String>,
    /// Data rows whose field at this index was actually rewritten.
    pub cells_cleaned: usize,
    /// Rewritten fields that ended up empty (no digits in the original).
    pub cells_emptied: usize,
    /// Data rows too short to hold this index, passed through untouched.
    pub rows_skipped: usize,
}
