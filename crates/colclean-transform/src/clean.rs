//! In-place column cleaning passes over a [`Table`].

use std::collections::BTreeSet;

use tracing::debug;

use colclean_model::{ColumnReport, Table};

use crate::digits::digits_only;

/// Clean one column: rewrite the field at `index` of every data row that
/// has more than `index` fields to its digit-only filtering.
///
/// The header row is never touched, and rows too short to hold the index
/// pass through unchanged. The pass reads and writes the same index, and it
/// is idempotent: a digit-only string filters to itself.
pub fn clean_column(table: &mut Table, index: usize) -> ColumnReport {
    let header = table.header_at(index).map(str::to_owned);
    let mut cells_cleaned = 0usize;
    let mut cells_emptied = 0usize;
    let mut rows_skipped = 0usize;
    for row in &mut table.rows {
        let Some(field) = row.get_mut(index) else {
            rows_skipped += 1;
            continue;
        };
        let cleaned = digits_only(field);
        if *field != cleaned {
            if cleaned.is_empty() {
                cells_emptied += 1;
            }
            *field = cleaned;
            cells_cleaned += 1;
        }
    }
    debug!(
        index,
        header = header.as_deref().unwrap_or(""),
        cells_cleaned,
        cells_emptied,
        rows_skipped,
        "column cleaned"
    );
    ColumnReport {
        index,
        header,
        cells_cleaned,
        cells_emptied,
        rows_skipped,
    }
}

/// Clean every column in `indexes` in ascending order, one report each.
///
/// Indexes past the end of the header still clean any rows wide enough to
/// reach them; a row's own field count governs, never the header width.
pub fn clean_columns(table: &mut Table, indexes: &BTreeSet<usize>) -> Vec<ColumnReport> {
    indexes
        .iter()
        .map(|&index| clean_column(table, index))
        .collect()
}
