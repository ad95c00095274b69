use std::path::PathBuf;

use colclean_model::ColumnReport;

/// Outcome of a full cleaning run, for summary rendering.
#[derive(Debug)]
pub struct RunResult {
    pub input_path: PathBuf,
    /// Destination actually written; `None` on a dry run.
    pub output_path: Option<PathBuf>,
    pub rows_read: usize,
    pub columns: Vec<ColumnReport>,
}

impl RunResult {
    pub fn cells_cleaned(&self) -> usize {
        self.columns.iter().map(|report| report.cells_cleaned).sum()
    }

    pub fn cells_emptied(&self) -> usize {
        self.columns.iter().map(|report| report.cells_emptied).sum()
    }

    pub fn rows_skipped(&self) -> usize {
        self.columns.iter().map(|report| report.rows_skipped).sum()
    }
}
