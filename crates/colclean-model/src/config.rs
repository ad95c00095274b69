//! Run configuration for the cleaning pipeline.

use std::collections::BTreeSet;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Column indexes cleaned when none are configured, matching the book
/// dataset this tool was first built for (page counts and review counts).
pub const DEFAULT_TARGET_COLUMNS: [usize; 2] = [4, 6];

/// Configuration for a single cleaning run.
///
/// The driver owns exactly one of these for the duration of the run; every
/// pipeline stage reads from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanConfig {
    /// Source CSV file.
    pub input_path: PathBuf,
    /// Destination CSV file, overwritten if it exists.
    pub output_path: PathBuf,
    /// Zero-based indexes of the columns to clean.
    pub target_columns: BTreeSet<usize>,
    /// Run ingest and clean but skip the write.
    pub dry_run: bool,
}

impl CleanConfig {
    pub fn new(input_path: PathBuf, output_path: PathBuf) -> Self {
        Self {
            input_path,
            output_path,
            target_columns: BTreeSet::new(),
            dry_run: false,
        }
    }

    /// Replace the set of target columns.
    #[must_use]
    pub fn with_target_columns(mut self, target_columns: BTreeSet<usize>) -> Self {
        self.target_columns = target_columns;
        self
    }

    /// Add a single target column index.
    #[must_use]
    pub fn with_column(mut self, index: usize) -> Self {
        self.target_columns.insert(index);
        self
    }

    /// Enable or disable dry-run mode.
    #[must_use]
    pub fn with_dry_run(mut self, enable: bool) -> Self {
        self.dry_run = enable;
        self
    }
}
