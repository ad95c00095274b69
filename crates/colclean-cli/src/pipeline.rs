//! The cleaning pipeline with explicit stages.
//!
//! Stages run strictly in order:
//! 1. **Ingest**: read the source CSV fully into memory
//! 2. **Clean**: apply the digit-only filter to each target column
//! 3. **Output**: write the cleaned table to the destination
//!
//! Each stage takes the output of the previous stage; the first failure
//! aborts the run. The table is owned by the driver for the whole run and
//! mutated in place by the clean stage.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use colclean_ingest::read_table;
use colclean_model::{CleanConfig, ColumnReport, Table};
use colclean_output::write_table;
use colclean_transform::clean_columns;

use crate::types::RunResult;

// ============================================================================
// Stage 1: Ingest
// ============================================================================

/// Read the source file into memory.
pub fn ingest(config: &CleanConfig) -> Result<Table> {
    let span = info_span!("ingest", input = %config.input_path.display());
    let _guard = span.enter();
    let start = Instant::now();
    let table = read_table(&config.input_path)
        .with_context(|| format!("read {}", config.input_path.display()))?;
    info!(
        input = %config.input_path.display(),
        rows = table.rows.len(),
        columns = table.headers.len(),
        duration_ms = start.elapsed().as_millis(),
        "ingest complete"
    );
    Ok(table)
}

// ============================================================================
// Stage 2: Clean
// ============================================================================

/// Apply the digit-only filter to every configured column.
pub fn clean(config: &CleanConfig, table: &mut Table) -> Vec<ColumnReport> {
    let span = info_span!("clean", column_count = config.target_columns.len());
    let _guard = span.enter();
    let start = Instant::now();
    let reports = clean_columns(table, &config.target_columns);
    let cells_cleaned: usize = reports.iter().map(|report| report.cells_cleaned).sum();
    info!(
        column_count = reports.len(),
        cells_cleaned,
        duration_ms = start.elapsed().as_millis(),
        "clean complete"
    );
    reports
}

// ============================================================================
// Stage 3: Output
// ============================================================================

/// Write the cleaned table, unless this is a dry run.
///
/// Returns the path actually written, or `None` when the write was skipped.
pub fn output(config: &CleanConfig, table: &Table) -> Result<Option<PathBuf>> {
    let span = info_span!("output", output = %config.output_path.display());
    let _guard = span.enter();
    let start = Instant::now();
    if config.dry_run {
        info!(
            duration_ms = start.elapsed().as_millis(),
            "output skipped (dry run)"
        );
        return Ok(None);
    }
    write_table(&config.output_path, table)
        .with_context(|| format!("write {}", config.output_path.display()))?;
    info!(
        output = %config.output_path.display(),
        rows = table.rows.len(),
        duration_ms = start.elapsed().as_millis(),
        "output complete"
    );
    Ok(Some(config.output_path.clone()))
}

/// Run the full pipeline: ingest, clean, output.
pub fn run(config: &CleanConfig) -> Result<RunResult> {
    let mut table = ingest(config)?;
    let rows_read = table.rows.len();
    let columns = clean(config, &mut table);
    let output_path = output(config, &table)?;
    Ok(RunResult {
        input_path: config.input_path.clone(),
        output_path,
        rows_read,
        columns,
    })
}
