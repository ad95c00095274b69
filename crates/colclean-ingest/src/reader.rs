//! Whole-file CSV loading.

use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use colclean_model::Table;

use crate::error::{IngestError, Result};

/// Read a comma-delimited UTF-8 file fully into memory.
///
/// The first record becomes the header row; every later record is kept as a
/// data row exactly as encountered, including empty fields and rows shorter
/// or longer than the header. No trimming or normalization of any kind.
/// An empty file yields an empty table.
pub fn read_table(path: &Path) -> Result<Table> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|source| IngestError::classify(path, source))?;

    let mut records = reader.records();
    let Some(first) = records.next() else {
        return Ok(Table::default());
    };
    let first = first.map_err(|source| IngestError::classify(path, source))?;
    let mut table = Table::new(first.iter().map(str::to_owned).collect());
    for record in records {
        let record = record.map_err(|source| IngestError::classify(path, source))?;
        table.push_row(record.iter().map(str::to_owned).collect());
    }
    debug!(
        path = %path.display(),
        rows = table.rows.len(),
        columns = table.headers.len(),
        "table loaded"
    );
    Ok(table)
}
