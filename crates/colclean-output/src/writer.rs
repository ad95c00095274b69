//! CSV file writing.

use std::path::Path;

use csv::WriterBuilder;
use tracing::debug;

use colclean_model::Table;

use crate::error::{OutputError, Result};

/// Serialize a table as comma-delimited UTF-8 text, overwriting `path`.
///
/// The header row is written first, then every data row in source order,
/// ragged lengths included. Fields containing the delimiter, a quote, or a
/// line break are quoted and embedded quotes are doubled. A write that
/// fails midway may leave a truncated file behind; callers treat the
/// destination as garbage on error.
pub fn write_table(path: &Path, table: &Table) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|source| OutputError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    if !table.headers.is_empty() {
        writer
            .write_record(&table.headers)
            .map_err(|source| OutputError::Write {
                path: path.to_path_buf(),
                source,
            })?;
    }
    for row in &table.rows {
        writer.write_record(row).map_err(|source| OutputError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    }
    writer.flush().map_err(|source| OutputError::Flush {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(
        path = %path.display(),
        rows = table.rows.len(),
        "table written"
    );
    Ok(())
}
