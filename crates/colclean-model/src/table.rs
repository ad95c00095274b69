use serde::{Deserialize, Serialize};

/// An in-memory delimited dataset: a header row plus ragged data rows.
///
/// Holding the header apart from the data rows means cleaning passes can
/// only ever touch data. Rows keep whatever field count the source file
/// gave them; nothing pads or truncates them to the header width.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Column names from the first record of the source file.
    pub headers: Vec<String>,
    /// Data rows in source order. A row may be shorter or longer than the header.
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// True when the table holds neither headers nor data rows.
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.rows.is_empty()
    }

    /// Header name for a zero-based column index, when the header row is wide enough.
    pub fn header_at(&self, index: usize) -> Option<&str> {
        self.headers.get(index).map(String::as_str)
    }
}
