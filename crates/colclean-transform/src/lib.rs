//! Column cleaning for delimited datasets.
//!
//! - **digits**: the digit-only string filter
//! - **clean**: in-place passes applying the filter to table columns

pub mod clean;
pub mod digits;

pub use clean::{clean_column, clean_columns};
pub use digits::digits_only;
