pub mod config;
pub mod report;
pub mod table;

pub use config::{CleanConfig, DEFAULT_TARGET_COLUMNS};
pub use report::ColumnReport;
pub use table::Table;

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn config_builder_collects_columns() {
        let config = CleanConfig::new("books.csv".into(), "books-clean.csv".into())
            .with_column(6)
            .with_column(4)
            .with_column(6);
        assert_eq!(config.target_columns, BTreeSet::from([4, 6]));
        assert!(!config.dry_run);
    }

    #[test]
    fn table_reports_headers_by_index() {
        let mut table = Table::new(vec!["title".to_string(), "pages".to_string()]);
        table.push_row(vec!["Dune".to_string()]);
        assert_eq!(table.header_at(1), Some("pages"));
        assert_eq!(table.header_at(2), None);
        assert!(!table.is_empty());
        assert!(Table::default().is_empty());
    }

    #[test]
    fn report_serializes() {
        let report = ColumnReport {
            index: 4,
            header: Some("pages".to_string()),
            cells_cleaned: 2,
            cells_emptied: 1,
            rows_skipped: 1,
        };
        let json = serde_json::to_string(&report).expect("serialize report");
        let round: ColumnReport = serde_json::from_str(&json).expect("deserialize report");
        assert_eq!(round, report);
    }
}
