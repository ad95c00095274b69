//! CLI argument definitions for colclean.

use std::collections::BTreeSet;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use colclean_model::DEFAULT_TARGET_COLUMNS;

#[derive(Parser)]
#[command(
    name = "colclean",
    version,
    about = "Strip non-numeric characters from selected CSV columns",
    long_about = "Read a comma-delimited UTF-8 dataset, reduce the selected columns\n\
                  to their digit characters so the values parse as numbers, and\n\
                  write the cleaned dataset to a new file.\n\n\
                  Minus signs and decimal separators are stripped along with\n\
                  everything else; fields with no digits come out empty."
)]
pub struct Cli {
    /// Source CSV file.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Destination CSV file (default: <INPUT stem>-clean.csv beside the input).
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Zero-based column index to clean; repeat for several columns.
    #[arg(
        short = 'c',
        long = "column",
        value_name = "INDEX",
        default_values_t = DEFAULT_TARGET_COLUMNS
    )]
    pub columns: Vec<usize>,

    /// Clean and report without writing the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,
}

impl Cli {
    /// Destination path, derived from the input when not given explicitly.
    pub fn output_path(&self) -> PathBuf {
        if let Some(path) = &self.output {
            return path.clone();
        }
        let stem = self
            .input
            .file_stem()
            .and_then(|v| v.to_str())
            .unwrap_or("output");
        self.input.with_file_name(format!("{stem}-clean.csv"))
    }

    /// The requested column indexes, deduplicated.
    pub fn target_columns(&self) -> BTreeSet<usize> {
        self.columns.iter().copied().collect()
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_columns_are_pages_and_reviews() {
        let cli = Cli::try_parse_from(["colclean", "books.csv"]).expect("parse");
        assert_eq!(cli.target_columns(), BTreeSet::from([4, 6]));
    }

    #[test]
    fn output_defaults_beside_the_input() {
        let cli = Cli::try_parse_from(["colclean", "data/books.csv"]).expect("parse");
        assert_eq!(cli.output_path(), PathBuf::from("data/books-clean.csv"));
    }

    #[test]
    fn explicit_output_wins() {
        let cli = Cli::try_parse_from(["colclean", "books.csv", "-o", "cleaned.csv"])
            .expect("parse");
        assert_eq!(cli.output_path(), PathBuf::from("cleaned.csv"));
    }

    #[test]
    fn repeated_columns_deduplicate() {
        let cli = Cli::try_parse_from(["colclean", "books.csv", "-c", "2", "-c", "2", "-c", "0"])
            .expect("parse");
        assert_eq!(cli.target_columns(), BTreeSet::from([0, 2]));
    }
}
