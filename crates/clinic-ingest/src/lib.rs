//! CSV ingestion for clinic exports.
//!
//! Files are read eagerly into an in-memory [`CsvTable`]; individual
//! malformed lines are tolerated by the flexible reader and padded or
//! truncated to the header width.

pub mod sanitize;
pub mod table;

pub use sanitize::{clean, clean_opt, parse_f64, parse_i64, parse_opt_f64, parse_opt_i64};
pub use table::{CsvTable, RowView, read_csv_table};
