use std::path::PathBuf;

#[derive(Debug)]
pub struct ImportReport {
    pub db_path: PathBuf,
    pub tables: Vec<TableSummary>,
}

#[derive(Debug)]
pub struct TableSummary {
    pub table: &'static str,
    pub description: &'static str,
    /// Rows inserted by this run. `None` for tables no loader targets
    /// directly, such as line items synthesized alongside invoices.
    pub inserted: Option<usize>,
    /// Rows present in the table after the run.
    pub rows: i64,
}
