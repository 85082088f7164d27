//! Row-count queries for the import summary.

use clinic_model::IMPORT_TABLES;

use super::{Database, StoreError, StoreResult};

impl Database {
    /// Row count of one of the import target tables.
    ///
    /// The name is interpolated into the statement, so it is checked against
    /// the fixed table catalog first.
    pub fn table_count(&self, table: &str) -> StoreResult<i64> {
        if !IMPORT_TABLES.contains(&table) {
            return Err(StoreError::UnknownTable(table.to_string()));
        }
        let count = self
            .conn
            .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
                row.get(0)
            })?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_start_at_zero() {
        let db = Database::open_in_memory().unwrap();
        for table in IMPORT_TABLES {
            assert_eq!(db.table_count(table).unwrap(), 0, "table: {table}");
        }
    }

    #[test]
    fn unknown_table_is_rejected() {
        let db = Database::open_in_memory().unwrap();
        assert!(matches!(
            db.table_count("sqlite_master"),
            Err(StoreError::UnknownTable(_))
        ));
    }
}
