//! Counter access and the aggregates the counter updater derives from.

use rusqlite::{OptionalExtension, params};

use super::{Database, StoreResult};

impl Database {
    /// Current value of a named counter.
    pub fn counter(&self, key: &str) -> StoreResult<Option<i64>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM counters WHERE key = ?1",
                [key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    /// Overwrite a named counter.
    pub fn set_counter(&self, key: &str, value: i64) -> StoreResult<()> {
        self.conn.execute(
            "UPDATE counters SET value = ?2 WHERE key = ?1",
            params![key, value],
        )?;
        Ok(())
    }

    /// Highest numeric patient id present, if any.
    pub fn max_patient_id(&self) -> StoreResult<Option<i64>> {
        let max: Option<i64> = self
            .conn
            .query_row("SELECT MAX(patient_id) FROM patients", [], |row| row.get(0))?;
        Ok(max)
    }
}

#[cfg(test)]
mod tests {
    use clinic_model::{COUNTER_INVOICE, COUNTER_PATIENT, INVOICE_SEED, PATIENT_SEED};

    use super::*;

    #[test]
    fn counters_are_seeded() {
        let db = Database::open_in_memory().unwrap();
        assert_eq!(db.counter(COUNTER_INVOICE).unwrap(), Some(INVOICE_SEED));
        assert_eq!(db.counter(COUNTER_PATIENT).unwrap(), Some(PATIENT_SEED));
        assert_eq!(db.counter("unknown").unwrap(), None);
    }

    #[test]
    fn set_counter_overwrites() {
        let db = Database::open_in_memory().unwrap();
        db.set_counter(COUNTER_PATIENT, 10051).unwrap();
        assert_eq!(db.counter(COUNTER_PATIENT).unwrap(), Some(10051));
    }

    #[test]
    fn max_patient_id_of_empty_table_is_none() {
        let db = Database::open_in_memory().unwrap();
        assert_eq!(db.max_patient_id().unwrap(), None);
    }
}
