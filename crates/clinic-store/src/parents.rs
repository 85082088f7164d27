//! Pet parent operations.

use rusqlite::params;

use clinic_model::PetParent;

use super::{Database, StoreResult};

impl Database {
    /// Insert a pet parent, skipping silently when the primary key exists.
    /// Returns the number of rows actually inserted (0 or 1).
    pub fn insert_pet_parent(&self, parent: &PetParent) -> StoreResult<usize> {
        let count = self.conn.execute(
            r#"
            INSERT OR IGNORE INTO pet_parents(
                pet_parent_id, name, mobile_no, email_id, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
            params![
                parent.pet_parent_id,
                parent.name,
                parent.mobile_no,
                parent.email_id,
                parent.created_at,
            ],
        )?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parent(id: i64) -> PetParent {
        PetParent {
            pet_parent_id: id,
            name: "Asha Rao".to_string(),
            mobile_no: Some("9000000001".to_string()),
            email_id: None,
            created_at: Some("2024-01-01 10:00:00".to_string()),
        }
    }

    #[test]
    fn insert_skips_existing_primary_key() {
        let db = Database::open_in_memory().unwrap();
        assert_eq!(db.insert_pet_parent(&parent(1)).unwrap(), 1);
        assert_eq!(db.insert_pet_parent(&parent(1)).unwrap(), 0);
        assert_eq!(db.table_count("pet_parents").unwrap(), 1);
    }
}
