//! Patient operations.

use rusqlite::params;

use clinic_model::Patient;

use super::{Database, StoreResult};

impl Database {
    /// Insert a patient, skipping silently on a display-id or numeric-id
    /// conflict. Returns the number of rows inserted (0 or 1).
    pub fn insert_patient(&self, patient: &Patient) -> StoreResult<usize> {
        let count = self.conn.execute(
            r#"
            INSERT OR IGNORE INTO patients(
                id, patient_id, name, sex, type, breed, age, colour,
                microchip_no, identify_mark, owner_name, phone, email,
                pet_parent_id, status, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16)
            "#,
            params![
                patient.id,
                patient.patient_id,
                patient.name,
                patient.sex,
                patient.species,
                patient.breed,
                patient.age,
                patient.colour,
                patient.microchip_no,
                patient.identify_mark,
                patient.owner_name,
                patient.phone,
                patient.email,
                patient.pet_parent_id,
                patient.status,
                patient.created_at,
            ],
        )?;
        Ok(count)
    }
}
