//! Visit record, prescription and vaccination operations.

use rusqlite::params;

use clinic_model::{Prescription, Vaccination, VisitRecord};

use super::{Database, StoreResult};

impl Database {
    pub fn insert_visit_record(&self, record: &VisitRecord) -> StoreResult<usize> {
        let count = self.conn.execute(
            r#"
            INSERT OR IGNORE INTO records(
                record_id, patient_id, subject_id, objective_id,
                assess_id, plan_id, prescription_id, user_id, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            "#,
            params![
                record.record_id,
                record.patient_id,
                record.subject_id,
                record.objective_id,
                record.assess_id,
                record.plan_id,
                record.prescription_id,
                record.user_id,
                record.created_at,
            ],
        )?;
        Ok(count)
    }

    pub fn insert_prescription(&self, line: &Prescription) -> StoreResult<usize> {
        let count = self.conn.execute(
            r#"
            INSERT OR IGNORE INTO prescriptions(
                presmeds_id, patient_id, prescription_id, med_name, prefix,
                quantity, quantity_type, duration, duration_type, frequency,
                instruction, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)
            "#,
            params![
                line.presmeds_id,
                line.patient_id,
                line.prescription_id,
                line.med_name,
                line.prefix,
                line.quantity,
                line.quantity_type,
                line.duration,
                line.duration_type,
                line.frequency,
                line.instruction,
                line.created_at,
            ],
        )?;
        Ok(count)
    }

    pub fn insert_vaccination(&self, event: &Vaccination) -> StoreResult<usize> {
        let count = self.conn.execute(
            r#"
            INSERT OR IGNORE INTO vaccinations(
                pchistory_id, preventive_id, patient_id, date, age,
                veterinarian, type_care, treatment, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            "#,
            params![
                event.pchistory_id,
                event.preventive_id,
                event.patient_id,
                event.date,
                event.age,
                event.veterinarian,
                event.type_care,
                event.treatment,
                event.created_at,
            ],
        )?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visit_record_links_are_optional() {
        let db = Database::open_in_memory().unwrap();
        let record = VisitRecord {
            record_id: 1,
            patient_id: 10001,
            subject_id: Some(4),
            objective_id: None,
            assess_id: None,
            plan_id: None,
            prescription_id: None,
            user_id: Some(2),
            created_at: None,
        };
        assert_eq!(db.insert_visit_record(&record).unwrap(), 1);
        assert_eq!(db.insert_visit_record(&record).unwrap(), 0);
    }

    #[test]
    fn prescription_reinsert_is_ignored() {
        let db = Database::open_in_memory().unwrap();
        let line = Prescription {
            presmeds_id: 12,
            patient_id: 10001,
            prescription_id: Some(7),
            med_name: Some("Carprofen".to_string()),
            prefix: Some("Tab".to_string()),
            quantity: Some("10".to_string()),
            quantity_type: Some("tablets".to_string()),
            duration: Some("5".to_string()),
            duration_type: Some("days".to_string()),
            frequency: Some("BID".to_string()),
            instruction: Some("After food".to_string()),
            created_at: None,
        };
        assert_eq!(db.insert_prescription(&line).unwrap(), 1);
        assert_eq!(db.insert_prescription(&line).unwrap(), 0);
    }
}
