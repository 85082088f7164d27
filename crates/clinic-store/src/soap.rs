//! SOAP note operations (subjective, objective, assessment, plan).

use rusqlite::params;

use clinic_model::{Assessment, Objective, PlanNote, Subjective};

use super::{Database, StoreResult};

impl Database {
    pub fn insert_subjective(&self, note: &Subjective) -> StoreResult<usize> {
        let count = self.conn.execute(
            r#"
            INSERT OR IGNORE INTO soap_subjective(
                subject_id, patient_id, addnotes, appetite, attitude,
                drinking, notice, pooping, urinating, chief_complaint,
                duration, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)
            "#,
            params![
                note.subject_id,
                note.patient_id,
                note.addnotes,
                note.appetite,
                note.attitude,
                note.drinking,
                note.notice,
                note.pooping,
                note.urinating,
                note.chief_complaint,
                note.duration,
                note.created_at,
            ],
        )?;
        Ok(count)
    }

    pub fn insert_objective(&self, note: &Objective) -> StoreResult<usize> {
        let count = self.conn.execute(
            r#"
            INSERT OR IGNORE INTO soap_objective(
                objective_id, patient_id, temp, pulse, resprate, weight,
                mucmemb, lymnodes, hydration, crt, bcs, visual_exam, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)
            "#,
            params![
                note.objective_id,
                note.patient_id,
                note.temp,
                note.pulse,
                note.resprate,
                note.weight,
                note.mucmemb,
                note.lymnodes,
                note.hydration,
                note.crt,
                note.bcs,
                note.visual_exam,
                note.created_at,
            ],
        )?;
        Ok(count)
    }

    pub fn insert_assessment(&self, note: &Assessment) -> StoreResult<usize> {
        let count = self.conn.execute(
            r#"
            INSERT OR IGNORE INTO soap_assessment(assess_id, patient_id, diagnosis, created_at)
            VALUES (?1, ?2, ?3, ?4)
            "#,
            params![note.assess_id, note.patient_id, note.diagnosis, note.created_at],
        )?;
        Ok(count)
    }

    pub fn insert_plan(&self, note: &PlanNote) -> StoreResult<usize> {
        let count = self.conn.execute(
            r#"
            INSERT OR IGNORE INTO soap_plan(plan_id, patient_id, plan, created_at)
            VALUES (?1, ?2, ?3, ?4)
            "#,
            params![note.plan_id, note.patient_id, note.plan, note.created_at],
        )?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn soap_inserts_are_idempotent() {
        let db = Database::open_in_memory().unwrap();
        let note = Assessment {
            assess_id: 5,
            patient_id: 10001,
            diagnosis: Some("Otitis externa".to_string()),
            created_at: None,
        };
        assert_eq!(db.insert_assessment(&note).unwrap(), 1);
        assert_eq!(db.insert_assessment(&note).unwrap(), 0);
        let plan = PlanNote {
            plan_id: 9,
            patient_id: 10001,
            plan: Some("Ear drops for 7 days".to_string()),
            created_at: None,
        };
        assert_eq!(db.insert_plan(&plan).unwrap(), 1);
        assert_eq!(db.insert_plan(&plan).unwrap(), 0);
    }
}
