//! Patient loader.
//!
//! Owner name/phone/email are denormalized from the pet parents file at
//! import time. The source header `color` maps to the `colour` column and
//! `age_dob` to `age`.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use clinic_ingest::{RowView, clean_opt, parse_i64, parse_opt_i64, read_csv_table};
use clinic_model::{Patient, patient_display_id};
use clinic_store::Database;

use super::files;
use crate::lookup::{ParentLookup, load_parent_lookup};

pub fn load_patients(db: &Database, csv_dir: &Path) -> Result<usize> {
    let table = read_csv_table(&csv_dir.join(files::PATIENTS))
        .with_context(|| format!("load {}", files::PATIENTS))?;
    let parents = load_parent_lookup(&csv_dir.join(files::PET_PARENTS))
        .with_context(|| format!("load {}", files::PET_PARENTS))?;
    let tx = db.begin()?;
    let mut inserted = 0usize;
    for (line, row) in table.rows().enumerate() {
        let Some(patient) = patient_from_row(&row, &parents) else {
            debug!(line, "skipping patient row");
            continue;
        };
        match db.insert_patient(&patient) {
            Ok(count) => inserted += count,
            Err(error) => debug!(line, %error, "patient insert failed"),
        }
    }
    tx.commit()?;
    info!(count = inserted, "patients imported");
    Ok(inserted)
}

fn patient_from_row(row: &RowView<'_>, parents: &ParentLookup) -> Option<Patient> {
    let patient_id = row.get("patient_id").and_then(parse_i64)?;
    let pet_parent_id = parse_opt_i64(row.get("pet_parent_id"))?;
    let parent = pet_parent_id.and_then(|id| parents.get(&id));

    // Legacy export encodes unknown species as "0".
    let species = match clean_opt(row.get("species")) {
        Some(value) if value == "0" => Some("Other".to_string()),
        other => other,
    };

    Some(Patient {
        id: patient_display_id(patient_id),
        patient_id,
        name: clean_opt(row.get("name")).unwrap_or_else(|| "Unknown".to_string()),
        sex: clean_opt(row.get("sex")),
        species,
        breed: clean_opt(row.get("breed")),
        age: clean_opt(row.get("age_dob")),
        colour: clean_opt(row.get("color")),
        microchip_no: clean_opt(row.get("microchip_no")),
        identify_mark: clean_opt(row.get("identify_mark")),
        owner_name: parent.and_then(|p| p.name.clone()),
        phone: parent.and_then(|p| p.mobile_no.clone()),
        email: parent.and_then(|p| p.email_id.clone()),
        pet_parent_id,
        status: clean_opt(row.get("status")),
        created_at: clean_opt(row.get("timestamp")),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_sources(dir: &Path) {
        std::fs::write(
            dir.join(files::PET_PARENTS),
            "pet_parent_id,name,mobile_no,email_id\n\
             1,Asha Rao,9000000001,asha@example.com\n",
        )
        .unwrap();
        std::fs::write(
            dir.join(files::PATIENTS),
            "patient_id,name,sex,species,breed,age_dob,color,pet_parent_id,status,timestamp\n\
             10001,Rex,Male,Canine,Labrador,3y,Brown,1,Active,2024-01-01\n\
             10002,Misty,Female,0,,,,99,Active,\n\
             ,NoId,,,,,,,,\n",
        )
        .unwrap();
    }

    #[test]
    fn owner_fields_are_snapshotted() {
        let dir = tempfile::tempdir().unwrap();
        write_sources(dir.path());
        let db = Database::open_in_memory().unwrap();
        assert_eq!(load_patients(&db, dir.path()).unwrap(), 2);

        let (id, owner, phone): (String, Option<String>, Option<String>) = db
            .conn()
            .query_row(
                "SELECT id, owner_name, phone FROM patients WHERE patient_id = 10001",
                [],
                |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
            )
            .unwrap();
        assert_eq!(id, "PaCPC-10001");
        assert_eq!(owner.as_deref(), Some("Asha Rao"));
        assert_eq!(phone.as_deref(), Some("9000000001"));
    }

    #[test]
    fn zero_species_maps_to_other_and_unknown_parent_is_absent() {
        let dir = tempfile::tempdir().unwrap();
        write_sources(dir.path());
        let db = Database::open_in_memory().unwrap();
        load_patients(&db, dir.path()).unwrap();

        let (species, owner): (Option<String>, Option<String>) = db
            .conn()
            .query_row(
                "SELECT type, owner_name FROM patients WHERE patient_id = 10002",
                [],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .unwrap();
        assert_eq!(species.as_deref(), Some("Other"));
        assert_eq!(owner, None);
    }
}
