//! Vaccination / preventive-care loader.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use clinic_ingest::{RowView, clean_opt, parse_i64, read_csv_table};
use clinic_model::Vaccination;
use clinic_store::Database;

use super::files;

pub fn load_vaccinations(db: &Database, csv_dir: &Path) -> Result<usize> {
    let table = read_csv_table(&csv_dir.join(files::VACCINATIONS))
        .with_context(|| format!("load {}", files::VACCINATIONS))?;
    let tx = db.begin()?;
    let mut inserted = 0usize;
    for (line, row) in table.rows().enumerate() {
        let Some(event) = vaccination_from_row(&row) else {
            debug!(line, "skipping vaccination row");
            continue;
        };
        match db.insert_vaccination(&event) {
            Ok(count) => inserted += count,
            Err(error) => debug!(line, %error, "vaccination insert failed"),
        }
    }
    tx.commit()?;
    info!(count = inserted, "vaccinations imported");
    Ok(inserted)
}

fn vaccination_from_row(row: &RowView<'_>) -> Option<Vaccination> {
    Some(Vaccination {
        pchistory_id: row.get("pchistory_id").and_then(parse_i64)?,
        preventive_id: row.get("preventive_id").and_then(parse_i64)?,
        patient_id: row.get("patient_id").and_then(parse_i64)?,
        date: clean_opt(row.get("date")),
        age: clean_opt(row.get("age")),
        veterinarian: clean_opt(row.get("veterinarian")),
        type_care: clean_opt(row.get("type_care")),
        treatment: clean_opt(row.get("treatment")),
        created_at: clean_opt(row.get("timestamp")),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_three_ids_are_required() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(files::VACCINATIONS),
            "pchistory_id,preventive_id,patient_id,date,age,veterinarian,type_care,treatment,timestamp\n\
             1,3,10001,2024-01-10,3y,Dr. Mehta,Vaccination,Rabies,2024-01-10\n\
             2,,10001,2024-01-11,,,,,\n",
        )
        .unwrap();
        let db = Database::open_in_memory().unwrap();
        assert_eq!(load_vaccinations(&db, dir.path()).unwrap(), 1);
        assert_eq!(db.table_count("vaccinations").unwrap(), 1);
    }
}
