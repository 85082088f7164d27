//! Prescription line loader.
//!
//! The export carries `prescription_id` twice. When the header is
//! duplicated the named lookup is ambiguous, so the prescription id is
//! taken from the ninth column by position, matching the export layout.
//! Quantity/duration/frequency headers are abbreviated (`quan`, `dur`,
//! `freq`).

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use clinic_ingest::{RowView, clean_opt, parse_i64, parse_opt_i64, read_csv_table};
use clinic_model::Prescription;
use clinic_store::Database;

use super::files;

/// Position of the duplicated prescription id column in the export.
const PRESCRIPTION_ID_COLUMN: usize = 9;

pub fn load_prescriptions(db: &Database, csv_dir: &Path) -> Result<usize> {
    let table = read_csv_table(&csv_dir.join(files::PRESCRIPTION))
        .with_context(|| format!("load {}", files::PRESCRIPTION))?;
    let prescription_id_index = if table.is_ambiguous("prescription_id") {
        Some(PRESCRIPTION_ID_COLUMN)
    } else {
        table.column("prescription_id")
    };
    let tx = db.begin()?;
    let mut inserted = 0usize;
    for (line, row) in table.rows().enumerate() {
        let Some(prescription) = prescription_from_row(&row, prescription_id_index) else {
            debug!(line, "skipping prescription row");
            continue;
        };
        match db.insert_prescription(&prescription) {
            Ok(count) => inserted += count,
            Err(error) => debug!(line, %error, "prescription insert failed"),
        }
    }
    tx.commit()?;
    info!(count = inserted, "prescription lines imported");
    Ok(inserted)
}

fn prescription_from_row(
    row: &RowView<'_>,
    prescription_id_index: Option<usize>,
) -> Option<Prescription> {
    let prescription_id =
        parse_opt_i64(prescription_id_index.and_then(|index| row.get_at(index)))?;
    Some(Prescription {
        presmeds_id: row.get("presmeds_id").and_then(parse_i64)?,
        patient_id: row.get("patient_id").and_then(parse_i64)?,
        prescription_id,
        med_name: clean_opt(row.get("med_name")),
        prefix: clean_opt(row.get("prefix")),
        quantity: clean_opt(row.get("quan")),
        quantity_type: clean_opt(row.get("quan_type")),
        duration: clean_opt(row.get("dur")),
        duration_type: clean_opt(row.get("dur_type")),
        frequency: clean_opt(row.get("freq")),
        instruction: clean_opt(row.get("instruction")),
        created_at: clean_opt(row.get("timestamp")),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // Column layout of the real export: prescription_id appears at index 2
    // and again at index 9.
    const HEADER: &str = "presmeds_id,patient_id,prescription_id,med_name,prefix,quan,quan_type,dur,dur_type,prescription_id,freq,instruction,timestamp\n";

    #[test]
    fn duplicated_header_uses_the_positional_column() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(files::PRESCRIPTION),
            format!("{HEADER}12,10001,999,Carprofen,Tab,10,tablets,5,days,7,BID,After food,2024-01-05\n"),
        )
        .unwrap();
        let db = Database::open_in_memory().unwrap();
        assert_eq!(load_prescriptions(&db, dir.path()).unwrap(), 1);

        let prescription_id: Option<i64> = db
            .conn()
            .query_row(
                "SELECT prescription_id FROM prescriptions WHERE presmeds_id = 12",
                [],
                |row| row.get(0),
            )
            .unwrap();
        // Index 9, not the first occurrence at index 2.
        assert_eq!(prescription_id, Some(7));
    }

    #[test]
    fn unique_header_uses_the_named_column() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(files::PRESCRIPTION),
            "presmeds_id,patient_id,prescription_id,med_name\n12,10001,7,Carprofen\n",
        )
        .unwrap();
        let db = Database::open_in_memory().unwrap();
        assert_eq!(load_prescriptions(&db, dir.path()).unwrap(), 1);

        let prescription_id: Option<i64> = db
            .conn()
            .query_row(
                "SELECT prescription_id FROM prescriptions WHERE presmeds_id = 12",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(prescription_id, Some(7));
    }
}
