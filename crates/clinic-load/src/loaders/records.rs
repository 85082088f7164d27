//! Visit record loader.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use clinic_ingest::{RowView, clean_opt, parse_i64, parse_opt_i64, read_csv_table};
use clinic_model::VisitRecord;
use clinic_store::Database;

use super::files;

pub fn load_visit_records(db: &Database, csv_dir: &Path) -> Result<usize> {
    let table = read_csv_table(&csv_dir.join(files::RECORDS))
        .with_context(|| format!("load {}", files::RECORDS))?;
    let tx = db.begin()?;
    let mut inserted = 0usize;
    for (line, row) in table.rows().enumerate() {
        let Some(record) = record_from_row(&row) else {
            debug!(line, "skipping visit record row");
            continue;
        };
        match db.insert_visit_record(&record) {
            Ok(count) => inserted += count,
            Err(error) => debug!(line, %error, "visit record insert failed"),
        }
    }
    tx.commit()?;
    info!(count = inserted, "visit records imported");
    Ok(inserted)
}

fn record_from_row(row: &RowView<'_>) -> Option<VisitRecord> {
    Some(VisitRecord {
        record_id: row.get("record_id").and_then(parse_i64)?,
        patient_id: row.get("patient_id").and_then(parse_i64)?,
        // Links may be absent, but a present unparsable id fails the row.
        subject_id: parse_opt_i64(row.get("subject_id"))?,
        objective_id: parse_opt_i64(row.get("objective_id"))?,
        assess_id: parse_opt_i64(row.get("assess_id"))?,
        plan_id: parse_opt_i64(row.get("plan_id"))?,
        prescription_id: parse_opt_i64(row.get("prescription_id"))?,
        user_id: parse_opt_i64(row.get("user_id"))?,
        created_at: clean_opt(row.get("timestamp")),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_links_may_be_absent() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(files::RECORDS),
            "record_id,patient_id,subject_id,objective_id,assess_id,plan_id,prescription_id,user_id,timestamp\n\
             1,10001,4,,,,,2,2024-01-05\n\
             2,10001,NULL,NULL,7,NULL,NULL,NULL,\n\
             ,10001,,,,,,,\n",
        )
        .unwrap();
        let db = Database::open_in_memory().unwrap();
        assert_eq!(load_visit_records(&db, dir.path()).unwrap(), 2);

        let (subject, assess): (Option<i64>, Option<i64>) = db
            .conn()
            .query_row(
                "SELECT subject_id, assess_id FROM records WHERE record_id = 2",
                [],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .unwrap();
        assert_eq!(subject, None);
        assert_eq!(assess, Some(7));
    }

    #[test]
    fn unparsable_link_id_fails_the_row() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(files::RECORDS),
            "record_id,patient_id,subject_id,objective_id,assess_id,plan_id,prescription_id,user_id,timestamp\n\
             1,10001,abc,,,,,2,2024-01-05\n\
             2,10001,4,,,,,2,2024-01-06\n",
        )
        .unwrap();
        let db = Database::open_in_memory().unwrap();
        // Garbage in subject_id drops that row; the next row still lands.
        assert_eq!(load_visit_records(&db, dir.path()).unwrap(), 1);
        assert_eq!(db.table_count("records").unwrap(), 1);
    }
}
