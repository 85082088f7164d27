//! Pet parent loader.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use clinic_ingest::{RowView, clean_opt, parse_i64, read_csv_table};
use clinic_model::PetParent;
use clinic_store::Database;

use super::files;

pub fn load_pet_parents(db: &Database, csv_dir: &Path) -> Result<usize> {
    let table = read_csv_table(&csv_dir.join(files::PET_PARENTS))
        .with_context(|| format!("load {}", files::PET_PARENTS))?;
    let tx = db.begin()?;
    let mut inserted = 0usize;
    for (line, row) in table.rows().enumerate() {
        let Some(parent) = parent_from_row(&row) else {
            debug!(line, "skipping pet parent row");
            continue;
        };
        match db.insert_pet_parent(&parent) {
            Ok(count) => inserted += count,
            Err(error) => debug!(line, %error, "pet parent insert failed"),
        }
    }
    tx.commit()?;
    info!(count = inserted, "pet parents imported");
    Ok(inserted)
}

fn parent_from_row(row: &RowView<'_>) -> Option<PetParent> {
    Some(PetParent {
        pet_parent_id: row.get("pet_parent_id").and_then(parse_i64)?,
        name: clean_opt(row.get("name")).unwrap_or_else(|| "Unknown".to_string()),
        mobile_no: clean_opt(row.get("mobile_no")),
        email_id: clean_opt(row.get("email_id")),
        created_at: clean_opt(row.get("timestamp")),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_without_an_id_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(files::PET_PARENTS),
            "pet_parent_id,name,mobile_no,email_id,timestamp\n\
             1,Asha Rao,9000000001,asha@example.com,2024-01-01\n\
             ,No Id,123,,2024-01-02\n\
             2,NULL,,,\n",
        )
        .unwrap();
        let db = Database::open_in_memory().unwrap();
        let inserted = load_pet_parents(&db, dir.path()).unwrap();
        assert_eq!(inserted, 2);
        // Missing name falls back to the placeholder.
        let name: String = db
            .conn()
            .query_row(
                "SELECT name FROM pet_parents WHERE pet_parent_id = 2",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(name, "Unknown");
    }

    #[test]
    fn reruns_do_not_duplicate() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(files::PET_PARENTS),
            "pet_parent_id,name\n1,Asha Rao\n",
        )
        .unwrap();
        let db = Database::open_in_memory().unwrap();
        assert_eq!(load_pet_parents(&db, dir.path()).unwrap(), 1);
        assert_eq!(load_pet_parents(&db, dir.path()).unwrap(), 0);
        assert_eq!(db.table_count("pet_parents").unwrap(), 1);
    }
}
