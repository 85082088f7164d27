//! SOAP note loaders.
//!
//! The subjective export uses abbreviated headers: `attid` (attitude),
//! `poopng` (pooping), `urnatng` (urinating), `cheifcom` (chief complaint).

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use clinic_ingest::{RowView, clean_opt, parse_i64, read_csv_table};
use clinic_model::{Assessment, Objective, PlanNote, Subjective};
use clinic_store::Database;

use super::files;

pub fn load_subjective(db: &Database, csv_dir: &Path) -> Result<usize> {
    let table = read_csv_table(&csv_dir.join(files::SUBJECTIVE))
        .with_context(|| format!("load {}", files::SUBJECTIVE))?;
    let tx = db.begin()?;
    let mut inserted = 0usize;
    for (line, row) in table.rows().enumerate() {
        let Some(note) = subjective_from_row(&row) else {
            debug!(line, "skipping subjective row");
            continue;
        };
        match db.insert_subjective(&note) {
            Ok(count) => inserted += count,
            Err(error) => debug!(line, %error, "subjective insert failed"),
        }
    }
    tx.commit()?;
    info!(count = inserted, "subjective notes imported");
    Ok(inserted)
}

fn subjective_from_row(row: &RowView<'_>) -> Option<Subjective> {
    Some(Subjective {
        subject_id: row.get("subject_id").and_then(parse_i64)?,
        patient_id: row.get("patient_id").and_then(parse_i64)?,
        addnotes: clean_opt(row.get("addnotes")),
        appetite: clean_opt(row.get("appetite")),
        attitude: clean_opt(row.get("attid")),
        drinking: clean_opt(row.get("drinking")),
        notice: clean_opt(row.get("notice")),
        pooping: clean_opt(row.get("poopng")),
        urinating: clean_opt(row.get("urnatng")),
        chief_complaint: clean_opt(row.get("cheifcom")),
        duration: clean_opt(row.get("duration")),
        created_at: clean_opt(row.get("timestamp")),
    })
}

pub fn load_objective(db: &Database, csv_dir: &Path) -> Result<usize> {
    let table = read_csv_table(&csv_dir.join(files::OBJECTIVE))
        .with_context(|| format!("load {}", files::OBJECTIVE))?;
    let tx = db.begin()?;
    let mut inserted = 0usize;
    for (line, row) in table.rows().enumerate() {
        let Some(note) = objective_from_row(&row) else {
            debug!(line, "skipping objective row");
            continue;
        };
        match db.insert_objective(&note) {
            Ok(count) => inserted += count,
            Err(error) => debug!(line, %error, "objective insert failed"),
        }
    }
    tx.commit()?;
    info!(count = inserted, "objective notes imported");
    Ok(inserted)
}

fn objective_from_row(row: &RowView<'_>) -> Option<Objective> {
    Some(Objective {
        objective_id: row.get("objective_id").and_then(parse_i64)?,
        patient_id: row.get("patient_id").and_then(parse_i64)?,
        temp: clean_opt(row.get("temp")),
        pulse: clean_opt(row.get("pulse")),
        resprate: clean_opt(row.get("resprate")),
        weight: clean_opt(row.get("weight")),
        mucmemb: clean_opt(row.get("mucmemb")),
        lymnodes: clean_opt(row.get("lymnodes")),
        hydration: clean_opt(row.get("hydration")),
        crt: clean_opt(row.get("crt")),
        bcs: clean_opt(row.get("bcs")),
        visual_exam: clean_opt(row.get("visual_exam")),
        created_at: clean_opt(row.get("timestamp")),
    })
}

pub fn load_assessment(db: &Database, csv_dir: &Path) -> Result<usize> {
    let table = read_csv_table(&csv_dir.join(files::ASSESSMENT))
        .with_context(|| format!("load {}", files::ASSESSMENT))?;
    let tx = db.begin()?;
    let mut inserted = 0usize;
    for (line, row) in table.rows().enumerate() {
        let Some(note) = assessment_from_row(&row) else {
            debug!(line, "skipping assessment row");
            continue;
        };
        match db.insert_assessment(&note) {
            Ok(count) => inserted += count,
            Err(error) => debug!(line, %error, "assessment insert failed"),
        }
    }
    tx.commit()?;
    info!(count = inserted, "assessments imported");
    Ok(inserted)
}

fn assessment_from_row(row: &RowView<'_>) -> Option<Assessment> {
    Some(Assessment {
        assess_id: row.get("assess_id").and_then(parse_i64)?,
        patient_id: row.get("patient_id").and_then(parse_i64)?,
        diagnosis: clean_opt(row.get("diagnosis")),
        created_at: clean_opt(row.get("timestamp")),
    })
}

pub fn load_plan(db: &Database, csv_dir: &Path) -> Result<usize> {
    let table = read_csv_table(&csv_dir.join(files::PLAN))
        .with_context(|| format!("load {}", files::PLAN))?;
    let tx = db.begin()?;
    let mut inserted = 0usize;
    for (line, row) in table.rows().enumerate() {
        let Some(note) = plan_from_row(&row) else {
            debug!(line, "skipping plan row");
            continue;
        };
        match db.insert_plan(&note) {
            Ok(count) => inserted += count,
            Err(error) => debug!(line, %error, "plan insert failed"),
        }
    }
    tx.commit()?;
    info!(count = inserted, "plans imported");
    Ok(inserted)
}

fn plan_from_row(row: &RowView<'_>) -> Option<PlanNote> {
    Some(PlanNote {
        plan_id: row.get("plan_id").and_then(parse_i64)?,
        patient_id: row.get("patient_id").and_then(parse_i64)?,
        plan: clean_opt(row.get("plan")),
        created_at: clean_opt(row.get("timestamp")),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abbreviated_headers_map_to_full_columns() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(files::SUBJECTIVE),
            "subject_id,patient_id,addnotes,appetite,attid,drinking,notice,poopng,urnatng,cheifcom,duration,timestamp\n\
             4,10001,,Good,Bright,Normal,,Normal,Normal,Limping,2 days,2024-01-05\n",
        )
        .unwrap();
        let db = Database::open_in_memory().unwrap();
        assert_eq!(load_subjective(&db, dir.path()).unwrap(), 1);

        let (attitude, complaint): (Option<String>, Option<String>) = db
            .conn()
            .query_row(
                "SELECT attitude, chief_complaint FROM soap_subjective WHERE subject_id = 4",
                [],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .unwrap();
        assert_eq!(attitude.as_deref(), Some("Bright"));
        assert_eq!(complaint.as_deref(), Some("Limping"));
    }

    #[test]
    fn rows_without_patient_id_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(files::PLAN),
            "plan_id,patient_id,plan,timestamp\n\
             1,,Dental cleaning,\n\
             2,10001,Recheck in a week,\n",
        )
        .unwrap();
        let db = Database::open_in_memory().unwrap();
        assert_eq!(load_plan(&db, dir.path()).unwrap(), 1);
        assert_eq!(db.table_count("soap_plan").unwrap(), 1);
    }
}
