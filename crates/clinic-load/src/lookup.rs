//! In-memory cross-reference maps built from the source files.
//!
//! These denormalize owner and patient fields onto dependent records at
//! import time; they are snapshots of the CSVs, not live joins.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Result;

use clinic_ingest::{clean_opt, parse_i64, read_csv_table};

/// Owner fields snapshotted onto patients and invoices.
#[derive(Debug, Clone)]
pub struct ParentInfo {
    pub name: Option<String>,
    pub mobile_no: Option<String>,
    pub email_id: Option<String>,
}

/// Patient fields snapshotted onto invoices.
#[derive(Debug, Clone)]
pub struct PatientInfo {
    pub name: Option<String>,
    pub species: Option<String>,
    pub pet_parent_id: Option<i64>,
}

pub type ParentLookup = BTreeMap<i64, ParentInfo>;
pub type PatientLookup = BTreeMap<i64, PatientInfo>;

/// Build the parent-id map by reading the pet parents file. Rows without a
/// usable id are dropped from the map.
pub fn load_parent_lookup(path: &Path) -> Result<ParentLookup> {
    let table = read_csv_table(path)?;
    let mut lookup = ParentLookup::new();
    for row in table.rows() {
        let Some(id) = row.get("pet_parent_id").and_then(parse_i64) else {
            continue;
        };
        lookup.insert(
            id,
            ParentInfo {
                name: clean_opt(row.get("name")),
                mobile_no: clean_opt(row.get("mobile_no")),
                email_id: clean_opt(row.get("email_id")),
            },
        );
    }
    Ok(lookup)
}

/// Build the patient-id map by reading the patients file.
pub fn load_patient_lookup(path: &Path) -> Result<PatientLookup> {
    let table = read_csv_table(path)?;
    let mut lookup = PatientLookup::new();
    for row in table.rows() {
        let Some(id) = row.get("patient_id").and_then(parse_i64) else {
            continue;
        };
        lookup.insert(
            id,
            PatientInfo {
                name: clean_opt(row.get("name")),
                species: clean_opt(row.get("species")),
                pet_parent_id: row.get("pet_parent_id").and_then(parse_i64),
            },
        );
    }
    Ok(lookup)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn parent_lookup_skips_rows_without_id() {
        let file = write_csv(
            "pet_parent_id,name,mobile_no,email_id\n\
             1,Asha Rao,9000000001,asha@example.com\n\
             ,Orphan Row,123,x@example.com\n\
             2,NULL,NULL,NULL\n",
        );
        let lookup = load_parent_lookup(file.path()).unwrap();
        assert_eq!(lookup.len(), 2);
        assert_eq!(lookup[&1].name.as_deref(), Some("Asha Rao"));
        assert_eq!(lookup[&2].name, None);
    }

    #[test]
    fn patient_lookup_keeps_species_and_parent() {
        let file = write_csv(
            "patient_id,name,species,pet_parent_id\n\
             10001,Rex,Canine,1\n\
             10002,Misty,Feline,\n",
        );
        let lookup = load_patient_lookup(file.path()).unwrap();
        assert_eq!(lookup[&10001].species.as_deref(), Some("Canine"));
        assert_eq!(lookup[&10001].pet_parent_id, Some(1));
        assert_eq!(lookup[&10002].pet_parent_id, None);
    }
}
