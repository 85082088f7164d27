//! Counter derivation after import.

use anyhow::Result;
use tracing::info;

use clinic_model::{COUNTER_INVOICE, COUNTER_PATIENT, PATIENT_SEED};
use clinic_store::Database;

/// Invoice reference prefix recognized by the counter derivation.
const INVOICE_REF_PREFIX: &str = "IN:";

/// Parse the numeric suffix out of an invoice reference.
///
/// References look like `IN:PC-2024-0031`: everything after the first `-`
/// and the four-character year segment, with any remaining `-` removed, is
/// the invoice number. References with another prefix or an unparsable
/// suffix yield `None` and are excluded from the maximum.
pub fn invoice_ref_number(reference: &str) -> Option<i64> {
    if !reference.starts_with(INVOICE_REF_PREFIX) {
        return None;
    }
    let dash = reference.find('-')?;
    let suffix = reference.get(dash + 5..)?;
    let digits: String = suffix.chars().filter(|ch| *ch != '-').collect();
    digits.parse().ok()
}

/// Advance the patient and invoice counters to one past the maximum values
/// observed in the imported data.
pub fn update_counters(db: &Database) -> Result<()> {
    let max_patient = db.max_patient_id()?.unwrap_or(PATIENT_SEED);
    db.set_counter(COUNTER_PATIENT, max_patient + 1)?;

    let max_invoice = db
        .invoice_refs()?
        .iter()
        .filter_map(|reference| invoice_ref_number(reference))
        .max()
        .unwrap_or(0);
    db.set_counter(COUNTER_INVOICE, max_invoice + 1)?;

    info!(
        patient_counter = max_patient + 1,
        invoice_counter = max_invoice + 1,
        "counters updated"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clinic_model::{Patient, patient_display_id};

    fn patient(id: i64) -> Patient {
        Patient {
            id: patient_display_id(id),
            patient_id: id,
            name: "Rex".to_string(),
            sex: None,
            species: None,
            breed: None,
            age: None,
            colour: None,
            microchip_no: None,
            identify_mark: None,
            owner_name: None,
            phone: None,
            email: None,
            pet_parent_id: None,
            status: None,
            created_at: None,
        }
    }

    #[test]
    fn ref_number_parses_the_suffix() {
        assert_eq!(invoice_ref_number("IN:PC-2024-0031"), Some(31));
        assert_eq!(invoice_ref_number("IN:PC-2024-1204"), Some(1204));
        assert_eq!(invoice_ref_number("INV-2024-0031"), None);
        assert_eq!(invoice_ref_number("IN:PC"), None);
        assert_eq!(invoice_ref_number("IN:PC-20"), None);
        assert_eq!(invoice_ref_number("IN:PC-2024-00x1"), None);
    }

    #[test]
    fn patient_counter_is_one_past_the_maximum() {
        let db = Database::open_in_memory().unwrap();
        for id in [10001, 10050, 10032] {
            db.insert_patient(&patient(id)).unwrap();
        }
        update_counters(&db).unwrap();
        assert_eq!(db.counter(COUNTER_PATIENT).unwrap(), Some(10051));
    }

    #[test]
    fn empty_tables_fall_back_to_defaults() {
        let db = Database::open_in_memory().unwrap();
        update_counters(&db).unwrap();
        assert_eq!(db.counter(COUNTER_PATIENT).unwrap(), Some(10001));
        assert_eq!(db.counter(COUNTER_INVOICE).unwrap(), Some(1));
    }
}
