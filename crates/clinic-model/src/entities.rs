//! Row types for every table the importer writes.
//!
//! Fields mirror the target columns; optional fields hold `None` when the
//! source value was missing or a null placeholder. Timestamps are carried
//! through as text exactly as exported.

use serde::{Deserialize, Serialize};

/// Prefix used for the patient display id.
pub const PATIENT_ID_PREFIX: &str = "PaCPC";

/// Derive the zero-padded display id for a numeric patient id.
pub fn patient_display_id(patient_id: i64) -> String {
    format!("{PATIENT_ID_PREFIX}-{patient_id:05}")
}

/// Owner/guardian of one or more patients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PetParent {
    pub pet_parent_id: i64,
    pub name: String,
    pub mobile_no: Option<String>,
    pub email_id: Option<String>,
    pub created_at: Option<String>,
}

/// Animal patient. Owner fields are a point-in-time snapshot copied from the
/// pet parent at import time, not a live join.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    /// Display id, e.g. `PaCPC-00042`.
    pub id: String,
    pub patient_id: i64,
    pub name: String,
    pub sex: Option<String>,
    pub species: Option<String>,
    pub breed: Option<String>,
    pub age: Option<String>,
    pub colour: Option<String>,
    pub microchip_no: Option<String>,
    pub identify_mark: Option<String>,
    pub owner_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub pet_parent_id: Option<i64>,
    pub status: Option<String>,
    pub created_at: Option<String>,
}

/// SOAP subjective note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subjective {
    pub subject_id: i64,
    pub patient_id: i64,
    pub addnotes: Option<String>,
    pub appetite: Option<String>,
    pub attitude: Option<String>,
    pub drinking: Option<String>,
    pub notice: Option<String>,
    pub pooping: Option<String>,
    pub urinating: Option<String>,
    pub chief_complaint: Option<String>,
    pub duration: Option<String>,
    pub created_at: Option<String>,
}

/// SOAP objective note (vitals).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Objective {
    pub objective_id: i64,
    pub patient_id: i64,
    pub temp: Option<String>,
    pub pulse: Option<String>,
    pub resprate: Option<String>,
    pub weight: Option<String>,
    pub mucmemb: Option<String>,
    pub lymnodes: Option<String>,
    pub hydration: Option<String>,
    pub crt: Option<String>,
    pub bcs: Option<String>,
    pub visual_exam: Option<String>,
    pub created_at: Option<String>,
}

/// SOAP assessment note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub assess_id: i64,
    pub patient_id: i64,
    pub diagnosis: Option<String>,
    pub created_at: Option<String>,
}

/// SOAP plan note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanNote {
    pub plan_id: i64,
    pub patient_id: i64,
    pub plan: Option<String>,
    pub created_at: Option<String>,
}

/// One visit, linking at most one of each SOAP part plus a prescription and
/// the recording user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisitRecord {
    pub record_id: i64,
    pub patient_id: i64,
    pub subject_id: Option<i64>,
    pub objective_id: Option<i64>,
    pub assess_id: Option<i64>,
    pub plan_id: Option<i64>,
    pub prescription_id: Option<i64>,
    pub user_id: Option<i64>,
    pub created_at: Option<String>,
}

/// One medication line on a prescription.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prescription {
    pub presmeds_id: i64,
    pub patient_id: i64,
    pub prescription_id: Option<i64>,
    pub med_name: Option<String>,
    pub prefix: Option<String>,
    pub quantity: Option<String>,
    pub quantity_type: Option<String>,
    pub duration: Option<String>,
    pub duration_type: Option<String>,
    pub frequency: Option<String>,
    pub instruction: Option<String>,
    pub created_at: Option<String>,
}

/// Preventive-care event for a patient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vaccination {
    pub pchistory_id: i64,
    pub preventive_id: i64,
    pub patient_id: i64,
    pub date: Option<String>,
    pub age: Option<String>,
    pub veterinarian: Option<String>,
    pub type_care: Option<String>,
    pub treatment: Option<String>,
    pub created_at: Option<String>,
}

/// Invoice, keyed by its textual reference rather than the numeric id.
/// Patient and owner fields are denormalized snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub reference: String,
    pub invoice_id: i64,
    pub date: Option<String>,
    pub patient_id: Option<i64>,
    pub patient_name: String,
    pub patient_type: String,
    pub owner_name: Option<String>,
    pub phone: Option<String>,
    pub pet_parent_id: Option<i64>,
    pub payment_type: Option<String>,
    /// Payment method normalized to the fixed vocabulary.
    pub method: Option<String>,
    pub discount: f64,
    pub total: f64,
    pub paid_amount: f64,
    pub balance: f64,
    pub status: String,
    pub plan_id: Option<i64>,
    pub preventive_id: Option<i64>,
    pub subtotal: f64,
    pub created_at: Option<String>,
}

/// Synthetic line item describing an invoice's aggregate total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceItem {
    pub invoice_ref: String,
    pub name: String,
    pub quantity: f64,
    pub unit_price: f64,
    pub discount: f64,
    pub total: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_id_is_zero_padded() {
        assert_eq!(patient_display_id(42), "PaCPC-00042");
        assert_eq!(patient_display_id(10051), "PaCPC-10051");
    }
}
