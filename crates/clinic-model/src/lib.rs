//! Data model for the clinic CSV import tool.

pub mod counters;
pub mod entities;
pub mod tables;

pub use counters::{COUNTER_INVOICE, COUNTER_PATIENT, INVOICE_SEED, PATIENT_SEED};
pub use entities::{
    Assessment, Invoice, InvoiceItem, Objective, Patient, PetParent, PlanNote, Prescription,
    Subjective, Vaccination, VisitRecord, patient_display_id,
};
pub use tables::{IMPORT_TABLES, table_description};
