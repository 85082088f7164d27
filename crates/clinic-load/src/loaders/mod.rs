//! One loader per source file.
//!
//! Uniform contract: read the whole file, build a sanitized entity per row,
//! insert with insert-if-absent semantics, commit once at the end. A row
//! that cannot be built or inserted is skipped; only the aggregate inserted
//! count is returned.

mod invoices;
mod parents;
mod patients;
mod prescriptions;
mod records;
mod soap;
mod vaccinations;

pub use invoices::load_invoices;
pub use parents::load_pet_parents;
pub use patients::load_patients;
pub use prescriptions::load_prescriptions;
pub use records::load_visit_records;
pub use soap::{load_assessment, load_objective, load_plan, load_subjective};
pub use vaccinations::load_vaccinations;

/// Fixed source file names, as exported by the clinic system.
pub mod files {
    pub const PET_PARENTS: &str = "pet_parents.csv";
    pub const PATIENTS: &str = "patients.csv";
    pub const SUBJECTIVE: &str = "subjective.csv";
    pub const OBJECTIVE: &str = "objective.csv";
    pub const ASSESSMENT: &str = "assessment.csv";
    pub const PLAN: &str = "plan.csv";
    pub const RECORDS: &str = "records.csv";
    pub const PRESCRIPTION: &str = "prescription.csv";
    pub const VACCINATIONS: &str = "vaccinations.csv";
    pub const INVOICES: &str = "Invoices.csv";
}
