//! Named sequence counters stored alongside the imported data.

/// Counter advancing the next invoice number.
pub const COUNTER_INVOICE: &str = "invoice";

/// Counter advancing the next numeric patient id.
pub const COUNTER_PATIENT: &str = "patient";

/// Seed value for the invoice counter when the table is first created.
pub const INVOICE_SEED: i64 = 1;

/// Seed value for the patient counter; patient ids are issued above it.
pub const PATIENT_SEED: i64 = 10000;
