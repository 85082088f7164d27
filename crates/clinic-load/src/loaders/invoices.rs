//! Invoice loader.
//!
//! Denormalizes patient and owner snapshots from the patients and pet
//! parents files, normalizes the payment method, derives paid/balance from
//! the status, and synthesizes exactly one line item per inserted invoice
//! describing the aggregate total.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use clinic_ingest::{RowView, clean_opt, parse_i64, parse_opt_f64, parse_opt_i64, read_csv_table};
use clinic_model::{Invoice, InvoiceItem};
use clinic_store::Database;

use super::files;
use crate::lookup::{ParentLookup, PatientLookup, load_parent_lookup, load_patient_lookup};
use crate::method::normalize_payment_method;

/// Name of the synthesized line item carrying the invoice total.
const DEFAULT_ITEM_NAME: &str = "Consultation / Treatment";

pub fn load_invoices(db: &Database, csv_dir: &Path) -> Result<usize> {
    let table = read_csv_table(&csv_dir.join(files::INVOICES))
        .with_context(|| format!("load {}", files::INVOICES))?;
    let patients = load_patient_lookup(&csv_dir.join(files::PATIENTS))
        .with_context(|| format!("load {}", files::PATIENTS))?;
    let parents = load_parent_lookup(&csv_dir.join(files::PET_PARENTS))
        .with_context(|| format!("load {}", files::PET_PARENTS))?;
    let tx = db.begin()?;
    let mut inserted = 0usize;
    for (line, row) in table.rows().enumerate() {
        let Some(invoice) = invoice_from_row(&row, &patients, &parents) else {
            debug!(line, "skipping invoice row");
            continue;
        };
        match db.insert_invoice(&invoice) {
            Ok(0) => {}
            Ok(count) => {
                inserted += count;
                // One synthetic line item per freshly inserted invoice.
                let item = line_item_for(&invoice);
                if let Err(error) = db.insert_invoice_item(&item) {
                    debug!(line, %error, "invoice item insert failed");
                }
            }
            Err(error) => debug!(line, %error, "invoice insert failed"),
        }
    }
    tx.commit()?;
    info!(count = inserted, "invoices imported");
    Ok(inserted)
}

fn invoice_from_row(
    row: &RowView<'_>,
    patients: &PatientLookup,
    parents: &ParentLookup,
) -> Option<Invoice> {
    // A row without a usable reference cannot be keyed and is dropped.
    let reference = clean_opt(row.get("ref"))?;
    let invoice_id = row.get("invoice_id").and_then(parse_i64)?;

    // Optional numerics: absent is fine, a present garbage value fails the row.
    let patient_id = parse_opt_i64(row.get("patient_id"))?;
    let patient = patient_id.and_then(|id| patients.get(&id));
    let pet_parent_id = parse_opt_i64(row.get("pet_parent_id"))?;
    let parent = pet_parent_id.and_then(|id| parents.get(&id));

    let payment_type = clean_opt(row.get("payment_type"));
    let method = payment_type
        .as_deref()
        .map(normalize_payment_method);

    let total = parse_opt_f64(row.get("total"))?.unwrap_or(0.0);
    let discount = parse_opt_f64(row.get("final_discount"))?.unwrap_or(0.0);
    let status = clean_opt(row.get("status")).unwrap_or_else(|| "Draft".to_string());
    let (paid_amount, balance) = if status == "Paid" {
        (total, 0.0)
    } else {
        (0.0, total)
    };

    Some(Invoice {
        reference,
        invoice_id,
        date: clean_opt(row.get("date")),
        patient_id,
        patient_name: patient.and_then(|p| p.name.clone()).unwrap_or_default(),
        patient_type: patient.and_then(|p| p.species.clone()).unwrap_or_default(),
        owner_name: parent.and_then(|p| p.name.clone()),
        phone: parent.and_then(|p| p.mobile_no.clone()),
        pet_parent_id,
        payment_type,
        method,
        discount,
        total,
        paid_amount,
        balance,
        status,
        plan_id: parse_opt_i64(row.get("plan_id"))?,
        preventive_id: parse_opt_i64(row.get("preventive_id"))?,
        subtotal: total + discount,
        created_at: clean_opt(row.get("timestamp")),
    })
}

fn line_item_for(invoice: &Invoice) -> InvoiceItem {
    InvoiceItem {
        invoice_ref: invoice.reference.clone(),
        name: DEFAULT_ITEM_NAME.to_string(),
        quantity: 1.0,
        unit_price: invoice.total + invoice.discount,
        discount: invoice.discount,
        total: invoice.total,
    }
}
