//! Invoice and invoice line-item operations.

use rusqlite::params;

use clinic_model::{Invoice, InvoiceItem};

use super::{Database, StoreResult};

impl Database {
    /// Insert an invoice, skipping silently when the reference (or numeric
    /// invoice id) already exists. Returns the number of rows inserted.
    pub fn insert_invoice(&self, invoice: &Invoice) -> StoreResult<usize> {
        let count = self.conn.execute(
            r#"
            INSERT OR IGNORE INTO invoices(
                ref, invoice_id, date, patient_id, patient_name, patient_type,
                owner_name, phone, pet_parent_id, payment_type, method,
                discount, total, paid_amount, balance, status,
                plan_id, preventive_id, subtotal, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10,
                      ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18, ?19, ?20)
            "#,
            params![
                invoice.reference,
                invoice.invoice_id,
                invoice.date,
                invoice.patient_id,
                invoice.patient_name,
                invoice.patient_type,
                invoice.owner_name,
                invoice.phone,
                invoice.pet_parent_id,
                invoice.payment_type,
                invoice.method,
                invoice.discount,
                invoice.total,
                invoice.paid_amount,
                invoice.balance,
                invoice.status,
                invoice.plan_id,
                invoice.preventive_id,
                invoice.subtotal,
                invoice.created_at,
            ],
        )?;
        Ok(count)
    }

    /// Insert a line item. Items are synthesized only for freshly inserted
    /// invoices, so there is no conflict handling here.
    pub fn insert_invoice_item(&self, item: &InvoiceItem) -> StoreResult<usize> {
        let count = self.conn.execute(
            r#"
            INSERT INTO invoice_items(invoice_ref, name, quantity, unit_price, discount, total)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
            params![
                item.invoice_ref,
                item.name,
                item.quantity,
                item.unit_price,
                item.discount,
                item.total,
            ],
        )?;
        Ok(count)
    }

    /// All invoice references, for counter derivation.
    pub fn invoice_refs(&self) -> StoreResult<Vec<String>> {
        let mut stmt = self.conn.prepare("SELECT ref FROM invoices")?;
        let refs = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        Ok(refs)
    }
}
