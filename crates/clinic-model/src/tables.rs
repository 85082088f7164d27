//! Catalog of the tables populated by the importer.

/// Tables reported in the import summary, in reporting order.
pub const IMPORT_TABLES: &[&str] = &[
    "pet_parents",
    "patients",
    "soap_subjective",
    "soap_objective",
    "soap_assessment",
    "soap_plan",
    "records",
    "prescriptions",
    "vaccinations",
    "invoices",
    "invoice_items",
];

/// Short human-readable description for a target table.
pub fn table_description(table: &str) -> &'static str {
    match table {
        "pet_parents" => "Pet parents / owners",
        "patients" => "Patients",
        "soap_subjective" => "SOAP subjective notes",
        "soap_objective" => "SOAP objective notes (vitals)",
        "soap_assessment" => "SOAP assessments",
        "soap_plan" => "SOAP plans",
        "records" => "Visit records",
        "prescriptions" => "Prescription lines",
        "vaccinations" => "Vaccinations / preventive care",
        "invoices" => "Invoices",
        "invoice_items" => "Invoice line items",
        _ => "",
    }
}
