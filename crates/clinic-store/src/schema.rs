//! SQLite schema definition.

/// Complete target schema. Every statement is conditioned on non-existence,
/// so running the batch against an already-populated database is a no-op.
pub const SCHEMA: &str = r#"
-- Pet parents / owners
CREATE TABLE IF NOT EXISTS pet_parents (
    pet_parent_id   INTEGER PRIMARY KEY,
    name            TEXT NOT NULL,
    mobile_no       TEXT,
    email_id        TEXT,
    created_at      TEXT
);

-- Patients (owner fields are an import-time snapshot)
CREATE TABLE IF NOT EXISTS patients (
    id              TEXT PRIMARY KEY,
    patient_id      INTEGER UNIQUE,
    name            TEXT NOT NULL,
    sex             TEXT,
    type            TEXT,
    breed           TEXT,
    age             TEXT,
    colour          TEXT,
    microchip_no    TEXT,
    identify_mark   TEXT,
    owner_name      TEXT,
    phone           TEXT,
    email           TEXT,
    address         TEXT,
    pet_parent_id   INTEGER REFERENCES pet_parents(pet_parent_id),
    status          TEXT,
    created_at      TEXT
);

-- SOAP: Subjective
CREATE TABLE IF NOT EXISTS soap_subjective (
    subject_id      INTEGER PRIMARY KEY,
    patient_id      INTEGER,
    addnotes        TEXT,
    appetite        TEXT,
    attitude        TEXT,
    drinking        TEXT,
    notice          TEXT,
    pooping         TEXT,
    urinating       TEXT,
    chief_complaint TEXT,
    duration        TEXT,
    created_at      TEXT
);

-- SOAP: Objective (vitals)
CREATE TABLE IF NOT EXISTS soap_objective (
    objective_id    INTEGER PRIMARY KEY,
    patient_id      INTEGER,
    temp            TEXT,
    pulse           TEXT,
    resprate        TEXT,
    weight          TEXT,
    mucmemb         TEXT,
    lymnodes        TEXT,
    hydration       TEXT,
    crt             TEXT,
    bcs             TEXT,
    visual_exam     TEXT,
    created_at      TEXT
);

-- SOAP: Assessment
CREATE TABLE IF NOT EXISTS soap_assessment (
    assess_id       INTEGER PRIMARY KEY,
    patient_id      INTEGER,
    diagnosis       TEXT,
    created_at      TEXT
);

-- SOAP: Plan
CREATE TABLE IF NOT EXISTS soap_plan (
    plan_id         INTEGER PRIMARY KEY,
    patient_id      INTEGER,
    plan            TEXT,
    created_at      TEXT
);

-- Visit records (links the SOAP parts)
CREATE TABLE IF NOT EXISTS records (
    record_id       INTEGER PRIMARY KEY,
    patient_id      INTEGER,
    subject_id      INTEGER REFERENCES soap_subjective(subject_id),
    objective_id    INTEGER REFERENCES soap_objective(objective_id),
    assess_id       INTEGER REFERENCES soap_assessment(assess_id),
    plan_id         INTEGER REFERENCES soap_plan(plan_id),
    prescription_id INTEGER,
    user_id         INTEGER,
    created_at      TEXT
);

-- Prescriptions / medications
CREATE TABLE IF NOT EXISTS prescriptions (
    presmeds_id     INTEGER PRIMARY KEY,
    patient_id      INTEGER,
    prescription_id INTEGER,
    med_name        TEXT,
    prefix          TEXT,
    quantity        TEXT,
    quantity_type   TEXT,
    duration        TEXT,
    duration_type   TEXT,
    frequency       TEXT,
    instruction     TEXT,
    created_at      TEXT
);

-- Vaccinations / preventive care
CREATE TABLE IF NOT EXISTS vaccinations (
    pchistory_id    INTEGER PRIMARY KEY,
    preventive_id   INTEGER,
    patient_id      INTEGER,
    date            TEXT,
    age             TEXT,
    veterinarian    TEXT,
    type_care       TEXT,
    treatment       TEXT,
    created_at      TEXT
);

-- Invoices (keyed by textual reference, not the numeric id)
CREATE TABLE IF NOT EXISTS invoices (
    ref             TEXT PRIMARY KEY,
    invoice_id      INTEGER UNIQUE,
    date            TEXT,
    patient_id      INTEGER,
    patient_name    TEXT,
    patient_type    TEXT,
    owner_name      TEXT,
    phone           TEXT,
    pet_parent_id   INTEGER,
    payment_type    TEXT,
    method          TEXT,
    discount        REAL DEFAULT 0,
    total           REAL DEFAULT 0,
    paid_amount     REAL DEFAULT 0,
    balance         REAL DEFAULT 0,
    status          TEXT DEFAULT 'Draft',
    plan_id         INTEGER,
    preventive_id   INTEGER,
    subtotal        REAL DEFAULT 0,
    created_at      TEXT
);

-- Invoice line items
CREATE TABLE IF NOT EXISTS invoice_items (
    id              INTEGER PRIMARY KEY AUTOINCREMENT,
    invoice_ref     TEXT REFERENCES invoices(ref) ON DELETE CASCADE,
    name            TEXT NOT NULL,
    quantity        REAL DEFAULT 1,
    unit_price      REAL DEFAULT 0,
    discount        REAL DEFAULT 0,
    total           REAL DEFAULT 0
);

-- Named sequence counters
CREATE TABLE IF NOT EXISTS counters (
    key   TEXT PRIMARY KEY,
    value INTEGER DEFAULT 1
);
INSERT OR IGNORE INTO counters(key, value) VALUES ('invoice', 1), ('patient', 10000);

-- Check-in workflow table used by the clinic application; never populated
-- by the importer but preserved across runs.
CREATE TABLE IF NOT EXISTS checkins (
    id           TEXT PRIMARY KEY,
    patient_id   TEXT,
    patient_name TEXT,
    owner_name   TEXT,
    doctor       TEXT,
    date         TEXT,
    complaint    TEXT,
    subjective   TEXT,
    objective    TEXT,
    assessment   TEXT,
    plan         TEXT,
    procedures   TEXT,
    medications  TEXT,
    followup     TEXT,
    status       TEXT DEFAULT 'open',
    created_at   TEXT DEFAULT (datetime('now','localtime'))
);
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn schema_is_valid_sql() {
        let conn = Connection::open_in_memory().unwrap();
        let result = conn.execute_batch(SCHEMA);
        assert!(result.is_ok(), "schema should be valid SQL: {result:?}");
    }

    #[test]
    fn counters_are_seeded_once() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(SCHEMA).unwrap();
        conn.execute("UPDATE counters SET value = 77 WHERE key = 'invoice'", [])
            .unwrap();
        // Re-running the batch must not reset an advanced counter.
        conn.execute_batch(SCHEMA).unwrap();
        let value: i64 = conn
            .query_row("SELECT value FROM counters WHERE key='invoice'", [], |row| {
                row.get(0)
            })
            .unwrap();
        assert_eq!(value, 77);
    }
}
