//! The sequential import pipeline.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use clinic_store::Database;

use crate::counters::update_counters;
use crate::loaders::{
    files, load_assessment, load_invoices, load_objective, load_pet_parents, load_patients,
    load_plan, load_prescriptions, load_subjective, load_vaccinations, load_visit_records,
};

/// Aggregate inserted count for one loader, labeled by target table.
#[derive(Debug, Clone)]
pub struct LoaderCount {
    pub table: &'static str,
    pub inserted: usize,
}

/// Result of a full import run.
#[derive(Debug, Clone)]
pub struct ImportOutcome {
    pub loaders: Vec<LoaderCount>,
}

impl ImportOutcome {
    /// Inserted count for a table, when that loader ran.
    pub fn inserted(&self, table: &str) -> Option<usize> {
        self.loaders
            .iter()
            .find(|count| count.table == table)
            .map(|count| count.inserted)
    }

    pub fn total_inserted(&self) -> usize {
        self.loaders.iter().map(|count| count.inserted).sum()
    }
}

/// Run the whole import against an opened database.
///
/// Loaders run in a fixed order; each reads one source file and commits its
/// batch before the next starts. A missing source file aborts the run,
/// leaving whatever the previous loaders committed.
pub fn run_import(db: &Database, csv_dir: &Path) -> Result<ImportOutcome> {
    let span = info_span!("import", csv_dir = %csv_dir.display());
    let _guard = span.enter();
    let start = Instant::now();

    let steps: &[(&'static str, &'static str, LoaderFn)] = &[
        ("pet_parents", files::PET_PARENTS, load_pet_parents),
        ("patients", files::PATIENTS, load_patients),
        ("soap_subjective", files::SUBJECTIVE, load_subjective),
        ("soap_objective", files::OBJECTIVE, load_objective),
        ("soap_assessment", files::ASSESSMENT, load_assessment),
        ("soap_plan", files::PLAN, load_plan),
        ("records", files::RECORDS, load_visit_records),
        ("prescriptions", files::PRESCRIPTION, load_prescriptions),
        ("vaccinations", files::VACCINATIONS, load_vaccinations),
        ("invoices", files::INVOICES, load_invoices),
    ];

    let mut loaders = Vec::with_capacity(steps.len());
    for &(table, file, loader) in steps {
        let inserted = loader(db, csv_dir).with_context(|| format!("import {file}"))?;
        loaders.push(LoaderCount { table, inserted });
    }

    update_counters(db).context("update counters")?;

    let outcome = ImportOutcome { loaders };
    info!(
        inserted = outcome.total_inserted(),
        duration_ms = start.elapsed().as_millis(),
        "import complete"
    );
    Ok(outcome)
}

type LoaderFn = fn(&Database, &Path) -> Result<usize>;
