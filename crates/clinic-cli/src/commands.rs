use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::info;

use clinic_model::{IMPORT_TABLES, table_description};
use clinic_store::Database;

use crate::cli::ImportArgs;
use crate::summary::apply_table_style;
use crate::types::{ImportReport, TableSummary};

pub fn run_import(args: &ImportArgs) -> Result<ImportReport> {
    info!(db = %args.db.display(), "opening database");
    let db = Database::open(&args.db)
        .with_context(|| format!("open database {}", args.db.display()))?;

    let outcome = clinic_load::run_import(&db, &args.csv_dir)?;

    let mut tables = Vec::with_capacity(IMPORT_TABLES.len());
    for &table in IMPORT_TABLES {
        let rows = db
            .table_count(table)
            .with_context(|| format!("count rows in {table}"))?;
        tables.push(TableSummary {
            table,
            description: table_description(table),
            inserted: outcome.inserted(table),
            rows,
        });
    }
    Ok(ImportReport {
        db_path: args.db.clone(),
        tables,
    })
}

pub fn run_tables() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Table", "Description"]);
    apply_table_style(&mut table);
    for &name in IMPORT_TABLES {
        table.add_row(vec![name, table_description(name)]);
    }
    println!("{table}");
    Ok(())
}
