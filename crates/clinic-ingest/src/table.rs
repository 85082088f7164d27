use std::collections::BTreeSet;
use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;

/// An eagerly loaded CSV file: the header row plus every data row, each
/// padded or truncated to the header width.
#[derive(Debug, Clone)]
pub struct CsvTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    /// Header names that appeared more than once in the source file.
    duplicated: BTreeSet<String>,
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Rename repeated headers positionally (`name` -> `name_<index>` for every
/// occurrence after the first) so lookups stay unambiguous, recording which
/// names were affected.
fn dedupe_headers(headers: Vec<String>) -> (Vec<String>, BTreeSet<String>) {
    let mut duplicated = BTreeSet::new();
    let mut seen: BTreeSet<String> = BTreeSet::new();
    let mut deduped = Vec::with_capacity(headers.len());
    for (index, header) in headers.into_iter().enumerate() {
        let key = header.to_ascii_lowercase();
        if seen.contains(&key) {
            duplicated.insert(header.clone());
            deduped.push(format!("{header}_{index}"));
        } else {
            seen.insert(key);
            deduped.push(header);
        }
    }
    (deduped, duplicated)
}

/// Read a whole CSV file into memory.
///
/// The reader is flexible: short rows are padded with empty cells and long
/// rows truncated to the header width, so a malformed line never aborts the
/// read. Fully blank lines are dropped.
pub fn read_csv_table(path: &Path) -> Result<CsvTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("read csv: {}", path.display()))?;
    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.with_context(|| format!("read record: {}", path.display()))?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(|value| value.is_empty()) {
            continue;
        }
        raw_rows.push(row);
    }
    if raw_rows.is_empty() {
        return Ok(CsvTable {
            headers: Vec::new(),
            rows: Vec::new(),
            duplicated: BTreeSet::new(),
        });
    }
    let header_row = raw_rows.remove(0);
    let headers: Vec<String> = header_row.iter().map(|value| normalize_header(value)).collect();
    let (headers, duplicated) = dedupe_headers(headers);
    let mut rows = Vec::with_capacity(raw_rows.len());
    for record in raw_rows {
        let mut row = Vec::with_capacity(headers.len());
        for idx in 0..headers.len() {
            row.push(record.get(idx).cloned().unwrap_or_default());
        }
        rows.push(row);
    }
    Ok(CsvTable {
        headers,
        rows,
        duplicated,
    })
}

impl CsvTable {
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Index of a column by name, case-insensitive.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers
            .iter()
            .position(|header| header.eq_ignore_ascii_case(name))
    }

    /// True when the source file carried this header more than once, making
    /// a lookup by name ambiguous.
    pub fn is_ambiguous(&self, name: &str) -> bool {
        self.duplicated
            .iter()
            .any(|header| header.eq_ignore_ascii_case(name))
    }

    pub fn rows(&self) -> impl Iterator<Item = RowView<'_>> {
        self.rows.iter().map(|cells| RowView {
            table: self,
            cells,
        })
    }
}

/// Borrowed view of one data row with by-name and by-position access.
#[derive(Debug, Clone, Copy)]
pub struct RowView<'a> {
    table: &'a CsvTable,
    cells: &'a [String],
}

impl RowView<'_> {
    /// Cell by column name; `None` when the column does not exist.
    pub fn get(&self, name: &str) -> Option<&str> {
        let idx = self.table.column(name)?;
        self.cells.get(idx).map(String::as_str)
    }

    /// Cell by column position.
    pub fn get_at(&self, index: usize) -> Option<&str> {
        self.cells.get(index).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn reads_headers_and_rows() {
        let file = write_csv("a,b\n1,2\n3,4\n");
        let table = read_csv_table(file.path()).unwrap();
        assert_eq!(table.headers(), ["a", "b"]);
        assert_eq!(table.len(), 2);
        let first = table.rows().next().unwrap();
        assert_eq!(first.get("a"), Some("1"));
        assert_eq!(first.get("B"), Some("2"));
        assert_eq!(first.get("missing"), None);
    }

    #[test]
    fn short_rows_are_padded_and_long_rows_truncated() {
        let file = write_csv("a,b,c\n1\n1,2,3,4\n");
        let table = read_csv_table(file.path()).unwrap();
        let rows: Vec<RowView<'_>> = table.rows().collect();
        assert_eq!(rows[0].get("b"), Some(""));
        assert_eq!(rows[1].get_at(3), None);
    }

    #[test]
    fn blank_lines_are_dropped() {
        let file = write_csv("a,b\n,\n1,2\n");
        let table = read_csv_table(file.path()).unwrap();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn duplicate_headers_are_disambiguated() {
        let file = write_csv("id,name,id\n7,rex,9\n");
        let table = read_csv_table(file.path()).unwrap();
        assert_eq!(table.headers(), ["id", "name", "id_2"]);
        assert!(table.is_ambiguous("id"));
        assert!(!table.is_ambiguous("name"));
        let row = table.rows().next().unwrap();
        assert_eq!(row.get("id"), Some("7"));
        assert_eq!(row.get_at(2), Some("9"));
    }

    #[test]
    fn bom_and_padding_are_stripped_from_headers() {
        let file = write_csv("\u{feff}a , b\n1,2\n");
        let table = read_csv_table(file.path()).unwrap();
        assert_eq!(table.headers(), ["a", "b"]);
    }

    #[test]
    fn empty_file_yields_empty_table() {
        let file = write_csv("");
        let table = read_csv_table(file.path()).unwrap();
        assert!(table.is_empty());
        assert!(table.headers().is_empty());
    }
}
