// src/sources/csv_export.rs
//
// Plain CSV export. First row is the header; its labels key every later row.
// Short rows pad with "", cells past the header width are ignored, and
// all-blank lines are skipped.

use crate::{
    config::options::SourceKind,
    core::sanitize::clean_label,
    error::FetchError,
    record::{CompanyRecord, Directory},
};

use super::SheetFormat;

pub struct CsvExport;
pub static FORMAT: CsvExport = CsvExport;

impl SheetFormat for CsvExport {
    fn kind(&self) -> SourceKind { SourceKind::Csv }

    fn parse(&self, text: &str) -> Result<Directory, FetchError> {
        let text = text.trim_start_matches('\u{feff}');

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(text.as_bytes());

        let labeled: Vec<(usize, String)> = reader
            .headers()?
            .iter()
            .enumerate()
            .filter_map(|(i, h)| clean_label(h).map(|l| (i, l)))
            .collect();

        if labeled.is_empty() {
            return Err(FetchError::Shape(s!("CSV has no header row")));
        }

        let mut columns: Vec<String> = Vec::with_capacity(labeled.len());
        for (_, label) in &labeled {
            if !columns.contains(label) {
                columns.push(label.clone());
            }
        }

        let mut records = Vec::new();
        for row in reader.records() {
            let row = row?;
            if row.iter().all(|cell| cell.trim().is_empty()) {
                continue;
            }
            let mut rec = CompanyRecord::with_capacity(columns.len());
            for (i, label) in &labeled {
                rec.insert(label.as_str(), row.get(*i).unwrap_or(""));
            }
            records.push(rec);
        }

        Ok(Directory::new(columns, records))
    }
}
