// src/export.rs
//
// CSV/TSV rendering of a filtered directory (GUI copy, CLI list).
// Quoting is the csv crate's: fields with the delimiter, quotes or newlines
// get quoted, embedded quotes doubled.

use std::io::Write;

use crate::config::options::ExportOptions;
use crate::record::CompanyRecord;
use crate::search::FilterView;

/// Write `columns` (optional header line) then one row per record.
pub fn write_table<'r, W, I>(
    out: W,
    columns: &[String],
    records: I,
    opts: &ExportOptions,
) -> Result<(), csv::Error>
where
    W: Write,
    I: IntoIterator<Item = &'r CompanyRecord>,
{
    let mut w = csv::WriterBuilder::new()
        .delimiter(opts.format.delim())
        .has_headers(false)
        .from_writer(out);

    if opts.include_headers {
        w.write_record(columns)?;
    }
    for rec in records {
        w.write_record(rec.row_for(columns))?;
    }
    w.flush()?;
    Ok(())
}

/// Whole view as a string (clipboard).
pub fn to_export_string(
    columns: &[String],
    view: &FilterView<'_>,
    opts: &ExportOptions,
) -> Result<String, csv::Error> {
    let mut buf: Vec<u8> = Vec::new();
    write_table(&mut buf, columns, view.records(), opts)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
