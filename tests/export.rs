// tests/export.rs
mod common;

use smallcap_dir::config::options::{ExportFormat, ExportOptions};
use smallcap_dir::export;
use smallcap_dir::search::{FilterView, Query};

fn opts(format: ExportFormat, include_headers: bool) -> ExportOptions {
    ExportOptions { format, include_headers }
}

#[test]
fn tsv_copy_of_filtered_view() {
    let dir = common::sample();
    let view = FilterView::apply(&dir, &Query::new("").facet("Exchange", "TSX"));
    let txt = export::to_export_string(&dir.columns, &view, &opts(ExportFormat::Tsv, true)).unwrap();

    let lines: Vec<&str> = txt.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], common::COLUMNS.join("\t"));
    assert!(lines[1].starts_with("Gamma Mining\tMining\t"));
}

#[test]
fn csv_quotes_embedded_commas() {
    let dir = common::sample();
    let view = FilterView::apply(&dir, &Query::new("epsilon"));
    let txt = export::to_export_string(&dir.columns, &view, &opts(ExportFormat::Csv, false)).unwrap();
    assert_eq!(txt, "\"Epsilon & Sons, Inc.\",Retail,\"New York, NY\",,,,\n");
}

#[test]
fn write_table_without_headers() {
    let dir = common::sample();
    let mut buf = Vec::new();
    export::write_table(&mut buf, &dir.columns, &dir.records, &opts(ExportFormat::Csv, false)).unwrap();
    let txt = String::from_utf8(buf).unwrap();
    assert_eq!(txt.lines().count(), dir.row_count());
    assert!(!txt.contains("Company Name"));
}

#[test]
fn empty_view_with_headers_is_just_the_header() {
    let dir = common::sample();
    let view = FilterView::apply(&dir, &Query::new("zzz"));
    let txt = export::to_export_string(&dir.columns, &view, &opts(ExportFormat::Tsv, true)).unwrap();
    assert_eq!(txt.lines().count(), 1);
}
