// src/sources/json_table.rs
//
// Google visualization ("gviz") JSON-table export.
//
// Body shape:
//   /*O_o*/
//   google.visualization.Query.setResponse({"status":"ok","table":{"cols":[..],"rows":[..]}});
//
// Cells are zipped positionally against column labels. A missing cell, a
// `null` cell or a cell whose `v` is null all read as "".

use serde::Deserialize;
use serde_json::Value;

use crate::{
    config::{
        consts::{GVIZ_MARKER, GVIZ_PREFIX_LEN, GVIZ_SUFFIX_LEN},
        options::SourceKind,
    },
    core::sanitize::{clean_label, number_text},
    error::FetchError,
    record::{CompanyRecord, Directory},
};

use super::SheetFormat;

pub struct JsonTable;
pub static FORMAT: JsonTable = JsonTable;

impl SheetFormat for JsonTable {
    fn kind(&self) -> SourceKind { SourceKind::JsonTable }

    fn parse(&self, text: &str) -> Result<Directory, FetchError> {
        let json = strip_wrapper(text)?;
        let resp: Response = serde_json::from_str(json)?;

        if resp.status.as_deref() == Some("error") {
            let msg = resp
                .errors
                .into_iter()
                .next()
                .and_then(|e| e.detailed_message.or(e.message))
                .unwrap_or_else(|| s!("unknown error"));
            return Err(FetchError::Upstream(msg));
        }

        let table = resp.table.ok_or_else(|| FetchError::Shape(s!("missing `table`")))?;
        Ok(normalize(table))
    }
}

#[derive(Deserialize)]
struct Response {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    errors: Vec<UpstreamError>,
    #[serde(default)]
    table: Option<Table>,
}

#[derive(Deserialize)]
struct UpstreamError {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    detailed_message: Option<String>,
}

#[derive(Deserialize)]
struct Table {
    cols: Vec<Col>,
    #[serde(default)]
    rows: Vec<Row>,
}

#[derive(Deserialize)]
struct Col {
    #[serde(default)]
    label: Option<String>,
}

#[derive(Deserialize)]
struct Row {
    #[serde(default)]
    c: Vec<Option<Cell>>,
}

#[derive(Deserialize)]
struct Cell {
    #[serde(default)]
    v: Value,
}

/// Cut the JSON document out of the `setResponse(...)` call.
///
/// Uses the marker when present; otherwise the fixed wrapper widths
/// (47 leading, 2 trailing characters).
pub fn strip_wrapper(text: &str) -> Result<&str, FetchError> {
    let body = text.trim_end();

    if let Some(pos) = body.find(GVIZ_MARKER) {
        let start = pos + GVIZ_MARKER.len();
        let end = body
            .rfind(')')
            .filter(|&e| e >= start)
            .ok_or_else(|| FetchError::Wrapper(s!("unterminated setResponse call")))?;
        return Ok(&body[start..end]);
    }

    if body.len() < GVIZ_PREFIX_LEN + GVIZ_SUFFIX_LEN {
        return Err(FetchError::Wrapper(format!("body too short ({} bytes)", body.len())));
    }
    body.get(GVIZ_PREFIX_LEN..body.len() - GVIZ_SUFFIX_LEN)
        .ok_or_else(|| FetchError::Wrapper(s!("wrapper does not end on a character boundary")))
}

fn cell_text(v: &Value) -> String {
    match v {
        Value::Null => s!(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_text(n),
        other => other.to_string(),
    }
}

fn normalize(table: Table) -> Directory {
    // (position in the row, label) for labeled columns only
    let labeled: Vec<(usize, String)> = table
        .cols
        .iter()
        .enumerate()
        .filter_map(|(i, c)| c.label.as_deref().and_then(clean_label).map(|l| (i, l)))
        .collect();

    let mut columns: Vec<String> = Vec::with_capacity(labeled.len());
    for (_, label) in &labeled {
        if !columns.contains(label) {
            columns.push(label.clone());
        }
    }

    let records = table
        .rows
        .iter()
        .map(|row| {
            let mut rec = CompanyRecord::with_capacity(columns.len());
            for (i, label) in &labeled {
                let value = row
                    .c
                    .get(*i)
                    .and_then(|cell| cell.as_ref())
                    .map(|cell| cell_text(&cell.v))
                    .unwrap_or_default();
                rec.insert(label.as_str(), value);
            }
            rec
        })
        .collect();

    Directory::new(columns, records)
}
