// src/sources/mod.rs
//! # Sheet sources
//!
//! The company list lives in one published spreadsheet tab that can be read
//! through two exports. Each export gets a [`SheetFormat`]: it knows its URL
//! shape and how to turn the response body into a [`Directory`].
//!
//! ## What lives here
//! - **Pure text → records** normalization for each export.
//! - The single **load** entry point (fetch, then parse) used by GUI and CLI.
//!
//! ## What does **not** live here
//! - Searching, facet filtering, extraction of composite cells, formatting.
//!   Those read the `Directory` this module returns.
//!
//! ## Conventions & invariants
//! - Row order is sheet order. One record per data row.
//! - Column labels are whitespace-normalized; unlabeled columns are dropped.
//! - Any failure is a single `FetchError`; there are no partial directories.
//!
//! ## Testing notes
//! - Formats are testable offline via [`SheetFormat::parse`] on captured
//!   bodies; nothing here needs the network except [`load`].
pub mod csv_export;
pub mod json_table;

use crate::{
    config::options::{SourceKind, SourceOptions},
    core::net,
    error::FetchError,
    progress::Progress,
    record::Directory,
};

pub trait SheetFormat: Send + Sync + 'static {
    fn kind(&self) -> SourceKind;

    /// Export URL for a sheet/tab pair.
    fn url(&self, opts: &SourceOptions) -> String {
        opts.url()
    }

    /// Normalize a response body.
    fn parse(&self, text: &str) -> Result<Directory, FetchError>;
}

pub fn format_for(kind: SourceKind) -> &'static dyn SheetFormat {
    match kind {
        SourceKind::JsonTable => &json_table::FORMAT,
        SourceKind::Csv => &csv_export::FORMAT,
    }
}

/// Normalize `text` as the given export kind.
pub fn parse(kind: SourceKind, text: &str) -> Result<Directory, FetchError> {
    format_for(kind).parse(text)
}

/// Fetch and normalize once. No retry, no cache.
pub fn load(
    opts: &SourceOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Directory, FetchError> {
    let format = format_for(opts.kind);
    let url = format.url(opts);

    logf!("Load: Begin source={:?}", opts.kind);
    if let Some(p) = progress.as_deref_mut() {
        p.begin(&url);
    }

    let result = net::http_get(&url, opts).and_then(|body| {
        if let Some(p) = progress.as_deref_mut() {
            p.fetched(body.len());
        }
        format.parse(&body)
    });

    match &result {
        Ok(dir) => {
            logf!("Load: OK rows={} columns={}", dir.row_count(), dir.column_count());
            if let Some(p) = progress.as_deref_mut() {
                p.parsed(dir.row_count(), dir.column_count());
            }
        }
        Err(e) => {
            loge!("Load: Error source={:?}: {}", opts.kind, e);
            if let Some(p) = progress.as_deref_mut() {
                p.log(&format!("Failed to fetch data: {e}"));
            }
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    result
}
