// src/config/options.rs
use std::time::Duration;

use super::consts::*;

/// Which export of the sheet to read.
///
/// `JsonTable` is what the live pages use; `Csv` is the older export kept
/// for comparison and offline dumps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SourceKind {
    #[default]
    JsonTable,
    Csv,
}

impl SourceKind {
    pub fn label(&self) -> &'static str {
        match self {
            SourceKind::JsonTable => "JSON table",
            SourceKind::Csv => "CSV",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceOptions {
    pub kind: SourceKind,
    pub sheet_id: String,
    pub tab_id: String,
    pub timeout: Duration,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            kind: SourceKind::default(),
            sheet_id: s!(SHEET_ID),
            tab_id: s!(TAB_ID),
            timeout: Duration::from_secs(TIMEOUT_SECS),
        }
    }
}

impl SourceOptions {
    /// Full export URL for the configured sheet, tab and kind.
    pub fn url(&self) -> String {
        let base = join!(SHEETS_BASE, &self.sheet_id);
        match self.kind {
            SourceKind::JsonTable => format!("{base}/gviz/tq?tqx=out:json&gid={}", self.tab_id),
            SourceKind::Csv => format!("{base}/export?format=csv&gid={}", self.tab_id),
        }
    }
}

/// What the free-text query is matched against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MatchScope {
    /// Company Name, Industry, Headquarters
    #[default]
    Listed,
    AllFields,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn delim(&self) -> u8 {
        match self { ExportFormat::Csv => b',', ExportFormat::Tsv => b'\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub include_headers: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { format: ExportFormat::Tsv, include_headers: true }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub source: SourceOptions,
    pub export: ExportOptions,
}
