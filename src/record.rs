// src/record.rs
//
// CompanyRecord: one spreadsheet row as column → value.
// Directory:     the columns and records produced by one load.
//
// Neither is mutated after normalization. Pages borrow them; filters hand
// back row indices instead of copies (see `search`).

use crate::config::consts::COL_NAME;

/// One spreadsheet row. Keys are header labels in column order.
///
/// There is no schema: a key is present if the sheet had a labeled column
/// for it. Missing and empty are the same thing for display purposes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompanyRecord {
    fields: Vec<(String, String)>,
}

impl CompanyRecord {
    pub fn new() -> Self { Self::default() }

    pub fn with_capacity(n: usize) -> Self {
        Self { fields: Vec::with_capacity(n) }
    }

    /// Set `key` to `value`. An existing key keeps its position and takes
    /// the new value (last column with a given label wins).
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Value if present and not blank.
    pub fn non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.trim().is_empty())
    }

    /// "Company Name", or "" for unnamed rows.
    pub fn name(&self) -> &str {
        self.get(COL_NAME).unwrap_or("")
    }

    pub fn len(&self) -> usize { self.fields.len() }
    pub fn is_empty(&self) -> bool { self.fields.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(_, v)| v.as_str())
    }

    /// Values in `columns` order; absent keys become "".
    pub fn row_for(&self, columns: &[String]) -> Vec<String> {
        columns
            .iter()
            .map(|c| s!(self.get(c).unwrap_or("")))
            .collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for CompanyRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut rec = CompanyRecord::new();
        for (k, v) in iter {
            rec.insert(k, v);
        }
        rec
    }
}

/// Result of one normalized load: labeled columns plus records in sheet order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Directory {
    pub columns: Vec<String>,
    pub records: Vec<CompanyRecord>,
}

impl Directory {
    pub fn new(columns: Vec<String>, records: Vec<CompanyRecord>) -> Self {
        Self { columns, records }
    }

    pub fn row_count(&self) -> usize { self.records.len() }
    pub fn column_count(&self) -> usize { self.columns.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }

    pub fn get(&self, ix: usize) -> Option<&CompanyRecord> {
        self.records.get(ix)
    }

    /// First record whose "Company Name" equals `name` exactly.
    pub fn find_by_name(&self, name: &str) -> Option<&CompanyRecord> {
        self.records.iter().find(|r| r.get(COL_NAME) == Some(name))
    }
}
