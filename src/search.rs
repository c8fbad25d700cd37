// src/search.rs
//
// Search & facet filtering over a loaded Directory.
//
// - Query:      free text + scope + exact-match facets.
// - FilterView: zero-copy result, row indices into the Directory.
//
// A record passes when the text matches (case-insensitive substring, empty
// text matches everything) AND every active facet matches exactly. A facet
// with an empty value is inactive. Recomputed from scratch on every change.

use crate::config::{consts::LISTED_SEARCH_COLUMNS, options::MatchScope};
use crate::record::{CompanyRecord, Directory};

/// Exact-match filter on one column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Facet {
    pub column: String,
    pub value: String,
}

impl Facet {
    pub fn is_active(&self) -> bool { !self.value.is_empty() }

    pub fn matches(&self, rec: &CompanyRecord) -> bool {
        !self.is_active() || rec.get(&self.column) == Some(self.value.as_str())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Query {
    needle: String,
    scope: MatchScope,
    facets: Vec<Facet>,
}

impl Query {
    pub fn new(text: &str) -> Self {
        Self { needle: text.to_lowercase(), ..Self::default() }
    }

    pub fn scope(mut self, scope: MatchScope) -> Self {
        self.scope = scope;
        self
    }

    /// Add a facet. An empty `value` means "any".
    pub fn facet(mut self, column: &str, value: &str) -> Self {
        self.facets.push(Facet { column: s!(column), value: s!(value) });
        self
    }

    pub fn facets(&self) -> &[Facet] { &self.facets }

    pub fn is_pass_through(&self) -> bool {
        self.needle.is_empty() && !self.facets.iter().any(Facet::is_active)
    }

    fn text_matches(&self, rec: &CompanyRecord) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        let hit = |v: &str| v.to_lowercase().contains(&self.needle);
        match self.scope {
            MatchScope::Listed => LISTED_SEARCH_COLUMNS
                .iter()
                .filter_map(|c| rec.get(c))
                .any(hit),
            MatchScope::AllFields => rec.values().any(hit),
        }
    }

    pub fn matches(&self, rec: &CompanyRecord) -> bool {
        self.text_matches(rec) && self.facets.iter().all(|f| f.matches(rec))
    }
}

/// Filtered view of a Directory. Holds row indices, never copies of records.
#[derive(Clone, Debug)]
pub struct FilterView<'a> {
    /// Positions of kept records, in sheet order
    pub row_ix: Vec<usize>,
    dir: &'a Directory,
}

impl<'a> FilterView<'a> {
    pub fn apply(dir: &'a Directory, query: &Query) -> Self {
        if query.is_pass_through() {
            return Self { row_ix: (0..dir.records.len()).collect(), dir };
        }
        let row_ix = dir
            .records
            .iter()
            .enumerate()
            .filter(|(_, r)| query.matches(r))
            .map(|(i, _)| i)
            .collect();
        Self { row_ix, dir }
    }

    pub fn len(&self) -> usize { self.row_ix.len() }
    pub fn is_empty(&self) -> bool { self.row_ix.is_empty() }

    /// Borrow a record by projected position.
    pub fn record(&self, i: usize) -> Option<&'a CompanyRecord> {
        self.row_ix.get(i).and_then(|&ix| self.dir.records.get(ix))
    }

    pub fn records(&self) -> impl Iterator<Item = &'a CompanyRecord> + '_ {
        self.row_ix.iter().filter_map(|&ix| self.dir.records.get(ix))
    }
}

/// Indices of records matching `query`, in source order.
pub fn filter(records: &[CompanyRecord], query: &Query) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, r)| query.matches(r))
        .map(|(i, _)| i)
        .collect()
}

/// Distinct non-empty values of `column`, first-seen order.
pub fn facet_values(records: &[CompanyRecord], column: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for v in records.iter().filter_map(|r| r.get(column)) {
        if !v.is_empty() && !out.iter().any(|seen| seen == v) {
            out.push(s!(v));
        }
    }
    out
}
