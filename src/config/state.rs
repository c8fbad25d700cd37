// src/config/state.rs
use super::consts::{COL_EXCHANGE, COL_SECTOR};
use super::options::{AppOptions, MatchScope};
use crate::search::Query;

/// Directory page controls. Survives navigation so that coming back from a
/// detail page restores the search.
#[derive(Clone, Debug)]
pub struct SearchState {
    pub text: String,
    pub scope: MatchScope,
    pub exchange: String,
    pub sector: String,
    pub show_filters: bool,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            text: s!(),
            scope: MatchScope::Listed,
            exchange: s!(),
            sector: s!(),
            show_filters: false,
        }
    }
}

impl SearchState {
    /// Build the filter query; empty facet values are pass-through.
    pub fn query(&self) -> Query {
        Query::new(&self.text)
            .scope(self.scope)
            .facet(COL_EXCHANGE, &self.exchange)
            .facet(COL_SECTOR, &self.sector)
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.exchange.clear();
        self.sector.clear();
    }

    pub fn is_clear(&self) -> bool {
        self.text.is_empty() && self.exchange.is_empty() && self.sector.is_empty()
    }
}

#[derive(Clone, Debug, Default)]
pub struct GuiState {
    pub search: SearchState,
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
