// src/detail.rs
//
// View model for the company page. Groups a record's fields into the page's
// sections, drops empty fields, and runs composite cells through `extract`.
// Both the GUI page and `cli show` render from this.

use crate::config::consts::*;
use crate::extract::{self, Founder, SocialLinks};
use crate::format;
use crate::record::CompanyRecord;

pub const GENERAL_INFO: &[&str] = &[COL_INDUSTRY, COL_HEADQUARTERS, "Founding Year", "Number of Employees"];
pub const FINANCIAL_INFO: &[&str] = &["Funding Raised", "Revenue", COL_VALUATION, "Current Valuation"];
// The growth score column is not shown on the page.
pub const MARKET_INFO: &[&str] = &[COL_EXCHANGE, COL_TICKER, COL_SECTOR, "Risk Level"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionKind {
    General,
    Financial,
    Market,
}

impl SectionKind {
    pub fn title(&self) -> &'static str {
        match self {
            SectionKind::General => "General Information",
            SectionKind::Financial => "Financial Information",
            SectionKind::Market => "Market Information",
        }
    }

    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            SectionKind::General => GENERAL_INFO,
            SectionKind::Financial => FINANCIAL_INFO,
            SectionKind::Market => MARKET_INFO,
        }
    }
}

/// A titled list of (label, display value) pairs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section {
    pub kind: SectionKind,
    pub fields: Vec<(&'static str, String)>,
}

impl Section {
    fn build(kind: SectionKind, rec: &CompanyRecord) -> Self {
        let fields = kind
            .columns()
            .iter()
            .filter_map(|&col| {
                let raw = rec.non_empty(col)?;
                let shown = match kind {
                    SectionKind::Financial => format::currency(Some(raw)),
                    _ => s!(raw.trim()),
                };
                Some((col, shown))
            })
            .collect();
        Self { kind, fields }
    }

    pub fn title(&self) -> &'static str { self.kind.title() }
    pub fn is_empty(&self) -> bool { self.fields.is_empty() }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompanyDetail {
    pub name: String,
    pub industry: Option<String>,
    pub ticker: Option<String>,
    pub website: Option<String>,
    pub description: Option<String>,
    pub sections: Vec<Section>,
    pub founders: Vec<Founder>,
    /// Raw founders cell, kept for cells the grammar yields nothing from
    pub founders_text: Option<String>,
    pub key_contacts: Option<String>,
    pub social: SocialLinks,
}

impl CompanyDetail {
    pub fn from_record(rec: &CompanyRecord) -> Self {
        let owned = |col: &str| rec.non_empty(col).map(|v| s!(v.trim()));

        let founders_text = owned(COL_FOUNDERS);
        let founders = founders_text.as_deref().map(extract::founders).unwrap_or_default();
        let social = rec.non_empty(COL_SOCIAL).map(extract::social_links).unwrap_or_default();

        let sections = [SectionKind::General, SectionKind::Financial, SectionKind::Market]
            .into_iter()
            .map(|k| Section::build(k, rec))
            .collect();

        Self {
            name: s!(rec.name()),
            industry: owned(COL_INDUSTRY),
            ticker: format::ticker_line(rec.get(COL_EXCHANGE), rec.get(COL_TICKER)),
            website: owned(COL_WEBSITE),
            description: owned(COL_DESCRIPTION),
            sections,
            founders,
            founders_text,
            key_contacts: owned(COL_KEY_CONTACTS),
            social,
        }
    }

    pub fn website_label(&self) -> &str {
        format::website_label(self.website.as_deref())
    }

    pub fn has_people(&self) -> bool {
        self.founders_text.is_some() || self.key_contacts.is_some()
    }
}
