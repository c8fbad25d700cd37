// tests/common/mod.rs
//
// Small in-memory directory shared by the integration tests.
#![allow(dead_code)]

use smallcap_dir::record::{CompanyRecord, Directory};

pub const COLUMNS: &[&str] = &[
    "Company Name",
    "Industry",
    "Headquarters",
    "Exchange",
    "Sector",
    "Company Valuation",
    "Company Description",
];

pub fn record(cells: &[&str]) -> CompanyRecord {
    COLUMNS.iter().zip(cells.iter().chain(std::iter::repeat(&""))).map(|(k, v)| (*k, *v)).collect()
}

pub fn sample() -> Directory {
    Directory::new(
        COLUMNS.iter().map(|c| c.to_string()).collect(),
        vec![
            record(&["Acme Robotics", "Automation", "Austin, TX", "NASDAQ", "Technology", "12500000", "Warehouse robots"]),
            record(&["Beta Bio", "Biotech", "Boston, MA", "NYSE", "Healthcare", "", "Gene therapy for rare disease"]),
            record(&["Gamma Mining", "Mining", "Toronto, ON", "TSX", "Materials", "$8M", "Lithium exploration"]),
            record(&["Delta Robotics", "Automation", "Denver, CO", "NASDAQ", "Industrials", "4000000", ""]),
            record(&["Epsilon & Sons, Inc.", "Retail", "New York, NY", "", "", "", ""]),
        ],
    )
}
