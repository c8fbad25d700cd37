// src/config/consts.rs

// Upstream spreadsheet
pub const SHEET_ID: &str = "10n9xmV01j3_6pDU7QiR5DIbanIfAyYcd8rVavXT17oE";
pub const TAB_ID: &str = "336036379";
pub const SHEETS_BASE: &str = "https://docs.google.com/spreadsheets/d/";

// JSON-table wrapper: `/*O_o*/\ngoogle.visualization.Query.setResponse(` … `);`
pub const GVIZ_MARKER: &str = "setResponse(";
pub const GVIZ_PREFIX_LEN: usize = 47;
pub const GVIZ_SUFFIX_LEN: usize = 2;

// Net
pub const TIMEOUT_SECS: u64 = 15;
pub const USER_AGENT: &str = concat!("smallcap_dir/", env!("CARGO_PKG_VERSION"));

// Local files
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Well-known columns
pub const COL_NAME: &str = "Company Name";
pub const COL_INDUSTRY: &str = "Industry";
pub const COL_HEADQUARTERS: &str = "Headquarters";
pub const COL_WEBSITE: &str = "Website URL";
pub const COL_EXCHANGE: &str = "Exchange";
pub const COL_SECTOR: &str = "Sector";
pub const COL_TICKER: &str = "Ticker Symbol";
pub const COL_DESCRIPTION: &str = "Company Description";
pub const COL_VALUATION: &str = "Company Valuation";
pub const COL_FOUNDERS: &str = "Founders & LinkedIn URLs";
pub const COL_KEY_CONTACTS: &str = "Key Contacts";
pub const COL_SOCIAL: &str = "Social Media Links";

/// Columns the default search scope looks at.
pub const LISTED_SEARCH_COLUMNS: &[&str] = &[COL_NAME, COL_INDUSTRY, COL_HEADQUARTERS];

// Routes
pub const ROUTE_DIRECTORY: &str = "/companies";

// GUI
pub const WINDOW_W: f32 = 1100.0;
pub const WINDOW_H: f32 = 720.0;
