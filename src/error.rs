// src/error.rs
use thiserror::Error;

/// Anything that stops a load from producing records.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP error: {status} {url}")]
    Status { status: u16, url: String },

    #[error("response is not a JSON-table payload: {0}")]
    Wrapper(String),

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unexpected payload shape: {0}")]
    Shape(String),

    #[error("spreadsheet reported an error: {0}")]
    Upstream(String),

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// The two terminal outcomes a page can show besides its content.
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("no company named {0:?}")]
    NotFound(String),
}

impl DirectoryError {
    /// Text for the error panel. Detail goes to the log, not the user.
    pub fn user_message(&self) -> &'static str {
        match self {
            DirectoryError::Fetch(_) => "Failed to fetch data",
            DirectoryError::NotFound(_) => "Company not found",
        }
    }
}
