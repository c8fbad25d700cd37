// src/routing.rs
//
// Path ↔ page mapping.
//
//   /              → Landing
//   /companies     → Directory
//   /<name>        → Company, <name> = percent-encoded "Company Name"
//
// Encoding follows encodeURIComponent: `/`, `?`, `#`, `%` and spaces are
// always escaped, so a name travels as exactly one path segment.

use std::borrow::Cow;

use crate::config::consts::ROUTE_DIRECTORY;
use crate::error::DirectoryError;
use crate::record::{CompanyRecord, Directory};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Landing,
    Directory,
    /// Decoded company name
    Company(String),
}

impl Route {
    /// Parse a path. A segment that does not decode is kept raw so the
    /// detail lookup reports it as not found.
    pub fn parse(path: &str) -> Route {
        let trimmed = path.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Route::Landing;
        }
        if trimmed == ROUTE_DIRECTORY {
            return Route::Directory;
        }
        let segment = trimmed.trim_start_matches('/');
        match decode_name(segment) {
            Ok(name) => Route::Company(name),
            Err(_) => Route::Company(s!(segment)),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Landing => s!("/"),
            Route::Directory => s!(ROUTE_DIRECTORY),
            Route::Company(name) => company_path(name),
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Route::Landing => "Home",
            Route::Directory => "Companies",
            Route::Company(name) => name,
        }
    }
}

// Marks encodeURIComponent leaves alone but `urlencoding` escapes.
const URI_MARKS: &[(&str, &str)] = &[("%21", "!"), ("%27", "'"), ("%28", "("), ("%29", ")"), ("%2A", "*")];

/// encodeURIComponent: letters, digits and `-_.!~*'()` pass through,
/// everything else is UTF-8 percent-encoded.
pub fn encode_name(name: &str) -> String {
    let mut out = urlencoding::encode(name).into_owned();
    // Every `%` in the output starts an escape, so the swaps cannot overlap.
    for (escaped, mark) in URI_MARKS {
        if out.contains(escaped) {
            out = out.replace(escaped, mark);
        }
    }
    out
}

pub fn decode_name(segment: &str) -> Result<String, DirectoryError> {
    urlencoding::decode(segment)
        .map(Cow::into_owned)
        .map_err(|_| DirectoryError::NotFound(s!(segment)))
}

/// `/` + encoded name.
pub fn company_path(name: &str) -> String {
    join!("/", &encode_name(name))
}

/// Decode a route segment and find the record with exactly that name.
pub fn resolve<'a>(dir: &'a Directory, segment: &str) -> Result<&'a CompanyRecord, DirectoryError> {
    let name = decode_name(segment)?;
    find_company(dir, &name)
}

/// Exact-name lookup for an already decoded name.
pub fn find_company<'a>(dir: &'a Directory, name: &str) -> Result<&'a CompanyRecord, DirectoryError> {
    dir.find_by_name(name)
        .ok_or_else(|| DirectoryError::NotFound(s!(name)))
}
