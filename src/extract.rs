// src/extract.rs
//! Composite-cell extraction.
//!
//! Some sheet cells pack several values into one line of text. This module is
//! the single grammar for reading them; every view goes through it.
//!
//! ## Founders (`Founders & LinkedIn URLs`)
//! The cell is split on `,` and each trimmed fragment is read on its own:
//!
//! | fragment                  | effect                                             |
//! |---------------------------|----------------------------------------------------|
//! | `Founder: <name>`         | opens a new entry named `<name>`                   |
//! | `Co-Founder: <name>`      | same as `Founder:`                                 |
//! | `LinkedIn: <value>`       | sets the open entry's link, or opens a nameless one |
//! | anything else             | ignored                                            |
//!
//! Labels are case-insensitive. A link value of `Not Available` is "no link".
//! A second `LinkedIn:` before the next `Founder:` opens a nameless entry
//! rather than overwriting the first link.
//!
//! ## Social links (`Social Media Links`)
//! `LinkedIn: <url>` and `Twitter: <url>` anywhere in the cell, where `<url>`
//! is `http(s)://` up to the next whitespace or comma. First match wins.
//!
//! URLs are never validated beyond that.

use std::sync::LazyLock;

use regex::Regex;

static FOUNDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:co-?)?founder\s*:\s*(.*)$").expect("founder pattern")
});

static LINKEDIN_FRAGMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^linkedin\s*:\s*(.*)$").expect("linkedin fragment pattern")
});

static SOCIAL_LINKEDIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)linkedin\s*:\s*(https?://[^\s,]+)").expect("social linkedin pattern")
});

static SOCIAL_TWITTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)twitter\s*:\s*(https?://[^\s,]+)").expect("social twitter pattern")
});

static LINKEDIN_PROFILE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"https://www\.linkedin\.com/[^\s,]+").expect("linkedin profile pattern")
});

const NOT_AVAILABLE: &str = "not available";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Founder {
    pub name: Option<String>,
    pub linkedin: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SocialLinks {
    pub linkedin: Option<String>,
    pub twitter: Option<String>,
}

impl SocialLinks {
    pub fn is_empty(&self) -> bool {
        self.linkedin.is_none() && self.twitter.is_none()
    }
}

fn non_blank(s: &str) -> Option<String> {
    let t = s.trim();
    if t.is_empty() { None } else { Some(s!(t)) }
}

fn link_value(s: &str) -> Option<String> {
    non_blank(s).filter(|v| !v.eq_ignore_ascii_case(NOT_AVAILABLE))
}

/// Founder entries in cell order.
pub fn founders(cell: &str) -> Vec<Founder> {
    let mut out: Vec<Founder> = Vec::new();
    // Index of the entry still waiting for its LinkedIn fragment.
    let mut open: Option<usize> = None;

    for fragment in cell.split(',').map(str::trim).filter(|f| !f.is_empty()) {
        if let Some(caps) = FOUNDER.captures(fragment) {
            out.push(Founder { name: non_blank(&caps[1]), linkedin: None });
            open = Some(out.len() - 1);
        } else if let Some(caps) = LINKEDIN_FRAGMENT.captures(fragment) {
            let link = link_value(&caps[1]);
            match open.take() {
                Some(ix) => out[ix].linkedin = link,
                None => out.push(Founder { name: None, linkedin: link }),
            }
        }
    }
    out
}

/// LinkedIn and Twitter URLs from a social-links cell.
pub fn social_links(cell: &str) -> SocialLinks {
    let first = |re: &Regex| re.captures(cell).map(|c| s!(&c[1]));
    SocialLinks {
        linkedin: first(&SOCIAL_LINKEDIN),
        twitter: first(&SOCIAL_TWITTER),
    }
}

/// Every `https://www.linkedin.com/...` URL in free text, in order.
pub fn linkedin_profiles(text: &str) -> Vec<&str> {
    LINKEDIN_PROFILE.find_iter(text).map(|m| m.as_str()).collect()
}

/// A piece of free text split around LinkedIn profile URLs, for views that
/// render the URLs as links and the rest as plain text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Segment<'a> {
    Text(&'a str),
    Profile(&'a str),
}

pub fn segments(text: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let mut last = 0;
    for m in LINKEDIN_PROFILE.find_iter(text) {
        if m.start() > last {
            out.push(Segment::Text(&text[last..m.start()]));
        }
        out.push(Segment::Profile(m.as_str()));
        last = m.end();
    }
    if last < text.len() {
        out.push(Segment::Text(&text[last..]));
    }
    out
}
