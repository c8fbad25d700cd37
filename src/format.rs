// src/format.rs
//
// Display helpers shared by the GUI and CLI. All of them are total: blank or
// missing input yields "N/A", never a panic or "NaN".

use crate::core::sanitize::strip_scheme;

pub const NA: &str = "N/A";
pub const NO_LINKEDIN: &str = "No LinkedIn profile available";

/// Value or "N/A".
pub fn or_na(value: Option<&str>) -> &str {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v,
        _ => NA,
    }
}

/// Money for display.
///
/// - blank / missing → "N/A"
/// - already has `$` → as is
/// - plain number    → `$` + grouped digits (`12500000` → `$12,500,000`)
/// - other text      → `$` + text
pub fn currency(value: Option<&str>) -> String {
    let v = match value.map(str::trim) {
        Some(v) if !v.is_empty() => v,
        _ => return s!(NA),
    };
    if v.contains('$') {
        return s!(v);
    }
    match group_number(v) {
        Some(grouped) => join!("$", &grouped),
        None => join!("$", v),
    }
}

/// Thousands-group a plain decimal number. `None` if `v` is not one.
fn group_number(v: &str) -> Option<String> {
    let cleaned: String = v.chars().filter(|c| *c != ',').collect();
    let (sign, digits) = match cleaned.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", cleaned.as_str()),
    };
    let (int, frac) = match digits.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (digits, None),
    };
    if int.is_empty() || !int.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if let Some(f) = frac {
        if f.is_empty() || !f.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
    }

    let int = int.trim_start_matches('0');
    let int = if int.is_empty() { "0" } else { int };
    let mut grouped = String::with_capacity(int.len() + int.len() / 3);
    for (i, ch) in int.chars().enumerate() {
        if i > 0 && (int.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let mut out = join!(sign, &grouped);
    if let Some(f) = frac.map(|f| f.trim_end_matches('0')).filter(|f| !f.is_empty()) {
        out.push('.');
        out.push_str(f);
    }
    Some(out)
}

/// "https://www.acme.io" → "acme.io"; missing → "N/A".
pub fn website_label(url: Option<&str>) -> &str {
    match url.map(strip_scheme) {
        Some(v) if !v.is_empty() => v,
        _ => NA,
    }
}

/// "NASDAQ: ACME" when both parts are present.
pub fn ticker_line(exchange: Option<&str>, ticker: Option<&str>) -> Option<String> {
    match (exchange.map(str::trim), ticker.map(str::trim)) {
        (Some(e), Some(t)) if !e.is_empty() && !t.is_empty() => Some(format!("{e}: {t}")),
        _ => None,
    }
}
