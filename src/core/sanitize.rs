// src/core/sanitize.rs

/// Collapse runs of whitespace to one space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Header labels: whitespace-normalized; `None` when nothing is left.
pub fn clean_label(raw: &str) -> Option<String> {
    let label = normalize_ws(raw);
    if label.is_empty() { None } else { Some(label) }
}

/// "https://www.acme.io/" → "acme.io/". Only the scheme and one `www.` go.
pub fn strip_scheme(url: &str) -> &str {
    let url = url.trim();
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    rest.strip_prefix("www.").unwrap_or(rest)
}

/// Render a JSON number the way a browser stringifies it:
/// whole floats lose their `.0`, everything else keeps its digits.
pub fn number_text(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    match n.as_f64() {
        Some(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}
