//! Source value cleaning.
//!
//! Exports carry several null placeholders (`NULL`, `None`, `NaN`, empty
//! cells). The sanitizer collapses all of them to an absent value; everything
//! else is returned trimmed.

/// Placeholder strings treated as absent, compared case-insensitively after
/// trimming.
const NULL_PLACEHOLDERS: &[&str] = &["null", "none", "nan"];

/// Normalize a raw source value, returning `None` for missing placeholders.
pub fn clean(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let lower = trimmed.to_ascii_lowercase();
    if NULL_PLACEHOLDERS.contains(&lower.as_str()) {
        return None;
    }
    Some(trimmed.to_string())
}

/// [`clean`] over an optional cell, for columns that may be absent entirely.
pub fn clean_opt(raw: Option<&str>) -> Option<String> {
    raw.and_then(clean)
}

/// Cast a source value to an integer.
///
/// Values that were round-tripped through a float column (e.g. `"42.0"`) are
/// accepted when the fractional part is zero.
pub fn parse_i64(raw: &str) -> Option<i64> {
    cast_i64(&clean(raw)?)
}

/// Cast a source value to a float; non-finite results are absent.
pub fn parse_f64(raw: &str) -> Option<f64> {
    cast_f64(&clean(raw)?)
}

/// Cast an integer column that may legitimately be absent.
///
/// An absent cell (missing column or null placeholder) yields `Some(None)`;
/// a present value that fails the cast yields `None`, so callers can tell a
/// missing cell from a bad one and fail the row on the latter.
pub fn parse_opt_i64(raw: Option<&str>) -> Option<Option<i64>> {
    match clean_opt(raw) {
        None => Some(None),
        Some(value) => cast_i64(&value).map(Some),
    }
}

/// Float companion of [`parse_opt_i64`].
pub fn parse_opt_f64(raw: Option<&str>) -> Option<Option<f64>> {
    match clean_opt(raw) {
        None => Some(None),
        Some(value) => cast_f64(&value).map(Some),
    }
}

fn cast_i64(value: &str) -> Option<i64> {
    if let Ok(parsed) = value.parse::<i64>() {
        return Some(parsed);
    }
    let float = value.parse::<f64>().ok()?;
    if float.is_finite() && float.fract() == 0.0 {
        Some(float as i64)
    } else {
        None
    }
}

fn cast_f64(value: &str) -> Option<f64> {
    let parsed = value.parse::<f64>().ok()?;
    parsed.is_finite().then_some(parsed)
}
