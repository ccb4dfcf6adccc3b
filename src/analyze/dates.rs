use chrono::{DateTime, NaiveDate, NaiveDateTime};

const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parses the scanner's timestamp: RFC 3339 (normalized to UTC), an ISO
/// timestamp without offset, or a bare date at midnight.
pub fn parse_scan_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    for fmt in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Korean long date, e.g. `2025년 7월 30일`. Unparseable input is returned as-is.
pub fn format_scan_date(raw: &str) -> String {
    match parse_scan_date(raw) {
        Some(dt) => dt.format("%Y년 %-m월 %-d일").to_string(),
        None => raw.to_string(),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/analyze/dates.rs"]
mod tests;
