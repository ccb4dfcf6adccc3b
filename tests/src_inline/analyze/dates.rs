use super::*;

#[test]
fn test_parse_scanner_isoformat() {
    let dt = parse_scan_date("2025-07-30T14:05:09.123456").unwrap();
    assert_eq!(dt.to_string(), "2025-07-30 14:05:09.123456");
}

#[test]
fn test_parse_rfc3339_normalizes_to_utc() {
    let dt = parse_scan_date("2025-07-30T09:00:00+09:00").unwrap();
    assert_eq!(dt.to_string(), "2025-07-30 00:00:00");
}

#[test]
fn test_parse_bare_date_and_garbage() {
    assert!(parse_scan_date("2025-01-02").is_some());
    assert!(parse_scan_date("").is_none());
    assert!(parse_scan_date("yesterday").is_none());
}

#[test]
fn test_format_scan_date_korean_long() {
    assert_eq!(format_scan_date("2025-07-03T10:00:00"), "2025년 7월 3일");
    assert_eq!(format_scan_date("not a date"), "not a date");
}
