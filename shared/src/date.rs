//! Conversions for the backend's `date_time` strings.
//!
//! The backend is treated as opaque: appointments usually carry RFC 3339
//! timestamps, but the create/update path echoes back whatever the
//! `datetime-local` control produced, so a naive fallback is required.

use chrono::{DateTime, NaiveDateTime};

/// Format accepted and produced by `<input type="datetime-local">`.
pub const INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";

const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", INPUT_FORMAT];

const MONTHS_ID: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

/// Parse a wire timestamp into a naive clock time.
///
/// RFC 3339 values keep the clock time of their stated offset; no timezone
/// shifting happens client-side. Returns `None` for anything unrecognizable.
pub fn parse_wire(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}

/// Project a wire timestamp to the minute-precision `datetime-local` value,
/// for pre-filling the edit form.
pub fn to_input_value(raw: &str) -> Option<String> {
    parse_wire(raw).map(|dt| dt.format(INPUT_FORMAT).to_string())
}

/// Human-readable Indonesian form for the appointment card, e.g.
/// `1 September 2026, 09.30`. Falls back to the raw string when the wire
/// value cannot be parsed.
pub fn format_display(raw: &str) -> String {
    use chrono::{Datelike, Timelike};

    match parse_wire(raw) {
        Some(dt) => {
            let month = MONTHS_ID[dt.month0() as usize];
            format!(
                "{} {} {}, {:02}.{:02}",
                dt.day(),
                month,
                dt.year(),
                dt.hour(),
                dt.minute()
            )
        }
        None => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rfc3339_and_keeps_clock_time() {
        let dt = parse_wire("2026-09-01T09:30:00+07:00").unwrap();
        assert_eq!(dt.format(INPUT_FORMAT).to_string(), "2026-09-01T09:30");
    }

    #[test]
    fn parses_naive_input_value() {
        assert!(parse_wire("2026-09-01T09:30").is_some());
        assert!(parse_wire("2026-09-01T09:30:15").is_some());
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_wire("besok pagi").is_none());
        assert_eq!(to_input_value("besok pagi"), None);
    }

    #[test]
    fn input_value_truncates_to_minutes() {
        assert_eq!(
            to_input_value("2026-12-24T18:45:59Z").as_deref(),
            Some("2026-12-24T18:45")
        );
    }

    #[test]
    fn display_uses_indonesian_month_names() {
        assert_eq!(
            format_display("2026-08-17T07:05:00Z"),
            "17 Agustus 2026, 07.05"
        );
    }

    #[test]
    fn display_falls_back_to_raw() {
        assert_eq!(format_display("???"), "???");
    }
}
