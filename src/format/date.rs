//! Date and date-time display in the `dd/mm/yyyy` convention.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Placeholder for a missing value.
pub const NOT_AVAILABLE: &str = "N/A";

/// Placeholder for a date string that could not be parsed.
pub const INVALID_DATE: &str = "Data inválida";

/// Format a date as `dd/mm/yyyy`, or `N/A` when absent.
pub fn format_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(d) => d.format("%d/%m/%Y").to_string(),
        None => NOT_AVAILABLE.into(),
    }
}

/// Format a date-time as `dd/mm/yyyy HH:MM:SS`, or `N/A` when absent.
pub fn format_datetime(datetime: Option<NaiveDateTime>) -> String {
    match datetime {
        Some(dt) => dt.format("%d/%m/%Y %H:%M:%S").to_string(),
        None => NOT_AVAILABLE.into(),
    }
}

/// Format a date string from an API payload as `dd/mm/yyyy`.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 date-times (the date is taken in the
/// timestamp's own offset), and offset-less `YYYY-MM-DDTHH:MM:SS[.f]`
/// with either `T` or a space between date and time.
/// Blank input gives `N/A`; anything else unparseable gives
/// `Data inválida`.
pub fn parse_and_format_date(input: &str) -> String {
    let input = input.trim();
    if input.is_empty() {
        return NOT_AVAILABLE.into();
    }
    match parse_date(input) {
        Some(d) => format_date(Some(d)),
        None => INVALID_DATE.into(),
    }
}

fn parse_date(input: &str) -> Option<NaiveDate> {
    if let Ok(d) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Some(d);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.date_naive());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        .map(|dt| dt.date())
}
