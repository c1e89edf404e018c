/// Utilities for date formatting
///
/// The server stores `created_at` either as "YYYY-MM-DD HH:MM:SS" or ISO 8601.
use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Format a server timestamp as DD.MM.YYYY, returning the input unchanged if it can't be parsed
/// Example: "2024-03-15 14:02:26" -> "15.03.2024"
pub fn format_date(raw: &str) -> String {
    let raw = raw.trim();
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return dt.format("%d.%m.%Y").to_string();
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%d.%m.%Y").to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format("%d.%m.%Y").to_string();
    }
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return d.format("%d.%m.%Y").to_string();
    }
    raw.to_string()
}
