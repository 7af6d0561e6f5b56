//! Display labels for publish/update dates.

use chrono::{DateTime, Datelike, NaiveDate};

const ARABIC_MONTHS: [&str; 12] = [
    "يناير", "فبراير", "مارس", "أبريل", "مايو", "يونيو",
    "يوليو", "أغسطس", "سبتمبر", "أكتوبر", "نوفمبر", "ديسمبر",
];

/// Parse `YYYY-MM-DD` or an RFC 3339 timestamp.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

/// Long Arabic date ("15 مارس 2024"). Unparseable input is returned unchanged.
pub fn arabic_long_date(raw: &str) -> String {
    match parse_date(raw) {
        Some(date) => format!(
            "{} {} {}",
            date.day(),
            ARABIC_MONTHS[date.month0() as usize],
            date.year()
        ),
        None => raw.trim().to_string(),
    }
}
