//! Cell coercion shared by every import path.
//!
//! Missing numerics are `"", "#DIV/0!", "NaN"` (any case) after trimming;
//! thousands separators are dropped; nothing ever defaults to zero.

use crate::consts::{MISSING_TOKENS, MS_PER_DAY, SERIAL_EPOCH_YMD};
use crate::core_types::Cell;
use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Datetime layouts tried after RFC 3339, in order.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %I:%M %p",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%d.%m.%Y %H:%M:%S",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%Y/%m/%d", "%d.%m.%Y"];

pub fn parse_number(cell: &Cell) -> Option<f64> {
    match cell {
        Cell::Empty => None,
        Cell::Number(n) => n.is_finite().then_some(*n),
        Cell::Text(s) => parse_number_str(s),
    }
}

pub fn parse_number_str(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if MISSING_TOKENS
        .iter()
        .any(|t| trimmed.eq_ignore_ascii_case(t))
    {
        return None;
    }
    let cleaned: String = trimmed.chars().filter(|&c| c != ',').collect();
    match cleaned.parse::<f64>() {
        Ok(n) if n.is_finite() => Some(n),
        _ => None,
    }
}

/// Nearest integer, for count-like columns.
pub fn parse_integer(cell: &Cell) -> Option<i64> {
    parse_number(cell).map(|n| n.round() as i64)
}

/// Trimmed text; blank is missing.
pub fn parse_text(cell: &Cell) -> Option<String> {
    let s = cell.as_text();
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Numbers are spreadsheet day serials; text goes through [`parse_datetime_str`].
pub fn parse_timestamp(cell: &Cell) -> Option<DateTime<Utc>> {
    match cell {
        Cell::Empty => None,
        Cell::Number(n) => from_serial(*n),
        Cell::Text(s) => parse_datetime_str(s),
    }
}

/// Converts a day serial on the 1899-12-30 epoch into a UTC instant,
/// rounded to the millisecond.
pub fn from_serial(serial: f64) -> Option<DateTime<Utc>> {
    if !serial.is_finite() {
        return None;
    }
    let (y, m, d) = SERIAL_EPOCH_YMD;
    let epoch = NaiveDate::from_ymd_opt(y, m, d)?.and_hms_opt(0, 0, 0)?;
    let ms = (serial * MS_PER_DAY).round();
    if ms.abs() > i64::MAX as f64 {
        return None;
    }
    let naive = epoch.checked_add_signed(Duration::try_milliseconds(ms as i64)?)?;
    Some(Utc.from_utc_datetime(&naive))
}

/// Generic date parsing for the layouts launch monitors actually emit.
///
/// Accepts RFC 3339, ISO-like and US-style stamps, date-only values, and the
/// `MM/DD/YYYY HH:MM:SSAM` variant with no space before the meridiem.
/// Naive stamps are read as UTC.
pub fn parse_datetime_str(raw: &str) -> Option<DateTime<Utc>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.with_timezone(&Utc));
    }

    let spaced = space_meridiem(trimmed);
    for fmt in DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(&spaced, fmt) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }
    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, fmt) {
            return date.and_hms_opt(0, 0, 0).map(|n| Utc.from_utc_datetime(&n));
        }
    }
    None
}

/// `"01/05/2024 10:22:31PM"` -> `"01/05/2024 10:22:31 PM"`.
fn space_meridiem(s: &str) -> String {
    let upper = s.to_ascii_uppercase();
    if (upper.ends_with("AM") || upper.ends_with("PM")) && s.len() > 2 {
        let (head, tail) = s.split_at(s.len() - 2);
        if head.ends_with(|c: char| c.is_ascii_digit()) {
            return format!("{} {}", head, tail);
        }
    }
    s.to_string()
}
