use crate::{Error, Result};
use chrono::{Datelike, NaiveDate};

/// Milliseconds in one day, the unit picker offsets are expressed in.
pub const MS_PER_DAY: i64 = 86_400 * 1000;

/// Parse a date typed into a campaign form.
///
/// Accepts `M/D/YYYY` (with or without zero padding) as written by the
/// date picker, and ISO `YYYY-MM-DD`.
pub fn parse_form_date(value: &str) -> Result<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidDate(value.to_string()));
    }

    NaiveDate::parse_from_str(trimmed, "%m/%d/%Y")
        .or_else(|_| NaiveDate::parse_from_str(trimmed, "%Y-%m-%d"))
        .map_err(|_| Error::InvalidDate(value.to_string()))
}

/// Format a date the way the picker writes it back into the input (`M/D/YYYY`).
pub fn format_form_date(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}
