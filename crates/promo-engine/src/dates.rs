use chrono::{Duration, NaiveDate, NaiveDateTime};
use promo_types::parse_form_date;

/// Read a date field and shift it by `offset_ms`.
///
/// Returns `None` when the field is empty or unparseable, which leaves the
/// corresponding picker bound open.
pub fn date_from_input(value: &str, offset_ms: i64) -> Option<NaiveDateTime> {
    let date = parse_form_date(value).ok()?;
    let midnight = date.and_hms_opt(0, 0, 0)?;
    midnight.checked_add_signed(Duration::milliseconds(offset_ms))
}

/// Corrected end date when `end` is not after `start`, else `None`.
pub fn enforce_end_after_start(start: NaiveDate, end: NaiveDate) -> Option<NaiveDate> {
    if start >= end {
        start.succ_opt()
    } else {
        None
    }
}

/// Same as [`enforce_end_after_start`] but over raw field values.
///
/// An unparseable field never triggers a correction.
pub fn enforce_end_after_start_fields(start: &str, end: &str) -> Option<NaiveDate> {
    let start = parse_form_date(start).ok()?;
    let end = parse_form_date(end).ok()?;
    enforce_end_after_start(start, end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use promo_types::MS_PER_DAY;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2013, m, d).unwrap()
    }

    #[test]
    fn test_date_from_input_applies_offset() {
        let shifted = date_from_input("5/1/2013", MS_PER_DAY).unwrap();
        assert_eq!(shifted.date(), date(5, 2));
        assert!(date_from_input("", 0).is_none());
    }

    #[test]
    fn test_end_before_start_is_corrected() {
        assert_eq!(enforce_end_after_start(date(5, 4), date(5, 1)), Some(date(5, 5)));
        assert_eq!(enforce_end_after_start(date(5, 4), date(5, 4)), Some(date(5, 5)));
        assert_eq!(enforce_end_after_start(date(5, 4), date(5, 6)), None);
    }

    #[test]
    fn test_month_rollover() {
        assert_eq!(
            enforce_end_after_start(date(1, 31), date(1, 2)),
            Some(date(2, 1))
        );
    }

    #[test]
    fn test_unparseable_fields_leave_end_alone() {
        assert_eq!(enforce_end_after_start_fields("5/4/2013", "soon"), None);
        assert_eq!(
            enforce_end_after_start_fields("5/4/2013", "5/2/2013"),
            Some(date(5, 5))
        );
    }
}
