use chrono::NaiveDate;
use promo_types::{Cpm, DateRange, Dollars, Error, MS_PER_DAY, Result, format_form_date};
use serde::{Deserialize, Serialize};

/// Whole days between two dates, rounded to the nearest day.
///
/// Ranges that end on or before their start are rejected instead of
/// producing a zero or negative duration.
pub fn compute_duration(start: NaiveDate, end: NaiveDate) -> Result<u32> {
    let ms = (end - start).num_milliseconds();
    let days = (ms as f64 / MS_PER_DAY as f64).round();
    if days < 1.0 {
        return Err(Error::InvalidDateRange {
            start: format_form_date(start),
            end: format_form_date(end),
        });
    }
    Ok(days as u32)
}

/// Projected impressions bought by `bid` at `cpm`: `bid / cpm_cents * 100000`.
pub fn compute_impressions(bid: Dollars, cpm: Cpm) -> f64 {
    bid.amount() / f64::from(cpm.cents()) * 1000.0 * 100.0
}

/// Integer part with thousands separators; zero/non-finite values pass through.
pub fn pretty_number(number: f64) -> String {
    if !number.is_finite() {
        return number.to_string();
    }
    let whole = number.trunc() as i64;
    if whole == 0 {
        return number.to_string();
    }

    let digits = whole.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if whole < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

pub fn duration_label(days: u32) -> String {
    if days > 1 {
        format!("{} days", days)
    } else {
        format!("{} day", days)
    }
}

pub fn impressions_label(impressions: f64) -> String {
    format!("{} impressions", pretty_number(impressions))
}

pub fn price_label(cpm: Cpm) -> String {
    format!("${:.2} per 1000 impressions", cpm.dollars())
}

/// Per-day spend summary shown next to the bid field.
pub fn bid_info(bid: Dollars, days: u32) -> String {
    let per_day = if days == 0 {
        bid.amount()
    } else {
        bid.amount() / f64::from(days)
    };
    format!("→ ${:.2} per day for {} day(s)", per_day, days)
}

/// Derived display values for one campaign draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub days: u32,
    pub bid: Dollars,
    pub cpm: Cpm,
    pub impressions: f64,
    pub daily_spend: f64,
}

impl Quote {
    pub fn build(range: &DateRange, bid: Dollars, cpm: Cpm) -> Result<Self> {
        let days = compute_duration(range.start(), range.end())?;
        Ok(Self {
            days,
            bid,
            cpm,
            impressions: compute_impressions(bid, cpm),
            daily_spend: bid.amount() / f64::from(days),
        })
    }

    pub fn duration_label(&self) -> String {
        duration_label(self.days)
    }

    pub fn impressions_label(&self) -> String {
        impressions_label(self.impressions)
    }

    pub fn price_label(&self) -> String {
        price_label(self.cpm)
    }

    pub fn bid_info(&self) -> String {
        bid_info(self.bid, self.days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2013, m, d).unwrap()
    }

    #[test]
    fn test_duration_counts_whole_days() {
        assert_eq!(compute_duration(date(5, 1), date(5, 4)).unwrap(), 3);
        assert_eq!(compute_duration(date(2, 27), date(3, 2)).unwrap(), 3);
    }

    #[test]
    fn test_duration_rejects_backwards_range() {
        assert!(compute_duration(date(5, 4), date(5, 1)).is_err());
        assert!(compute_duration(date(5, 4), date(5, 4)).is_err());
    }

    #[test]
    fn test_impressions_formula() {
        let bid = Dollars::new(50.0).unwrap();
        let cpm = Cpm::from_cents(250).unwrap();
        assert_eq!(compute_impressions(bid, cpm), 20_000.0);

        let bid = Dollars::new(7.0).unwrap();
        let cpm = Cpm::from_cents(3).unwrap();
        let expected = 7.0 / 3.0 * 100_000.0;
        assert!((compute_impressions(bid, cpm) - expected).abs() < 1e-6);
    }

    #[test]
    fn test_pretty_number() {
        assert_eq!(pretty_number(20_000.0), "20,000");
        assert_eq!(pretty_number(1_234_567.89), "1,234,567");
        assert_eq!(pretty_number(999.0), "999");
        assert_eq!(pretty_number(-4_500.0), "-4,500");
        assert_eq!(pretty_number(0.5), "0.5");
        assert_eq!(pretty_number(0.0), "0");
    }

    #[test]
    fn test_labels_for_sample_campaign() {
        let range = DateRange::new(date(5, 1), date(5, 4)).unwrap();
        let quote = Quote::build(
            &range,
            Dollars::new(50.0).unwrap(),
            Cpm::from_cents(250).unwrap(),
        )
        .unwrap();

        assert_eq!(quote.impressions_label(), "20,000 impressions");
        assert_eq!(quote.price_label(), "$2.50 per 1000 impressions");
        assert_eq!(quote.duration_label(), "3 days");
        insta::assert_snapshot!(quote.bid_info(), @"→ $16.67 per day for 3 day(s)");
    }

    #[test]
    fn test_duration_label_singular() {
        assert_eq!(duration_label(1), "1 day");
        assert_eq!(duration_label(2), "2 days");
    }
}
