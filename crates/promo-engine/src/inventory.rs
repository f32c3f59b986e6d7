use super::quote::pretty_number;
use chrono::NaiveDate;
use promo_types::DateRange;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Expected impressions per date: the same daily estimate for each day in range.
pub fn predicted_by_date(daily: u64, range: &DateRange) -> BTreeMap<NaiveDate, u64> {
    range.dates().map(|date| (date, daily)).collect()
}

/// Unsold impressions per date, never below zero.
pub fn available_by_date(
    daily: u64,
    sold_by_date: &BTreeMap<NaiveDate, u64>,
) -> BTreeMap<NaiveDate, u64> {
    sold_by_date
        .iter()
        .map(|(date, sold)| (*date, daily.saturating_sub(*sold)))
        .collect()
}

/// Dates whose availability is below the requested daily volume.
pub fn oversold(
    available_by_date: &BTreeMap<NaiveDate, u64>,
    daily_request: u64,
) -> BTreeMap<NaiveDate, u64> {
    available_by_date
        .iter()
        .filter(|(_, available)| **available < daily_request)
        .map(|(date, available)| (*date, *available))
        .collect()
}

/// Warning shown under the form when the target cannot deliver `requested`.
pub fn impression_warning(requested: u64, predicted: u64) -> Option<String> {
    if predicted >= requested {
        return None;
    }
    Some(format!(
        "We expect only {} impressions for the selected dates and target, \
         fewer than the {} requested. Try extending the duration or changing the target.",
        pretty_number(predicted as f64),
        pretty_number(requested as f64)
    ))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    pub daily: u64,
    pub days: u32,
    pub requested: u64,
    pub predicted: u64,
    pub oversold_dates: Vec<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl Forecast {
    /// Compare the requested total against `daily × days`.
    ///
    /// `sold_by_date` holds impressions already committed to other
    /// campaigns; pass an empty map when unknown.
    pub fn build(
        daily: u64,
        range: &DateRange,
        requested: u64,
        sold_by_date: &BTreeMap<NaiveDate, u64>,
    ) -> Self {
        let days = range.days();
        let predicted = daily.saturating_mul(u64::from(days));

        let mut sold: BTreeMap<NaiveDate, u64> = range.dates().map(|d| (d, 0)).collect();
        for (date, amount) in sold_by_date {
            if let Some(slot) = sold.get_mut(date) {
                *slot = *amount;
            }
        }
        let daily_request = if days == 0 {
            requested
        } else {
            requested.div_ceil(u64::from(days))
        };
        let oversold_dates = oversold(&available_by_date(daily, &sold), daily_request)
            .into_keys()
            .collect();

        Self {
            daily,
            days,
            requested,
            predicted,
            oversold_dates,
            warning: impression_warning(requested, predicted),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(start: u32, end: u32) -> DateRange {
        DateRange::new(
            NaiveDate::from_ymd_opt(2013, 5, start).unwrap(),
            NaiveDate::from_ymd_opt(2013, 5, end).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_predicted_covers_each_day() {
        let predicted = predicted_by_date(1000, &range(1, 4));
        assert_eq!(predicted.len(), 3);
        assert!(predicted.values().all(|v| *v == 1000));
    }

    #[test]
    fn test_available_never_negative() {
        let mut sold = BTreeMap::new();
        sold.insert(NaiveDate::from_ymd_opt(2013, 5, 1).unwrap(), 1500);
        sold.insert(NaiveDate::from_ymd_opt(2013, 5, 2).unwrap(), 400);
        let available = available_by_date(1000, &sold);
        assert_eq!(available.values().copied().collect::<Vec<_>>(), vec![0, 600]);
    }

    #[test]
    fn test_oversold_selects_dates_below_request() {
        let mut available = BTreeMap::new();
        let d1 = NaiveDate::from_ymd_opt(2013, 5, 1).unwrap();
        let d2 = NaiveDate::from_ymd_opt(2013, 5, 2).unwrap();
        available.insert(d1, 100);
        available.insert(d2, 900);
        let result = oversold(&available, 500);
        assert_eq!(result.keys().copied().collect::<Vec<_>>(), vec![d1]);
    }

    #[test]
    fn test_forecast_warns_when_prediction_short() {
        let forecast = Forecast::build(1000, &range(1, 4), 5000, &BTreeMap::new());
        assert_eq!(forecast.predicted, 3000);
        let warning = forecast.warning.unwrap();
        assert!(warning.contains("3,000"));
        assert!(warning.contains("extending the duration"));
        assert_eq!(forecast.oversold_dates.len(), 3);
    }

    #[test]
    fn test_forecast_silent_when_enough_inventory() {
        let forecast = Forecast::build(2000, &range(1, 4), 5000, &BTreeMap::new());
        assert!(forecast.warning.is_none());
        assert!(forecast.oversold_dates.is_empty());
    }
}
