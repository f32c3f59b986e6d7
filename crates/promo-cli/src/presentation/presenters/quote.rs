use crate::presentation::view_models::{ForecastViewModel, QuoteViewModel};
use promo_engine::BidPolicy;
use promo_engine::Forecast;
use promo_runtime::{ErrorMark, FormState};
use promo_types::format_form_date;

fn problem(mark: ErrorMark, policy: &BidPolicy) -> Option<String> {
    match mark {
        ErrorMark::MinimumSpend => Some(format!("the minimum spend is {}", policy.min_bid)),
        ErrorMark::TargetedMinimum => Some(format!(
            "targeted campaigns need at least ${:.2} per day",
            policy.minimum_daily(true).amount()
        )),
        ErrorMark::NoTargetingMinimum => Some(format!(
            "campaigns need at least ${:.2} per day",
            policy.minimum_daily(false).amount()
        )),
        // only marks the field; the reason comes with one of the above
        ErrorMark::BidInfo => None,
    }
}

pub fn present_quote(state: &FormState, policy: &BidPolicy) -> QuoteViewModel {
    let fields = &state.fields;
    let days = fields.days().ok();
    let targeted = state.targeting_visible;

    let mut problems: Vec<String> = state
        .errors
        .iter()
        .filter_map(|mark| problem(*mark, policy))
        .collect();
    if days.is_none() {
        problems.push("the end date must fall after the start date".to_string());
    }
    if fields.bid().is_err() {
        problems.push(format!("'{}' is not a valid bid", fields.bid));
    }

    let daily_total = policy.minimum_total(days.unwrap_or(1), targeted);
    let minimum = if daily_total > policy.min_bid {
        daily_total
    } else {
        policy.min_bid
    };

    QuoteViewModel {
        start: fields.start_date.clone(),
        end: fields.end_date.clone(),
        days,
        bid: fields.bid.clone(),
        cpm_cents: fields.cpm.map(|c| c.cents()).unwrap_or_default(),
        targeting: fields.targeting.to_string(),
        duration: state.display.duration.clone(),
        impressions: state.display.impressions.clone(),
        price: state.display.price.clone(),
        bid_info: state.display.bid_info.clone(),
        minimum_total: minimum.to_string(),
        accepted: state.submit_enabled,
        problems,
    }
}

pub fn present_forecast(
    state: &FormState,
    policy: &BidPolicy,
    forecast: &Forecast,
) -> ForecastViewModel {
    ForecastViewModel {
        quote: present_quote(state, policy),
        daily_impressions: forecast.daily,
        requested: forecast.requested,
        predicted: forecast.predicted,
        oversold_dates: forecast
            .oversold_dates
            .iter()
            .map(|d| format_form_date(*d))
            .collect(),
        warning: forecast.warning.clone(),
    }
}
