use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct QuoteViewModel {
    pub start: String,
    pub end: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days: Option<u32>,
    pub bid: String,
    pub cpm_cents: u32,
    pub targeting: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub impressions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bid_info: Option<String>,
    pub minimum_total: String,
    pub accepted: bool,
    pub problems: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ForecastViewModel {
    pub quote: QuoteViewModel,
    pub daily_impressions: u64,
    pub requested: u64,
    pub predicted: u64,
    pub oversold_dates: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}
