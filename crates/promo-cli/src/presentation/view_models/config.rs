use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ConfigViewModel {
    pub config_path: String,
    pub exists: bool,
    pub link_id: Option<String>,
    pub min_bid: f64,
    pub min_daily_bid: f64,
    pub targeted_multiplier: f64,
    pub base_cpm: u32,
    pub max_campaigns: usize,
    pub base_url: Option<String>,
    pub timeout_secs: u64,
}
