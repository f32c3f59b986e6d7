use crate::presentation::view_models::ConfigViewModel;
use promo_runtime::Config;
use std::path::Path;

pub fn present_config(config: &Config, config_path: &Path) -> ConfigViewModel {
    ConfigViewModel {
        config_path: config_path.display().to_string(),
        exists: config_path.exists(),
        link_id: config.link_id.clone(),
        min_bid: config.pricing.min_bid,
        min_daily_bid: config.pricing.min_daily_bid,
        targeted_multiplier: config.pricing.targeted_multiplier,
        base_cpm: config.pricing.base_cpm,
        max_campaigns: config.limits.max_campaigns,
        base_url: config.backend.base_url.clone(),
        timeout_secs: config.backend.timeout_secs,
    }
}
