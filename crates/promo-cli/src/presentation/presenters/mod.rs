pub mod campaign;
pub mod config;
pub mod quote;

pub use campaign::{present_campaign_action, present_campaign_list, present_campaign_row, present_navigation};
pub use config::present_config;
pub use quote::{present_forecast, present_quote};
