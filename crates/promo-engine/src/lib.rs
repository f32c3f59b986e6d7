// Engine module - pure campaign calculations (pricing, validation, row controls)
// This layer sits between domain types and the stateful controllers in promo-runtime

pub mod actions;
pub mod bid;
pub mod dates;
pub mod inventory;
pub mod quote;

pub use actions::{PriceControl, RowAction, RowControls, css_class, row_controls};
pub use bid::{BidCheck, BidPolicy, MinimumNotice, validate_bid, validate_daily_bid};
pub use dates::{date_from_input, enforce_end_after_start};
pub use inventory::{Forecast, impression_warning};
pub use quote::{Quote, compute_duration, compute_impressions, pretty_number};

use promo_types::{CampaignFlags, CampaignStatus};

// Façade API - stable entry points for the runtime and CLI layers

/// Controls for a row given its server flags.
pub fn controls_for(flags: &CampaignFlags) -> RowControls {
    row_controls(&CampaignStatus::from_flags(flags))
}
