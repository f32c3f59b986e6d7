mod campaign;
mod money;
mod status;

pub use campaign::{CampaignFlags, CampaignId, CampaignRow, DateRange, Speed, Targeting};
pub use money::{Cpm, Dollars};
pub use status::{CampaignStatus, Lifecycle, Payment};
