pub mod campaign;
pub mod config;
pub mod outcome;
pub mod quote;

pub use campaign::{
    CampaignActionViewModel, CampaignListViewModel, CampaignRowViewModel, ExportViewModel,
    NavigationViewModel,
};
pub use config::ConfigViewModel;
pub use outcome::{Badge, CommandOutput, NextStep, Outcome};
pub use quote::{ForecastViewModel, QuoteViewModel};
