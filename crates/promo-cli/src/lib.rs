// NOTE: promo Architecture
//
// The CLI is a thin driver over promo-runtime:
// - Each command loads config.toml and the campaign board from the data dir
// - Form input goes through FormController exactly as the page would feed it
//   (dates, bid, targeting toggle), then the table applies the result
// - Transitions are played on a LogSurface, visible with --log-level debug
// - Backend calls go out through HttpBackend when backend.base_url is set,
//   otherwise they are logged and skipped

mod args;
mod commands;
mod context;
mod handlers;
pub mod presentation;
pub mod types;

pub use args::{CampaignCommand, Cli, Commands, ConfigCommand, DraftArgs};
pub use commands::run;
