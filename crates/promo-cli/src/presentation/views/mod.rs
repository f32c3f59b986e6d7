//! Plain text output: `fmt::Display` for each view model.

mod campaign;
mod config;
mod quote;
