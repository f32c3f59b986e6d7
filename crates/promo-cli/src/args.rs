use crate::types::{ExportFormat, LogLevel, OutputFormat};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "promo")]
#[command(about = "Plan and manage sponsored link campaigns", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory (default: $PROMO_PATH, then the XDG data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Campaign draft as typed into the form.
#[derive(Args, Debug, Clone)]
pub struct DraftArgs {
    /// First day, M/D/YYYY or YYYY-MM-DD
    #[arg(long)]
    pub start: String,

    /// Day after the last day, M/D/YYYY or YYYY-MM-DD
    #[arg(long)]
    pub end: String,

    /// Total budget in dollars
    #[arg(long)]
    pub bid: String,

    /// Price per 1000 impressions in cents (defaults to pricing.base_cpm)
    #[arg(long)]
    pub cpm: Option<u32>,

    /// Restrict delivery to one subreddit
    #[arg(long)]
    pub target: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Duration, price and impressions for a draft, with bid checks
    Quote {
        #[command(flatten)]
        draft: DraftArgs,
    },

    /// Compare a draft with the impressions its target can deliver
    Forecast {
        #[command(flatten)]
        draft: DraftArgs,

        /// Use this daily count instead of asking the backend
        #[arg(long)]
        daily_impressions: Option<u64>,
    },

    Campaign {
        #[command(subcommand)]
        command: CampaignCommand,
    },

    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum CampaignCommand {
    /// Show the campaign table with each row's controls
    List,

    /// Validate a draft and add it to the table
    New {
        #[command(flatten)]
        draft: DraftArgs,

        #[arg(long, default_value = "standard")]
        speed: String,
    },

    /// Load a row into the form, apply changes and save it
    Edit {
        id: String,

        #[arg(long)]
        start: Option<String>,

        #[arg(long)]
        end: Option<String>,

        #[arg(long)]
        bid: Option<String>,

        #[arg(long)]
        cpm: Option<u32>,

        #[arg(long, conflicts_with = "sitewide")]
        target: Option<String>,

        /// Drop subreddit targeting
        #[arg(long)]
        sitewide: bool,
    },

    /// Remove a campaign and tell the backend
    Delete { id: String },

    /// Request a freebie for a campaign
    Free { id: String },

    /// Print the payment URL of a campaign
    Pay { id: String },

    /// Print the live view URL of a campaign
    View { id: String },

    /// Write the table to a file or stdout
    Export {
        #[arg(long, default_value = "csv")]
        export_format: ExportFormat,

        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration
    Show,

    /// Write config.toml into the data directory
    Init {
        #[arg(long)]
        link_id: String,

        #[arg(long)]
        base_url: Option<String>,

        #[arg(long)]
        max_campaigns: Option<usize>,

        /// Overwrite an existing config
        #[arg(long)]
        force: bool,
    },
}
