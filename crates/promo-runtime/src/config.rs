use crate::{Error, Result};
use promo_engine::BidPolicy;
use promo_types::{Cpm, Dollars};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Resolve the data directory path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. PROMO_PATH environment variable (with tilde expansion)
/// 3. XDG data directory (recommended default)
/// 4. ~/.promo (fallback for systems without XDG)
pub fn resolve_data_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("PROMO_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("promo"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".promo"));
    }

    Err(Error::Config(
        "Could not determine data directory: no HOME directory or XDG data directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    pub min_bid: f64,
    pub min_daily_bid: f64,
    #[serde(default = "default_multiplier")]
    pub targeted_multiplier: f64,
    /// Default CPM in cents for new campaigns.
    pub base_cpm: u32,
}

fn default_multiplier() -> f64 {
    promo_engine::bid::TARGETED_MULTIPLIER
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            min_bid: 20.0,
            min_daily_bid: 5.0,
            targeted_multiplier: default_multiplier(),
            base_cpm: 125,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitsConfig {
    pub max_campaigns: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self { max_campaigns: 20 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_timeout() -> u64 {
    30
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout_secs: default_timeout(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Fullname of the promoted link all campaigns belong to.
    #[serde(default)]
    pub link_id: Option<String>,
    #[serde(default)]
    pub pricing: PricingConfig,
    #[serde(default)]
    pub limits: LimitsConfig,
    #[serde(default)]
    pub backend: BackendConfig,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn path_in(data_dir: &Path) -> PathBuf {
        data_dir.join("config.toml")
    }

    pub fn validate(&self) -> Result<()> {
        self.bid_policy()?;
        self.base_cpm()?;
        if self.limits.max_campaigns == 0 {
            return Err(Error::Config("limits.max_campaigns must be at least 1".into()));
        }
        Ok(())
    }

    pub fn bid_policy(&self) -> Result<BidPolicy> {
        if !(self.pricing.targeted_multiplier.is_finite() && self.pricing.targeted_multiplier > 0.0)
        {
            return Err(Error::Config(
                "pricing.targeted_multiplier must be positive".into(),
            ));
        }
        Ok(BidPolicy {
            min_bid: Dollars::new(self.pricing.min_bid)?,
            min_daily_bid: Dollars::new(self.pricing.min_daily_bid)?,
            targeted_multiplier: self.pricing.targeted_multiplier,
        })
    }

    pub fn base_cpm(&self) -> Result<Cpm> {
        Ok(Cpm::from_cents(self.pricing.base_cpm)?)
    }

    pub fn link_id(&self) -> &str {
        self.link_id.as_deref().unwrap_or_default()
    }
}
