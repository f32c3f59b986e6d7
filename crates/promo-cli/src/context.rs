use anyhow::{Result, anyhow};
use once_cell::sync::OnceCell;
use promo_runtime::{Board, CampaignTable, Config, FormController};
use std::path::{Path, PathBuf};

use crate::types::OutputFormat;

pub struct ExecutionContext {
    data_dir: PathBuf,
    config: OnceCell<Config>,
    pub format: OutputFormat,
}

impl ExecutionContext {
    pub fn new(data_dir: PathBuf, format: OutputFormat) -> Self {
        Self {
            data_dir,
            config: OnceCell::new(),
            format,
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn json_mode(&self) -> bool {
        self.format == OutputFormat::Json
    }

    pub fn config_path(&self) -> PathBuf {
        Config::path_in(&self.data_dir)
    }

    pub fn config(&self) -> Result<&Config> {
        self.config
            .get_or_try_init(|| Config::load_from(&self.config_path()).map_err(Into::into))
    }

    pub fn form(&self) -> Result<FormController> {
        let config = self.config()?;
        Ok(FormController::new(config.bid_policy()?, config.base_cpm()?))
    }

    pub fn link_id(&self) -> Result<&str> {
        let link_id = self.config()?.link_id();
        if link_id.is_empty() {
            return Err(anyhow!(
                "No link_id configured. Run 'promo config init --link-id <fullname>' first."
            ));
        }
        Ok(link_id)
    }

    pub fn load_table(&self) -> Result<CampaignTable> {
        let board = Board::load_or_new(&self.data_dir, self.link_id()?)?;
        Ok(board.into_table(self.config()?.limits.max_campaigns))
    }

    pub fn save_table(&self, table: &CampaignTable) -> Result<()> {
        Board::from_table(table).save(&self.data_dir)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_config_uses_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let ctx = ExecutionContext::new(temp_dir.path().to_path_buf(), OutputFormat::Plain);
        assert_eq!(ctx.config()?.limits.max_campaigns, 20);
        assert!(ctx.link_id().is_err());
        Ok(())
    }

    #[test]
    fn test_load_table_from_board() -> Result<()> {
        let temp_dir = TempDir::new()?;
        std::fs::write(
            temp_dir.path().join("config.toml"),
            "link_id = \"t3_abc\"\n[limits]\nmax_campaigns = 2\n",
        )?;
        let ctx = ExecutionContext::new(temp_dir.path().to_path_buf(), OutputFormat::Json);

        let table = ctx.load_table()?;
        assert!(table.is_empty());
        assert_eq!(table.link_id(), "t3_abc");
        assert!(!table.check_number_of_campaigns().reached);
        Ok(())
    }
}
