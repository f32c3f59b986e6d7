use crate::table::CampaignTable;
use crate::{Error, Result};
use promo_types::{CampaignId, CampaignRow};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const BOARD_FILE: &str = "campaigns.json";

/// Campaigns of one promoted link, persisted between CLI invocations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub link_id: String,
    #[serde(default)]
    pub rows: Vec<CampaignRow>,
}

impl Board {
    pub fn new(link_id: impl Into<String>) -> Self {
        Self {
            link_id: link_id.into(),
            rows: Vec::new(),
        }
    }

    pub fn path_in(data_dir: &Path) -> PathBuf {
        data_dir.join(BOARD_FILE)
    }

    /// Load the board, or start an empty one for `link_id` if none exists yet.
    pub fn load_or_new(data_dir: &Path, link_id: &str) -> Result<Self> {
        let path = Self::path_in(data_dir);
        if !path.exists() {
            return Ok(Self::new(link_id));
        }
        let content = std::fs::read_to_string(&path)?;
        let board: Board = serde_json::from_str(&content)?;
        if board.link_id != link_id {
            return Err(Error::Config(format!(
                "{} belongs to link '{}', not '{}'",
                path.display(),
                board.link_id,
                link_id
            )));
        }
        Ok(board)
    }

    pub fn save(&self, data_dir: &Path) -> Result<()> {
        std::fs::create_dir_all(data_dir)?;
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(Self::path_in(data_dir), content)?;
        Ok(())
    }

    /// Next id after the highest numeric id on the board.
    pub fn next_id(&self) -> CampaignId {
        let next = self
            .rows
            .iter()
            .filter_map(|r| r.id.to_number())
            .max()
            .map_or(1, |n| n + 1);
        CampaignId::from_number(next)
    }

    pub fn into_table(self, max_campaigns: usize) -> CampaignTable {
        CampaignTable::from_rows(self.link_id, max_campaigns, self.rows)
    }

    pub fn from_table(table: &CampaignTable) -> Self {
        Self {
            link_id: table.link_id().to_string(),
            rows: table.campaigns().cloned().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use promo_types::{CampaignFlags, Cpm, Dollars, Speed, Targeting};
    use tempfile::TempDir;

    fn row(n: u64) -> CampaignRow {
        CampaignRow {
            id: CampaignId::from_number(n),
            start_date: NaiveDate::from_ymd_opt(2013, 5, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2013, 5, 4).unwrap(),
            duration: 3,
            bid: Dollars::new(30.0).unwrap(),
            spent: None,
            cpm: Cpm::from_cents(125).unwrap(),
            speed: Speed::default(),
            targeting: Targeting::Sitewide,
            flags: CampaignFlags::default(),
            free_requested: false,
        }
    }

    #[test]
    fn test_missing_board_starts_empty() -> Result<()> {
        let dir = TempDir::new()?;
        let board = Board::load_or_new(dir.path(), "t3_abc")?;
        assert_eq!(board, Board::new("t3_abc"));
        Ok(())
    }

    #[test]
    fn test_save_and_reload() -> Result<()> {
        let dir = TempDir::new()?;
        let mut board = Board::new("t3_abc");
        board.rows.push(row(35));
        board.save(dir.path())?;

        let loaded = Board::load_or_new(dir.path(), "t3_abc")?;
        assert_eq!(loaded, board);
        assert_eq!(loaded.next_id().as_str(), "10");
        Ok(())
    }

    #[test]
    fn test_board_for_other_link_is_rejected() -> Result<()> {
        let dir = TempDir::new()?;
        Board::new("t3_abc").save(dir.path())?;
        assert!(matches!(
            Board::load_or_new(dir.path(), "t3_xyz"),
            Err(Error::Config(_))
        ));
        Ok(())
    }

    #[test]
    fn test_table_roundtrip_keeps_rows() {
        let board = Board {
            link_id: "t3_abc".to_string(),
            rows: vec![row(1), row(2)],
        };
        let table = board.clone().into_table(10);
        assert_eq!(table.len(), 2);
        assert_eq!(Board::from_table(&table), board);
    }
}
