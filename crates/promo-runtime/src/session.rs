use crate::form::FormFields;
use promo_types::CampaignId;
use serde::Serialize;

/// Where the shared campaign form currently lives.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "placement", rename_all = "snake_case")]
pub enum FormPlacement {
    /// Above the table, hidden.
    #[default]
    Hidden,
    /// Above the table, visible, creating a new campaign.
    Standalone,
    /// Inside the staging row below `row`, editing it.
    Inline { row: CampaignId },
}

/// The one campaign being edited: its id and the values copied into the form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EditSession {
    row: CampaignId,
    snapshot: FormFields,
}

impl EditSession {
    pub fn new(row: CampaignId, snapshot: FormFields) -> Self {
        Self { row, snapshot }
    }

    pub fn row(&self) -> &CampaignId {
        &self.row
    }

    pub fn snapshot(&self) -> &FormFields {
        &self.snapshot
    }

    /// True when the form no longer matches what was loaded from the row.
    pub fn is_dirty(&self, current: &FormFields) -> bool {
        &self.snapshot != current
    }
}
