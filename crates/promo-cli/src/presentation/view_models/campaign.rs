use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CampaignListViewModel {
    pub link_id: String,
    pub max_campaigns: usize,
    pub limit_reached: bool,
    pub campaigns: Vec<CampaignRowViewModel>,
}

#[derive(Debug, Serialize)]
pub struct CampaignRowViewModel {
    pub id: String,
    pub start: String,
    pub end: String,
    pub duration: u32,
    pub bid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spent: Option<String>,
    pub cpm_cents: u32,
    pub speed: String,
    pub targeting: String,
    pub css_class: String,
    pub actions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_control: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
}

/// Outcome of new / edit / delete / free.
#[derive(Debug, Serialize)]
pub struct CampaignActionViewModel {
    pub action: String,
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campaign: Option<CampaignRowViewModel>,
    pub steps: usize,
    pub remaining: usize,
}

#[derive(Debug, Serialize)]
pub struct NavigationViewModel {
    pub id: String,
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct ExportViewModel {
    pub format: String,
    pub rows: usize,
    pub output_path: String,
}
