use crate::presentation::view_models::{
    CampaignActionViewModel, CampaignListViewModel, CampaignRowViewModel, NavigationViewModel,
};
use promo_runtime::{CampaignTable, Navigation, TableRow};
use promo_types::{CampaignId, format_form_date};

pub fn present_campaign_row(row: &TableRow) -> CampaignRowViewModel {
    let campaign = &row.campaign;
    let controls = row.controls.as_ref();

    CampaignRowViewModel {
        id: campaign.id.to_string(),
        start: format_form_date(campaign.start_date),
        end: format_form_date(campaign.end_date),
        duration: campaign.duration,
        bid: campaign.bid.to_string(),
        spent: campaign.spent.map(|s| s.to_string()),
        cpm_cents: campaign.cpm.cents(),
        speed: campaign.speed.to_string(),
        targeting: campaign.targeting.to_string(),
        css_class: row.css_class.clone(),
        actions: controls
            .map(|c| c.actions.iter().map(|a| a.label().to_string()).collect())
            .unwrap_or_default(),
        price_control: controls
            .and_then(|c| c.price.label())
            .map(str::to_string),
        info: controls.and_then(|c| c.info.clone()),
    }
}

pub fn present_campaign_list(table: &CampaignTable) -> CampaignListViewModel {
    let limit = table.check_number_of_campaigns();
    CampaignListViewModel {
        link_id: table.link_id().to_string(),
        max_campaigns: limit.max,
        limit_reached: limit.reached,
        campaigns: table.rows().iter().map(present_campaign_row).collect(),
    }
}

pub fn present_campaign_action(
    action: &str,
    id: &CampaignId,
    table: &CampaignTable,
    steps: usize,
) -> CampaignActionViewModel {
    CampaignActionViewModel {
        action: action.to_string(),
        id: id.to_string(),
        campaign: table.row(id).map(present_campaign_row),
        steps,
        remaining: table.len(),
    }
}

pub fn present_navigation(navigation: Navigation) -> NavigationViewModel {
    NavigationViewModel {
        id: navigation.campaign.to_string(),
        url: navigation.url,
    }
}
