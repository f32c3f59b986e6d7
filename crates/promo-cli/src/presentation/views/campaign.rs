use std::fmt;

use crate::presentation::view_models::{
    CampaignActionViewModel, CampaignListViewModel, CampaignRowViewModel, ExportViewModel,
    NavigationViewModel,
};

const RULE_WIDTH: usize = 100;

// --------------------------------------------------------
// Campaign List View
// --------------------------------------------------------

impl fmt::Display for CampaignListViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Link: {}", self.link_id)?;
        writeln!(f)?;

        if self.campaigns.is_empty() {
            writeln!(f, "No campaigns yet.")?;
            return Ok(());
        }

        writeln!(
            f,
            "{:<8} {:<11} {:<11} {:<5} {:<10} {:<10} {:<12} CONTROLS",
            "ID", "START", "END", "DAYS", "BID", "SPEED", "TARGET"
        )?;
        writeln!(f, "{}", "-".repeat(RULE_WIDTH))?;
        for campaign in &self.campaigns {
            write!(f, "{}", campaign)?;
        }

        writeln!(f)?;
        writeln!(
            f,
            "{} of {} campaigns{}",
            self.campaigns.len(),
            self.max_campaigns,
            if self.limit_reached { " (limit reached)" } else { "" }
        )?;
        Ok(())
    }
}

impl fmt::Display for CampaignRowViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut controls = self.actions.join(", ");
        if let Some(info) = &self.info {
            if !controls.is_empty() {
                controls.push_str("; ");
            }
            controls.push_str(info);
        }
        writeln!(
            f,
            "{:<8} {:<11} {:<11} {:<5} {:<10} {:<10} {:<12} {}",
            self.id,
            self.start,
            self.end,
            self.duration,
            self.bid,
            self.speed,
            self.targeting,
            controls
        )
    }
}

// --------------------------------------------------------
// Action Views
// --------------------------------------------------------

impl fmt::Display for CampaignActionViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(campaign) = &self.campaign {
            write!(f, "{}", campaign)?;
        }
        writeln!(f, "{} campaign(s) on the board", self.remaining)
    }
}

impl fmt::Display for NavigationViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.url)
    }
}

impl fmt::Display for ExportViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "Wrote {} campaign(s) as {} to {}",
            self.rows, self.format, self.output_path
        )
    }
}
