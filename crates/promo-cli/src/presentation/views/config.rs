use std::fmt;

use crate::presentation::view_models::ConfigViewModel;

impl fmt::Display for ConfigViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let state = if self.exists { "" } else { " (not created, defaults)" };
        writeln!(f, "Config: {}{}", self.config_path, state)?;
        writeln!(f)?;
        writeln!(f, "link_id              {}", self.link_id.as_deref().unwrap_or("(unset)"))?;
        writeln!(f, "min_bid              ${}", self.min_bid)?;
        writeln!(f, "min_daily_bid        ${}", self.min_daily_bid)?;
        writeln!(f, "targeted_multiplier  {}", self.targeted_multiplier)?;
        writeln!(f, "base_cpm             {} cents", self.base_cpm)?;
        writeln!(f, "max_campaigns        {}", self.max_campaigns)?;
        writeln!(
            f,
            "base_url             {}",
            self.base_url.as_deref().unwrap_or("(offline)")
        )?;
        writeln!(f, "timeout_secs         {}", self.timeout_secs)
    }
}
