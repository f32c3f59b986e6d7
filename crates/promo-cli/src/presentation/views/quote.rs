use std::fmt;

use crate::presentation::view_models::{ForecastViewModel, QuoteViewModel};

// --------------------------------------------------------
// Quote View
// --------------------------------------------------------

impl fmt::Display for QuoteViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{:<12} {} to {}", "Dates:", self.start, self.end)?;
        if let Some(duration) = &self.duration {
            writeln!(f, "{:<12} {}", "Duration:", duration)?;
        }
        writeln!(f, "{:<12} {}", "Targeting:", self.targeting)?;
        write!(f, "{:<12} ${}", "Bid:", self.bid.trim_start_matches('$'))?;
        match &self.bid_info {
            Some(info) => writeln!(f, " {}", info)?,
            None => writeln!(f)?,
        }
        if let Some(price) = &self.price {
            writeln!(f, "{:<12} {}", "Price:", price)?;
        }
        if let Some(impressions) = &self.impressions {
            writeln!(f, "{:<12} {}", "Reach:", impressions)?;
        }
        writeln!(f, "{:<12} {}", "Minimum:", self.minimum_total)?;

        for problem in &self.problems {
            writeln!(f, "  ! {}", problem)?;
        }
        Ok(())
    }
}

// --------------------------------------------------------
// Forecast View
// --------------------------------------------------------

impl fmt::Display for ForecastViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.quote)?;
        writeln!(f)?;
        writeln!(f, "{:<12} {}", "Daily:", self.daily_impressions)?;
        writeln!(f, "{:<12} {}", "Requested:", self.requested)?;
        writeln!(f, "{:<12} {}", "Predicted:", self.predicted)?;
        if !self.oversold_dates.is_empty() {
            writeln!(f, "{:<12} {}", "Oversold:", self.oversold_dates.join(", "))?;
        }
        if let Some(warning) = &self.warning {
            writeln!(f)?;
            writeln!(f, "{}", warning)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote() -> QuoteViewModel {
        QuoteViewModel {
            start: "5/1/2013".to_string(),
            end: "5/4/2013".to_string(),
            days: Some(3),
            bid: "50".to_string(),
            cpm_cents: 250,
            targeting: "sitewide".to_string(),
            duration: Some("3 days".to_string()),
            impressions: Some("20,000 impressions".to_string()),
            price: Some("$2.50 per 1000 impressions".to_string()),
            bid_info: Some("→ $16.67 per day for 3 day(s)".to_string()),
            minimum_total: "$20".to_string(),
            accepted: true,
            problems: Vec::new(),
        }
    }

    #[test]
    fn test_quote_view() {
        insta::assert_snapshot!(quote().to_string(), @r"
        Dates:       5/1/2013 to 5/4/2013
        Duration:    3 days
        Targeting:   sitewide
        Bid:         $50 → $16.67 per day for 3 day(s)
        Price:       $2.50 per 1000 impressions
        Reach:       20,000 impressions
        Minimum:     $20
        ");
    }

    #[test]
    fn test_problems_are_listed() {
        let mut vm = quote();
        vm.accepted = false;
        vm.problems.push("the minimum spend is $20".to_string());
        assert!(vm.to_string().ends_with("  ! the minimum spend is $20\n"));
    }
}
