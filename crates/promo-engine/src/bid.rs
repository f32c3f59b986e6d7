use promo_types::Dollars;
use serde::{Deserialize, Serialize};

/// Targeted campaigns must spend this much more per day than sitewide ones.
pub const TARGETED_MULTIPLIER: f64 = 1.5;

/// Minimum spend rules configured by the server.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BidPolicy {
    /// Flat minimum for the whole campaign.
    pub min_bid: Dollars,
    /// Minimum per day for an untargeted campaign.
    pub min_daily_bid: Dollars,
    #[serde(default = "default_multiplier")]
    pub targeted_multiplier: f64,
}

fn default_multiplier() -> f64 {
    TARGETED_MULTIPLIER
}

impl Default for BidPolicy {
    fn default() -> Self {
        Self {
            min_bid: Dollars::ZERO,
            min_daily_bid: Dollars::ZERO,
            targeted_multiplier: TARGETED_MULTIPLIER,
        }
    }
}

impl BidPolicy {
    pub fn minimum_daily(&self, targeted: bool) -> Dollars {
        if targeted {
            self.min_daily_bid.scaled(self.targeted_multiplier)
        } else {
            self.min_daily_bid
        }
    }

    pub fn minimum_total(&self, days: u32, targeted: bool) -> Dollars {
        self.minimum_daily(targeted).scaled(f64::from(days))
    }
}

/// Which minimum-spend notice gets the error marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MinimumNotice {
    Flat,
    Targeted,
    Untargeted,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BidCheck {
    pub bid: Dollars,
    pub minimum: Dollars,
    pub accepted: bool,
    pub notice: MinimumNotice,
}

impl BidCheck {
    pub fn shortfall(&self) -> f64 {
        (self.minimum.amount() - self.bid.amount()).max(0.0)
    }
}

/// Flat check: the bid must reach `minimum`.
pub fn validate_bid(bid: Dollars, minimum: Dollars) -> BidCheck {
    BidCheck {
        bid,
        minimum,
        accepted: bid >= minimum,
        notice: MinimumNotice::Flat,
    }
}

/// Per-day check: the bid must cover `days` days at the daily minimum.
pub fn validate_daily_bid(bid: Dollars, days: u32, targeted: bool, policy: &BidPolicy) -> BidCheck {
    let minimum = policy.minimum_total(days, targeted);
    BidCheck {
        bid,
        minimum,
        accepted: bid >= minimum,
        notice: if targeted {
            MinimumNotice::Targeted
        } else {
            MinimumNotice::Untargeted
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dollars(v: f64) -> Dollars {
        Dollars::new(v).unwrap()
    }

    fn policy() -> BidPolicy {
        BidPolicy {
            min_bid: dollars(20.0),
            min_daily_bid: dollars(5.0),
            targeted_multiplier: TARGETED_MULTIPLIER,
        }
    }

    #[test]
    fn test_flat_minimum() {
        assert!(!validate_bid(dollars(19.99), dollars(20.0)).accepted);
        assert!(validate_bid(dollars(20.0), dollars(20.0)).accepted);
    }

    #[test]
    fn test_daily_minimum_untargeted() {
        let check = validate_daily_bid(dollars(14.0), 3, false, &policy());
        assert!(!check.accepted);
        assert_eq!(check.minimum, dollars(15.0));
        assert_eq!(check.notice, MinimumNotice::Untargeted);
        assert_eq!(check.shortfall(), 1.0);

        assert!(validate_daily_bid(dollars(15.0), 3, false, &policy()).accepted);
    }

    #[test]
    fn test_targeted_minimum_is_one_and_a_half_times() {
        let check = validate_daily_bid(dollars(20.0), 3, true, &policy());
        assert!(!check.accepted);
        assert_eq!(check.minimum, dollars(22.5));
        assert_eq!(check.notice, MinimumNotice::Targeted);

        assert!(validate_daily_bid(dollars(22.5), 3, true, &policy()).accepted);
    }
}
