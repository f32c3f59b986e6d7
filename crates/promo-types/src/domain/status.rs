use crate::CampaignFlags;
use serde::{Deserialize, Serialize};

/// Payment state of a campaign that has not finished running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Payment {
    /// Neither paid nor waived.
    Unpaid,
    /// Marked free but the waiver has not been processed as a payment yet.
    Waived,
    /// Paid by card; the amount can still be changed.
    Paid,
    /// Paid through a freebie.
    Freebie,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "state", content = "payment", rename_all = "snake_case")]
pub enum Lifecycle {
    Pending(Payment),
    Complete,
}

/// Explicit status of a campaign row, derived from the server flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CampaignStatus {
    pub lifecycle: Lifecycle,
    pub live: bool,
    /// The viewer is a sponsor (staff) rather than the advertiser.
    pub sponsor: bool,
}

impl CampaignStatus {
    pub fn from_flags(flags: &CampaignFlags) -> Self {
        let lifecycle = if flags.complete {
            Lifecycle::Complete
        } else {
            Lifecycle::Pending(match (flags.paid, flags.free) {
                (false, false) => Payment::Unpaid,
                (false, true) => Payment::Waived,
                (true, false) => Payment::Paid,
                (true, true) => Payment::Freebie,
            })
        };

        Self {
            lifecycle,
            live: flags.live,
            sponsor: flags.sponsor,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self.lifecycle, Lifecycle::Complete)
    }

    pub fn payment(&self) -> Option<Payment> {
        match self.lifecycle {
            Lifecycle::Pending(payment) => Some(payment),
            Lifecycle::Complete => None,
        }
    }
}

impl From<&CampaignFlags> for CampaignStatus {
    fn from(flags: &CampaignFlags) -> Self {
        Self::from_flags(flags)
    }
}
