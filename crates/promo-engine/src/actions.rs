//! Row controls: which buttons and labels a campaign row shows.
//!
//! The decision is a pure function of [`CampaignStatus`], so renderers never
//! inspect flags or CSS classes to find out what a row allows.

use promo_types::{CampaignFlags, CampaignStatus, Lifecycle, Payment};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowAction {
    ViewLive,
    Edit,
    Delete,
    Pay,
    Free,
}

impl RowAction {
    pub fn label(&self) -> &'static str {
        match self {
            RowAction::ViewLive => "view live",
            RowAction::Edit => "edit",
            RowAction::Delete => "delete",
            RowAction::Pay => "pay",
            RowAction::Free => "free",
        }
    }
}

/// What the price (bid) cell shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceControl {
    PayButton,
    ChangeButton,
    FreeButton,
    FreebieLabel,
    /// Cell is marked paid with no control.
    Settled,
    /// Free control was hidden after a freebie request.
    Hidden,
}

impl PriceControl {
    pub fn label(&self) -> Option<&'static str> {
        match self {
            PriceControl::PayButton => Some("pay"),
            PriceControl::ChangeButton => Some("change"),
            PriceControl::FreeButton => Some("free"),
            PriceControl::FreebieLabel => Some("freebie"),
            PriceControl::Settled | PriceControl::Hidden => None,
        }
    }

    /// Extra classes on the price cell besides `bid`.
    pub fn cell_classes(&self) -> &'static [&'static str] {
        match self {
            PriceControl::FreebieLabel => &["free", "paid"],
            PriceControl::ChangeButton | PriceControl::Settled => &["paid"],
            _ => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowControls {
    pub actions: Vec<RowAction>,
    pub price: PriceControl,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
}

impl RowControls {
    pub fn allows(&self, action: RowAction) -> bool {
        self.actions.contains(&action)
    }

    /// Drop the free control once a freebie has been requested.
    pub fn hide_free(&mut self) {
        self.actions.retain(|a| *a != RowAction::Free);
        if self.price == PriceControl::FreeButton {
            self.price = PriceControl::Hidden;
        }
    }
}

pub const COMPLETE_INFO: &str = "complete/live";

pub fn row_controls(status: &CampaignStatus) -> RowControls {
    let mut actions = Vec::new();
    if status.live {
        actions.push(RowAction::ViewLive);
    }

    match status.lifecycle {
        Lifecycle::Pending(payment) => {
            let price = match payment {
                Payment::Unpaid | Payment::Paid if status.sponsor => PriceControl::FreeButton,
                Payment::Unpaid | Payment::Waived => PriceControl::PayButton,
                Payment::Freebie => PriceControl::FreebieLabel,
                Payment::Paid => PriceControl::ChangeButton,
            };
            match price {
                PriceControl::FreeButton => actions.push(RowAction::Free),
                PriceControl::PayButton | PriceControl::ChangeButton => {
                    actions.push(RowAction::Pay)
                }
                _ => {}
            }
            actions.push(RowAction::Edit);
            actions.push(RowAction::Delete);

            RowControls {
                actions,
                price,
                info: None,
            }
        }
        Lifecycle::Complete => {
            // sponsors can always edit
            if status.sponsor {
                actions.push(RowAction::Edit);
            }
            RowControls {
                actions,
                price: PriceControl::Settled,
                info: Some(COMPLETE_INFO.to_string()),
            }
        }
    }
}

/// Row class list: `campaign-row` plus one class per set flag, with
/// `complete` taking precedence over `paid`.
pub fn css_class(flags: &CampaignFlags) -> String {
    let mut class = String::from("campaign-row");
    if flags.free {
        class.push_str(" free");
    }
    if flags.live {
        class.push_str(" live");
    }
    if flags.complete {
        class.push_str(" complete");
    } else if flags.paid {
        class.push_str(" paid");
    }
    if flags.sponsor {
        class.push_str(" sponsor");
    }
    class
}
