//! Campaign form controller.
//!
//! Holds the raw field values the user typed, recomputes the derived
//! display lines on every change and decides whether the create/save
//! button is enabled.

use crate::backend::ImpressionSource;
use crate::cache::ImpressionsCache;
use crate::transition::{Element, Step, Transition};
use crate::{Error, Result};
use promo_engine::bid::{BidPolicy, MinimumNotice, validate_bid, validate_daily_bid};
use promo_engine::dates::enforce_end_after_start_fields;
use promo_engine::inventory::Forecast;
use promo_engine::quote::{
    bid_info, compute_duration, compute_impressions, duration_label, impressions_label,
    price_label,
};
use promo_types::{
    CampaignFlags, CampaignId, CampaignRow, Cpm, DateRange, Dollars, Speed, Targeting,
    format_form_date, parse_form_date,
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// Field values as entered; dates and bid stay raw until read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormFields {
    pub campaign_id: Option<CampaignId>,
    pub start_date: String,
    pub end_date: String,
    pub bid: String,
    pub cpm: Option<Cpm>,
    pub speed: Speed,
    pub targeting: Targeting,
}

impl FormFields {
    pub fn from_row(row: &CampaignRow) -> Self {
        Self {
            campaign_id: Some(row.id.clone()),
            start_date: format_form_date(row.start_date),
            end_date: format_form_date(row.end_date),
            bid: row.bid.amount().to_string(),
            cpm: Some(row.cpm),
            speed: row.speed.clone(),
            targeting: row.targeting.clone(),
        }
    }

    pub fn range(&self) -> promo_types::Result<DateRange> {
        DateRange::new(
            parse_form_date(&self.start_date)?,
            parse_form_date(&self.end_date)?,
        )
    }

    pub fn days(&self) -> promo_types::Result<u32> {
        compute_duration(
            parse_form_date(&self.start_date)?,
            parse_form_date(&self.end_date)?,
        )
    }

    pub fn bid(&self) -> promo_types::Result<Dollars> {
        Dollars::parse(&self.bid)
    }
}

/// Which submit button the form shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormMode {
    #[default]
    Create,
    Edit,
}

/// Error markers the page styles in red.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorMark {
    MinimumSpend,
    BidInfo,
    TargetedMinimum,
    NoTargetingMinimum,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FormDisplay {
    pub duration: Option<String>,
    pub impressions: Option<String>,
    pub price: Option<String>,
    pub bid_info: Option<String>,
    pub impression_warning: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormState {
    pub fields: FormFields,
    pub mode: FormMode,
    pub submit_enabled: bool,
    pub errors: BTreeSet<ErrorMark>,
    pub display: FormDisplay,
    pub targeting_visible: bool,
}

pub struct FormController {
    state: FormState,
    policy: BidPolicy,
    base_cpm: Cpm,
}

impl FormController {
    pub fn new(policy: BidPolicy, base_cpm: Cpm) -> Self {
        let fields = FormFields {
            cpm: Some(base_cpm),
            ..Default::default()
        };
        Self {
            state: FormState {
                fields,
                mode: FormMode::Create,
                submit_enabled: true,
                errors: BTreeSet::new(),
                display: FormDisplay::default(),
                targeting_visible: false,
            },
            policy,
            base_cpm,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn fields(&self) -> &FormFields {
        &self.state.fields
    }

    pub fn policy(&self) -> &BidPolicy {
        &self.policy
    }

    pub fn has_error(&self, mark: ErrorMark) -> bool {
        self.state.errors.contains(&mark)
    }

    // --------------------------------------------------------
    // Field input
    // --------------------------------------------------------

    /// Set the start date, pushing the end date to the next day when it no
    /// longer falls after the start. Returns the corrected end value.
    pub fn set_start_date(&mut self, value: &str) -> Option<String> {
        self.state.fields.start_date = value.to_string();
        let corrected = enforce_end_after_start_fields(value, &self.state.fields.end_date)
            .map(format_form_date);
        if let Some(end) = &corrected {
            debug!(end = %end, "end date moved after start date");
            self.state.fields.end_date = end.clone();
        }
        self.on_date_change();
        corrected
    }

    pub fn set_end_date(&mut self, value: &str) {
        self.state.fields.end_date = value.to_string();
        self.on_date_change();
    }

    pub fn set_bid(&mut self, value: &str) {
        self.state.fields.bid = value.to_string();
        self.on_bid_change();
    }

    pub fn set_cpm(&mut self, cpm: Cpm) {
        self.state.fields.cpm = Some(cpm);
        self.fill_inputs();
    }

    pub fn set_speed(&mut self, speed: Speed) {
        self.state.fields.speed = speed;
    }

    /// Only accepted while the targeting sub-form is enabled.
    pub fn set_subreddit(&mut self, name: &str) -> Result<()> {
        if !self.state.targeting_visible {
            return Err(Error::InvalidOperation(
                "targeting is disabled for this campaign".to_string(),
            ));
        }
        self.state.fields.targeting = Targeting::from_field(name);
        Ok(())
    }

    /// Show/enable or hide/disable the "restrict to one subreddit" sub-form.
    pub fn toggle_targeting_fields(&mut self, enabled: bool) -> Transition {
        self.state.targeting_visible = enabled;
        let target = Element::TargetingFields;
        if enabled {
            Transition::new().then(Step::SlideDown { target })
        } else {
            self.state.fields.targeting = Targeting::Sitewide;
            Transition::new().then(Step::SlideUp { target })
        }
    }

    pub fn on_date_change(&mut self) {
        self.fill_inputs();
    }

    pub fn on_bid_change(&mut self) {
        self.fill_inputs();
    }

    // --------------------------------------------------------
    // Derived display and validation
    // --------------------------------------------------------

    /// Recompute the duration, impressions and price lines.
    pub fn fill_inputs(&mut self) {
        let fields = &self.state.fields;
        let days = fields.days().ok();
        let bid = fields.bid().ok();
        let cpm = fields.cpm;

        let display = &mut self.state.display;
        display.duration = days.map(duration_label);
        display.impressions = match (bid, cpm) {
            (Some(bid), Some(cpm)) => Some(impressions_label(compute_impressions(bid, cpm))),
            _ => None,
        };
        display.price = cpm.map(price_label);
    }

    /// Flat minimum check against `min_bid`.
    pub fn check_bid(&mut self) -> bool {
        self.state.errors.remove(&ErrorMark::MinimumSpend);
        let accepted = match self.state.fields.bid() {
            Ok(bid) => validate_bid(bid, self.policy.min_bid).accepted,
            Err(_) => false,
        };
        if !accepted {
            self.state.errors.insert(ErrorMark::MinimumSpend);
        }
        self.state.submit_enabled = accepted;
        accepted
    }

    /// Per-day minimum check, 1.5× higher when targeted.
    pub fn update_bid(&mut self) -> bool {
        self.state.errors.remove(&ErrorMark::MinimumSpend);
        let targeted = self.state.targeting_visible;

        let (bid, days) = match (self.state.fields.bid(), self.state.fields.days()) {
            (Ok(bid), Ok(days)) => (bid, days),
            _ => {
                self.state.errors.insert(ErrorMark::BidInfo);
                self.state.display.bid_info = None;
                self.state.submit_enabled = false;
                return false;
            }
        };

        let check = validate_daily_bid(bid, days, targeted, &self.policy);
        if check.accepted {
            self.state.errors.remove(&ErrorMark::BidInfo);
            self.state.errors.remove(&ErrorMark::TargetedMinimum);
            self.state.errors.remove(&ErrorMark::NoTargetingMinimum);
        } else {
            self.state.errors.insert(ErrorMark::BidInfo);
            self.state.errors.remove(&ErrorMark::TargetedMinimum);
            self.state.errors.remove(&ErrorMark::NoTargetingMinimum);
            self.state.errors.insert(match check.notice {
                MinimumNotice::Targeted => ErrorMark::TargetedMinimum,
                MinimumNotice::Untargeted => ErrorMark::NoTargetingMinimum,
                MinimumNotice::Flat => ErrorMark::MinimumSpend,
            });
        }
        self.state.submit_enabled = check.accepted;
        self.state.display.bid_info = Some(bid_info(bid, days));
        check.accepted
    }

    /// Run every check; submit is enabled only if all of them pass.
    pub fn revalidate(&mut self) -> bool {
        self.fill_inputs();
        let daily = self.update_bid();
        let flat = self.check_bid();
        self.state.submit_enabled = daily && flat;
        self.state.submit_enabled
    }

    // --------------------------------------------------------
    // Inventory
    // --------------------------------------------------------

    pub async fn fetch_daily_impressions<S>(
        &self,
        cache: &mut ImpressionsCache,
        source: &S,
        target: &str,
    ) -> Result<u64>
    where
        S: ImpressionSource + ?Sized,
    {
        cache.get_or_fetch(source, target).await
    }

    /// Compare requested impressions with what the target can deliver and
    /// set or clear the warning line.
    pub async fn check_inventory<S>(
        &mut self,
        cache: &mut ImpressionsCache,
        source: &S,
    ) -> Result<Forecast>
    where
        S: ImpressionSource + ?Sized,
    {
        let fields = &self.state.fields;
        let range = fields.range()?;
        let bid = fields.bid()?;
        let cpm = fields
            .cpm
            .ok_or_else(|| Error::InvalidOperation("form has no CPM".to_string()))?;
        let requested = compute_impressions(bid, cpm) as u64;
        let target = fields.targeting.as_key().to_string();

        let daily = self.fetch_daily_impressions(cache, source, &target).await?;
        let forecast = Forecast::build(daily, &range, requested, &BTreeMap::new());
        self.state.display.impression_warning = forecast.warning.clone();
        Ok(forecast)
    }

    // --------------------------------------------------------
    // Loading and saving
    // --------------------------------------------------------

    /// Blank form for a new campaign: no id, sitewide, base CPM.
    pub fn reset_for_create(&mut self) {
        let fields = &mut self.state.fields;
        fields.campaign_id = None;
        fields.targeting = Targeting::Sitewide;
        fields.cpm = Some(self.base_cpm);
        self.state.targeting_visible = false;
        self.state.mode = FormMode::Create;
        self.state.display.impression_warning = None;
        self.on_date_change();
    }

    /// Copy a row's values into the form for editing; returns the snapshot.
    pub fn load_from_row(&mut self, row: &CampaignRow) -> FormFields {
        self.state.fields = FormFields::from_row(row);
        self.state.targeting_visible = row.targeting.is_targeted();
        self.state.mode = FormMode::Edit;
        self.state.display.impression_warning = None;
        self.fill_inputs();
        self.check_bid();
        self.state.fields.clone()
    }

    /// Build the row the table shows once the server accepted the form.
    ///
    /// New campaigns get their id from the server, so `id` overrides the
    /// form's own id when given.
    pub fn build_row(&self, id: Option<CampaignId>, flags: CampaignFlags) -> Result<CampaignRow> {
        let fields = &self.state.fields;
        let id = id
            .or_else(|| fields.campaign_id.clone())
            .ok_or_else(|| Error::InvalidOperation("campaign has no id".to_string()))?;
        let range = fields.range()?;
        let cpm = fields
            .cpm
            .ok_or_else(|| Error::InvalidOperation("form has no CPM".to_string()))?;

        Ok(CampaignRow {
            id,
            start_date: range.start(),
            end_date: range.end(),
            duration: compute_duration(range.start(), range.end())?,
            bid: fields.bid()?,
            spent: None,
            cpm,
            speed: fields.speed.clone(),
            targeting: fields.targeting.clone(),
            flags,
            free_requested: false,
        })
    }
}
