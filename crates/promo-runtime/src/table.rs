//! Campaign table manager.
//!
//! Owns the rows of existing campaigns, the placement of the shared form and
//! the single active edit session. Every operation updates the model first and
//! returns the [`Transition`] the page has to play.

use crate::backend::{CampaignBackend, CampaignRequest};
use crate::form::FormController;
use crate::session::{EditSession, FormPlacement};
use crate::transition::{Element, Step, Transition};
use crate::{Error, Result};
use promo_engine::{RowAction, RowControls, controls_for, css_class};
use promo_types::{CampaignId, CampaignRow};
use serde::Serialize;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub campaign: CampaignRow,
    pub css_class: String,
    /// `None` until `set_up_campaigns` wires the row.
    pub controls: Option<RowControls>,
    /// Hidden while the form is open below it.
    pub hidden: bool,
}

impl TableRow {
    fn new(campaign: CampaignRow) -> Self {
        Self {
            css_class: css_class(&campaign.flags),
            campaign,
            controls: None,
            hidden: false,
        }
    }

    pub fn id(&self) -> &CampaignId {
        &self.campaign.id
    }

    pub fn allows(&self, action: RowAction) -> bool {
        self.controls.as_ref().is_some_and(|c| c.allows(action))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CampaignLimit {
    pub count: usize,
    pub max: usize,
    pub reached: bool,
}

impl CampaignLimit {
    /// Show or hide the limit error and toggle the new-campaign button.
    pub fn transition(&self) -> Transition {
        if self.reached {
            Transition::new()
                .then(Step::FadeIn {
                    target: Element::TooManyCampaignsError,
                })
                .then(Step::Disable {
                    target: Element::NewCampaignButton,
                })
        } else {
            Transition::new()
                .then(Step::FadeOut {
                    target: Element::TooManyCampaignsError,
                })
                .then(Step::Enable {
                    target: Element::NewCampaignButton,
                })
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CreateOutcome {
    Opened(Transition),
    LimitReached {
        limit: CampaignLimit,
        transition: Transition,
    },
}

/// Browser redirect requested by a row button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Navigation {
    pub campaign: CampaignId,
    pub url: String,
}

#[derive(Debug)]
pub struct CampaignTable {
    rows: Vec<TableRow>,
    max_campaigns: usize,
    link_id: String,
    placement: FormPlacement,
    session: Option<EditSession>,
}

impl CampaignTable {
    pub fn new(link_id: impl Into<String>, max_campaigns: usize) -> Self {
        Self {
            rows: Vec::new(),
            max_campaigns,
            link_id: link_id.into(),
            placement: FormPlacement::Hidden,
            session: None,
        }
    }

    pub fn from_rows(
        link_id: impl Into<String>,
        max_campaigns: usize,
        rows: impl IntoIterator<Item = CampaignRow>,
    ) -> Self {
        let mut table = Self::new(link_id, max_campaigns);
        table.rows = rows.into_iter().map(TableRow::new).collect();
        table.set_up_campaigns();
        table
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn campaigns(&self) -> impl Iterator<Item = &CampaignRow> {
        self.rows.iter().map(|r| &r.campaign)
    }

    pub fn row(&self, id: &CampaignId) -> Option<&TableRow> {
        self.rows.iter().find(|r| r.id() == id)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn link_id(&self) -> &str {
        &self.link_id
    }

    pub fn placement(&self) -> &FormPlacement {
        &self.placement
    }

    pub fn session(&self) -> Option<&EditSession> {
        self.session.as_ref()
    }

    fn index_of(&self, id: &CampaignId) -> Result<usize> {
        self.rows
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| Error::UnknownCampaign(id.clone()))
    }

    fn require(&self, id: &CampaignId, action: RowAction) -> Result<usize> {
        let index = self.index_of(id)?;
        if !self.rows[index].allows(action) {
            return Err(Error::InvalidOperation(format!(
                "campaign '{}' does not allow '{}'",
                id,
                action.label()
            )));
        }
        Ok(index)
    }

    fn request(&self, id: &CampaignId) -> CampaignRequest {
        CampaignRequest {
            campaign_id36: id.clone(),
            link_id: self.link_id.clone(),
        }
    }

    // --------------------------------------------------------
    // Limits and controls
    // --------------------------------------------------------

    pub fn check_number_of_campaigns(&self) -> CampaignLimit {
        CampaignLimit {
            count: self.rows.len(),
            max: self.max_campaigns,
            reached: self.rows.len() >= self.max_campaigns,
        }
    }

    /// Wire controls on rows that have none; already wired rows are skipped.
    /// Returns how many rows were wired.
    pub fn set_up_campaigns(&mut self) -> usize {
        let mut wired = 0;
        for row in self.rows.iter_mut().filter(|r| r.controls.is_none()) {
            let mut controls = controls_for(&row.campaign.flags);
            if row.campaign.free_requested {
                controls.hide_free();
            }
            row.controls = Some(controls);
            wired += 1;
        }
        wired
    }

    // --------------------------------------------------------
    // Form lifecycle
    // --------------------------------------------------------

    /// Close whatever the form is doing and put it back above the table.
    pub fn cancel_edit(&mut self) -> Transition {
        let placement = std::mem::take(&mut self.placement);
        self.session = None;

        match placement {
            FormPlacement::Inline { row } => {
                if let Some(r) = self.rows.iter_mut().find(|r| r.id() == &row) {
                    r.hidden = false;
                }
                debug!(campaign = %row, "edit cancelled");
                Transition::new()
                    .then(Step::FadeOut {
                        target: Element::Form,
                    })
                    .then(Step::DetachForm)
                    .then(Step::RemoveStagingRow)
                    .then(Step::FadeIn {
                        target: Element::Row(row),
                    })
                    .then(Step::AttachFormAboveTable)
                    .then(Step::Hide {
                        target: Element::Form,
                    })
            }
            FormPlacement::Standalone => Transition::new().then(Step::FadeOut {
                target: Element::Form,
            }),
            FormPlacement::Hidden => Transition::new(),
        }
    }

    pub fn cancel(&mut self) -> Transition {
        self.cancel_edit()
    }

    /// Open a blank form unless the table is full.
    pub fn create(&mut self, form: &mut FormController) -> CreateOutcome {
        let limit = self.check_number_of_campaigns();
        if limit.reached {
            return CreateOutcome::LimitReached {
                limit,
                transition: limit.transition(),
            };
        }

        let mut transition = limit.transition().chain(self.cancel_edit());
        form.reset_for_create();
        transition.push(Step::SetFormMode {
            mode: form.state().mode,
        });
        transition.push(Step::FadeIn {
            target: Element::Form,
        });
        self.placement = FormPlacement::Standalone;
        CreateOutcome::Opened(transition)
    }

    /// Move the form below `id` and load the row into it.
    ///
    /// Editing the row that is already open is a no-op.
    pub fn edit(&mut self, id: &CampaignId, form: &mut FormController) -> Result<Transition> {
        if let FormPlacement::Inline { row } = &self.placement
            && row == id
        {
            return Ok(Transition::new());
        }
        self.require(id, RowAction::Edit)?;

        let mut transition = self.cancel_edit();
        let index = self.index_of(id)?;
        let snapshot = form.load_from_row(&self.rows[index].campaign);
        self.rows[index].hidden = true;
        self.session = Some(EditSession::new(id.clone(), snapshot));
        self.placement = FormPlacement::Inline { row: id.clone() };
        debug!(campaign = %id, "edit started");

        transition.push(Step::DetachForm);
        transition.push(Step::InsertStagingRow { after: id.clone() });
        transition.push(Step::AttachFormToStagingRow);
        transition.push(Step::FadeOut {
            target: Element::Row(id.clone()),
        });
        transition.push(Step::SetFormMode {
            mode: form.state().mode,
        });
        transition.push(Step::FadeIn {
            target: Element::Form,
        });
        Ok(transition)
    }

    /// Close the form and rewrite the row from server-confirmed values.
    pub fn save(&mut self, confirmed: CampaignRow) -> Result<Transition> {
        self.update_campaign(confirmed)
    }

    pub fn update_campaign(&mut self, campaign: CampaignRow) -> Result<Transition> {
        let index = self.index_of(&campaign.id)?;
        let mut transition = self.cancel_edit();
        let id = campaign.id.clone();

        self.rows[index] = TableRow::new(campaign);
        self.set_up_campaigns();
        transition.push(Step::RefreshRow { id });
        Ok(transition)
    }

    /// Append a campaign the server just created.
    pub fn new_campaign(&mut self, campaign: CampaignRow) -> Result<Transition> {
        if self.row(&campaign.id).is_some() {
            return Err(Error::InvalidOperation(format!(
                "campaign '{}' is already in the table",
                campaign.id
            )));
        }

        let mut transition = self.cancel_edit();
        let id = campaign.id.clone();
        self.rows.push(TableRow::new(campaign));

        transition.push(Step::Hide {
            target: Element::TableErrors,
        });
        transition.push(Step::Show {
            target: Element::Table,
        });
        transition.push(Step::InsertRow { id });
        let transition = transition.chain(self.check_number_of_campaigns().transition());
        self.set_up_campaigns();
        Ok(transition)
    }

    // --------------------------------------------------------
    // Row buttons
    // --------------------------------------------------------

    pub fn delete(&mut self, id: &CampaignId, backend: &dyn CampaignBackend) -> Result<Transition> {
        let index = self.require(id, RowAction::Delete)?;

        let mut transition = Transition::new();
        if self.session.as_ref().is_some_and(|s| s.row() == id) {
            transition = self.cancel_edit();
        }

        info!(campaign = %id, "deleting campaign");
        backend.delete_campaign(self.request(id));
        self.rows.remove(index);

        transition.push(Step::RemoveRow { id: id.clone() });
        Ok(transition.chain(self.check_number_of_campaigns().transition()))
    }

    pub fn free(&mut self, id: &CampaignId, backend: &dyn CampaignBackend) -> Result<Transition> {
        let index = self.require(id, RowAction::Free)?;

        info!(campaign = %id, "marking campaign free");
        backend.mark_free(self.request(id));

        let row = &mut self.rows[index];
        row.campaign.free_requested = true;
        if let Some(controls) = row.controls.as_mut() {
            controls.hide_free();
        }
        Ok(Transition::new().then(Step::FadeOut {
            target: Element::FreeControl(id.clone()),
        }))
    }

    pub fn pay(&self, id: &CampaignId) -> Result<Navigation> {
        let index = self.require(id, RowAction::Pay)?;
        let url = self.rows[index].campaign.flags.pay_url.clone();
        Self::navigate(id, url, "pay_url")
    }

    pub fn view(&self, id: &CampaignId) -> Result<Navigation> {
        let index = self.require(id, RowAction::ViewLive)?;
        let url = self.rows[index].campaign.flags.view_live_url.clone();
        Self::navigate(id, url, "view_live_url")
    }

    fn navigate(id: &CampaignId, url: Option<String>, field: &'static str) -> Result<Navigation> {
        match url.filter(|u| !u.is_empty()) {
            Some(url) => Ok(Navigation {
                campaign: id.clone(),
                url,
            }),
            None => Err(Error::MissingUrl {
                campaign: id.clone(),
                field,
            }),
        }
    }
}
