//! Visual transitions as explicit step lists.
//!
//! Table operations update the model immediately and return a [`Transition`]
//! describing what the page has to do (fades, row insertion, moving the shared
//! form). A [`Surface`] applies the steps in order and receives a single
//! `done` once the last step has been applied.

use crate::Result;
use crate::form::FormMode;
use promo_types::CampaignId;
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "element", content = "id", rename_all = "snake_case")]
pub enum Element {
    Form,
    Table,
    Row(CampaignId),
    StagingRow,
    /// Per-row free control in the price cell.
    FreeControl(CampaignId),
    /// Errors rendered above the table.
    TableErrors,
    TooManyCampaignsError,
    NewCampaignButton,
    TargetingFields,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum Step {
    FadeIn { target: Element },
    FadeOut { target: Element },
    Show { target: Element },
    Hide { target: Element },
    SlideDown { target: Element },
    SlideUp { target: Element },
    Enable { target: Element },
    Disable { target: Element },
    /// Take the shared form out of the page.
    DetachForm,
    /// Put the form back above the table.
    AttachFormAboveTable,
    /// New single-cell row directly below `after`.
    InsertStagingRow { after: CampaignId },
    AttachFormToStagingRow,
    RemoveStagingRow,
    /// Swap the create/save button.
    SetFormMode { mode: FormMode },
    InsertRow { id: CampaignId },
    RemoveRow { id: CampaignId },
    /// Rewrite visible cells and hidden fields, then rebuild controls.
    RefreshRow { id: CampaignId },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Transition {
    steps: Vec<Step>,
}

impl Transition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn then(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }

    pub fn push(&mut self, step: Step) {
        self.steps.push(step);
    }

    /// Append `next` so it starts after the last step of `self`.
    pub fn chain(mut self, next: Transition) -> Self {
        self.steps.extend(next.steps);
        self
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }
}

/// Whatever renders the table: a browser binding, a TUI, a log.
pub trait Surface {
    fn apply(&mut self, step: &Step) -> Result<()>;

    /// Called exactly once after every step has been applied.
    fn done(&mut self) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completed {
    pub steps: usize,
}

pub struct TransitionRunner;

impl TransitionRunner {
    /// Apply steps in order, stopping at the first failure.
    ///
    /// `done` fires only when the whole transition went through.
    pub fn run<S: Surface + ?Sized>(transition: &Transition, surface: &mut S) -> Result<Completed> {
        for step in transition.steps() {
            surface.apply(step)?;
        }
        surface.done();
        Ok(Completed {
            steps: transition.len(),
        })
    }
}

/// Surface that logs every step at debug level.
#[derive(Debug, Default)]
pub struct LogSurface {
    applied: usize,
}

impl LogSurface {
    pub fn applied(&self) -> usize {
        self.applied
    }
}

impl Surface for LogSurface {
    fn apply(&mut self, step: &Step) -> Result<()> {
        self.applied += 1;
        debug!(?step, "transition step");
        Ok(())
    }

    fn done(&mut self) {
        debug!(steps = self.applied, "transition done");
    }
}
