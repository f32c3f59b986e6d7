pub mod campaign;
pub mod config;
pub mod export;
pub mod forecast;
pub mod quote;

use crate::args::DraftArgs;
use anyhow::Result;
use promo_runtime::FormController;
use promo_types::Cpm;

/// Feed a draft into the form the way the page does: dates, bid, price,
/// then the targeting toggle, then a full revalidation.
pub(crate) fn fill_form(form: &mut FormController, draft: &DraftArgs) -> Result<bool> {
    form.set_start_date(&draft.start);
    form.set_end_date(&draft.end);
    form.set_bid(&draft.bid);
    if let Some(cents) = draft.cpm {
        form.set_cpm(Cpm::from_cents(cents)?);
    }
    if let Some(target) = &draft.target {
        form.toggle_targeting_fields(true);
        form.set_subreddit(target)?;
    }
    Ok(form.revalidate())
}
