use super::fill_form;
use crate::args::DraftArgs;
use crate::context::ExecutionContext;
use crate::presentation::presenters;
use crate::presentation::{Badge, CommandOutput, ConsoleRenderer, NextStep, Renderer};
use anyhow::{Result, anyhow};
use promo_runtime::{
    Board, CampaignBackend, CreateOutcome, FormController, HttpBackend, LogSurface,
    OfflineBackend, Transition, TransitionRunner,
};
use promo_types::{CampaignFlags, CampaignId, Cpm, Speed};
use tokio::runtime::Runtime;

/// Optional field changes for `campaign edit`.
pub struct EditChanges {
    pub start: Option<String>,
    pub end: Option<String>,
    pub bid: Option<String>,
    pub cpm: Option<u32>,
    pub target: Option<String>,
    pub sitewide: bool,
}

fn parse_id(id: &str) -> Result<CampaignId> {
    Ok(CampaignId::parse(id)?)
}

fn play(transition: &Transition) -> Result<usize> {
    let mut surface = LogSurface::default();
    Ok(TransitionRunner::run(transition, &mut surface)?.steps)
}

/// Run `f` against the HTTP backend when one is configured, else offline.
/// Outstanding requests are drained before returning.
fn with_backend<R>(
    ctx: &ExecutionContext,
    runtime: &Runtime,
    f: impl FnOnce(&dyn CampaignBackend) -> Result<R>,
) -> Result<R> {
    let config = ctx.config()?;
    if config.backend.base_url.is_none() {
        return f(&OfflineBackend);
    }

    let backend = {
        let _guard = runtime.enter();
        HttpBackend::new(&config.backend)?
    };
    let result = f(&backend);
    runtime.block_on(backend.drain());
    result
}

fn submit_problems(form: &FormController) -> String {
    presenters::present_quote(form.state(), form.policy())
        .problems
        .join("; ")
}

pub fn list(ctx: &ExecutionContext) -> Result<()> {
    let table = ctx.load_table()?;
    let vm = presenters::present_campaign_list(&table);

    let mut result = CommandOutput::new(vm);
    if table.is_empty() {
        result = result.then(NextStep::run(
            "Create the first campaign",
            "promo campaign new --start <date> --end <date> --bid <dollars>",
        ));
    } else {
        let limit = table.check_number_of_campaigns();
        if limit.reached {
            result = result.with_badge(Badge::limit_reached(limit.max));
        }
    }

    ConsoleRenderer::new(ctx.json_mode()).render(result)
}

pub fn new(ctx: &ExecutionContext, draft: &DraftArgs, speed: &str) -> Result<()> {
    let mut table = ctx.load_table()?;
    let mut form = ctx.form()?;

    let opened = match table.create(&mut form) {
        CreateOutcome::Opened(transition) => transition,
        CreateOutcome::LimitReached { limit, transition } => {
            play(&transition)?;
            return Err(anyhow!(
                "You can only have {} campaigns for this link ({} exist).",
                limit.max,
                limit.count
            ));
        }
    };
    play(&opened)?;

    form.set_speed(Speed::new(speed));
    if !fill_form(&mut form, draft)? {
        return Err(anyhow!("Campaign rejected: {}", submit_problems(&form)));
    }

    let id = Board::from_table(&table).next_id();
    let row = form.build_row(Some(id.clone()), CampaignFlags::default())?;
    let steps = play(&table.new_campaign(row)?)?;
    ctx.save_table(&table)?;

    let vm = presenters::present_campaign_action("new", &id, &table, steps);
    let result = CommandOutput::new(vm)
        .with_badge(Badge::done(format!("Created campaign {}", id)))
        .then(NextStep::run("Pay for it", format!("promo campaign pay {}", id)));

    ConsoleRenderer::new(ctx.json_mode()).render(result)
}

pub fn edit(ctx: &ExecutionContext, id: &str, changes: EditChanges) -> Result<()> {
    let id = parse_id(id)?;
    let mut table = ctx.load_table()?;
    let mut form = ctx.form()?;

    play(&table.edit(&id, &mut form)?)?;
    let flags = table
        .row(&id)
        .map(|r| r.campaign.flags.clone())
        .unwrap_or_default();

    if let Some(start) = &changes.start {
        form.set_start_date(start);
    }
    if let Some(end) = &changes.end {
        form.set_end_date(end);
    }
    if let Some(bid) = &changes.bid {
        form.set_bid(bid);
    }
    if let Some(cents) = changes.cpm {
        form.set_cpm(Cpm::from_cents(cents)?);
    }
    if changes.sitewide {
        play(&form.toggle_targeting_fields(false))?;
    } else if let Some(target) = &changes.target {
        play(&form.toggle_targeting_fields(true))?;
        form.set_subreddit(target)?;
    }

    let dirty = table
        .session()
        .is_some_and(|session| session.is_dirty(form.fields()));
    if !dirty {
        play(&table.cancel())?;
        let vm = presenters::present_campaign_action("edit", &id, &table, 0);
        let result = CommandOutput::new(vm).with_badge(Badge::unchanged());
        return ConsoleRenderer::new(ctx.json_mode()).render(result);
    }

    if !form.revalidate() {
        return Err(anyhow!("Changes rejected: {}", submit_problems(&form)));
    }

    let row = form.build_row(None, flags)?;
    let steps = play(&table.save(row)?)?;
    ctx.save_table(&table)?;

    let vm = presenters::present_campaign_action("edit", &id, &table, steps);
    let result = CommandOutput::new(vm)
        .with_badge(Badge::done(format!("Saved campaign {}", id)));

    ConsoleRenderer::new(ctx.json_mode()).render(result)
}

pub fn delete(ctx: &ExecutionContext, runtime: &Runtime, id: &str) -> Result<()> {
    let id = parse_id(id)?;
    let mut table = ctx.load_table()?;

    let transition = with_backend(ctx, runtime, |backend| Ok(table.delete(&id, backend)?))?;
    let steps = play(&transition)?;
    ctx.save_table(&table)?;

    let vm = presenters::present_campaign_action("delete", &id, &table, steps);
    let result = CommandOutput::new(vm)
        .with_badge(Badge::done(format!("Deleted campaign {}", id)));

    ConsoleRenderer::new(ctx.json_mode()).render(result)
}

pub fn free(ctx: &ExecutionContext, runtime: &Runtime, id: &str) -> Result<()> {
    let id = parse_id(id)?;
    let mut table = ctx.load_table()?;

    let transition = with_backend(ctx, runtime, |backend| Ok(table.free(&id, backend)?))?;
    let steps = play(&transition)?;
    ctx.save_table(&table)?;

    let vm = presenters::present_campaign_action("free", &id, &table, steps);
    let result = CommandOutput::new(vm)
        .with_badge(Badge::done(format!("Requested freebie for {}", id)));

    ConsoleRenderer::new(ctx.json_mode()).render(result)
}

pub fn pay(ctx: &ExecutionContext, id: &str) -> Result<()> {
    let table = ctx.load_table()?;
    let navigation = table.pay(&parse_id(id)?)?;
    let result = CommandOutput::new(presenters::present_navigation(navigation));
    ConsoleRenderer::new(ctx.json_mode()).render(result)
}

pub fn view(ctx: &ExecutionContext, id: &str) -> Result<()> {
    let table = ctx.load_table()?;
    let navigation = table.view(&parse_id(id)?)?;
    let result = CommandOutput::new(presenters::present_navigation(navigation));
    ConsoleRenderer::new(ctx.json_mode()).render(result)
}
