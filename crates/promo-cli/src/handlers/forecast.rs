use super::fill_form;
use crate::args::DraftArgs;
use crate::context::ExecutionContext;
use crate::presentation::presenters;
use crate::presentation::{Badge, CommandOutput, ConsoleRenderer, NextStep, Renderer};
use anyhow::{Result, anyhow};
use promo_runtime::{FixedImpressions, HttpBackend, ImpressionSource, ImpressionsCache};
use tokio::runtime::Runtime;

pub fn handle(
    ctx: &ExecutionContext,
    runtime: &Runtime,
    draft: &DraftArgs,
    daily_impressions: Option<u64>,
) -> Result<()> {
    let mut form = ctx.form()?;
    fill_form(&mut form, draft)?;

    let fixed;
    let http;
    let source: &dyn ImpressionSource = match daily_impressions {
        Some(daily) => {
            fixed = FixedImpressions(daily);
            &fixed
        }
        None => {
            let backend = &ctx.config()?.backend;
            if backend.base_url.is_none() {
                return Err(anyhow!(
                    "No backend configured. Pass --daily-impressions or set backend.base_url."
                ));
            }
            let _guard = runtime.enter();
            http = HttpBackend::new(backend)?;
            &http
        }
    };

    let mut cache = ImpressionsCache::new();
    let forecast = runtime.block_on(form.check_inventory(&mut cache, source))?;

    let vm = presenters::present_forecast(form.state(), form.policy(), &forecast);
    let mut result = CommandOutput::new(vm);
    result = if forecast.warning.is_some() {
        result
            .with_badge(Badge::short_inventory())
            .then(NextStep::hint("Extend the duration or change the target"))
    } else {
        result.with_badge(Badge::done("Inventory available"))
    };

    ConsoleRenderer::new(ctx.json_mode()).render(result)
}
