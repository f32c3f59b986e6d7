use crate::context::ExecutionContext;
use crate::presentation::presenters;
use crate::presentation::{Badge, CommandOutput, ConsoleRenderer, NextStep, Renderer};
use anyhow::Result;
use promo_runtime::Config;

pub fn show(ctx: &ExecutionContext) -> Result<()> {
    let config = ctx.config()?;
    let vm = presenters::present_config(config, &ctx.config_path());

    let mut result = CommandOutput::new(vm);
    if config.link_id.is_none() {
        result = result.then(NextStep::run(
            "Set the promoted link",
            "promo config init --link-id <fullname>",
        ));
    }

    ConsoleRenderer::new(ctx.json_mode()).render(result)
}

pub fn init(
    ctx: &ExecutionContext,
    link_id: String,
    base_url: Option<String>,
    max_campaigns: Option<usize>,
    force: bool,
) -> Result<()> {
    let path = ctx.config_path();
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite it.",
            path.display()
        );
    }

    let mut config = Config {
        link_id: Some(link_id),
        ..Default::default()
    };
    config.backend.base_url = base_url;
    if let Some(max) = max_campaigns {
        config.limits.max_campaigns = max;
    }
    config.validate()?;
    config.save_to(&path)?;
    tracing::info!(path = %path.display(), "config written");

    let vm = presenters::present_config(&config, &path);
    let result = CommandOutput::new(vm)
        .with_badge(Badge::done("Config saved"))
        .then(NextStep::run(
            "Add a campaign",
            "promo campaign new --start <date> --end <date> --bid <dollars>",
        ));

    ConsoleRenderer::new(ctx.json_mode()).render(result)
}
