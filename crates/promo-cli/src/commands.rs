use super::args::{CampaignCommand, Cli, Commands, ConfigCommand};
use super::context::ExecutionContext;
use super::handlers;
use anyhow::Result;
use clap::CommandFactory;
use promo_runtime::{logging, resolve_data_dir};
use tokio::runtime::Runtime;

pub fn run(cli: Cli) -> Result<()> {
    logging::init(&cli.log_level.to_string());

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
    tracing::debug!(data_dir = %data_dir.display(), "resolved data directory");
    let ctx = ExecutionContext::new(data_dir, cli.format);

    match command {
        Commands::Quote { draft } => handlers::quote::handle(&ctx, &draft),

        Commands::Forecast {
            draft,
            daily_impressions,
        } => {
            let runtime = build_runtime()?;
            handlers::forecast::handle(&ctx, &runtime, &draft, daily_impressions)
        }

        Commands::Campaign { command } => match command {
            CampaignCommand::List => handlers::campaign::list(&ctx),
            CampaignCommand::New { draft, speed } => handlers::campaign::new(&ctx, &draft, &speed),
            CampaignCommand::Edit {
                id,
                start,
                end,
                bid,
                cpm,
                target,
                sitewide,
            } => handlers::campaign::edit(
                &ctx,
                &id,
                handlers::campaign::EditChanges {
                    start,
                    end,
                    bid,
                    cpm,
                    target,
                    sitewide,
                },
            ),
            CampaignCommand::Delete { id } => {
                let runtime = build_runtime()?;
                handlers::campaign::delete(&ctx, &runtime, &id)
            }
            CampaignCommand::Free { id } => {
                let runtime = build_runtime()?;
                handlers::campaign::free(&ctx, &runtime, &id)
            }
            CampaignCommand::Pay { id } => handlers::campaign::pay(&ctx, &id),
            CampaignCommand::View { id } => handlers::campaign::view(&ctx, &id),
            CampaignCommand::Export {
                export_format,
                output,
            } => handlers::export::handle(&ctx, export_format, output),
        },

        Commands::Config { command } => match command {
            ConfigCommand::Show => handlers::config::show(&ctx),
            ConfigCommand::Init {
                link_id,
                base_url,
                max_campaigns,
                force,
            } => handlers::config::init(&ctx, link_id, base_url, max_campaigns, force),
        },
    }
}

fn build_runtime() -> Result<Runtime> {
    Ok(tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?)
}
