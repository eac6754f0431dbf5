use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use minbar::app::AppContext;
use minbar::cli::{commands, Cli, Commands};
use minbar::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;
    let ctx = AppContext::new(config)?;

    match cli.command {
        Commands::Surahs { json } => {
            commands::list_surahs(&ctx, json).await?;
        }
        Commands::Surah { number } => {
            commands::show_surah(&ctx, number).await?;
        }
        Commands::News { open } => {
            commands::show_news(&ctx, open).await?;
        }
        Commands::Play { surah, ayah } => {
            commands::play_ayah(&ctx, surah, ayah).await?;
        }
    }

    Ok(())
}
