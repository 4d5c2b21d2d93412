use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use recap::app::AppContext;
use recap::cli::{commands, Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let ctx = AppContext::new()?;

    match cli.command {
        Commands::Summarize {
            url,
            format,
            output,
        } => {
            commands::summarize(&ctx, &url, format, output).await?;
        }
        Commands::Tui => {
            recap::tui::run(Arc::new(ctx)).await?;
        }
        Commands::Theme { toggle } => {
            commands::theme(&ctx, toggle)?;
        }
    }

    Ok(())
}
