//! Tribunal Engine - Main entry point.

use std::io;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tribunal_engine::api::terminal;
use tribunal_engine::infrastructure::config::{load_dotenv_from, EngineConfig};
use tribunal_engine::App;

fn main() -> anyhow::Result<()> {
    // Local overrides first, then shared defaults.
    let cwd = std::env::current_dir().context("Failed to read the working directory")?;
    load_dotenv_from(&cwd);

    // Logs go to stderr; stdout carries the screens.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tribunal_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    tracing::info!("Starting Tribunal Engine");

    let config = EngineConfig::from_env().context("Invalid configuration")?;
    tracing::info!(
        content_path = ?config.content_path,
        output = %config.output,
        "Configuration loaded"
    );

    let mut app = App::from_config(&config).context("Failed to load content")?;

    let stdin = io::stdin();
    terminal::run(&mut app.session, stdin.lock(), io::stdout().lock(), app.output)
        .context("Terminal I/O failed")?;

    tracing::info!(playthrough_id = %app.session.id(), "Court adjourned");
    Ok(())
}
