use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use nafham_core::phrasebook::Phrasebook;
use nafham_lang_arabic::ArabicPhrasebookLoader;
use tokio::signal;
use tracing_subscriber::EnvFilter;

mod cli;
mod controller;
mod events;
mod input;
mod oneshot;
mod profile;
mod render;
mod state;
mod ui;

#[cfg(test)]
mod tests;

use self::cli::Args;
use self::controller::AppController;
use self::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    init_tracing(args.log_json);

    let config = profile::load_config(&args)?;
    let phrasebook = ArabicPhrasebookLoader::load_all(
        config.phrasebook.embedded,
        &config.phrasebook.additional_paths,
    )
    .context("failed to load phrasebook")?;

    let meta = phrasebook.metadata();
    tracing::info!(
        "Phrasebook '{}' v{} ready: {} entries",
        meta.name,
        meta.version,
        meta.entry_count
    );

    let state = Arc::new(AppState::new(config, phrasebook.shared()));

    if let Some(query) = &args.query {
        let output = oneshot::run_once(&state, query, args.json).await?;
        print!("{output}");
        return Ok(());
    }

    let controller = AppController::new(state);
    let mut tasks = controller.spawn_tasks();

    let drain = async {
        while let Some(result) = tasks.join_next().await {
            match result {
                Ok(Ok(())) => tracing::debug!("task exited"),
                Ok(Err(e)) => tracing::error!("task failed: {e}"),
                Err(e) => tracing::error!("task panicked: {e}"),
            }
        }
    };

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
        }
        _ = drain => {}
    }

    controller.shutdown();
    Ok(())
}

/// Logs go to stderr; stdout carries results only
fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    if json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}
