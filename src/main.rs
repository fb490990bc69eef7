//! countdown - a keyboard-driven countdown timer for the terminal.

use anyhow::Context;
use bubbletea_rs::Program;
use countdown_tea::{config, logging, view, Config};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    logging::init(&config)?;

    info!(
        duration = config.duration,
        interval_ms = config.interval_ms,
        sound = !config.no_sound,
        "starting countdown"
    );
    config::install(config);

    let program = Program::<view::Model>::builder()
        .alt_screen(true)
        .build()
        .context("failed to set up terminal program")?;
    program.run().await.context("timer exited with an error")?;

    info!("countdown closed");
    Ok(())
}
