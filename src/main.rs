use anyhow::Context;
use clap::Parser;

use sampleapp::cli::Cli;
use sampleapp::config::Config;
use sampleapp::logging::init_tracing;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load configuration")?;
    cli.apply(&mut config);
    config.validate()?;

    let log_path = init_tracing(&config.logging)?;
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        log = %log_path.display(),
        "starting"
    );

    sampleapp::ui::run(&config)?;
    Ok(())
}
