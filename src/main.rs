//! diskusage — per-folder disk usage report.
//!
//! Thin binary entry point. All logic lives in the `diskusage-core` crate.

mod cli;

use anyhow::Context;
use clap::Parser;
use cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries only the progress announcements.
    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(std::io::stderr)
        .init();

    let config = cli.run_config();
    tracing::debug!("Starting with {config:?}");

    diskusage_core::run(&config, &mut std::io::stdout())
        .with_context(|| format!("disk usage report for {} failed", config.base_path.display()))?;

    Ok(())
}
