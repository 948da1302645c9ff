use std::fs::File;
use std::io::BufReader;

use anyhow::Context;
use cadence_app::cli::{Args, run};
use cadence_core::config::load_config;
use cadence_core::constants::DEFAULT_LOG_LEVEL;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new(DEFAULT_LOG_LEVEL));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    let args = Args::parse();

    let config = load_config(args.config.as_deref())?;

    tracing::debug!(config = ?config, "Configuration loaded");

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(
            level = %config.logging.level,
            "Invalid log level in config, keeping {DEFAULT_LOG_LEVEL}"
        );
    }

    let stdout = std::io::stdout().lock();

    match &args.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open event file {}", path.display()))?;
            run(&args, &config, BufReader::new(file), stdout)?;
        }
        None => run(&args, &config, std::io::stdin().lock(), stdout)?,
    }

    Ok(())
}
