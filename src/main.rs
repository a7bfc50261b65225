use std::fs;
use std::io::{self, Write};

use anyhow::{Context, Result};
use dotenvy::dotenv;
use tracing::{error, info};
use tracing_appender::rolling;

use tippool::calc::period::calculate_period_totals;
use tippool::source::{JsonFileSource, SnapshotSource, load_changes};
use tippool::{ApplyResult, apply_changes};

mod config;

use config::Config;

fn write_result(config: &Config, result: &ApplyResult) -> Result<()> {
    let json = serde_json::to_string_pretty(result).context("failed to serialize result")?;
    match &config.output_path {
        Some(path) => fs::write(path, json)
            .with_context(|| format!("failed to write result to {}", path.display())),
        None => {
            let mut out = io::stdout().lock();
            writeln!(out, "{json}").context("failed to write result to stdout")
        }
    }
}

fn run(config: &Config) -> Result<()> {
    let snapshot = JsonFileSource::new(&config.snapshot_path).load()?;
    let changes = load_changes(&config.changes_path)?;
    info!(changes = changes.len(), "Applying changes");

    let result = apply_changes(&snapshot, &changes);

    for period_id in &result.affected.periods {
        if let Some(period) = result.next.periods.get(period_id) {
            let totals = calculate_period_totals(period);
            info!(
                period_id = %period_id,
                total_tips = totals.total_tips,
                tips_percent = totals.tips_percent,
                "Period totals"
            );
        }
    }

    write_result(config, &result)
}

fn main() -> Result<()> {
    dotenv().ok();

    let config = Config::from_env()?;

    // Rolling daily log
    let file_appender = rolling::daily(&config.log_dir, "tippool.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(config.log_level)
        .with_ansi(false)
        .with_target(false)
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .init();

    info!(snapshot = %config.snapshot_path.display(), "Recompute starting...");

    if let Err(e) = run(&config) {
        error!(error = %format!("{e:#}"), "Recompute failed");
        return Err(e);
    }

    info!("Recompute finished");
    Ok(())
}
