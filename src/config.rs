use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use dotenvy::dotenv;
use tracing::Level;

#[derive(Clone, Debug)]
pub struct Config {
    pub snapshot_path: PathBuf,
    pub changes_path: PathBuf,
    /// Result JSON goes to stdout when unset.
    pub output_path: Option<PathBuf>,

    // Logging
    pub log_dir: String,
    pub log_level: Level,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        let log_level = env::var("LOG_LEVEL")
            .unwrap_or_else(|_| "info".to_string())
            .parse::<Level>()
            .context("LOG_LEVEL must be one of trace, debug, info, warn, error")?;

        Ok(Self {
            snapshot_path: env::var("SNAPSHOT_PATH")
                .context("SNAPSHOT_PATH must be set")?
                .into(),
            changes_path: env::var("CHANGES_PATH")
                .context("CHANGES_PATH must be set")?
                .into(),
            output_path: env::var("OUTPUT_PATH").ok().map(PathBuf::from),
            log_dir: env::var("LOG_DIR").unwrap_or_else(|_| "logs".to_string()),
            log_level,
        })
    }
}
