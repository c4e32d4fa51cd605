//! Application configuration and logging setup.

use std::fs::OpenOptions;

use anyhow::{Context, Result};
use log::LevelFilter;

use crate::core::SessionConfig;

/// Everything the binary reads from its environment.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppConfig {
    pub session: SessionConfig,
    /// File that receives log output. The terminal belongs to the menu, so
    /// logs never go there unless `RUST_LOG` asks for it.
    pub log_path: Option<String>,
}

impl AppConfig {
    /// Create from environment variables
    ///
    /// See [`SessionConfig::from_env`]; additionally `PIECE_RESERVE_LOG_PATH`.
    pub fn from_env() -> Self {
        let log_path = std::env::var("PIECE_RESERVE_LOG_PATH")
            .ok()
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            session: SessionConfig::from_env(),
            log_path,
        }
    }
}

/// Install the global logger.
///
/// With a log path, `info` and above is appended to that file (`RUST_LOG`
/// still overrides the level). Without one, logging is off unless `RUST_LOG`
/// is set.
pub fn init_logging(log_path: Option<&str>) -> Result<()> {
    let mut builder = env_logger::Builder::new();

    match log_path {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file {path}"))?;
            builder
                .filter_level(LevelFilter::Info)
                .parse_default_env()
                .target(env_logger::Target::Pipe(Box::new(file)));
        }
        None => {
            builder.filter_level(LevelFilter::Off).parse_default_env();
        }
    }

    builder.try_init().context("logger already initialised")?;
    Ok(())
}
