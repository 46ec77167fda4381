/// Tracing setup. The terminal is in raw mode while playing, so logs only go to a file.
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

/// Install a fmt subscriber writing to `log_file`. Without a file nothing is installed.
///
/// `filter` uses `EnvFilter` syntax; when absent, `RUST_LOG` is consulted and
/// then `info` is used.
pub fn init(log_file: Option<&Path>, filter: Option<&str>) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let filter = build_filter(filter)?;
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("failed to install tracing subscriber: {e}"))
}

fn build_filter(filter: Option<&str>) -> Result<EnvFilter> {
    match filter {
        Some(directives) => EnvFilter::try_new(directives)
            .with_context(|| format!("invalid log filter '{directives}'")),
        None => Ok(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))),
    }
}
