//! Log setup. The terminal belongs to the UI, so logs go to a file.

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::io::highlighter_dir;

/// Send `tracing` output to `~/.highlighter/highlighter.log`.
///
/// `RUST_LOG` overrides the default `info` filter.
pub fn init() -> Result<()> {
    let path = highlighter_dir()?.join("highlighter.log");
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| anyhow!("Failed to install logger: {e}"))
}
