//! Tracing setup for the `iconpull` binary.
//!
//! Events go to `$XDG_STATE_HOME/iconpull/iconpull.log` (appended across
//! runs). `RUST_LOG` overrides [`DEFAULT_FILTER`].

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

/// Per-page and per-asset detail from this crate and the CLI, `info` elsewhere.
pub const DEFAULT_FILTER: &str = "info,iconpull_core=debug,iconpull=debug";

const LOG_FILE_NAME: &str = "iconpull.log";

/// Log to the state-dir file. An error leaves no subscriber installed, so the
/// caller can still use [`init_logging_stderr`].
pub fn init_logging() -> Result<PathBuf> {
    let state_dir = xdg::BaseDirectories::with_prefix("iconpull")?.get_state_home();
    let (path, file) = open_log_file(&state_dir)?;
    install(BoxMakeWriter::new(Arc::new(file)))?;
    tracing::info!(log = %path.display(), "iconpull logging initialized");
    Ok(path)
}

/// Log to stderr. Silently does nothing if a subscriber is already set.
pub fn init_logging_stderr() {
    let _ = install(BoxMakeWriter::new(std::io::stderr));
}

fn open_log_file(state_dir: &Path) -> Result<(PathBuf, fs::File)> {
    fs::create_dir_all(state_dir)
        .with_context(|| format!("failed to create log dir {}", state_dir.display()))?;
    let path = state_dir.join(LOG_FILE_NAME);
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;
    Ok((path, file))
}

fn install(writer: BoxMakeWriter) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("tracing init: {e}"))
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}
