//! Logging setup
//!
//! The TUI owns the terminal, so all tracing output goes to
//! `<isostudy dir>/isostudy.log`. Previous logs are rotated on startup.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, EnvFilter};

/// Historical log files kept (isostudy.log.1 through isostudy.log.3)
const MAX_LOG_FILES: u8 = 3;

/// Initialize file logging in `dir`
///
/// Level defaults to INFO and can be changed with `RUST_LOG`.
pub fn init_logging(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;
    rotate_logs(&crate::config::log_file(dir))?;

    // Rotation is handled above, once per run
    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix("isostudy")
        .filename_suffix("log")
        .build(dir)
        .context("Failed to open log file")?;

    let subscriber = fmt()
        .with_writer(file_appender)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to install tracing subscriber")?;

    tracing::info!("isostudy v{} started", env!("CARGO_PKG_VERSION"));
    Ok(())
}

/// Shift isostudy.log -> .1 -> .2 -> .3, dropping the oldest
fn rotate_logs(log_path: &Path) -> Result<()> {
    if !log_path.exists() {
        return Ok(());
    }

    let dir = log_path.parent().context("Invalid log path")?;
    let name = log_path
        .file_name()
        .context("Invalid log filename")?
        .to_string_lossy();

    let oldest = dir.join(format!("{name}.{MAX_LOG_FILES}"));
    if oldest.exists() {
        fs::remove_file(&oldest)?;
    }

    for i in (1..MAX_LOG_FILES).rev() {
        let current = dir.join(format!("{name}.{i}"));
        if current.exists() {
            fs::rename(&current, dir.join(format!("{name}.{}", i + 1)))?;
        }
    }

    fs::rename(log_path, dir.join(format!("{name}.1")))?;
    Ok(())
}
