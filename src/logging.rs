//! File-only tracing setup.
//!
//! The TUI owns stdout, so log events go to
//! `<log dir>/<session>/picture-quiz.log` and nowhere else.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

pub const LOG_FILE_NAME: &str = "picture-quiz.log";

/// Install the global subscriber. Returns the log file path.
///
/// `log_dir` overrides the platform cache directory. The filter comes from
/// `RUST_LOG`, defaulting to `info`.
pub fn setup_logging(log_dir: Option<&Path>) -> Result<PathBuf> {
    let base = log_dir
        .map(Path::to_path_buf)
        .unwrap_or_else(default_log_directory);
    let session_dir = base.join(session_id());
    std::fs::create_dir_all(&session_dir)
        .with_context(|| format!("creating log directory {}", session_dir.display()))?;

    let file_appender = tracing_appender::rolling::never(&session_dir, LOG_FILE_NAME);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("installing tracing subscriber")?;

    // The writer thread must outlive main; leaking the guard keeps it alive.
    std::mem::forget(guard);

    let path = session_dir.join(LOG_FILE_NAME);
    tracing::info!(path = %path.display(), "logging initialized");
    Ok(path)
}

fn session_id() -> String {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    format!("session_{secs}")
}

/// Platform cache directory for logs, falling back to `./logs`.
pub fn default_log_directory() -> PathBuf {
    cache_home()
        .map(|dir| dir.join("picture-quiz").join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"))
}

#[cfg(target_os = "macos")]
fn cache_home() -> Option<PathBuf> {
    std::env::var_os("HOME").map(|home| PathBuf::from(home).join("Library").join("Caches"))
}

#[cfg(target_os = "windows")]
fn cache_home() -> Option<PathBuf> {
    std::env::var_os("LOCALAPPDATA").map(PathBuf::from)
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn cache_home() -> Option<PathBuf> {
    std::env::var_os("XDG_CACHE_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".cache")))
}
