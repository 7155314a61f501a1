//! File logging for the terminal client.
//!
//! The TUI owns stdout/stderr, so tracing output goes to
//! `<cache dir>/logs/<session>/client.log` only.
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Install the global subscriber. Returns the log file path.
pub fn setup_logging(session_id: Option<&str>) -> Result<PathBuf> {
    let session_id = session_id
        .map(str::to_owned)
        .unwrap_or_else(default_session_id);

    let session_log_dir = log_directory().join(&session_id);
    std::fs::create_dir_all(&session_log_dir).with_context(|| {
        format!(
            "failed to create log directory {}",
            session_log_dir.display()
        )
    })?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, "client.log");
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
        .context("a global tracing subscriber is already installed")?;

    // Keep the writer thread alive for the rest of the process.
    std::mem::forget(guard);

    let log_file = session_log_dir.join("client.log");
    tracing::info!(session = %session_id, file = %log_file.display(), "Logging initialized");

    Ok(log_file)
}

/// Platform cache directory for logs, e.g. `~/.cache/simon/logs` on Linux.
pub fn log_directory() -> PathBuf {
    directories::ProjectDirs::from("", "", "simon")
        .map(|dirs| dirs.cache_dir().join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join("simon").join("logs"))
}

fn default_session_id() -> String {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default();
    format!("session_{secs}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logs_live_under_a_simon_directory() {
        let dir = log_directory();
        assert!(dir.ends_with("logs"));
        assert!(dir.to_string_lossy().to_lowercase().contains("simon"));
    }

    #[test]
    fn default_session_ids_are_prefixed() {
        assert!(default_session_id().starts_with("session_"));
    }
}
