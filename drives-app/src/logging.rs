// SPDX-License-Identifier: GPL-3.0-only

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::{Duration, SystemTime};

use anyhow::Context;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::Config;

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

const APP_DIR: &str = "jupyter-drives";
const DEFAULT_LOG_PREFIX: &str = "drive-panels.log";
const KEEP_DAYS: u64 = 7;

/// Install the global subscriber: stdout always, a daily-rolling file when
/// `log_to_disk` is set. `RUST_LOG` overrides the configured level.
pub fn init(config: &Config) {
    let level = config.log_level.as_directive();
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "warn,drive_panels={level},drives_types={level}"
        ))
    });

    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true);

    if !config.log_to_disk {
        let _ = tracing_subscriber::registry()
            .with(env_filter)
            .with(stdout_layer)
            .try_init();
        return;
    }

    match file_writer() {
        Ok((writer, guard)) => {
            let file_layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_target(true)
                .with_ansi(false);

            let _ = tracing_subscriber::registry()
                .with(env_filter)
                .with(stdout_layer)
                .with(file_layer)
                .try_init();

            // Keep the background writer alive for the duration of the process.
            let _ = LOG_GUARD.set(guard);
        }
        Err(e) => {
            eprintln!("drive-panels: failed to initialize file logging: {e:#}");
            let _ = tracing_subscriber::registry()
                .with(env_filter)
                .with(stdout_layer)
                .try_init();
        }
    }
}

fn file_writer() -> anyhow::Result<(NonBlocking, WorkerGuard)> {
    let (dir, prefix) = resolve_log_location();

    fs::create_dir_all(&dir)
        .with_context(|| format!("create log directory failed: {}", dir.display()))?;

    cleanup_old_logs(&dir, &prefix, KEEP_DAYS);

    let appender = tracing_appender::rolling::daily(&dir, &prefix);
    Ok(tracing_appender::non_blocking(appender))
}

fn resolve_log_location() -> (PathBuf, OsString) {
    if let Some(file) = std::env::var_os("JUPYTER_DRIVES_LOG_FILE") {
        let path = PathBuf::from(file);
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(default_log_dir);
        let prefix = path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from(DEFAULT_LOG_PREFIX));
        return (dir, prefix);
    }

    if let Some(dir) = std::env::var_os("JUPYTER_DRIVES_LOG_DIR") {
        return (PathBuf::from(dir), OsString::from(DEFAULT_LOG_PREFIX));
    }

    (default_log_dir(), OsString::from(DEFAULT_LOG_PREFIX))
}

fn default_log_dir() -> PathBuf {
    if let Some(xdg_state) = std::env::var_os("XDG_STATE_HOME") {
        return PathBuf::from(xdg_state).join(APP_DIR).join("logs");
    }

    if let Some(home) = std::env::var_os("HOME") {
        return PathBuf::from(home)
            .join(".local")
            .join("state")
            .join(APP_DIR)
            .join("logs");
    }

    std::env::temp_dir().join(APP_DIR).join("logs")
}

/// Remove rolled log files under `dir` older than `keep_days`. Returns how
/// many were removed.
fn cleanup_old_logs(dir: &Path, prefix: &OsString, keep_days: u64) -> usize {
    let Some(cutoff) =
        SystemTime::now().checked_sub(Duration::from_secs(keep_days * 24 * 60 * 60))
    else {
        return 0;
    };
    let prefix = prefix.to_string_lossy();

    let Ok(entries) = fs::read_dir(dir) else {
        return 0;
    };

    let mut removed = 0;
    for entry in entries.flatten() {
        let Ok(file_type) = entry.file_type() else {
            continue;
        };
        if !file_type.is_file() {
            continue;
        }

        // Only touch files created by our rolling appender.
        if !entry
            .file_name()
            .to_string_lossy()
            .starts_with(prefix.as_ref())
        {
            continue;
        }

        let modified = entry.metadata().and_then(|m| m.modified());
        if matches!(modified, Ok(modified) if modified < cutoff)
            && fs::remove_file(entry.path()).is_ok()
        {
            removed += 1;
        }
    }
    removed
}
