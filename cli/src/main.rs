//! Stoker CLI - Binary entry point for the worker process.
//!
//! # Architecture
//!
//! ```text
//! main() -> SearchPath::from_current_exe() -> PerformWorkerTask -> run_worker()
//! ```
//!
//! `main` is the only place the task entry point is invoked. Everything else
//! lives in [`stoker_core`] and [`stoker_task`], which are side-effect-free to
//! load; linking them into another binary runs nothing.
//!
//! Errors from path resolution or from the task itself propagate out of
//! `main` unmodified: anyhow prints the chain to stderr and the process exits
//! non-zero. No retry, no suppression, no extra messaging.

use anyhow::Result;
use std::{
    fs::{self, OpenOptions},
    path::PathBuf,
    sync::Mutex,
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use stoker_core::{SearchPath, StokerConfig, run_worker};
use stoker_task::PerformWorkerTask;

fn init_tracing(config: Option<&StokerConfig>) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::try_new("warn").expect("warn filter is valid"));

    let (log_file, init_warnings) = open_stoker_log_file(config);

    if let Some((log_path, file)) = log_file {
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(env_filter)
            .init();

        tracing::info!(path = %log_path.display(), "Logging initialized");
        for warning in init_warnings {
            tracing::warn!("{warning}");
        }
        return;
    }

    // If we can't open a log file, prefer "no logs" over polluting the
    // worker's stdout/stderr.
    tracing_subscriber::registry().with(env_filter).init();
}

fn open_stoker_log_file(
    config: Option<&StokerConfig>,
) -> (Option<(PathBuf, std::fs::File)>, Vec<String>) {
    let candidates = stoker_log_file_candidates(config);
    let mut warnings = Vec::new();

    for candidate in candidates {
        if let Some(parent) = candidate.parent()
            && let Err(e) = fs::create_dir_all(parent)
        {
            warnings.push(format!(
                "Failed to create log dir {}: {e}",
                parent.display()
            ));
            continue;
        }

        match OpenOptions::new()
            .create(true)
            .append(true)
            .open(&candidate)
        {
            Ok(file) => return (Some((candidate, file)), warnings),
            Err(e) => {
                warnings.push(format!(
                    "Failed to open log file {}: {e}",
                    candidate.display()
                ));
            }
        }
    }

    (None, warnings)
}

fn stoker_log_file_candidates(config: Option<&StokerConfig>) -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    // Configured override comes first: [logging] dir = "..."
    if let Some(dir) = config
        .and_then(|cfg| cfg.logging.as_ref())
        .and_then(|logging| logging.dir.clone())
    {
        candidates.push(dir.join("stoker.log"));
    }

    // Default: ~/.stoker/logs/stoker.log
    if let Some(config_path) = StokerConfig::path()
        && let Some(config_dir) = config_path.parent()
    {
        candidates.push(config_dir.join("logs").join("stoker.log"));
    }

    // Fallback: ./.stoker/logs/stoker.log (useful in constrained environments)
    candidates.push(PathBuf::from(".stoker").join("logs").join("stoker.log"));

    candidates
}

fn main() -> Result<()> {
    // Config is ambient (a broken file is tolerated) and loads before tracing
    // so the log directory override can take effect.
    let config = StokerConfig::load().ok().flatten();

    init_tracing(config.as_ref());

    let mut paths = SearchPath::from_current_exe()?;
    if let Some(root) = config
        .as_ref()
        .and_then(|cfg| cfg.worker.as_ref())
        .and_then(|worker| worker.root.clone())
    {
        paths = paths.preferring(root);
    }

    let task = PerformWorkerTask::new(paths);
    run_worker(&task)?;

    Ok(())
}
