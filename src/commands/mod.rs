//! Command implementations for the mls-data CLI

pub mod parse_rosters;
pub mod scrape_stats;


use std::path::PathBuf;

use crate::{stats::browser::DEFAULT_DEBUGGER_URL, DATA_DIR_ENV_VAR, DEBUGGER_URL_ENV_VAR, DEFAULT_DATA_DIR};

/// Resolve the data directory from option, environment variable, or default.
pub fn resolve_data_dir(dir: Option<PathBuf>) -> PathBuf {
    dir.or_else(|| {
        std::env::var(DATA_DIR_ENV_VAR)
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
    })
    .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR))
}

/// Resolve the remote-debugging endpoint from option, environment variable,
/// or default.
pub fn resolve_debugger_url(url: Option<String>) -> String {
    url.or_else(|| {
        std::env::var(DEBUGGER_URL_ENV_VAR)
            .ok()
            .filter(|s| !s.trim().is_empty())
    })
    .unwrap_or_else(|| DEFAULT_DEBUGGER_URL.to_string())
}
