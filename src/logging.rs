//! Log setup.
//!
//! The terminal belongs to the browser, so logs only go to a file.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Install a `tracing` subscriber writing to `log_file`.
///
/// `RUST_LOG` takes precedence over `level` when set. Without a log file no
/// subscriber is installed and events are dropped.
pub fn init(log_file: Option<&Path>, level: &str) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("cannot install logger: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_log_file_is_noop() {
        assert!(init(None, "info").is_ok());
    }

    #[test]
    fn test_unwritable_log_file() {
        let result = init(Some(Path::new("/nonexistent/dir/liberator.log")), "info");
        assert!(result.is_err());
    }
}
