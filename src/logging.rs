//! Tracing setup.
//!
//! The terminal belongs to the UI while the program runs, so log output
//! goes to a file or nowhere.

use crate::config::Config;
use anyhow::Context;
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Installs a file subscriber when `--log-file` is set.
///
/// `RUST_LOG` overrides the level chosen by `--verbose`. Returns `Ok(false)`
/// when logging is disabled.
pub fn init(config: &Config) -> anyhow::Result<bool> {
    let Some(path) = config.log_file.as_ref() else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(config)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))?;

    Ok(true)
}

// Covers both the library and the `countdown` binary targets.
fn default_directive(config: &Config) -> String {
    let level = config.log_level();
    format!("countdown_tea={level},countdown={level}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_log_file_means_no_subscriber() {
        let config = Config::default();
        assert!(!init(&config).unwrap());
    }

    #[test]
    fn test_default_directive_covers_binary() {
        let mut config = Config::default();
        assert_eq!(default_directive(&config), "countdown_tea=info,countdown=info");

        config.verbose = true;
        assert_eq!(default_directive(&config), "countdown_tea=debug,countdown=debug");
    }
}
