//! Command-line configuration.
//!
//! `bubbletea_rs::Model::init` takes no arguments, so the binary parses the
//! command line once, hands the result to [`install`], and the timer view
//! reads it back through [`current`] when the program starts.

use crate::clock::{self, parse_duration};
use crate::countdown::DEFAULT_INTERVAL;
use clap::Parser;
use once_cell::sync::OnceCell;
use std::path::PathBuf;
use std::time::Duration;

static CONFIG: OnceCell<Config> = OnceCell::new();

/// Countdown settings.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "countdown")]
#[command(about = "A keyboard-driven countdown timer for the terminal")]
#[command(version)]
pub struct Config {
    /// Starting duration, e.g. 90, 45s, 5m, 1m30s or 01:30 (max 99 minutes)
    #[arg(value_name = "DURATION", default_value = "5m", value_parser = parse_duration)]
    pub duration: u32,

    /// Milliseconds between ticks
    #[arg(long, default_value_t = 1000, value_parser = clap::value_parser!(u64).range(1..))]
    pub interval_ms: u64,

    /// Do not play a notification when the countdown ends
    #[arg(long)]
    pub no_sound: bool,

    /// Program to run instead of the terminal bell, e.g. "paplay notification.wav"
    #[arg(long, value_name = "CMD")]
    pub sound_command: Option<String>,

    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            duration: clock::DEFAULT_SECONDS,
            interval_ms: DEFAULT_INTERVAL.as_millis() as u64,
            no_sound: false,
            sound_command: None,
            log_file: None,
            verbose: false,
        }
    }
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Tick interval as a duration.
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    /// Player program and arguments, if a sound command was given.
    pub fn sound_command_parts(&self) -> Option<(String, Vec<String>)> {
        let mut parts = self.sound_command.as_deref()?.split_whitespace();
        let program = parts.next()?.to_string();
        Some((program, parts.map(str::to_string).collect()))
    }

    /// Default log level when `RUST_LOG` is unset.
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}

/// Stores the configuration for the timer view.
///
/// Only the first call has an effect; returns `false` if a configuration
/// was already installed.
pub fn install(config: Config) -> bool {
    CONFIG.set(config).is_ok()
}

/// The installed configuration, or the defaults.
pub fn current() -> Config {
    CONFIG.get().cloned().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::try_parse_from(["countdown"]).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.duration, 300);
        assert_eq!(config.interval(), Duration::from_secs(1));
        assert_eq!(config.log_level(), "info");
    }

    #[test]
    fn test_parses_duration_and_flags() {
        let config = Config::try_parse_from([
            "countdown",
            "1m30s",
            "--interval-ms",
            "250",
            "--no-sound",
            "-v",
        ])
        .unwrap();
        assert_eq!(config.duration, 90);
        assert_eq!(config.interval(), Duration::from_millis(250));
        assert!(config.no_sound);
        assert_eq!(config.log_level(), "debug");
    }

    #[test]
    fn test_rejects_bad_duration() {
        assert!(Config::try_parse_from(["countdown", "100m"]).is_err());
        assert!(Config::try_parse_from(["countdown", "soon"]).is_err());
    }

    #[test]
    fn test_rejects_zero_interval() {
        assert!(Config::try_parse_from(["countdown", "--interval-ms", "0"]).is_err());
    }

    #[test]
    fn test_sound_command_parts() {
        let config = Config::try_parse_from([
            "countdown",
            "--sound-command",
            "paplay  /tmp/notification.wav",
        ])
        .unwrap();
        assert_eq!(
            config.sound_command_parts(),
            Some((
                "paplay".to_string(),
                vec!["/tmp/notification.wav".to_string()]
            ))
        );

        let blank = Config {
            sound_command: Some("   ".to_string()),
            ..Config::default()
        };
        assert_eq!(blank.sound_command_parts(), None);
    }
}
