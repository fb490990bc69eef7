//! Clock arithmetic and formatting.
//!
//! Durations are whole seconds throughout the crate. This module splits them
//! into minutes and seconds for display, formats the `MM:SS` face shown by
//! the timer view and parses the duration strings accepted on the command
//! line.
//!
//! ```rust
//! use countdown_tea::clock::{format_clock, parse_duration};
//!
//! assert_eq!(format_clock(305), "05:05");
//! assert_eq!(parse_duration("1m30s").unwrap(), 90);
//! assert_eq!(parse_duration("02:00").unwrap(), 120);
//! ```

use thiserror::Error;

/// One second.
pub const SECOND: u32 = 1;
/// One minute in seconds.
pub const MINUTE: u32 = 60 * SECOND;
/// Lowest value the clock can show.
pub const MIN_SECONDS: u32 = 0;
/// Highest value the clock can show: 99 minutes.
pub const MAX_SECONDS: u32 = 99 * MINUTE;
/// Duration used when none is configured.
pub const DEFAULT_SECONDS: u32 = 5 * MINUTE;

/// Errors from [`parse_duration`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseDurationError {
    /// The input was empty or whitespace.
    #[error("duration is empty")]
    Empty,
    /// The input did not follow any accepted form.
    #[error("invalid duration {0:?}: expected forms like 90, 90s, 5m, 1m30s or 01:30")]
    Invalid(String),
    /// The value parsed but is above the clock's maximum.
    #[error("duration of {seconds}s exceeds the maximum of {max}s")]
    TooLong {
        /// Parsed value in seconds.
        seconds: u64,
        /// Largest accepted value.
        max: u32,
    },
}

/// Splits a number of seconds into whole minutes and leftover seconds.
pub fn split(seconds: u32) -> (u32, u32) {
    (seconds / MINUTE, seconds % MINUTE)
}

/// Formats seconds as zero-padded `MM:SS`.
pub fn format_clock(seconds: u32) -> String {
    let (minutes, secs) = split(seconds);
    format!("{:02}:{:02}", minutes, secs)
}

/// Parses a human duration into seconds.
///
/// Accepted forms are a bare number of seconds (`90`), unit suffixed parts
/// (`90s`, `5m`, `1m30s`) and a clock face (`01:30`). The result must not
/// exceed [`MAX_SECONDS`].
pub fn parse_duration(input: &str) -> Result<u32, ParseDurationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseDurationError::Empty);
    }
    let invalid = || ParseDurationError::Invalid(trimmed.to_string());

    let total: u64 = if let Some((minutes, seconds)) = trimmed.split_once(':') {
        let minutes: u64 = minutes.parse().map_err(|_| invalid())?;
        let seconds: u64 = seconds.parse().map_err(|_| invalid())?;
        if seconds >= u64::from(MINUTE) {
            return Err(invalid());
        }
        minutes * u64::from(MINUTE) + seconds
    } else if trimmed.bytes().all(|b| b.is_ascii_digit()) {
        trimmed.parse().map_err(|_| invalid())?
    } else {
        parse_units(trimmed).ok_or_else(invalid)?
    };

    if total > u64::from(MAX_SECONDS) {
        return Err(ParseDurationError::TooLong {
            seconds: total,
            max: MAX_SECONDS,
        });
    }
    u32::try_from(total).map_err(|_| invalid())
}

// "1m30s", "5m", "45s"; minutes must come before seconds, each at most once.
fn parse_units(input: &str) -> Option<u64> {
    let mut total: u64 = 0;
    let mut digits = String::new();
    let mut seen_minutes = false;
    let mut seen_seconds = false;

    for ch in input.chars() {
        match ch {
            '0'..='9' => digits.push(ch),
            'm' | 'M' if !seen_minutes && !seen_seconds && !digits.is_empty() => {
                total = total.checked_add(digits.parse::<u64>().ok()?.checked_mul(60)?)?;
                digits.clear();
                seen_minutes = true;
            }
            's' | 'S' if !seen_seconds && !digits.is_empty() => {
                total = total.checked_add(digits.parse::<u64>().ok()?)?;
                digits.clear();
                seen_seconds = true;
            }
            _ => return None,
        }
    }

    if !digits.is_empty() || !(seen_minutes || seen_seconds) {
        return None;
    }
    Some(total)
}
