//! Human-friendly duration strings used by `--cache-ttl` and `--timeout`.
//!
//! Accepted forms: a bare number of seconds (`"3600"`), or one or more
//! `<number><unit>` components with units `d`, `h`, `m`, `s`
//! (`"1d"`, `"12h"`, `"1d12h"`, `"2h30m"`). Matching is case-insensitive.

use crate::shared::error::EolError;
use std::time::Duration;

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: u64 = 24 * SECONDS_PER_HOUR;

/// Parses a duration string into a [`Duration`]
pub fn parse_duration(input: &str) -> Result<Duration, EolError> {
    let invalid = || EolError::InvalidDuration {
        value: input.to_string(),
    };

    let value = input.trim().to_ascii_lowercase();
    if value.is_empty() {
        return Err(invalid());
    }

    if value.chars().all(|c| c.is_ascii_digit()) {
        let seconds: u64 = value.parse().map_err(|_| invalid())?;
        return Ok(Duration::from_secs(seconds));
    }

    let mut total: u64 = 0;
    let mut digits = String::new();
    for c in value.chars() {
        if c.is_ascii_digit() {
            digits.push(c);
            continue;
        }

        let unit = match c {
            'd' => SECONDS_PER_DAY,
            'h' => SECONDS_PER_HOUR,
            'm' => SECONDS_PER_MINUTE,
            's' => 1,
            _ => return Err(invalid()),
        };
        if digits.is_empty() {
            return Err(invalid());
        }
        let amount: u64 = digits.parse().map_err(|_| invalid())?;
        total = amount
            .checked_mul(unit)
            .and_then(|secs| total.checked_add(secs))
            .ok_or_else(invalid)?;
        digits.clear();
    }

    // Trailing digits without a unit ("1d12") are ambiguous
    if !digits.is_empty() {
        return Err(invalid());
    }

    Ok(Duration::from_secs(total))
}

/// Formats a duration compactly using the two largest non-zero units
pub fn format_duration(duration: Duration) -> String {
    let seconds = duration.as_secs();
    if seconds < SECONDS_PER_MINUTE {
        return format!("{}s", seconds);
    }

    let (minutes, seconds) = (seconds / 60, seconds % 60);
    if minutes < 60 {
        return if seconds > 0 {
            format!("{}m{}s", minutes, seconds)
        } else {
            format!("{}m", minutes)
        };
    }

    let (hours, minutes) = (minutes / 60, minutes % 60);
    if hours < 24 {
        return if minutes > 0 {
            format!("{}h{}m", hours, minutes)
        } else {
            format!("{}h", hours)
        };
    }

    let (days, hours) = (hours / 24, hours % 24);
    if hours > 0 {
        format!("{}d{}h", days, hours)
    } else {
        format!("{}d", days)
    }
}
