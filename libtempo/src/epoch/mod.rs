//! Unix epoch timestamp conversion.
//!
//! This module converts between epoch-seconds values and calendar timestamps.
//! Epoch-seconds inputs may be fractional; epoch-seconds output is truncated
//! to whole seconds and rendered as a plain decimal string.

use crate::error::{Result, TempoError};
use chrono::{DateTime, TimeDelta, TimeZone, Utc};

#[cfg(test)]
mod tests;

const MICROS_PER_SECOND: f64 = 1_000_000.0;

/// Converts an epoch-seconds value into a UTC timestamp.
///
/// The value is interpreted as seconds since 1970-01-01T00:00:00 UTC.
/// Fractional seconds are kept to microsecond precision, truncated
/// toward zero.
///
/// # Examples
///
/// ```
/// use chrono::{Datelike, Timelike};
/// use libtempo::epoch::from_epoch_seconds;
///
/// let instant = from_epoch_seconds(1507810201.0);
/// assert_eq!(instant.year(), 2017);
/// assert_eq!(instant.month(), 10);
/// assert_eq!(instant.day(), 12);
/// assert_eq!(instant.hour(), 12);
/// ```
pub fn from_epoch_seconds(seconds: f64) -> DateTime<Utc> {
    let micros = (seconds * MICROS_PER_SECOND) as i64;
    DateTime::<Utc>::UNIX_EPOCH + TimeDelta::microseconds(micros)
}

/// Parses an epoch-seconds string and converts it into a UTC timestamp.
///
/// The text is parsed as a decimal number first. Empty input or input that
/// is not a number fails with [`TempoError::InvalidFormat`].
///
/// # Examples
///
/// ```
/// use libtempo::epoch::from_epoch_str;
///
/// let instant = from_epoch_str("1507810201").unwrap();
/// assert_eq!(libtempo::epoch::to_epoch_seconds(&instant), "1507810201");
///
/// assert!(from_epoch_str("").is_err());
/// assert!(from_epoch_str("not-a-number").is_err());
/// ```
pub fn from_epoch_str(text: &str) -> Result<DateTime<Utc>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(TempoError::invalid_format(
            "empty string not allowed for time stamp",
        ));
    }

    let seconds: f64 = trimmed.parse().map_err(|e| {
        TempoError::invalid_format_with_source(
            format!("cannot parse '{}' as epoch seconds", trimmed),
            e,
        )
    })?;

    Ok(from_epoch_seconds(seconds))
}

/// Converts a timestamp into an epoch-seconds string.
///
/// The elapsed time since the epoch is truncated toward zero to whole
/// seconds and rendered as a decimal integer. Timestamps before the epoch
/// yield negative values.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use libtempo::epoch::to_epoch_seconds;
///
/// let instant = Utc.with_ymd_and_hms(2017, 10, 12, 12, 10, 1).unwrap();
/// assert_eq!(to_epoch_seconds(&instant), "1507810201");
/// ```
pub fn to_epoch_seconds<T: TimeZone>(instant: &DateTime<T>) -> String {
    let elapsed = instant
        .clone()
        .signed_duration_since(DateTime::<Utc>::UNIX_EPOCH);
    elapsed.num_seconds().to_string()
}
