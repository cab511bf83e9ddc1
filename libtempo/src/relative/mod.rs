//! Human-readable relative time formatting.
//!
//! This module renders the elapsed time between "now" and a timestamp as a
//! short English phrase. Recent timestamps render as elapsed components
//! (`"1 min ago"`, `"1 hr 30 mins ago"`, `"3 Days 4 hrs ago"`); timestamps
//! more than a week old render as a calendar date (`"October 05 "` within
//! the last twelve months, `"October 05 2016"` beyond that).
//!
//! The instant-based formatters never fail: any internal failure collapses
//! to an empty string, which masks the cause from the caller. That contract
//! is kept for compatibility with existing callers, but it is an
//! anti-pattern to build on. When the failure cause matters, parse with
//! [`crate::epoch::from_epoch_str`] and handle its error before formatting.
//!
//! Elapsed components are not sign-normalized: a timestamp in the future
//! yields a negative duration whose components render with their sign
//! (`"-5 min ago"`).

use crate::epoch::from_epoch_str;
use crate::error::Result;
use chrono::{DateTime, Datelike, Utc};


/// Formats the elapsed time between the wall clock and `instant`.
///
/// Equivalent to [`format_relative_at`] with `now` read from the system
/// clock. Returns an empty string on any internal failure.
pub fn format_relative(instant: &DateTime<Utc>) -> String {
    format_relative_at(instant, Utc::now())
}

/// Formats the elapsed time between `now` and `instant`.
///
/// This is a pure function of its two arguments; pass a fixed `now` for
/// deterministic output. Returns an empty string on any internal failure.
///
/// # Examples
///
/// ```
/// use chrono::{TimeDelta, TimeZone, Utc};
/// use libtempo::relative::format_relative_at;
///
/// let instant = Utc.with_ymd_and_hms(2017, 10, 12, 12, 10, 1).unwrap();
///
/// let now = instant + TimeDelta::seconds(90);
/// assert_eq!(format_relative_at(&instant, now), "1 min ago");
///
/// let now = instant + TimeDelta::minutes(90);
/// assert_eq!(format_relative_at(&instant, now), "1 hr 30 mins ago");
///
/// let now = instant + TimeDelta::days(400);
/// assert_eq!(format_relative_at(&instant, now), "October 12 2017");
/// ```
pub fn format_relative_at(instant: &DateTime<Utc>, now: DateTime<Utc>) -> String {
    render(instant, now).unwrap_or_default()
}

/// Formats the elapsed time between the wall clock and an epoch-seconds
/// string.
///
/// Fails with [`crate::error::TempoError::InvalidFormat`] if the string is
/// empty or not a number; formatting itself never fails.
pub fn format_relative_epoch(text: &str) -> Result<String> {
    format_relative_epoch_at(text, Utc::now())
}

/// Formats the elapsed time between `now` and an epoch-seconds string.
///
/// # Examples
///
/// ```
/// use chrono::{TimeDelta, TimeZone, Utc};
/// use libtempo::relative::format_relative_epoch_at;
///
/// // 1507810201 is 2017-10-12T12:10:01Z.
/// let now = Utc.with_ymd_and_hms(2017, 10, 12, 12, 11, 31).unwrap();
/// assert_eq!(format_relative_epoch_at("1507810201", now).unwrap(), "1 min ago");
/// ```
pub fn format_relative_epoch_at(text: &str, now: DateTime<Utc>) -> Result<String> {
    let instant = from_epoch_str(text)?;
    Ok(format_relative_at(&instant, now))
}

/// The branch structure below is load-bearing: output strings, spacing, and
/// boundary comparisons are contract, down to the dead arms.
fn render(instant: &DateTime<Utc>, now: DateTime<Utc>) -> Option<String> {
    let ts = now.signed_duration_since(instant);

    let total_seconds = ts.num_seconds() as f64 + f64::from(ts.subsec_nanos()) / 1e9;
    let total_minutes = total_seconds / 60.0;
    let total_hours = total_seconds / 3_600.0;
    let total_days = total_seconds / 86_400.0;

    // Integer remainder components, truncated toward zero.
    let days_part = ts.num_days();
    let hours_part = ts.num_hours() - ts.num_days() * 24;
    let minutes_part = ts.num_minutes() - ts.num_hours() * 60;

    let mut days = String::new();
    let mut hour = String::new();

    if total_days <= 1.0 {
        if total_hours > 1.0 && total_hours < 2.0 {
            days = format!("{} hr ", hours_part);
        } else if total_hours > 1.0 {
            days = format!("{} hrs ", hours_part);
        }
        if minutes_part <= 1 {
            hour = format!("{} min ", minutes_part);
        } else if total_minutes > 1.0 && total_minutes < 2.0 {
            hour = format!("{} min ", minutes_part);
        } else {
            hour = format!("{} mins ", minutes_part);
        }
    }
    if total_days > 1.0 {
        if total_days > 7.0 {
            let months_apart = (now.year() - instant.year())
                .checked_mul(12)?
                .checked_add(now.month() as i32 - instant.month() as i32)?;
            if months_apart < 12 {
                days = format!("{} ", instant.format("%B %d"));
            } else {
                days = instant.format("%B %d %Y").to_string();
            }
        } else {
            if days_part > 1 {
                days = format!("{} Days ", days_part);
            } else {
                days = format!("{} Day ", days_part);
            }
            if hours_part > 1 {
                hour = format!("{} hrs ", hours_part);
            } else if total_minutes <= 1.0 {
                hour = format!("{} min ", minutes_part);
            } else {
                hour = format!("{} mins ", minutes_part);
            }
        }
    }

    let response = if days.contains("Day")
        || days.contains("hr")
        || hour.contains("Day")
        || hour.contains("hr")
    {
        format!("{}{}ago", days, hour)
    } else if !days.is_empty() {
        days
    } else {
        format!("{}ago", hour)
    };

    Some(response)
}
