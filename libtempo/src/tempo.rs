//! High-level API for the Tempo library.
//!
//! This module provides a simplified, user-friendly interface for date math
//! and display strings. It's the recommended entry point for most users: it
//! resolves the week anchor and default zone once (from configuration or
//! builder overrides) and exposes the conversion, boundary, and formatting
//! operations against that resolved state.
//!
//! # Examples
//!
//! ```
//! use chrono::{Datelike, TimeZone, Utc, Weekday};
//! use libtempo::Tempo;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let tempo = Tempo::builder()
//!         .week_start(Weekday::Sun)
//!         .zone("Asia/Singapore")
//!         .build()?;
//!
//!     let date = Utc.with_ymd_and_hms(2017, 10, 12, 12, 10, 1).unwrap();
//!
//!     // Week boundaries honor the configured anchor.
//!     assert_eq!(tempo.start_of_week(&date).day(), 8);
//!
//!     // Zone conversion uses the configured default zone.
//!     assert_eq!(tempo.to_local(&date).to_rfc3339(), "2017-10-12T20:10:01+08:00");
//!
//!     Ok(())
//! }
//! ```

use crate::boundary;
use crate::config::Config;
use crate::error::Result;
use crate::relative;
use crate::zone;
use chrono::{DateTime, Utc, Weekday};
use chrono_tz::Tz;
use std::path::PathBuf;

/// High-level interface for date math and display strings.
///
/// `Tempo` holds the resolved week anchor and default zone, and delegates
/// to the conversion, boundary, and formatting modules. Construct one with
/// [`Tempo::new`] for the defaults (weeks start Monday, zone UTC) or with
/// [`Tempo::builder`] to override them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tempo {
    week_start: Weekday,
    zone: Tz,
}

impl Tempo {
    /// Creates a `Tempo` with default settings.
    pub fn new() -> Self {
        Self {
            week_start: Weekday::Mon,
            zone: Tz::UTC,
        }
    }

    /// Returns a builder for advanced configuration.
    pub fn builder() -> TempoBuilder {
        TempoBuilder::new()
    }

    /// Creates a `Tempo` from a loaded configuration.
    ///
    /// Resolves the configured zone identifier eagerly, so an unknown zone
    /// surfaces as [`crate::error::TempoError::ZoneNotFound`] here rather
    /// than at first use.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self {
            week_start: config.week.start.weekday(),
            zone: zone::resolve_zone(&config.zone.default)?,
        })
    }

    /// Returns the configured week start day.
    pub fn week_start(&self) -> Weekday {
        self.week_start
    }

    /// Returns the configured default zone.
    pub fn zone(&self) -> Tz {
        self.zone
    }

    /// Formats `instant` relative to the wall clock.
    ///
    /// See [`crate::relative::format_relative`].
    pub fn relative(&self, instant: &DateTime<Utc>) -> String {
        relative::format_relative(instant)
    }

    /// Formats `instant` relative to a caller-supplied `now`.
    ///
    /// See [`crate::relative::format_relative_at`].
    pub fn relative_at(&self, instant: &DateTime<Utc>, now: DateTime<Utc>) -> String {
        relative::format_relative_at(instant, now)
    }

    /// Formats an epoch-seconds string relative to the wall clock.
    ///
    /// See [`crate::relative::format_relative_epoch`].
    pub fn relative_epoch(&self, text: &str) -> Result<String> {
        relative::format_relative_epoch(text)
    }

    /// Returns the first day of `date`'s month, at midnight.
    pub fn start_of_month(&self, date: &DateTime<Utc>) -> DateTime<Utc> {
        boundary::first_day_of_month(date)
    }

    /// Returns the last day of `date`'s month, at midnight.
    pub fn end_of_month(&self, date: &DateTime<Utc>) -> DateTime<Utc> {
        boundary::last_day_of_month(date)
    }

    /// Returns the first day of `date`'s week, using the configured anchor.
    pub fn start_of_week(&self, date: &DateTime<Utc>) -> DateTime<Utc> {
        boundary::first_day_of_week(date, self.week_start)
    }

    /// Returns the last day of `date`'s week, using the configured anchor.
    pub fn end_of_week(&self, date: &DateTime<Utc>) -> DateTime<Utc> {
        boundary::last_day_of_week(date, self.week_start)
    }

    /// Walks the days from `start` to `end` inclusive.
    pub fn days_between(
        &self,
        start: &DateTime<Utc>,
        end: &DateTime<Utc>,
    ) -> impl Iterator<Item = DateTime<Utc>> {
        boundary::each_day(start, end)
    }

    /// Converts `instant` into the configured default zone.
    pub fn to_local(&self, instant: &DateTime<Utc>) -> DateTime<Tz> {
        zone::to_zone(instant, self.zone)
    }

    /// Converts `instant` into the zone named by `identifier`.
    ///
    /// Propagates [`crate::error::TempoError::ZoneNotFound`].
    pub fn to_zone(&self, instant: &DateTime<Utc>, identifier: &str) -> Result<DateTime<Tz>> {
        zone::to_zone_named(instant, identifier)
    }
}

impl Default for Tempo {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for [`Tempo`] with optional configuration overrides.
///
/// Settings are resolved in precedence order: builder overrides, then the
/// config file (if any), then defaults.
///
/// # Examples
///
/// ```
/// use chrono::Weekday;
/// use libtempo::Tempo;
///
/// let tempo = Tempo::builder()
///     .week_start(Weekday::Sun)
///     .zone("America/New_York")
///     .build()
///     .unwrap();
/// assert_eq!(tempo.week_start(), Weekday::Sun);
/// ```
#[derive(Debug, Default)]
pub struct TempoBuilder {
    config_path: Option<PathBuf>,
    week_start: Option<Weekday>,
    zone: Option<String>,
}

impl TempoBuilder {
    /// Creates a new builder with no overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from the given file when building.
    pub fn config_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.config_path = Some(path.into());
        self
    }

    /// Overrides the week start day.
    pub fn week_start(mut self, day: Weekday) -> Self {
        self.week_start = Some(day);
        self
    }

    /// Overrides the default zone identifier.
    pub fn zone<S: Into<String>>(mut self, identifier: S) -> Self {
        self.zone = Some(identifier.into());
        self
    }

    /// Builds the `Tempo`, resolving configuration and the zone identifier.
    ///
    /// Fails with [`crate::error::TempoError::Config`] if the config file
    /// cannot be loaded, or [`crate::error::TempoError::ZoneNotFound`] if
    /// the zone identifier is unknown.
    pub fn build(self) -> Result<Tempo> {
        let config = Config::load(self.config_path.as_deref())?;

        let week_start = self
            .week_start
            .unwrap_or_else(|| config.week.start.weekday());
        let zone_id = self.zone.unwrap_or(config.zone.default);

        Ok(Tempo {
            week_start,
            zone: zone::resolve_zone(&zone_id)?,
        })
    }
}
