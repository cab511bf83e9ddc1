//! Tempo - Date/Time Utility Library
//!
//! Tempo provides consistent date math and display strings: epoch-seconds
//! conversion, calendar boundary queries, time-zone conversion, and a
//! human-readable relative time formatter.
//!
//! # Quick Start
//!
//! ```
//! use chrono::{TimeZone, Utc, Weekday};
//! use libtempo::Tempo;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let tempo = Tempo::builder().week_start(Weekday::Mon).build()?;
//!
//!     // 2017-10-12T12:10:01Z
//!     let instant = libtempo::epoch::from_epoch_str("1507810201")?;
//!
//!     // Calendar boundaries
//!     let week_begins = tempo.start_of_week(&instant);
//!     assert_eq!(week_begins, Utc.with_ymd_and_hms(2017, 10, 9, 0, 0, 0).unwrap());
//!
//!     // Time-zone conversion
//!     let singapore = tempo.to_zone(&instant, "Asia/Singapore")?;
//!     assert_eq!(singapore.to_rfc3339(), "2017-10-12T20:10:01+08:00");
//!
//!     // Relative display strings against an injected clock
//!     let now = Utc.with_ymd_and_hms(2017, 10, 12, 13, 40, 1).unwrap();
//!     assert_eq!(tempo.relative_at(&instant, now), "1 hr 30 mins ago");
//!
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - **Epoch conversion**: epoch-seconds ⇄ calendar timestamps, with a
//!   checked string overload
//! - **Calendar boundaries**: start/end of month and week, inclusive day
//!   iteration, configurable week anchor
//! - **Zone conversion**: IANA zone lookup with DST-aware offsets
//! - **Relative formatting**: fixed English phrases like `"3 hrs 12 mins
//!   ago"` or `"October 05 2016"`
//!
//! # Main Types
//!
//! - [`Tempo`] - Main entry point for date/time operations
//! - [`TempoBuilder`] - Builder for advanced configuration
//! - [`Config`] - Week anchor and default zone settings
//! - [`TempoError`] - Error type for all fallible operations
//!
//! # Architecture
//!
//! Tempo is organized into modules:
//!
//! - **High-level API** ([`tempo`]) - Recommended for most users
//! - **Low-level modules** - Available for advanced use cases (hidden from docs)
//!
//! For most use cases, you should use the [`Tempo`] struct. The low-level
//! modules are available if you need fine-grained control, but are not shown
//! in the documentation by default.

#![warn(clippy::all)]

/// Returns the libtempo crate version.
///
/// This is useful for version reporting in CLI tools and debugging.
///
/// # Examples
///
/// ```
/// let version = libtempo::version();
/// assert!(!version.is_empty());
/// ```
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

// High-level public API (main entry point)
mod tempo;
pub use tempo::{Tempo, TempoBuilder};

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::{Result, TempoError};

// Low-level implementation modules (hidden from docs but still public)
// These are available for advanced users who need fine-grained control
#[doc(hidden)]
pub mod boundary;
#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod epoch;
#[doc(hidden)]
pub mod error;
#[doc(hidden)]
pub mod relative;
#[doc(hidden)]
pub mod zone;
