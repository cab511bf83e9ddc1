//! Time-zone resolution and conversion.
//!
//! Zones are looked up in the embedded IANA database by identifier (for
//! example `Asia/Singapore` or `America/New_York`). Conversion applies the
//! zone's UTC-offset rule in effect at the converted instant, including any
//! seasonal transition.

use crate::error::{Result, TempoError};
use chrono::{DateTime, TimeZone};
use chrono_tz::Tz;


/// Resolves a zone identifier to a time-zone handle.
///
/// Fails with [`TempoError::ZoneNotFound`] if the identifier is unknown to
/// the zone database.
///
/// # Examples
///
/// ```
/// use libtempo::zone::resolve_zone;
///
/// let zone = resolve_zone("Asia/Singapore").unwrap();
/// assert_eq!(zone.name(), "Asia/Singapore");
///
/// assert!(resolve_zone("Atlantis/Lost_City").is_err());
/// ```
pub fn resolve_zone(identifier: &str) -> Result<Tz> {
    identifier
        .parse::<Tz>()
        .map_err(|_| TempoError::zone_not_found(identifier))
}

/// Converts a timestamp into the given zone's local time.
///
/// The input is an absolute instant regardless of how it is tagged, so the
/// conversion is a pure offset change: already-UTC input converts
/// identically to zone-local input denoting the same instant. The offset
/// rule (including DST) in effect at that instant is applied.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Timelike, Utc};
/// use libtempo::zone::{resolve_zone, to_zone};
///
/// let utc = Utc.with_ymd_and_hms(2017, 10, 12, 12, 10, 1).unwrap();
/// let singapore = to_zone(&utc, resolve_zone("Asia/Singapore").unwrap());
/// assert_eq!(singapore.hour(), 20);
/// ```
pub fn to_zone<T: TimeZone>(instant: &DateTime<T>, zone: Tz) -> DateTime<Tz> {
    instant.with_timezone(&zone)
}

/// Converts a timestamp into the local time of the zone named by
/// `identifier`.
///
/// Composes [`resolve_zone`] and [`to_zone`]; propagates
/// [`TempoError::ZoneNotFound`].
pub fn to_zone_named<T: TimeZone>(instant: &DateTime<T>, identifier: &str) -> Result<DateTime<Tz>> {
    Ok(to_zone(instant, resolve_zone(identifier)?))
}
