use super::*;
use chrono::{Datelike, Timelike};

#[test]
fn test_from_epoch_seconds_zero_is_epoch_origin() {
    let instant = from_epoch_seconds(0.0);
    assert_eq!(instant, DateTime::<Utc>::UNIX_EPOCH);
}

#[test]
fn test_from_epoch_seconds_known_timestamp() {
    // 2017-10-12T12:10:01Z
    let instant = from_epoch_seconds(1507810201.0);
    assert_eq!(instant.year(), 2017);
    assert_eq!(instant.month(), 10);
    assert_eq!(instant.day(), 12);
    assert_eq!(instant.hour(), 12);
    assert_eq!(instant.minute(), 10);
    assert_eq!(instant.second(), 1);
}

#[test]
fn test_from_epoch_seconds_fractional() {
    let instant = from_epoch_seconds(1.5);
    assert_eq!(instant.second(), 1);
    assert_eq!(instant.timestamp_subsec_millis(), 500);
}

#[test]
fn test_from_epoch_seconds_negative_is_before_epoch() {
    let instant = from_epoch_seconds(-86400.0);
    assert_eq!(instant.year(), 1969);
    assert_eq!(instant.month(), 12);
    assert_eq!(instant.day(), 31);
}

#[test]
fn test_from_epoch_str_valid() {
    let instant = from_epoch_str("1507810201").unwrap();
    assert_eq!(instant.year(), 2017);
}

#[test]
fn test_from_epoch_str_fractional() {
    let instant = from_epoch_str("1507810201.75").unwrap();
    assert_eq!(instant.timestamp_subsec_millis(), 750);
}

#[test]
fn test_from_epoch_str_trims_whitespace() {
    let instant = from_epoch_str("  1507810201  ").unwrap();
    assert_eq!(to_epoch_seconds(&instant), "1507810201");
}

#[test]
fn test_from_epoch_str_empty_is_invalid_format() {
    let err = from_epoch_str("").unwrap_err();
    assert!(matches!(err, TempoError::InvalidFormat { .. }));
}

#[test]
fn test_from_epoch_str_whitespace_only_is_invalid_format() {
    let err = from_epoch_str("   ").unwrap_err();
    assert!(matches!(err, TempoError::InvalidFormat { .. }));
}

#[test]
fn test_from_epoch_str_garbage_is_invalid_format() {
    let err = from_epoch_str("yesterday").unwrap_err();
    assert!(matches!(err, TempoError::InvalidFormat { .. }));
    assert!(err.to_string().contains("yesterday"));
}

#[test]
fn test_to_epoch_seconds_epoch_origin() {
    assert_eq!(to_epoch_seconds(&DateTime::<Utc>::UNIX_EPOCH), "0");
}

#[test]
fn test_to_epoch_seconds_truncates_fractional_seconds() {
    let instant = from_epoch_seconds(100.9);
    assert_eq!(to_epoch_seconds(&instant), "100");
}

#[test]
fn test_round_trip_integer_seconds() {
    for n in [0i64, 1, 59, 86400, 1507810201, 4102444800] {
        let instant = from_epoch_seconds(n as f64);
        assert_eq!(to_epoch_seconds(&instant), n.to_string());
    }
}

#[test]
fn test_round_trip_through_string_overload() {
    let instant = from_epoch_str("1507810201").unwrap();
    assert_eq!(to_epoch_seconds(&instant), "1507810201");
}

#[test]
fn test_to_epoch_seconds_zone_local_input() {
    use chrono::TimeZone;

    let utc = chrono::Utc.with_ymd_and_hms(2017, 10, 12, 12, 10, 1).unwrap();
    let singapore = utc.with_timezone(&chrono_tz::Asia::Singapore);
    // Same absolute instant, same epoch value.
    assert_eq!(to_epoch_seconds(&singapore), to_epoch_seconds(&utc));
}
