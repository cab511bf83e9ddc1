use super::*;
use libtempo::{Config, TempoError};

fn ctx() -> AppContext {
    AppContext {
        config: Config::default(),
    }
}

#[test]
fn test_month_boundaries() {
    // 1507810201 is 2017-10-12T12:10:01Z
    let result = month("1507810201").unwrap();

    assert_eq!(result.month, "October 2017");
    assert_eq!(result.first_day, "2017-10-01");
    assert_eq!(result.last_day, "2017-10-31");
}

#[test]
fn test_month_boundaries_leap_february() {
    // 1455537600 is 2016-02-15T12:00:00Z
    let result = month("1455537600").unwrap();

    assert_eq!(result.month, "February 2016");
    assert_eq!(result.last_day, "2016-02-29");
}

#[test]
fn test_month_rejects_bad_epoch() {
    let err = month("around noon").unwrap_err();
    assert!(matches!(err, TempoError::InvalidFormat { .. }));
}

#[test]
fn test_week_uses_configured_anchor_by_default() {
    // Default config anchors weeks on Monday; 2017-10-12 is a Thursday.
    let result = week(&ctx(), "1507810201", None).unwrap();

    assert_eq!(result.week_start, "Mon");
    assert_eq!(result.first_day, "2017-10-09");
    assert_eq!(result.last_day, "2017-10-15");
}

#[test]
fn test_week_flag_overrides_anchor() {
    let result = week(&ctx(), "1507810201", Some("sunday")).unwrap();

    assert_eq!(result.week_start, "Sun");
    assert_eq!(result.first_day, "2017-10-08");
    assert_eq!(result.last_day, "2017-10-14");
}

#[test]
fn test_month_boundary_format_pretty() {
    let result = MonthBoundary {
        month: "October 2017".to_string(),
        first_day: "2017-10-01".to_string(),
        last_day: "2017-10-31".to_string(),
    };

    let pretty = result.format_pretty();
    assert!(pretty.contains("October 2017"));
    assert!(pretty.contains("2017-10-01"));
    assert!(pretty.contains("2017-10-31"));
}

#[test]
fn test_week_boundary_serializes() {
    let result = WeekBoundary {
        week_start: "Mon".to_string(),
        first_day: "2017-10-09".to_string(),
        last_day: "2017-10-15".to_string(),
    };

    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("2017-10-09"));
}
