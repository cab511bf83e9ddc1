use super::*;
use chrono::{TimeZone, Timelike};

fn utc(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
}

#[test]
fn test_first_day_of_month() {
    let first = first_day_of_month(&utc(2017, 10, 12, 12, 10, 1));
    assert_eq!(first, utc(2017, 10, 1, 0, 0, 0));
}

#[test]
fn test_first_day_of_month_already_first() {
    let first = first_day_of_month(&utc(2017, 10, 1, 23, 59, 59));
    assert_eq!(first, utc(2017, 10, 1, 0, 0, 0));
}

#[test]
fn test_last_day_of_month() {
    let last = last_day_of_month(&utc(2017, 10, 12, 12, 10, 1));
    assert_eq!(last, utc(2017, 10, 31, 0, 0, 0));
}

#[test]
fn test_last_day_of_month_leap_february() {
    let last = last_day_of_month(&utc(2016, 2, 10, 8, 0, 0));
    assert_eq!(last, utc(2016, 2, 29, 0, 0, 0));
}

#[test]
fn test_last_day_of_month_common_february() {
    let last = last_day_of_month(&utc(2017, 2, 10, 8, 0, 0));
    assert_eq!(last, utc(2017, 2, 28, 0, 0, 0));
}

#[test]
fn test_last_day_of_month_december() {
    let last = last_day_of_month(&utc(2017, 12, 3, 1, 2, 3));
    assert_eq!(last, utc(2017, 12, 31, 0, 0, 0));
}

#[test]
fn test_days_in_month() {
    assert_eq!(days_in_month(2017, 1), 31);
    assert_eq!(days_in_month(2017, 2), 28);
    assert_eq!(days_in_month(2016, 2), 29);
    assert_eq!(days_in_month(2000, 2), 29);
    assert_eq!(days_in_month(1900, 2), 28);
    assert_eq!(days_in_month(2017, 4), 30);
    assert_eq!(days_in_month(2017, 12), 31);
}

#[test]
fn test_last_day_of_month_matches_days_in_month() {
    let date = utc(2016, 2, 15, 0, 0, 0);
    let last = last_day_of_month(&date);
    assert_eq!(last.day(), days_in_month(2016, 2));
}

#[test]
fn test_first_day_of_week_monday_anchor() {
    // 2017-10-12 is a Thursday.
    let first = first_day_of_week(&utc(2017, 10, 12, 12, 10, 1), Weekday::Mon);
    assert_eq!(first, utc(2017, 10, 9, 0, 0, 0));
}

#[test]
fn test_first_day_of_week_sunday_anchor() {
    let first = first_day_of_week(&utc(2017, 10, 12, 12, 10, 1), Weekday::Sun);
    assert_eq!(first, utc(2017, 10, 8, 0, 0, 0));
}

#[test]
fn test_first_day_of_week_on_anchor_day_is_same_date() {
    // 2017-10-09 is a Monday.
    let first = first_day_of_week(&utc(2017, 10, 9, 5, 0, 0), Weekday::Mon);
    assert_eq!(first, utc(2017, 10, 9, 0, 0, 0));
}

#[test]
fn test_first_day_of_week_wraps_backwards_across_month() {
    // 2017-10-01 is a Sunday; the preceding Monday is in September.
    let first = first_day_of_week(&utc(2017, 10, 1, 0, 0, 0), Weekday::Mon);
    assert_eq!(first, utc(2017, 9, 25, 0, 0, 0));
}

#[test]
fn test_last_day_of_week_is_first_plus_six() {
    let date = utc(2017, 10, 12, 12, 10, 1);
    for anchor in [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ] {
        let first = first_day_of_week(&date, anchor);
        let last = last_day_of_week(&date, anchor);
        assert_eq!(last, first + TimeDelta::days(6));
    }
}

#[test]
fn test_week_brackets_its_date() {
    let date = utc(2017, 10, 12, 12, 10, 1);
    for anchor in [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ] {
        let first = first_day_of_week(&date, anchor);
        let last = last_day_of_week(&date, anchor);
        assert!(first <= date);
        assert!(date.date_naive() <= last.date_naive());
        assert_eq!(first.weekday(), anchor);
    }
}

#[test]
fn test_boundaries_zero_time_of_day() {
    let date = utc(2017, 10, 12, 12, 10, 1);
    for boundary in [
        first_day_of_month(&date),
        last_day_of_month(&date),
        first_day_of_week(&date, Weekday::Mon),
        last_day_of_week(&date, Weekday::Mon),
    ] {
        assert_eq!(boundary.hour(), 0);
        assert_eq!(boundary.minute(), 0);
        assert_eq!(boundary.second(), 0);
    }
}

#[test]
fn test_each_day_inclusive_range() {
    let start = utc(2017, 10, 1, 9, 30, 0);
    let end = utc(2017, 10, 5, 17, 0, 0);
    let days: Vec<_> = each_day(&start, &end).collect();

    assert_eq!(days.len(), 5);
    assert_eq!(days[0], utc(2017, 10, 1, 0, 0, 0));
    assert_eq!(days[4], utc(2017, 10, 5, 0, 0, 0));
}

#[test]
fn test_each_day_same_date_yields_one() {
    let start = utc(2017, 10, 12, 1, 0, 0);
    let end = utc(2017, 10, 12, 23, 0, 0);
    let days: Vec<_> = each_day(&start, &end).collect();

    assert_eq!(days, vec![utc(2017, 10, 12, 0, 0, 0)]);
}

#[test]
fn test_each_day_end_before_start_is_empty() {
    let start = utc(2017, 10, 12, 0, 0, 0);
    let end = utc(2017, 10, 11, 0, 0, 0);
    assert_eq!(each_day(&start, &end).count(), 0);
}

#[test]
fn test_each_day_crosses_month_boundary() {
    let start = utc(2017, 9, 29, 0, 0, 0);
    let end = utc(2017, 10, 2, 0, 0, 0);
    let days: Vec<_> = each_day(&start, &end).collect();

    assert_eq!(days.len(), 4);
    assert_eq!(days[2], utc(2017, 10, 1, 0, 0, 0));
}

#[test]
fn test_each_day_is_restartable() {
    let start = utc(2017, 10, 1, 0, 0, 0);
    let end = utc(2017, 10, 3, 0, 0, 0);

    let first_walk: Vec<_> = each_day(&start, &end).collect();
    let second_walk: Vec<_> = each_day(&start, &end).collect();
    assert_eq!(first_walk, second_walk);
}
