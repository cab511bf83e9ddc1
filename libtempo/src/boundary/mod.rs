//! Calendar boundary queries.
//!
//! This module answers month and week boundary questions for a timestamp:
//! the first and last day of its month, the first and last day of its week
//! given a configurable week start, and the inclusive day-by-day walk
//! between two dates. Results are date-only instants with the time-of-day
//! zeroed.

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, TimeDelta, Utc, Weekday};

#[cfg(test)]
mod tests;

/// Truncates a date to midnight UTC.
fn at_midnight(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// Returns the first day of the timestamp's month, at midnight.
///
/// # Examples
///
/// ```
/// use chrono::{Datelike, TimeZone, Utc};
/// use libtempo::boundary::first_day_of_month;
///
/// let date = Utc.with_ymd_and_hms(2017, 10, 12, 12, 10, 1).unwrap();
/// let first = first_day_of_month(&date);
/// assert_eq!(first.day(), 1);
/// assert_eq!(first.month(), 10);
/// ```
pub fn first_day_of_month(date: &DateTime<Utc>) -> DateTime<Utc> {
    let day = date.date_naive();
    at_midnight(day - TimeDelta::days(i64::from(day.day0())))
}

/// Returns the last day of the timestamp's month, at midnight.
///
/// Leap years are accounted for.
///
/// # Examples
///
/// ```
/// use chrono::{Datelike, TimeZone, Utc};
/// use libtempo::boundary::last_day_of_month;
///
/// let date = Utc.with_ymd_and_hms(2016, 2, 10, 8, 0, 0).unwrap();
/// assert_eq!(last_day_of_month(&date).day(), 29);
/// ```
pub fn last_day_of_month(date: &DateTime<Utc>) -> DateTime<Utc> {
    let first = first_day_of_month(date);
    let last_day = days_in_month(first.year(), first.month());
    at_midnight(first.date_naive() + TimeDelta::days(i64::from(last_day) - 1))
}

/// Returns the number of days in the given month.
///
/// # Panics
///
/// Panics if `month` is not in `1..=12`.
///
/// # Examples
///
/// ```
/// use libtempo::boundary::days_in_month;
///
/// assert_eq!(days_in_month(2016, 2), 29);
/// assert_eq!(days_in_month(2017, 2), 28);
/// assert_eq!(days_in_month(2017, 10), 31);
/// ```
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let first = NaiveDate::from_ymd_opt(year, month, 1).expect("month must be in 1..=12");
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .expect("month must be in 1..=12");
    (next - first).num_days() as u32
}

/// Returns the first day of the timestamp's week, at midnight.
///
/// The week is anchored on `week_start`: the result is the most recent
/// occurrence of that weekday on or before `date`.
///
/// # Examples
///
/// ```
/// use chrono::{Datelike, TimeZone, Utc, Weekday};
/// use libtempo::boundary::first_day_of_week;
///
/// // 2017-10-12 is a Thursday.
/// let date = Utc.with_ymd_and_hms(2017, 10, 12, 12, 10, 1).unwrap();
/// assert_eq!(first_day_of_week(&date, Weekday::Mon).day(), 9);
/// assert_eq!(first_day_of_week(&date, Weekday::Sun).day(), 8);
/// ```
pub fn first_day_of_week(date: &DateTime<Utc>, week_start: Weekday) -> DateTime<Utc> {
    let mut diff = i64::from(date.weekday().num_days_from_sunday())
        - i64::from(week_start.num_days_from_sunday());
    if diff < 0 {
        diff += 7;
    }
    at_midnight(date.date_naive() - TimeDelta::days(diff))
}

/// Returns the last day of the timestamp's week, at midnight.
///
/// Always `first_day_of_week(date, week_start)` plus six days.
pub fn last_day_of_week(date: &DateTime<Utc>, week_start: Weekday) -> DateTime<Utc> {
    first_day_of_week(date, week_start) + TimeDelta::days(6)
}

/// Walks the days from `start` to `end` inclusive.
///
/// Yields date-only instants (midnight UTC), one per day. The iterator is
/// lazy and finite; if `end` falls on an earlier date than `start` it is
/// empty.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use libtempo::boundary::each_day;
///
/// let start = Utc.with_ymd_and_hms(2017, 10, 1, 9, 30, 0).unwrap();
/// let end = Utc.with_ymd_and_hms(2017, 10, 5, 17, 0, 0).unwrap();
/// assert_eq!(each_day(&start, &end).count(), 5);
/// ```
pub fn each_day(
    start: &DateTime<Utc>,
    end: &DateTime<Utc>,
) -> impl Iterator<Item = DateTime<Utc>> {
    let last = end.date_naive();
    start
        .date_naive()
        .iter_days()
        .take_while(move |day| *day <= last)
        .map(at_midnight)
}
