//! Recurrence arithmetic for annual flag days.
//!
//! All functions are pure over `chrono` types; callers supply "today" and
//! "now" so the math is testable without a clock.
//!
//! Leap-day policy: a Feb 29 anniversary observes on Mar 1 in non-leap
//! years. `occurrence_in_year` is therefore total for any anniversary date
//! that `chrono` was able to parse.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

/// Whole seconds in a local calendar day.
pub const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

/// The date an anniversary is observed in `year`.
///
/// Same month/day as the anniversary; Feb 29 rolls forward to Mar 1 when
/// `year` is not a leap year.
pub fn occurrence_in_year(anniversary: NaiveDate, year: i32) -> NaiveDate {
    anniversary.with_year(year).unwrap_or_else(|| {
        // Only Feb 29 can fail to land in a target year; Mar 1 always exists.
        NaiveDate::from_ymd_opt(year, 3, 1).unwrap_or(anniversary)
    })
}

/// The next occurrence of `anniversary` on or after `today`.
pub fn next_occurrence(today: NaiveDate, anniversary: NaiveDate) -> NaiveDate {
    let candidate = occurrence_in_year(anniversary, today.year());
    if candidate < today {
        occurrence_in_year(anniversary, today.year() + 1)
    } else {
        candidate
    }
}

/// Days from `today` until `next`; zero when they coincide.
pub fn days_until(today: NaiveDate, next: NaiveDate) -> u32 {
    (next - today).num_days().max(0) as u32
}

/// Years between the configured anniversary and its upcoming occurrence.
///
/// Uses the year the record was configured with verbatim, so an arbitrary
/// configured year produces an arbitrary age.
pub fn age_at_next(next: NaiveDate, anniversary: NaiveDate) -> i32 {
    next.year() - anniversary.year()
}

/// Whole seconds from `now` until the start of the next local calendar day.
///
/// Always in `(0, 86_400]`: at exactly midnight no seconds have elapsed
/// yet, so the full day is returned and the next recompute lands on the
/// following midnight.
pub fn seconds_until_next_midnight(now: NaiveDateTime) -> u64 {
    let elapsed = u64::from(now.hour()) * 3600
        + u64::from(now.minute()) * 60
        + u64::from(now.second());
    SECONDS_PER_DAY - elapsed
}
