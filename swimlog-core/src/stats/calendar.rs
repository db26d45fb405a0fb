//! Calendar bucketing helpers.
//!
//! All grouping in the stats modules operates on the **local calendar
//! date**, never on UTC days or elapsed-24h windows: a swim at 11 PM and one
//! the next morning at 1 AM are different days. The one deliberate exception
//! is the trailing-week cutoff in [`super::weekly`].

use chrono::{DateTime, Datelike, Local, NaiveDate};

/// Month bucket key, `"YYYY-MM"` in the local calendar (zero-padded month).
pub fn month_key(date: DateTime<Local>) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

/// Day bucket key: the local calendar date, ignoring time-of-day.
///
/// Two timestamps on the same local calendar day always compare equal.
pub fn day_key(date: DateTime<Local>) -> NaiveDate {
    date.date_naive()
}

/// Whole calendar days from `earlier` to `later` (negative if reversed).
pub fn days_between(later: NaiveDate, earlier: NaiveDate) -> i64 {
    (later - earlier).num_days()
}
