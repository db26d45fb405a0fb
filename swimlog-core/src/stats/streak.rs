//! Consecutive-day streaks and weekly session counts.

use crate::stats::calendar::{day_key, days_between};
use crate::types::SwimSession;
use chrono::{DateTime, Datelike, Duration, Local, NaiveDate, NaiveTime};
use std::collections::BTreeSet;

/// Unique local calendar days with at least one session.
fn unique_days(sessions: &[SwimSession]) -> BTreeSet<NaiveDate> {
    sessions.iter().map(|s| day_key(s.date)).collect()
}

/// Current streak: consecutive days with a swim, walking backward from `today`.
///
/// The walk may start from today or yesterday, so a swim logged yesterday
/// but not yet today still counts as an active streak. Any gap of more than
/// one day ends the streak. Future-dated sessions (negative gap) are skipped
/// rather than breaking the walk.
pub fn current_streak(sessions: &[SwimSession], today: NaiveDate) -> u32 {
    let days = unique_days(sessions);

    let mut streak = 0;
    let mut cursor = today;
    for &day in days.iter().rev() {
        let gap = days_between(cursor, day);
        if gap == 0 || gap == 1 {
            streak += 1;
            cursor = day;
        } else if gap > 1 {
            break;
        }
        // gap < 0: session after the cursor, skip it
    }

    streak
}

/// Longest run of consecutive swim days anywhere in the history.
///
/// Empty input returns 0; a single unique day returns 1.
pub fn longest_streak(sessions: &[SwimSession]) -> u32 {
    let days = unique_days(sessions);
    let mut iter = days.iter();
    let Some(&first) = iter.next() else {
        return 0;
    };

    let mut max_streak = 1;
    let mut run = 1;
    let mut prev = first;
    for &day in iter {
        if days_between(day, prev) == 1 {
            run += 1;
            max_streak = max_streak.max(run);
        } else {
            run = 1;
        }
        prev = day;
    }

    max_streak
}

/// Session count per weekday over the whole history, Sunday first.
pub fn weekday_frequency(sessions: &[SwimSession]) -> [u32; 7] {
    let mut counts = [0u32; 7];
    for session in sessions {
        counts[session.date.weekday().num_days_from_sunday() as usize] += 1;
    }
    counts
}

/// Sessions since the most recent Sunday at local midnight.
///
/// If today is Sunday the window starts today at midnight. There is no
/// upper bound, so future-dated sessions count too; this mirrors the
/// historical report behavior.
pub fn this_week_count(sessions: &[SwimSession], now: DateTime<Local>) -> usize {
    let days_since_sunday = now.weekday().num_days_from_sunday() as i64;
    let start_of_week =
        (day_key(now) - Duration::days(days_since_sunday)).and_time(NaiveTime::MIN);

    sessions
        .iter()
        .filter(|s| s.date.naive_local() >= start_of_week)
        .count()
}
