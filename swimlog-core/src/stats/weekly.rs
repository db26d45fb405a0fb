//! Trailing-week summary (last 7 days).

use crate::stats::calendar::day_key;
use crate::types::SwimSession;
use chrono::{DateTime, Duration, Local, NaiveDate};
use serde::Serialize;
use std::collections::BTreeMap;

/// How the 7-day window boundary is compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeekCutoff {
    /// Legacy behavior: full-timestamp comparison against `now - 7*24h`.
    ///
    /// A session at 11:59 PM seven days ago falls outside the window while
    /// one at 00:01 AM the next morning is inside. This differs from the
    /// calendar-day semantics used everywhere else in the stats modules and
    /// is kept for parity with historical reports.
    #[default]
    Timestamp,
    /// Local-calendar-day comparison against `today - 7 days`.
    CalendarDay,
}

/// Distance and duration for one day of the trailing week.
#[derive(Debug, Clone, Serialize)]
pub struct DailyTotal {
    /// Local calendar date
    pub date: NaiveDate,
    /// Total distance in meters on that date
    pub distance_m: f64,
    /// Total duration in minutes on that date
    pub duration_min: f64,
}

/// Aggregate over the trailing 7-day window anchored at "now".
#[derive(Debug, Clone, Serialize)]
pub struct WeeklyStats {
    /// Total distance in meters
    pub total_distance_m: f64,
    /// Total duration in minutes
    pub total_duration_min: f64,
    /// Number of distinct local calendar days with at least one session
    pub swim_days: usize,
    /// Average distance per active day (0 when there were none)
    pub avg_distance_per_day_m: f64,
    /// Per-day breakdown, chronological
    pub daily: Vec<DailyTotal>,
}

/// Trailing-week summary with the legacy timestamp cutoff.
pub fn weekly_stats(sessions: &[SwimSession], now: DateTime<Local>) -> WeeklyStats {
    weekly_stats_with(sessions, now, WeekCutoff::default())
}

/// Trailing-week summary with an explicit cutoff mode.
pub fn weekly_stats_with(
    sessions: &[SwimSession],
    now: DateTime<Local>,
    cutoff: WeekCutoff,
) -> WeeklyStats {
    let in_window: Vec<&SwimSession> = match cutoff {
        WeekCutoff::Timestamp => {
            let seven_days_ago = now - Duration::days(7);
            sessions.iter().filter(|s| s.date >= seven_days_ago).collect()
        }
        WeekCutoff::CalendarDay => {
            let cutoff_day = day_key(now) - Duration::days(7);
            sessions
                .iter()
                .filter(|s| day_key(s.date) >= cutoff_day)
                .collect()
        }
    };

    let mut by_day: BTreeMap<NaiveDate, (f64, f64)> = BTreeMap::new();
    for session in &in_window {
        let entry = by_day.entry(day_key(session.date)).or_insert((0.0, 0.0));
        entry.0 += session.distance_m;
        entry.1 += session.duration_min;
    }

    let total_distance_m: f64 = in_window.iter().map(|s| s.distance_m).sum();
    let total_duration_min: f64 = in_window.iter().map(|s| s.duration_min).sum();
    let swim_days = by_day.len();
    let avg_distance_per_day_m = if swim_days > 0 {
        total_distance_m / swim_days as f64
    } else {
        0.0
    };

    let daily = by_day
        .into_iter()
        .map(|(date, (distance_m, duration_min))| DailyTotal {
            date,
            distance_m,
            duration_min,
        })
        .collect();

    WeeklyStats {
        total_distance_m,
        total_duration_min,
        swim_days,
        avg_distance_per_day_m,
        daily,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn session(y: i32, m: u32, d: u32, h: u32, distance: f64) -> SwimSession {
        SwimSession {
            id: format!("{}-{}-{} {}h", y, m, d, h),
            date: Local.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap(),
            distance_m: distance,
            duration_min: 30.0,
            stroke: None,
            calories: None,
            pool_id: None,
            avg_pace: None,
        }
    }

    fn now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 11, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_empty_input() {
        let stats = weekly_stats(&[], now());
        assert_eq!(stats.total_distance_m, 0.0);
        assert_eq!(stats.swim_days, 0);
        assert_eq!(stats.avg_distance_per_day_m, 0.0);
        assert!(stats.daily.is_empty());
    }

    #[test]
    fn test_timestamp_cutoff_is_exact() {
        // Cutoff is 2024-11-08 12:00. The 11 AM swim on the 8th is out,
        // the 1 PM swim on the 8th is in.
        let sessions = vec![
            session(2024, 11, 8, 11, 500.0),
            session(2024, 11, 8, 13, 700.0),
        ];
        let stats = weekly_stats(&sessions, now());
        assert_eq!(stats.total_distance_m, 700.0);
        assert_eq!(stats.swim_days, 1);
    }

    #[test]
    fn test_calendar_day_cutoff_keeps_whole_days() {
        let sessions = vec![
            session(2024, 11, 8, 11, 500.0),
            session(2024, 11, 8, 13, 700.0),
        ];
        let stats = weekly_stats_with(&sessions, now(), WeekCutoff::CalendarDay);
        assert_eq!(stats.total_distance_m, 1200.0);
        assert_eq!(stats.swim_days, 1);
    }

    #[test]
    fn test_daily_breakdown_is_chronological() {
        let sessions = vec![
            session(2024, 11, 14, 7, 1000.0),
            session(2024, 11, 12, 7, 500.0),
            session(2024, 11, 14, 19, 500.0),
        ];
        let stats = weekly_stats(&sessions, now());
        assert_eq!(stats.daily.len(), 2);
        assert_eq!(
            stats.daily[0].date,
            NaiveDate::from_ymd_opt(2024, 11, 12).unwrap()
        );
        assert_eq!(stats.daily[1].distance_m, 1500.0);
        assert_eq!(stats.swim_days, 2);
        assert_eq!(stats.avg_distance_per_day_m, 1000.0);
    }
}
