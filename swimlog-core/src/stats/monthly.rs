//! Monthly roll-ups of the swim log.

use crate::stats::calendar::month_key;
use crate::types::{Stroke, SwimSession};
use chrono::{DateTime, Local};
use serde::Serialize;
use std::collections::BTreeMap;

/// Aggregate statistics for one calendar month.
#[derive(Debug, Clone, Serialize)]
pub struct MonthlyStats {
    /// Month key, `"YYYY-MM"` in the local calendar
    pub month: String,
    /// Total distance in meters
    pub total_distance_m: f64,
    /// Total duration in minutes
    pub total_duration_min: f64,
    /// Total calories burned (missing values count as 0)
    pub total_calories: f64,
    /// Number of sessions in the month
    pub swim_count: usize,
    /// Average distance per session in meters
    pub avg_distance_m: f64,
    /// Distance per stroke within the month
    pub stroke_breakdown: BTreeMap<Stroke, f64>,
}

/// Group sessions into monthly buckets, most recent month first.
///
/// Empty input yields an empty vec.
pub fn monthly_stats(sessions: &[SwimSession]) -> Vec<MonthlyStats> {
    let mut by_month: BTreeMap<String, Vec<&SwimSession>> = BTreeMap::new();
    for session in sessions {
        by_month
            .entry(month_key(session.date))
            .or_default()
            .push(session);
    }

    // BTreeMap iterates ascending by key; reverse for most-recent-first.
    by_month
        .into_iter()
        .rev()
        .map(|(month, group)| summarize_month(month, &group))
        .collect()
}

/// Stats for the month containing `now`, if any sessions fall in it.
///
/// `now` is captured once by the caller and threaded through, so a call
/// straddling midnight on the last day of a month stays consistent.
pub fn current_month_stats(sessions: &[SwimSession], now: DateTime<Local>) -> Option<MonthlyStats> {
    let current = month_key(now);
    monthly_stats(sessions)
        .into_iter()
        .find(|stats| stats.month == current)
}

fn summarize_month(month: String, group: &[&SwimSession]) -> MonthlyStats {
    let total_distance_m: f64 = group.iter().map(|s| s.distance_m).sum();
    let total_duration_min: f64 = group.iter().map(|s| s.duration_min).sum();
    let total_calories: f64 = group.iter().map(|s| s.calories_or_zero()).sum();

    let mut stroke_breakdown: BTreeMap<Stroke, f64> = BTreeMap::new();
    for session in group {
        *stroke_breakdown.entry(session.effective_stroke()).or_insert(0.0) += session.distance_m;
    }

    // Groups are built from non-empty partitions, but guard anyway.
    let swim_count = group.len();
    let avg_distance_m = if swim_count > 0 {
        total_distance_m / swim_count as f64
    } else {
        0.0
    };

    MonthlyStats {
        month,
        total_distance_m,
        total_duration_min,
        total_calories,
        swim_count,
        avg_distance_m,
        stroke_breakdown,
    }
}
