//! Per-stroke totals and percentage shares.

use crate::types::{Stroke, SwimSession};
use serde::Serialize;

/// One stroke's share of the swim log.
#[derive(Debug, Clone, Serialize)]
pub struct StrokeStats {
    /// Stroke code
    pub stroke: Stroke,
    /// Fixed display label for the stroke
    pub display_name: &'static str,
    /// Total distance in meters across all sessions with this stroke
    pub total_distance_m: f64,
    /// Number of sessions with this stroke
    pub count: usize,
    /// Share of the grand total distance, 0..=100 (0 when the grand total is 0)
    pub percentage: f64,
}

/// Per-stroke totals, dominant stroke first.
///
/// The descending order is load-bearing: "top N strokes" consumers index
/// into the result rather than re-sorting. Sessions without a stroke count
/// as freestyle; the grand total is over the unfiltered input, so the
/// per-stroke totals partition it exactly.
pub fn stroke_stats(sessions: &[SwimSession]) -> Vec<StrokeStats> {
    let grand_total: f64 = sessions.iter().map(|s| s.distance_m).sum();

    // Accumulate in first-encounter order so equal totals keep a stable rank.
    let mut groups: Vec<(Stroke, f64, usize)> = Vec::new();
    for session in sessions {
        let stroke = session.effective_stroke();
        match groups.iter_mut().find(|(s, _, _)| *s == stroke) {
            Some((_, distance, count)) => {
                *distance += session.distance_m;
                *count += 1;
            }
            None => groups.push((stroke, session.distance_m, 1)),
        }
    }

    let mut stats: Vec<StrokeStats> = groups
        .into_iter()
        .map(|(stroke, total_distance_m, count)| StrokeStats {
            stroke,
            display_name: stroke.display_name(),
            total_distance_m,
            count,
            percentage: if grand_total > 0.0 {
                (total_distance_m / grand_total) * 100.0
            } else {
                0.0
            },
        })
        .collect();

    stats.sort_by(|a, b| b.total_distance_m.total_cmp(&a.total_distance_m));
    stats
}
