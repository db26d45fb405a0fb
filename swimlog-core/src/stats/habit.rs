//! Habit grid: a dense N-weeks-by-7-days calendar window for heatmap views.

use crate::config::HabitConfig;
use crate::stats::calendar::day_key;
use crate::types::{Stroke, SwimSession};
use chrono::{Duration, NaiveDate};
use serde::Serialize;

/// One day-cell of the habit grid.
#[derive(Debug, Clone, Serialize)]
pub struct HabitCell {
    /// Local calendar date of the cell
    pub date: NaiveDate,
    /// Sessions that fall on this date (exact calendar-day match)
    pub sessions: Vec<SwimSession>,
    /// Total distance in meters on this date
    pub total_distance_m: f64,
    /// Stroke with the largest summed distance on this date; freestyle when
    /// the day is empty
    pub dominant_stroke: Stroke,
    /// Intensity tier 0..=4 derived from the configured thresholds.
    /// Renderers wanting a different mapping can use `total_distance_m`.
    pub intensity: u8,
}

/// A contiguous window of whole weeks ending today.
///
/// Always exactly `week_count` rows of exactly 7 cells. Rows are positional
/// chunks of 7 starting at the window's first day; they are not aligned to a
/// weekday (the renderer owns any visual alignment).
#[derive(Debug, Clone, Serialize)]
pub struct HabitGrid {
    pub weeks: Vec<Vec<HabitCell>>,
}

impl HabitGrid {
    /// Number of week rows.
    pub fn week_count(&self) -> usize {
        self.weeks.len()
    }

    /// All cells in chronological order.
    pub fn cells(&self) -> impl Iterator<Item = &HabitCell> {
        self.weeks.iter().flatten()
    }
}

/// Build the habit grid for the `week_count * 7` days ending at `today`.
///
/// The first cell is `today - (week_count*7 - 1)` days, so the last cell is
/// always today. Days with no sessions become empty cells rather than being
/// skipped.
pub fn habit_grid(sessions: &[SwimSession], today: NaiveDate, config: &HabitConfig) -> HabitGrid {
    let day_total = config.week_count * 7;
    let start = today - Duration::days(day_total as i64 - 1);

    let mut days: Vec<HabitCell> = Vec::with_capacity(day_total);
    for offset in 0..day_total {
        let date = start + Duration::days(offset as i64);
        let day_sessions: Vec<SwimSession> = sessions
            .iter()
            .filter(|s| day_key(s.date) == date)
            .cloned()
            .collect();
        let total_distance_m: f64 = day_sessions.iter().map(|s| s.distance_m).sum();

        days.push(HabitCell {
            date,
            dominant_stroke: dominant_stroke(&day_sessions),
            intensity: intensity(total_distance_m, &config.intensity_thresholds),
            total_distance_m,
            sessions: day_sessions,
        });
    }

    let mut weeks: Vec<Vec<HabitCell>> = Vec::with_capacity(config.week_count);
    let mut days = days.into_iter();
    for _ in 0..config.week_count {
        weeks.push(days.by_ref().take(7).collect());
    }

    HabitGrid { weeks }
}

/// Intensity tier for a day's total distance: the number of thresholds met.
pub fn intensity(total_distance_m: f64, thresholds: &[f64; 4]) -> u8 {
    thresholds.iter().filter(|&&t| total_distance_m >= t).count() as u8
}

/// Stroke with the largest summed distance among a day's sessions.
///
/// Accumulates left to right in input order; the first stroke to reach the
/// maximum wins ties (strict comparison against a freestyle/0 seed), and an
/// empty day is freestyle.
fn dominant_stroke(day_sessions: &[SwimSession]) -> Stroke {
    let mut totals: Vec<(Stroke, f64)> = Vec::new();
    for session in day_sessions {
        let stroke = session.effective_stroke();
        match totals.iter_mut().find(|(s, _)| *s == stroke) {
            Some((_, distance)) => *distance += session.distance_m,
            None => totals.push((stroke, session.distance_m)),
        }
    }

    let mut best = (Stroke::Freestyle, 0.0);
    for &(stroke, distance) in &totals {
        if distance > best.1 {
            best = (stroke, distance);
        }
    }
    best.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    fn session(y: i32, m: u32, d: u32, distance: f64, stroke: Option<Stroke>) -> SwimSession {
        SwimSession {
            id: format!("{}-{}-{}", y, m, d),
            date: Local.with_ymd_and_hms(y, m, d, 7, 0, 0).unwrap(),
            distance_m: distance,
            duration_min: 30.0,
            stroke,
            calories: None,
            pool_id: None,
            avg_pace: None,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 11, 15).unwrap()
    }

    #[test]
    fn test_grid_shape_is_always_exact() {
        let config = HabitConfig::default();
        for sessions in [vec![], vec![session(2024, 11, 15, 1000.0, None)]] {
            let grid = habit_grid(&sessions, today(), &config);
            assert_eq!(grid.week_count(), 12);
            assert!(grid.weeks.iter().all(|w| w.len() == 7));
            assert_eq!(grid.cells().count(), 12 * 7);
        }

        let small = HabitConfig {
            week_count: 4,
            ..Default::default()
        };
        let grid = habit_grid(&[], today(), &small);
        assert_eq!(grid.cells().count(), 28);
    }

    #[test]
    fn test_last_cell_is_today() {
        let grid = habit_grid(&[], today(), &HabitConfig::default());
        let last = grid.cells().last().unwrap();
        assert_eq!(last.date, today());
        let first = grid.cells().next().unwrap();
        assert_eq!(first.date, today() - Duration::days(12 * 7 - 1));
    }

    #[test]
    fn test_sessions_land_on_exact_days() {
        let sessions = vec![
            session(2024, 11, 15, 800.0, None),
            session(2024, 11, 15, 400.0, None),
            session(2024, 11, 1, 600.0, None),
            session(2023, 11, 15, 999.0, None), // outside the window
        ];
        let grid = habit_grid(&sessions, today(), &HabitConfig::default());

        let today_cell = grid.cells().find(|c| c.date == today()).unwrap();
        assert_eq!(today_cell.sessions.len(), 2);
        assert_eq!(today_cell.total_distance_m, 1200.0);

        let in_window: usize = grid.cells().map(|c| c.sessions.len()).sum();
        assert_eq!(in_window, 3);
    }

    #[test]
    fn test_intensity_tiers() {
        let thresholds = HabitConfig::default().intensity_thresholds;
        assert_eq!(intensity(0.0, &thresholds), 0);
        assert_eq!(intensity(499.0, &thresholds), 0);
        assert_eq!(intensity(500.0, &thresholds), 1);
        assert_eq!(intensity(1000.0, &thresholds), 2);
        assert_eq!(intensity(1500.0, &thresholds), 3);
        assert_eq!(intensity(2000.0, &thresholds), 4);
        assert_eq!(intensity(5000.0, &thresholds), 4);
    }

    #[test]
    fn test_dominant_stroke_by_distance() {
        let sessions = vec![
            session(2024, 11, 15, 200.0, Some(Stroke::Butterfly)),
            session(2024, 11, 15, 800.0, Some(Stroke::Backstroke)),
        ];
        let grid = habit_grid(&sessions, today(), &HabitConfig::default());
        let cell = grid.cells().find(|c| c.date == today()).unwrap();
        assert_eq!(cell.dominant_stroke, Stroke::Backstroke);
    }

    #[test]
    fn test_dominant_stroke_tie_keeps_first_encountered() {
        let sessions = vec![
            session(2024, 11, 15, 500.0, Some(Stroke::Medley)),
            session(2024, 11, 15, 500.0, Some(Stroke::Butterfly)),
        ];
        let grid = habit_grid(&sessions, today(), &HabitConfig::default());
        let cell = grid.cells().find(|c| c.date == today()).unwrap();
        assert_eq!(cell.dominant_stroke, Stroke::Medley);
    }

    #[test]
    fn test_empty_day_defaults_to_freestyle() {
        let grid = habit_grid(&[], today(), &HabitConfig::default());
        assert!(grid.cells().all(|c| c.dominant_stroke == Stroke::Freestyle));
        assert!(grid.cells().all(|c| c.intensity == 0));
    }
}
