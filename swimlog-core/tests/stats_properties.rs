//! Cross-module behavior of the stats engine on realistic swim logs.

use chrono::{Duration, Local, NaiveDate, TimeZone};
use swimlog_core::config::HabitConfig;
use swimlog_core::stats::{
    current_streak, habit_grid, longest_streak, monthly_stats, stroke_stats, weekly_stats,
};
use swimlog_core::{Stroke, SwimSession};

fn session(date: NaiveDate, distance: f64, stroke: Option<Stroke>) -> SwimSession {
    SwimSession {
        id: format!("{}", date),
        date: Local
            .with_ymd_and_hms(
                chrono::Datelike::year(&date),
                chrono::Datelike::month(&date),
                chrono::Datelike::day(&date),
                7,
                30,
                0,
            )
            .unwrap(),
        distance_m: distance,
        duration_min: distance / 30.0,
        stroke,
        calories: Some(distance * 0.25),
        pool_id: Some("city-pool".to_string()),
        avg_pace: None,
    }
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A month of mixed training: strokes vary, some rest days, some doubles.
fn training_log() -> Vec<SwimSession> {
    let mut log = Vec::new();
    let start = day(2024, 11, 1);
    for offset in 0..30 {
        if offset % 4 == 3 {
            continue; // rest day
        }
        let date = start + Duration::days(offset);
        let stroke = match offset % 5 {
            0 => Some(Stroke::Freestyle),
            1 => Some(Stroke::Backstroke),
            2 => Some(Stroke::Breaststroke),
            3 => Some(Stroke::Butterfly),
            _ => None,
        };
        log.push(session(date, 800.0 + 100.0 * (offset % 3) as f64, stroke));
        if offset % 7 == 0 {
            log.push(session(date, 400.0, Some(Stroke::Medley)));
        }
    }
    log
}

#[test]
fn stroke_totals_partition_the_grand_total() {
    let log = training_log();
    let grand_total: f64 = log.iter().map(|s| s.distance_m).sum();
    let stats = stroke_stats(&log);

    let partitioned: f64 = stats.iter().map(|s| s.total_distance_m).sum();
    assert!((partitioned - grand_total).abs() < 1e-9);

    let counts: usize = stats.iter().map(|s| s.count).sum();
    assert_eq!(counts, log.len());

    let percentages: f64 = stats.iter().map(|s| s.percentage).sum();
    assert!((percentages - 100.0).abs() < 1e-9);

    // Dominant stroke first.
    for pair in stats.windows(2) {
        assert!(pair[0].total_distance_m >= pair[1].total_distance_m);
    }
}

#[test]
fn every_entry_point_tolerates_an_empty_log() {
    let today = day(2024, 11, 15);
    assert!(monthly_stats(&[]).is_empty());
    assert!(stroke_stats(&[]).is_empty());
    assert_eq!(current_streak(&[], today), 0);
    assert_eq!(longest_streak(&[]), 0);

    let weekly = weekly_stats(&[], Local.with_ymd_and_hms(2024, 11, 15, 12, 0, 0).unwrap());
    assert_eq!(weekly.swim_days, 0);
    assert_eq!(weekly.avg_distance_per_day_m, 0.0);

    let grid = habit_grid(&[], today, &HabitConfig::default());
    assert_eq!(grid.cells().count(), 12 * 7);
}

#[test]
fn grid_shape_is_independent_of_input() {
    let config = HabitConfig {
        week_count: 6,
        ..Default::default()
    };
    let grid = habit_grid(&training_log(), day(2024, 11, 30), &config);
    assert_eq!(grid.week_count(), 6);
    assert!(grid.weeks.iter().all(|week| week.len() == 7));
}

#[test]
fn months_spanning_a_year_boundary_stay_descending() {
    let log = vec![
        session(day(2024, 12, 2), 1000.0, None),
        session(day(2024, 11, 28), 1000.0, None),
        session(day(2025, 1, 3), 1000.0, None),
    ];
    let months: Vec<String> = monthly_stats(&log).into_iter().map(|m| m.month).collect();
    assert_eq!(months, vec!["2025-01", "2024-12", "2024-11"]);
}

#[test]
fn streaks_agree_with_the_rest_day_pattern() {
    // training_log swims 3 days, rests 1, repeating; longest run is 3.
    let log = training_log();
    assert_eq!(longest_streak(&log), 3);

    // Anchored right after the final swim day the current streak matches
    // the tail run; anchored two days later it has lapsed.
    assert_eq!(current_streak(&log, day(2024, 11, 30)), 2);
    assert_eq!(current_streak(&log, day(2024, 12, 2)), 0);
}

#[test]
fn weekly_summary_counts_distinct_days_not_sessions() {
    let log = vec![
        session(day(2024, 11, 14), 1000.0, None),
        session(day(2024, 11, 14), 500.0, None),
        session(day(2024, 11, 13), 800.0, None),
    ];
    let now = Local.with_ymd_and_hms(2024, 11, 15, 12, 0, 0).unwrap();
    let weekly = weekly_stats(&log, now);
    assert_eq!(weekly.swim_days, 2);
    assert_eq!(weekly.total_distance_m, 2300.0);
    assert_eq!(weekly.avg_distance_per_day_m, 1150.0);
    assert_eq!(weekly.daily.len(), 2);
    assert!(weekly.daily[0].date < weekly.daily[1].date);
}
