//! Swim statistics engine
//!
//! Pure, synchronous derivations over a slice of [`crate::SwimSession`]:
//! - Monthly roll-ups with per-stroke breakdowns
//! - Stroke totals and percentage shares
//! - Trailing-week summary
//! - Consecutive-day streaks and weekly counts
//! - Habit grid for calendar-heatmap display
//!
//! Nothing in here performs I/O or reads the wall clock: every time-relative
//! operation takes "now"/"today" as an explicit parameter, captured once by
//! the caller and threaded through, so results are deterministic and
//! boundary-consistent even when invoked at a day or week rollover.

pub mod calendar;
pub mod habit;
pub mod monthly;
pub mod streak;
pub mod stroke;
pub mod weekly;

pub use calendar::{day_key, days_between, month_key};
pub use habit::{habit_grid, intensity, HabitCell, HabitGrid};
pub use monthly::{current_month_stats, monthly_stats, MonthlyStats};
pub use streak::{current_streak, longest_streak, this_week_count, weekday_frequency};
pub use stroke::{stroke_stats, StrokeStats};
pub use weekly::{weekly_stats, weekly_stats_with, DailyTotal, WeekCutoff, WeeklyStats};
