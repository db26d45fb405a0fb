//! swimlog - swim log analytics CLI
//!
//! Loads a swim-log export (JSON produced by the mobile app) and prints
//! monthly roll-ups, stroke shares, streaks, and a habit grid.

use anyhow::{Context, Result};
use chrono::{DateTime, Local, NaiveDate, TimeZone};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use swimlog_core::format::{format_distance, format_duration};
use swimlog_core::stats::{
    current_month_stats, current_streak, habit_grid, longest_streak, monthly_stats, stroke_stats,
    this_week_count, weekday_frequency, weekly_stats_with, WeekCutoff,
};
use swimlog_core::{level, Config, SwimSession};

#[derive(Parser)]
#[command(name = "swimlog")]
#[command(about = "Swim log analytics - months, strokes, streaks, habit grid")]
#[command(version)]
struct Args {
    /// Path to the swim-log export file (JSON array of sessions)
    #[arg(short, long, global = true, default_value = "swims.json")]
    input: PathBuf,

    /// Override "today" for deterministic output (format: YYYY-MM-DD)
    #[arg(long, global = true)]
    today: Option<String>,

    /// Output format: text (default), md, or json
    #[arg(short, long, global = true, default_value = "text")]
    format: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Current month, trailing week, streaks, and level in one report
    Summary {
        /// Likes received (for the level calculation)
        #[arg(long, default_value_t = 0)]
        likes: u32,
        /// Feed posts written (for the level calculation)
        #[arg(long, default_value_t = 0)]
        feeds: u32,
    },
    /// Monthly roll-ups, most recent month first
    Months,
    /// Per-stroke totals and percentage shares
    Strokes,
    /// Current and longest streak, this-week count, weekday frequency
    Streaks,
    /// Habit grid (N weeks x 7 days of intensity cells)
    Grid {
        /// Number of weeks to show (default from config)
        #[arg(long)]
        weeks: Option<usize>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::load().context("failed to load configuration")?;
    let _log_guard = swimlog_core::logging::init(&config.logging).ok();

    let sessions = swimlog_core::ingest::load_export(&args.input)
        .with_context(|| format!("failed to load swim log from {}", args.input.display()))?;
    tracing::info!(count = sessions.len(), "loaded swim log");

    // One "now" for the whole invocation; every time-relative stat sees the
    // same instant.
    let now = resolve_now(args.today.as_deref())?;
    let today = now.date_naive();

    match args.command {
        Command::Summary { likes, feeds } => {
            print_summary(&sessions, now, &config, likes, feeds, &args.format)?
        }
        Command::Months => print_months(&sessions, &args.format)?,
        Command::Strokes => print_strokes(&sessions, &args.format)?,
        Command::Streaks => print_streaks(&sessions, now, &args.format)?,
        Command::Grid { weeks } => {
            let mut habit = config.habit.clone();
            if let Some(weeks) = weeks {
                habit.week_count = weeks;
            }
            habit.validate().context("invalid habit grid settings")?;
            print_grid(&sessions, today, &habit, &args.format)?
        }
    }

    Ok(())
}

/// Parse the `--today` override, or fall back to the wall clock.
///
/// The override is pinned to noon local time so day-boundary math stays
/// unambiguous.
fn resolve_now(today: Option<&str>) -> Result<DateTime<Local>> {
    let Some(raw) = today else {
        return Ok(Local::now());
    };
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .with_context(|| format!("invalid --today value '{}', expected YYYY-MM-DD", raw))?;
    let noon = date
        .and_hms_opt(12, 0, 0)
        .context("invalid --today value")?;
    Local
        .from_local_datetime(&noon)
        .single()
        .context("ambiguous local time for --today")
}

fn week_cutoff(config: &Config) -> WeekCutoff {
    if config.week.calendar_day_cutoff {
        WeekCutoff::CalendarDay
    } else {
        WeekCutoff::Timestamp
    }
}

fn print_summary(
    sessions: &[SwimSession],
    now: DateTime<Local>,
    config: &Config,
    likes: u32,
    feeds: u32,
    format: &str,
) -> Result<()> {
    let today = now.date_naive();
    let month = current_month_stats(sessions, now);
    let weekly = weekly_stats_with(sessions, now, week_cutoff(config));
    let streak_now = current_streak(sessions, today);
    let streak_best = longest_streak(sessions);
    let week_count = this_week_count(sessions, now);
    let level = level::user_level(sessions.len() as u32, likes, feeds);

    if format == "json" {
        let json = serde_json::json!({
            "current_month": month,
            "week": weekly,
            "streaks": {
                "current": streak_now,
                "longest": streak_best,
                "this_week_count": week_count,
            },
            "level": level,
        });
        println!("{}", serde_json::to_string_pretty(&json)?);
        return Ok(());
    }

    println!();
    println!("Swim Summary for {}", now.format("%b %d, %Y"));
    println!();

    match &month {
        Some(m) => {
            println!("THIS MONTH ({})", m.month);
            println!(
                "   Swims: {:<8} Distance: {:<10} Time: {}",
                m.swim_count,
                format_distance(m.total_distance_m),
                format_duration(m.total_duration_min)
            );
            println!(
                "   Avg distance: {}   Calories: {:.0}",
                format_distance(m.avg_distance_m),
                m.total_calories
            );
        }
        None => println!("THIS MONTH\n   No swims logged yet."),
    }
    println!();

    println!("LAST 7 DAYS");
    println!(
        "   Distance: {:<10} Time: {:<10} Active days: {}",
        format_distance(weekly.total_distance_m),
        format_duration(weekly.total_duration_min),
        weekly.swim_days
    );
    println!();

    println!("STREAKS");
    println!(
        "   Current: {} day{}   Longest: {} day{}   This week: {} swim{}",
        streak_now,
        plural(streak_now as usize),
        streak_best,
        plural(streak_best as usize),
        week_count,
        plural(week_count)
    );
    println!();

    println!("LEVEL");
    println!("   {} {} (level {})", level.emoji, level.name, level.level);
    let next = level::next_level_requirements(level.level, sessions.len() as u32, likes, feeds);
    if let Some(next_def) = next.next_level {
        println!(
            "   Next: {} ({} swims, {} likes, {} posts to go)",
            next_def.name, next.remaining_swims, next.remaining_likes, next.remaining_feeds
        );
    }
    println!();

    Ok(())
}

fn print_months(sessions: &[SwimSession], format: &str) -> Result<()> {
    let months = monthly_stats(sessions);

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&months)?),
        "md" => {
            println!("| Month | Swims | Distance | Time | Avg | Calories |");
            println!("|-------|-------|----------|------|-----|----------|");
            for m in &months {
                println!(
                    "| {} | {} | {} | {} | {} | {:.0} |",
                    m.month,
                    m.swim_count,
                    format_distance(m.total_distance_m),
                    format_duration(m.total_duration_min),
                    format_distance(m.avg_distance_m),
                    m.total_calories
                );
            }
        }
        _ => {
            if months.is_empty() {
                println!("No swims logged.");
                return Ok(());
            }
            for m in &months {
                println!(
                    "{}  {:>3} swims  {:>8}  {:>8}  avg {}",
                    m.month,
                    m.swim_count,
                    format_distance(m.total_distance_m),
                    format_duration(m.total_duration_min),
                    format_distance(m.avg_distance_m)
                );
            }
        }
    }
    Ok(())
}

fn print_strokes(sessions: &[SwimSession], format: &str) -> Result<()> {
    let strokes = stroke_stats(sessions);

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&strokes)?),
        "md" => {
            println!("| Stroke | Swims | Distance | Share |");
            println!("|--------|-------|----------|-------|");
            for s in &strokes {
                println!(
                    "| {} | {} | {} | {:.1}% |",
                    s.display_name,
                    s.count,
                    format_distance(s.total_distance_m),
                    s.percentage
                );
            }
        }
        _ => {
            if strokes.is_empty() {
                println!("No swims logged.");
                return Ok(());
            }
            for s in &strokes {
                println!(
                    "{:<13} {:>3} swims  {:>8}  {:>5.1}%",
                    s.display_name,
                    s.count,
                    format_distance(s.total_distance_m),
                    s.percentage
                );
            }
        }
    }
    Ok(())
}

fn print_streaks(sessions: &[SwimSession], now: DateTime<Local>, format: &str) -> Result<()> {
    let today = now.date_naive();
    let current = current_streak(sessions, today);
    let longest = longest_streak(sessions);
    let week = this_week_count(sessions, now);
    let frequency = weekday_frequency(sessions);

    if format == "json" {
        let json = serde_json::json!({
            "current": current,
            "longest": longest,
            "this_week_count": week,
            "weekday_frequency": frequency,
        });
        println!("{}", serde_json::to_string_pretty(&json)?);
        return Ok(());
    }

    println!("Current streak: {} day{}", current, plural(current as usize));
    println!("Longest streak: {} day{}", longest, plural(longest as usize));
    println!("This week:      {} swim{}", week, plural(week));
    println!();
    println!("By weekday:");
    const DAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
    for (name, count) in DAYS.iter().zip(frequency) {
        println!("   {}  {}", name, "▇".repeat(count as usize));
    }
    Ok(())
}

fn print_grid(
    sessions: &[SwimSession],
    today: NaiveDate,
    habit: &swimlog_core::config::HabitConfig,
    format: &str,
) -> Result<()> {
    let grid = habit_grid(sessions, today, habit);

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&grid)?);
        return Ok(());
    }

    const GLYPHS: [char; 5] = ['·', '░', '▒', '▓', '█'];
    for week in &grid.weeks {
        let row: String = week
            .iter()
            .map(|cell| GLYPHS[cell.intensity.min(4) as usize])
            .collect();
        let first = week.first().map(|c| c.date.format("%b %d").to_string());
        println!("{}  {}", row, first.unwrap_or_default());
    }
    println!();
    println!("·=rest  ░≥{0}m  ▒≥{1}m  ▓≥{2}m  █≥{3}m",
        habit.intensity_thresholds[0] as i64,
        habit.intensity_thresholds[1] as i64,
        habit.intensity_thresholds[2] as i64,
        habit.intensity_thresholds[3] as i64,
    );
    Ok(())
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}
