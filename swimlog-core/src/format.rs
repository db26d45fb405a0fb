//! Formatting helpers shared across front-ends.

/// Format a distance in meters for display (e.g., "800m", "1.5km").
pub fn format_distance(meters: f64) -> String {
    if meters >= 1000.0 {
        format!("{:.1}km", meters / 1000.0)
    } else {
        format!("{}m", meters.round() as i64)
    }
}

/// Format a duration in minutes for display (e.g., "45m", "1h 30m").
pub fn format_duration(minutes: f64) -> String {
    let hours = (minutes / 60.0).floor() as i64;
    let mins = (minutes % 60.0).round() as i64;

    if hours > 0 {
        format!("{}h {}m", hours, mins)
    } else {
        format!("{}m", mins)
    }
}

/// Format a pace in seconds per 100 m (e.g., "1:45/100m").
pub fn format_pace(seconds_per_100m: f64) -> String {
    let mins = (seconds_per_100m / 60.0).floor() as i64;
    let secs = (seconds_per_100m % 60.0).round() as i64;
    format!("{}:{:02}/100m", mins, secs)
}
