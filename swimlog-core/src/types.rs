//! Core domain types for swimlog
//!
//! These types mirror the swim-session records produced by the mobile app's
//! export feature. The analytics core never mutates a session; every derived
//! statistic is freshly constructed.
//!
//! ## Terminology
//!
//! | Term | Definition |
//! |------|------------|
//! | **Session** | One logged swim: distance, duration, date, optional stroke and calories |
//! | **Stroke** | Swimming technique category (freestyle, backstroke, ...) |
//! | **Bucket** | A group of sessions sharing a derived key (month, stroke, calendar day) |
//! | **Streak** | Count of consecutive local calendar days with at least one session |
//!
//! Dates carry a full timestamp, but every bucketing decision in the core is
//! made on the **local calendar date** (year/month/day in local time), so a
//! session at 11 PM and one the next day at 1 AM land in different buckets.

use chrono::{DateTime, Local};
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

// ============================================
// Stroke
// ============================================

/// Swimming stroke categories (closed set).
///
/// Sessions without a stroke are aggregated as [`Stroke::Freestyle`];
/// unknown codes arriving through deserialization degrade to "no stroke"
/// rather than failing the whole import.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stroke {
    Freestyle,
    Backstroke,
    Breaststroke,
    Butterfly,
    Medley,
}

impl Stroke {
    /// Returns the display name for this stroke
    pub fn display_name(&self) -> &'static str {
        match self {
            Stroke::Freestyle => "Freestyle",
            Stroke::Backstroke => "Backstroke",
            Stroke::Breaststroke => "Breaststroke",
            Stroke::Butterfly => "Butterfly",
            Stroke::Medley => "Medley",
        }
    }

    /// Returns the identifier used in export files
    pub fn as_str(&self) -> &'static str {
        match self {
            Stroke::Freestyle => "freestyle",
            Stroke::Backstroke => "backstroke",
            Stroke::Breaststroke => "breaststroke",
            Stroke::Butterfly => "butterfly",
            Stroke::Medley => "medley",
        }
    }

    /// All strokes, in display order.
    pub fn all() -> [Stroke; 5] {
        [
            Stroke::Freestyle,
            Stroke::Backstroke,
            Stroke::Breaststroke,
            Stroke::Butterfly,
            Stroke::Medley,
        ]
    }
}

impl FromStr for Stroke {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "freestyle" => Ok(Stroke::Freestyle),
            "backstroke" => Ok(Stroke::Backstroke),
            "breaststroke" => Ok(Stroke::Breaststroke),
            "butterfly" => Ok(Stroke::Butterfly),
            "medley" => Ok(Stroke::Medley),
            _ => Err(format!("unknown stroke: {}", s)),
        }
    }
}

impl std::fmt::Display for Stroke {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Display label for a raw stroke code.
///
/// Known codes get their fixed label; unknown codes pass through unchanged
/// so a renderer can still show something sensible.
pub fn stroke_label(code: &str) -> &str {
    match Stroke::from_str(code) {
        Ok(stroke) => stroke.display_name(),
        Err(_) => code,
    }
}

// ============================================
// SwimSession
// ============================================

/// One logged swim session, as exported by the mobile app.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwimSession {
    /// Opaque identifier, echoed back in derived data but never interpreted
    pub id: String,
    /// When the swim happened; bucketing uses the local calendar date
    pub date: DateTime<Local>,
    /// Distance in meters
    #[serde(rename = "distance")]
    pub distance_m: f64,
    /// Duration in minutes
    #[serde(rename = "duration")]
    pub duration_min: f64,
    /// Stroke, if recorded; aggregates treat `None` as freestyle
    #[serde(
        rename = "strokeType",
        default,
        deserialize_with = "stroke_lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub stroke: Option<Stroke>,
    /// Calories burned, if recorded; treated as 0 when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
    /// Pool where the swim happened, if recorded
    #[serde(rename = "poolId", default, skip_serializing_if = "Option::is_none")]
    pub pool_id: Option<String>,
    /// Average pace in seconds per 100 m, if recorded
    #[serde(rename = "avgPace", default, skip_serializing_if = "Option::is_none")]
    pub avg_pace: Option<f64>,
}

impl SwimSession {
    /// The stroke used for aggregation: recorded stroke, or freestyle.
    pub fn effective_stroke(&self) -> Stroke {
        self.stroke.unwrap_or(Stroke::Freestyle)
    }

    /// Calories with the missing-value default applied.
    pub fn calories_or_zero(&self) -> f64 {
        self.calories.unwrap_or(0.0)
    }
}

/// Deserialize a stroke code, mapping unknown codes to `None`.
///
/// Export files written by older app versions occasionally carry stroke
/// codes outside the closed set; dropping the stroke keeps the session.
fn stroke_lenient<'de, D>(deserializer: D) -> Result<Option<Stroke>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|code| match code.parse::<Stroke>() {
        Ok(stroke) => Some(stroke),
        Err(_) => {
            tracing::warn!(code = %code, "ignoring unknown stroke code");
            None
        }
    }))
}
