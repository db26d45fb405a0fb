//! # swimlog-core
//!
//! Core library for swimlog - swim-log analytics.
//!
//! This library provides:
//! - Domain types for swim sessions and strokes
//! - Pure statistics over a session log (monthly roll-ups, stroke shares,
//!   trailing-week summary, streaks, habit grid)
//! - Gamification levels
//! - Export-file ingestion
//! - Configuration management and logging infrastructure
//!
//! ## Design
//!
//! The stats modules are deterministic pure functions: they take the full
//! session list (and, where relevant, an explicit "now"/"today") and return
//! freshly built aggregates. They never perform I/O, never mutate their
//! input, and tolerate empty input at every entry point.
//!
//! ## Example
//!
//! ```rust,no_run
//! use chrono::Local;
//! use swimlog_core::{ingest, stats, Config};
//!
//! let config = Config::load().expect("failed to load config");
//! let sessions = ingest::load_export(std::path::Path::new("swims.json"))
//!     .expect("failed to load export");
//!
//! let now = Local::now();
//! let months = stats::monthly_stats(&sessions);
//! let streak = stats::current_streak(&sessions, now.date_naive());
//! let grid = stats::habit_grid(&sessions, now.date_naive(), &config.habit);
//! # let _ = (months, streak, grid);
//! ```

// Re-export commonly used items at the crate root
pub use config::Config;
pub use error::{Error, Result};
pub use types::*;

// Public modules
pub mod config;
pub mod error;
pub mod format;
pub mod ingest;
pub mod level;
pub mod logging;
pub mod stats;
pub mod types;
