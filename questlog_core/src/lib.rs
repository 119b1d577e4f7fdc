#![forbid(unsafe_code)]

//! Core domain model and gamification engine for questlog.
//!
//! This crate provides:
//! - Activity log types (weight, cardio, strength, bodyweight, nutrition)
//! - Windowed summaries per category
//! - Streak, XP, level and badge evaluation
//! - Cardio records, activity heatmap and weight trend
//! - Read-only snapshot loading and configuration
//!
//! Every evaluation is a pure function of a [`LogBook`] and an explicit `now`.

pub mod types;
pub mod error;
pub mod config;
pub mod logging;
pub mod window;
pub mod aggregate;
pub mod streak;
pub mod xp;
pub mod level;
pub mod stats;
pub mod badges;
pub mod records;
pub mod heatmap;
pub mod trend;
pub mod store;
pub mod scoreboard;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use config::Config;
pub use window::TimeWindow;
pub use aggregate::{summarize, Summary};
pub use streak::current_streak;
pub use xp::total_xp;
pub use level::{resolve_level, LevelProgress};
pub use stats::{compute_stats, StatsSnapshot};
pub use badges::{calculate_badges, evaluate_badges, BadgeInstance, BadgeTier};
pub use store::{JsonlSource, LogSource};
pub use scoreboard::{evaluate, Scoreboard};
