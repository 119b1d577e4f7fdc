//! Full evaluation of a log snapshot.
//!
//! [`evaluate`] ties the pieces together:
//! - lifetime statistics (streak, totals, time buckets)
//! - XP and level
//! - badges grouped and ordered for display
//!
//! Nothing is cached between calls. Every evaluation starts from the raw logs.

use crate::badges::{calculate_badges, BadgeInstance};
use crate::level::{resolve_level, LevelProgress};
use crate::stats::{compute_stats, StatsSnapshot};
use crate::xp::{xp_breakdown, XpBreakdown};
use crate::{LogBook, Summary, TimeWindow};
use chrono::{DateTime, TimeZone};
use serde::Serialize;

/// Everything the display layer needs for the progress view
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Scoreboard {
    pub stats: StatsSnapshot,
    pub progress: LevelProgress,
    pub xp_breakdown: XpBreakdown,
    pub badges: Vec<BadgeInstance>,
}

/// Evaluate `book` as of `now`
pub fn evaluate<Tz: TimeZone>(book: &LogBook, now: &DateTime<Tz>) -> Scoreboard {
    let breakdown = xp_breakdown(book);
    let progress = resolve_level(breakdown.total());
    let stats = compute_stats(book, now);
    let badges = calculate_badges(&stats);

    tracing::info!(
        "Evaluated {} logs: {} XP, level {}, streak {}",
        book.len(),
        progress.xp,
        progress.level,
        stats.streak
    );

    Scoreboard {
        stats,
        progress,
        xp_breakdown: breakdown,
        badges,
    }
}

/// Period summary for the dashboard cards
pub fn summary<Tz: TimeZone>(book: &LogBook, window: TimeWindow, now: &DateTime<Tz>) -> Summary {
    crate::aggregate::summarize(book, window, now)
}
