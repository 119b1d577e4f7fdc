//! Lifetime statistics that drive badge evaluation.

use crate::level::resolve_level;
use crate::xp::{lifetime_distance, total_xp};
use crate::{LogBook, NutritionStatus};
use chrono::{DateTime, Datelike, TimeZone, Timelike, Utc, Weekday};
use serde::Serialize;

/// Scalar summary of the whole log history at one instant
#[derive(Clone, Debug, Serialize, PartialEq, Default)]
pub struct StatsSnapshot {
    pub streak: u32,
    pub total_dist: f64,
    pub total_workouts: u64,
    pub total_green_food: u64,
    pub total_bw_reps: u64,
    pub level: u64,
    pub early_bird_count: u64,
    pub night_owl_count: u64,
    pub weekend_count: u64,
}

/// Time-of-day and day-of-week buckets over every log
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct TimeBuckets {
    pub early_bird: u64,
    pub night_owl: u64,
    pub weekend: u64,
}

/// Local hour in [4, 9)
pub fn is_early_bird(hour: u32) -> bool {
    (4..9).contains(&hour)
}

/// Local hour in [20, 24) or [0, 2)
pub fn is_night_owl(hour: u32) -> bool {
    hour >= 20 || hour < 2
}

pub fn is_weekend(day: Weekday) -> bool {
    matches!(day, Weekday::Sat | Weekday::Sun)
}

/// Bucket every instant by its local hour and weekday in `tz`
pub fn time_buckets<I, Tz>(dates: I, tz: &Tz) -> TimeBuckets
where
    I: IntoIterator<Item = DateTime<Utc>>,
    Tz: TimeZone,
{
    dates
        .into_iter()
        .fold(TimeBuckets::default(), |mut buckets, instant| {
            let local = instant.with_timezone(tz);
            let hour = local.hour();
            if is_early_bird(hour) {
                buckets.early_bird += 1;
            }
            if is_night_owl(hour) {
                buckets.night_owl += 1;
            }
            if is_weekend(local.weekday()) {
                buckets.weekend += 1;
            }
            buckets
        })
}

/// Compute the full snapshot for `book` as of `now`
pub fn compute_stats<Tz: TimeZone>(book: &LogBook, now: &DateTime<Tz>) -> StatsSnapshot {
    let buckets = time_buckets(book.all_dates(), &now.timezone());

    StatsSnapshot {
        streak: crate::streak::current_streak(book, now),
        total_dist: lifetime_distance(book),
        total_workouts: book.strength.len() as u64,
        total_green_food: book
            .nutrition
            .iter()
            .filter(|n| n.status == NutritionStatus::Green)
            .count() as u64,
        total_bw_reps: book.bodyweight.iter().map(|b| u64::from(b.count)).sum(),
        level: resolve_level(total_xp(book)).level,
        early_bird_count: buckets.early_bird,
        night_owl_count: buckets.night_owl,
        weekend_count: buckets.weekend,
    }
}
