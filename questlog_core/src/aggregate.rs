//! Per-category summaries for a time window.
//!
//! Weight and nutrition deliberately differ on an empty window: weight falls
//! back to the most recent all-time value, nutrition reports 0.

use crate::{
    BodyweightLog, CardioCategory, CardioLog, LogBook, NutritionLog, StrengthLog, TimeWindow,
    Timestamped, WeightLog,
};
use chrono::{DateTime, TimeZone};
use serde::Serialize;

/// Summary of every log category for one window
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Summary {
    pub window: TimeWindow,
    pub weight: WeightSummary,
    pub cardio: CardioSummary,
    pub strength: StrengthSummary,
    pub bodyweight: BodyweightSummary,
    pub nutrition: NutritionSummary,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct WeightSummary {
    /// In-window average, or the latest all-time value when the window is
    /// empty. `None` only when no weight has ever been logged.
    pub average: Option<f64>,
    pub entries: usize,
    pub is_fallback: bool,
}

#[derive(Clone, Debug, Serialize, PartialEq, Default)]
pub struct CardioTotals {
    pub sessions: usize,
    pub duration: f64,
    pub distance: f64,
    pub calories: u64,
}

impl CardioTotals {
    fn add(&mut self, log: &CardioLog) {
        self.sessions += 1;
        self.duration += log.duration;
        self.distance += log.distance;
        self.calories += u64::from(log.calories);
    }
}

#[derive(Clone, Debug, Serialize, PartialEq, Default)]
pub struct CardioSummary {
    pub total: CardioTotals,
    pub running: CardioTotals,
    pub cycling: CardioTotals,
}

#[derive(Clone, Debug, Serialize, PartialEq, Default)]
pub struct StrengthSummary {
    pub sets_count: usize,
    pub total_volume: f64,
}

#[derive(Clone, Debug, Serialize, PartialEq, Default)]
pub struct BodyweightSummary {
    pub bw_count: usize,
    /// Reps plus plank seconds
    pub total_units: u64,
}

#[derive(Clone, Debug, Serialize, PartialEq, Default)]
pub struct NutritionSummary {
    pub average_score: f64,
    pub entries: usize,
}

/// Summarize every category of `book` inside `window`
pub fn summarize<Tz: TimeZone>(book: &LogBook, window: TimeWindow, now: &DateTime<Tz>) -> Summary {
    let summary = Summary {
        window,
        weight: summarize_weight(&book.weight, window, now),
        cardio: summarize_cardio(&book.cardio, window, now),
        strength: summarize_strength(&book.strength, window, now),
        bodyweight: summarize_bodyweight(&book.bodyweight, window, now),
        nutrition: summarize_nutrition(&book.nutrition, window, now),
    };

    tracing::debug!(
        "Summarized {} logs for {} window",
        book.len(),
        window.as_str()
    );

    summary
}

fn in_window<'a, T: Timestamped + 'a, Tz: TimeZone + 'a>(
    logs: &'a [T],
    window: TimeWindow,
    now: &'a DateTime<Tz>,
) -> impl Iterator<Item = &'a T> + 'a {
    logs.iter().filter(move |l| window.contains(&l.date(), now))
}

pub fn summarize_weight<Tz: TimeZone>(
    logs: &[WeightLog],
    window: TimeWindow,
    now: &DateTime<Tz>,
) -> WeightSummary {
    let (sum, entries) = in_window(logs, window, now)
        .fold((0.0, 0usize), |(sum, n), l| (sum + l.weight, n + 1));

    if entries > 0 {
        return WeightSummary {
            average: Some(sum / entries as f64),
            entries,
            is_fallback: false,
        };
    }

    let latest = logs.iter().max_by_key(|l| l.date).map(|l| l.weight);
    WeightSummary {
        average: latest,
        entries: 0,
        is_fallback: latest.is_some(),
    }
}

pub fn summarize_cardio<Tz: TimeZone>(
    logs: &[CardioLog],
    window: TimeWindow,
    now: &DateTime<Tz>,
) -> CardioSummary {
    let mut summary = CardioSummary::default();
    for log in in_window(logs, window, now) {
        summary.total.add(log);
        match log.equipment.category() {
            CardioCategory::Running => summary.running.add(log),
            CardioCategory::Cycling => summary.cycling.add(log),
        }
    }
    summary
}

pub fn summarize_strength<Tz: TimeZone>(
    logs: &[StrengthLog],
    window: TimeWindow,
    now: &DateTime<Tz>,
) -> StrengthSummary {
    in_window(logs, window, now).fold(StrengthSummary::default(), |mut acc, set| {
        acc.sets_count += 1;
        acc.total_volume += set.volume();
        acc
    })
}

pub fn summarize_bodyweight<Tz: TimeZone>(
    logs: &[BodyweightLog],
    window: TimeWindow,
    now: &DateTime<Tz>,
) -> BodyweightSummary {
    in_window(logs, window, now).fold(BodyweightSummary::default(), |mut acc, log| {
        acc.bw_count += 1;
        acc.total_units += u64::from(log.count);
        acc
    })
}

pub fn summarize_nutrition<Tz: TimeZone>(
    logs: &[NutritionLog],
    window: TimeWindow,
    now: &DateTime<Tz>,
) -> NutritionSummary {
    let (total, entries) = in_window(logs, window, now)
        .fold((0u64, 0usize), |(sum, n), l| (sum + u64::from(l.status.score()), n + 1));

    NutritionSummary {
        average_score: if entries == 0 {
            0.0
        } else {
            total as f64 / entries as f64
        },
        entries,
    }
}
