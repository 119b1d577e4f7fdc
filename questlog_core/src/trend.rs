//! Weight trend and goal progress.

use crate::config::GoalConfig;
use crate::window::local_date;
use crate::WeightLog;
use chrono::{NaiveDate, TimeZone};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct DailyWeight {
    pub date: NaiveDate,
    /// Mean of the day's entries, rounded to 0.1 kg
    pub weight: f64,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct WeightTrend {
    pub days: Vec<DailyWeight>,
    pub latest: Option<f64>,
    pub goal: GoalConfig,
    /// Percent of the way from start to target. May be negative or exceed 100.
    pub goal_progress: Option<f64>,
}

fn round_tenth(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

/// Per-day averages, oldest first
pub fn daily_weights<Tz: TimeZone>(logs: &[WeightLog], tz: &Tz) -> Vec<DailyWeight> {
    let mut per_day: BTreeMap<NaiveDate, (f64, u32)> = BTreeMap::new();
    for log in logs {
        let entry = per_day.entry(local_date(&log.date, tz)).or_insert((0.0, 0));
        entry.0 += log.weight;
        entry.1 += 1;
    }

    per_day
        .into_iter()
        .map(|(date, (total, count))| DailyWeight {
            date,
            weight: round_tenth(total / f64::from(count)),
        })
        .collect()
}

/// Progress toward `goal` given the latest weight; 0 for a degenerate goal
pub fn goal_progress(latest: f64, goal: &GoalConfig) -> f64 {
    let span = goal.start_weight - goal.target_weight;
    if span == 0.0 {
        return 0.0;
    }
    (goal.start_weight - latest) / span * 100.0
}

pub fn weight_trend<Tz: TimeZone>(logs: &[WeightLog], tz: &Tz, goal: &GoalConfig) -> WeightTrend {
    let days = daily_weights(logs, tz);
    let latest = days.last().map(|d| d.weight);

    WeightTrend {
        goal_progress: latest.map(|w| goal_progress(w, goal)),
        latest,
        goal: goal.clone(),
        days,
    }
}
