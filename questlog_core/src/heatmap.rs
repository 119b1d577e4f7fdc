//! Daily cardio activity grid for the last N local days.

use crate::window::local_date;
use crate::{CardioCategory, CardioLog};
use chrono::{DateTime, Duration, NaiveDate, TimeZone};
use serde::Serialize;
use std::collections::HashMap;

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct HeatmapCell {
    pub date: NaiveDate,
    pub count: usize,
    pub total_distance: f64,
}

/// One cell per local day, oldest first, ending today.
///
/// `days` is clamped to at least one cell.
pub fn activity_heatmap<Tz: TimeZone>(
    logs: &[CardioLog],
    category: Option<CardioCategory>,
    now: &DateTime<Tz>,
    days: u32,
) -> Vec<HeatmapCell> {
    let tz = now.timezone();
    let mut per_day: HashMap<NaiveDate, (usize, f64)> = HashMap::new();

    for log in logs
        .iter()
        .filter(|l| category.map_or(true, |c| l.equipment.category() == c))
    {
        let entry = per_day.entry(local_date(&log.date, &tz)).or_insert((0, 0.0));
        entry.0 += 1;
        entry.1 += log.distance;
    }

    let today = now.date_naive();
    let span = i64::from(days.max(1));

    (0..span)
        .rev()
        .map(|back| {
            let date = today - Duration::days(back);
            let (count, total_distance) = per_day.get(&date).copied().unwrap_or((0, 0.0));
            HeatmapCell {
                date,
                count,
                total_distance,
            }
        })
        .collect()
}

/// Number of cells with any activity
pub fn active_days(cells: &[HeatmapCell]) -> usize {
    cells.iter().filter(|c| c.count > 0).count()
}
