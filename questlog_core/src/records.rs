//! Cardio personal records.

use crate::{CardioCategory, CardioLog};
use serde::Serialize;

/// Sessions this short or shorter are ignored for top speed
pub const MIN_SPEED_DURATION_MINUTES: f64 = 15.0;

/// Best single-session values
#[derive(Clone, Debug, Serialize, PartialEq, Default)]
pub struct PersonalRecords {
    pub sessions: usize,
    pub total_distance: f64,
    pub longest_distance: f64,
    pub most_calories: u32,
    /// Average km/h of the fastest qualifying session
    pub top_speed: f64,
}

#[derive(Clone, Debug, Serialize, PartialEq, Default)]
pub struct CardioRecords {
    pub running: PersonalRecords,
    pub cycling: PersonalRecords,
}

/// Average speed of a session in km/h, or 0 when it does not qualify
pub fn session_speed(log: &CardioLog) -> f64 {
    if log.duration <= MIN_SPEED_DURATION_MINUTES {
        return 0.0;
    }
    let speed = log.distance / (log.duration / 60.0);
    if speed.is_finite() {
        speed
    } else {
        0.0
    }
}

/// Records over `logs`, optionally limited to one category
pub fn personal_records(logs: &[CardioLog], category: Option<CardioCategory>) -> PersonalRecords {
    logs.iter()
        .filter(|l| category.map_or(true, |c| l.equipment.category() == c))
        .fold(PersonalRecords::default(), |mut pr, log| {
            pr.sessions += 1;
            pr.total_distance += log.distance;
            pr.longest_distance = pr.longest_distance.max(log.distance);
            pr.most_calories = pr.most_calories.max(log.calories);
            pr.top_speed = pr.top_speed.max(session_speed(log));
            pr
        })
}

pub fn records_by_category(logs: &[CardioLog]) -> CardioRecords {
    CardioRecords {
        running: personal_records(logs, Some(CardioCategory::Running)),
        cycling: personal_records(logs, Some(CardioCategory::Cycling)),
    }
}
