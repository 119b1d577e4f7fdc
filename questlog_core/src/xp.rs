//! Experience points.
//!
//! XP is a pure fold over the lifetime log set with fixed weights. There is
//! no incremental path: every evaluation recomputes from scratch, so deleting
//! a log lowers XP.

use crate::{LogBook, NutritionStatus};
use serde::Serialize;

/// XP per weight log
pub const XP_PER_WEIGHT_LOG: u64 = 50;
/// XP per kilometre of lifetime cardio distance, truncated after scaling
pub const XP_PER_KM: f64 = 10.0;
/// XP per strength set
pub const XP_PER_STRENGTH_SET: u64 = 20;
/// XP per bodyweight rep or plank second
pub const XP_PER_BODYWEIGHT_UNIT: u64 = 1;

/// XP awarded for one nutrition log
pub fn nutrition_xp(status: NutritionStatus) -> u64 {
    match status {
        NutritionStatus::Green => 50,
        NutritionStatus::Yellow => 30,
        NutritionStatus::Orange => 10,
        NutritionStatus::Red | NutritionStatus::Unknown => 5,
    }
}

/// XP contributed by each category
#[derive(Clone, Debug, Serialize, PartialEq, Eq, Default)]
pub struct XpBreakdown {
    pub weight: u64,
    pub cardio: u64,
    pub strength: u64,
    pub bodyweight: u64,
    pub nutrition: u64,
}

impl XpBreakdown {
    pub fn total(&self) -> u64 {
        self.weight + self.cardio + self.strength + self.bodyweight + self.nutrition
    }
}

/// Lifetime cardio distance in kilometres.
///
/// Summed in sorted order so the result does not depend on collection order.
pub fn lifetime_distance(book: &LogBook) -> f64 {
    let mut distances: Vec<f64> = book.cardio.iter().map(|c| c.distance).collect();
    distances.sort_by(f64::total_cmp);
    distances.iter().sum()
}

/// Per-category XP over the whole book (never window-filtered)
pub fn xp_breakdown(book: &LogBook) -> XpBreakdown {
    let total_km = lifetime_distance(book);

    XpBreakdown {
        weight: book.weight.len() as u64 * XP_PER_WEIGHT_LOG,
        // Saturating cast: a negative total contributes nothing
        cardio: (total_km * XP_PER_KM).floor() as u64,
        strength: book.strength.len() as u64 * XP_PER_STRENGTH_SET,
        bodyweight: book
            .bodyweight
            .iter()
            .map(|b| u64::from(b.count) * XP_PER_BODYWEIGHT_UNIT)
            .sum(),
        nutrition: book.nutrition.iter().map(|n| nutrition_xp(n.status)).sum(),
    }
}

/// Total lifetime XP
pub fn total_xp(book: &LogBook) -> u64 {
    xp_breakdown(book).total()
}
