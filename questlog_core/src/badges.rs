//! Badge catalog and evaluation.
//!
//! Evaluation is a two-stage pipeline:
//! 1. [`evaluate_badges`] turns a [`StatsSnapshot`] into one instance per
//!    (family, milestone) pair, in catalog order.
//! 2. [`arrange_for_display`] collapses each family to its best earned badge
//!    and its next target, then applies the global display order.
//!
//! [`calculate_badges`] runs both.

use crate::StatsSnapshot;
use once_cell::sync::Lazy;
use serde::Serialize;
use std::cmp::Ordering;

/// Cached badge catalog, built once
static BADGE_CATALOG: Lazy<Vec<BadgeFamily>> = Lazy::new(build_badge_catalog);

/// The nine built-in badge families
pub fn badge_catalog() -> &'static [BadgeFamily] {
    &BADGE_CATALOG
}

// ============================================================================
// Catalog Types
// ============================================================================

/// Cosmetic rank assigned by milestone position
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BadgeTier {
    Bronze,
    Silver,
    Gold,
    Platinum,
    Diamond,
}

impl BadgeTier {
    /// Milestones past the fifth stay at diamond
    pub fn for_index(index: usize) -> Self {
        match index {
            0 => BadgeTier::Bronze,
            1 => BadgeTier::Silver,
            2 => BadgeTier::Gold,
            3 => BadgeTier::Platinum,
            _ => BadgeTier::Diamond,
        }
    }
}

/// Icon reference handed to the display layer
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BadgeIcon {
    Flame,
    Footprints,
    Dumbbell,
    Salad,
    Crown,
    Zap,
    Sun,
    Moon,
    Calendar,
}

/// Which statistic a family is measured against
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BadgeStatistic {
    Streak,
    Distance,
    Workouts,
    GreenFood,
    Level,
    BodyweightReps,
    EarlyBird,
    NightOwl,
    Weekend,
}

impl BadgeStatistic {
    pub fn value(self, stats: &StatsSnapshot) -> f64 {
        match self {
            BadgeStatistic::Streak => f64::from(stats.streak),
            BadgeStatistic::Distance => stats.total_dist,
            BadgeStatistic::Workouts => stats.total_workouts as f64,
            BadgeStatistic::GreenFood => stats.total_green_food as f64,
            BadgeStatistic::Level => stats.level as f64,
            BadgeStatistic::BodyweightReps => stats.total_bw_reps as f64,
            BadgeStatistic::EarlyBird => stats.early_bird_count as f64,
            BadgeStatistic::NightOwl => stats.night_owl_count as f64,
            BadgeStatistic::Weekend => stats.weekend_count as f64,
        }
    }
}

/// An achievement track with ascending milestones
#[derive(Clone, Debug)]
pub struct BadgeFamily {
    pub group_id: &'static str,
    pub name: &'static str,
    pub icon: BadgeIcon,
    pub statistic: BadgeStatistic,
    pub milestones: &'static [u32],
    pub describe: fn(u32) -> String,
}

/// One evaluated (family, milestone) pair
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct BadgeInstance {
    pub id: String,
    pub group_id: String,
    pub name: String,
    pub description: String,
    pub tier: BadgeTier,
    pub icon: BadgeIcon,
    pub sort_order: u32,
    pub is_earned: bool,
    pub progress: f64,
    pub target: f64,
}

impl BadgeInstance {
    /// Fraction of the target reached (may exceed 1 for earned badges)
    pub fn completion(&self) -> f64 {
        if self.target > 0.0 {
            self.progress / self.target
        } else {
            0.0
        }
    }

    fn milestone_index(&self) -> u32 {
        self.sort_order / SORT_STEP
    }
}

const SORT_STEP: u32 = 100;
const NUMERALS: [&str; 7] = ["I", "II", "III", "IV", "V", "VI", "VII"];

fn build_badge_catalog() -> Vec<BadgeFamily> {
    vec![
        BadgeFamily {
            group_id: "streak",
            name: "Consistency",
            icon: BadgeIcon::Flame,
            statistic: BadgeStatistic::Streak,
            milestones: &[3, 7, 14, 30, 60, 100, 365],
            describe: |v| format!("{} Day Streak", v),
        },
        BadgeFamily {
            group_id: "distance",
            name: "Road Runner",
            icon: BadgeIcon::Footprints,
            statistic: BadgeStatistic::Distance,
            milestones: &[42, 100, 500, 1000, 2500, 5000, 10000],
            describe: |v| format!("{}km Total Distance", v),
        },
        BadgeFamily {
            group_id: "workouts",
            name: "Iron Warrior",
            icon: BadgeIcon::Dumbbell,
            statistic: BadgeStatistic::Workouts,
            milestones: &[10, 25, 50, 100, 250, 500, 1000],
            describe: |v| format!("{} Workouts Completed", v),
        },
        BadgeFamily {
            group_id: "food",
            name: "Clean Eater",
            icon: BadgeIcon::Salad,
            statistic: BadgeStatistic::GreenFood,
            milestones: &[10, 50, 100, 200, 365, 500, 1000],
            describe: |v| format!("{} Healthy Meals", v),
        },
        BadgeFamily {
            group_id: "level",
            name: "Legend",
            icon: BadgeIcon::Crown,
            statistic: BadgeStatistic::Level,
            milestones: &[2, 5, 10, 20, 30, 50, 100],
            describe: |v| format!("Reach Level {}", v),
        },
        BadgeFamily {
            group_id: "bodyweight",
            name: "Calisthenics",
            icon: BadgeIcon::Zap,
            statistic: BadgeStatistic::BodyweightReps,
            milestones: &[100, 500, 1000, 5000, 10000, 25000, 50000],
            describe: |v| format!("{} Total Reps", v),
        },
        BadgeFamily {
            group_id: "early",
            name: "Early Bird",
            icon: BadgeIcon::Sun,
            statistic: BadgeStatistic::EarlyBird,
            milestones: &[5, 20, 50, 100, 200],
            describe: |v| format!("{} Morning Workouts", v),
        },
        BadgeFamily {
            group_id: "night",
            name: "Night Owl",
            icon: BadgeIcon::Moon,
            statistic: BadgeStatistic::NightOwl,
            milestones: &[5, 20, 50, 100, 200],
            describe: |v| format!("{} Late Night Workouts", v),
        },
        BadgeFamily {
            group_id: "weekend",
            name: "Weekend Warrior",
            icon: BadgeIcon::Calendar,
            statistic: BadgeStatistic::Weekend,
            milestones: &[10, 50, 100, 250, 500],
            describe: |v| format!("{} Weekend Activities", v),
        },
    ]
}

impl BadgeFamily {
    /// One instance per milestone, in ascending milestone order
    pub fn evaluate(&self, stats: &StatsSnapshot) -> Vec<BadgeInstance> {
        let current = self.statistic.value(stats);

        self.milestones
            .iter()
            .enumerate()
            .map(|(index, &milestone)| {
                let target = f64::from(milestone);
                BadgeInstance {
                    id: format!("{}_{}", self.group_id, index),
                    group_id: self.group_id.to_string(),
                    name: format!("{} {}", self.name, NUMERALS.get(index).unwrap_or(&"Max")),
                    description: (self.describe)(milestone),
                    tier: BadgeTier::for_index(index),
                    icon: self.icon,
                    sort_order: index as u32 * SORT_STEP,
                    is_earned: current >= target,
                    progress: current,
                    target,
                }
            })
            .collect()
    }
}

// ============================================================================
// Stage 1: flat evaluation
// ============================================================================

/// Every badge instance of every family, in catalog order
pub fn evaluate_badges(stats: &StatsSnapshot) -> Vec<BadgeInstance> {
    badge_catalog()
        .iter()
        .flat_map(|family| family.evaluate(stats))
        .collect()
}

// ============================================================================
// Stage 2: grouping and ordering
// ============================================================================

/// Global display order: earned first (highest target first), then unearned
/// by completion ratio (closest first). Ties keep their incoming order.
pub fn display_order(a: &BadgeInstance, b: &BadgeInstance) -> Ordering {
    match (a.is_earned, b.is_earned) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (true, true) => b.target.total_cmp(&a.target),
        (false, false) => b.completion().total_cmp(&a.completion()),
    }
}

/// Collapse each family to at most two badges (highest earned, lowest
/// unearned) and sort the result for display.
pub fn arrange_for_display(badges: Vec<BadgeInstance>) -> Vec<BadgeInstance> {
    struct Slot {
        group_id: String,
        best_earned: Option<BadgeInstance>,
        next_target: Option<BadgeInstance>,
    }

    let mut slots: Vec<Slot> = Vec::new();

    for badge in badges {
        let idx = match slots.iter().position(|s| s.group_id == badge.group_id) {
            Some(idx) => idx,
            None => {
                slots.push(Slot {
                    group_id: badge.group_id.clone(),
                    best_earned: None,
                    next_target: None,
                });
                slots.len() - 1
            }
        };
        let slot = &mut slots[idx];

        if badge.is_earned {
            let replace = slot
                .best_earned
                .as_ref()
                .map_or(true, |b| badge.milestone_index() > b.milestone_index());
            if replace {
                slot.best_earned = Some(badge);
            }
        } else {
            let replace = slot
                .next_target
                .as_ref()
                .map_or(true, |b| badge.milestone_index() < b.milestone_index());
            if replace {
                slot.next_target = Some(badge);
            }
        }
    }

    let mut shown: Vec<BadgeInstance> = slots
        .into_iter()
        .flat_map(|s| s.best_earned.into_iter().chain(s.next_target))
        .collect();
    shown.sort_by(display_order);
    shown
}

/// Evaluate and arrange in one step
pub fn calculate_badges(stats: &StatsSnapshot) -> Vec<BadgeInstance> {
    let flat = evaluate_badges(stats);
    let earned = flat.iter().filter(|b| b.is_earned).count();
    tracing::debug!("Evaluated {} badges, {} earned", flat.len(), earned);
    arrange_for_display(flat)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn stats() -> StatsSnapshot {
        StatsSnapshot {
            level: 1,
            ..Default::default()
        }
    }

    fn family(group_id: &str) -> &'static BadgeFamily {
        badge_catalog()
            .iter()
            .find(|f| f.group_id == group_id)
            .unwrap()
    }

    #[test]
    fn test_catalog_shape() {
        let catalog = badge_catalog();
        assert_eq!(catalog.len(), 9);

        for f in catalog {
            assert!(f.milestones.windows(2).all(|w| w[0] < w[1]), "{}", f.group_id);
            let expected = match f.group_id {
                "early" | "night" | "weekend" => 5,
                _ => 7,
            };
            assert_eq!(f.milestones.len(), expected, "{}", f.group_id);
        }

        assert_eq!(evaluate_badges(&stats()).len(), 6 * 7 + 3 * 5);
    }

    #[test]
    fn test_instance_fields() {
        let s = StatsSnapshot {
            streak: 8,
            ..stats()
        };
        let streak = family("streak").evaluate(&s);

        assert_eq!(streak[0].id, "streak_0");
        assert_eq!(streak[0].name, "Consistency I");
        assert_eq!(streak[0].description, "3 Day Streak");
        assert_eq!(streak[0].tier, BadgeTier::Bronze);
        assert_eq!(streak[0].icon, BadgeIcon::Flame);
        assert!(streak[0].is_earned);
        assert!(streak[1].is_earned);
        assert!(!streak[2].is_earned);
        assert_eq!(streak[2].progress, 8.0);
        assert_eq!(streak[2].target, 14.0);
        assert_eq!(streak[2].sort_order, 200);

        assert_eq!(streak[6].name, "Consistency VII");
        assert_eq!(streak[5].tier, BadgeTier::Diamond);
        assert_eq!(streak[6].tier, BadgeTier::Diamond);
    }

    #[test]
    fn test_description_templates() {
        assert_eq!(family("distance").evaluate(&stats())[0].description, "42km Total Distance");
        assert_eq!(family("level").evaluate(&stats())[2].description, "Reach Level 10");
        assert_eq!(
            family("weekend").evaluate(&stats())[4].description,
            "500 Weekend Activities"
        );
    }

    #[test]
    fn test_level_family_earned_at_level_two() {
        let s = StatsSnapshot { level: 2, ..stats() };
        let level = family("level").evaluate(&s);
        assert!(level[0].is_earned);
        assert!(!level[1].is_earned);
    }

    #[test]
    fn test_display_collapses_families() {
        let s = StatsSnapshot {
            streak: 20,
            total_workouts: 3,
            ..stats()
        };
        let shown = calculate_badges(&s);

        let streak: Vec<_> = shown.iter().filter(|b| b.group_id == "streak").collect();
        assert_eq!(streak.len(), 2);
        assert!(streak.iter().any(|b| b.id == "streak_2" && b.is_earned));
        assert!(streak.iter().any(|b| b.id == "streak_3" && !b.is_earned));

        let workouts: Vec<_> = shown.iter().filter(|b| b.group_id == "workouts").collect();
        assert_eq!(workouts.len(), 1);
        assert_eq!(workouts[0].id, "workouts_0");

        // Nine families, one with an earned badge
        assert_eq!(shown.len(), 10);
    }

    #[test]
    fn test_fully_earned_family_shows_only_top() {
        let s = StatsSnapshot {
            weekend_count: 1000,
            ..stats()
        };
        let shown = calculate_badges(&s);
        let weekend: Vec<_> = shown.iter().filter(|b| b.group_id == "weekend").collect();
        assert_eq!(weekend.len(), 1);
        assert_eq!(weekend[0].id, "weekend_4");
    }

    #[test]
    fn test_display_sort_order() {
        let s = StatsSnapshot {
            streak: 7,           // earned 7, next 14 (0.5)
            total_dist: 1200.0,  // earned 1000, next 2500 (0.48)
            total_workouts: 9,   // next 10 (0.9)
            ..stats()
        };
        let shown = calculate_badges(&s);

        assert_eq!(shown[0].id, "distance_3");
        assert_eq!(shown[1].id, "streak_1");
        assert_eq!(shown[2].id, "workouts_0");
        // 7/14 and level 1/2 tie at 0.5 and keep catalog order
        assert_eq!(shown[3].id, "streak_2");
        assert_eq!(shown[4].id, "level_0");
        assert_eq!(shown[5].id, "distance_4");

        let first_unearned = shown.iter().position(|b| !b.is_earned).unwrap();
        assert!(shown[first_unearned..].iter().all(|b| !b.is_earned));
    }

    #[test]
    fn test_zero_state_has_no_earned_badges() {
        let shown = calculate_badges(&stats());
        assert_eq!(shown.len(), 9);
        assert!(shown.iter().all(|b| !b.is_earned));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: earning a milestone implies earning every lower one
        #[test]
        fn prop_earning_is_monotonic(
            streak in 0u32..400,
            dist in 0.0f64..12000.0,
            reps in 0u64..60000,
            level in 1u64..120,
        ) {
            let s = StatsSnapshot {
                streak,
                total_dist: dist,
                total_bw_reps: reps,
                level,
                ..Default::default()
            };

            for f in badge_catalog() {
                let badges = f.evaluate(&s);
                for pair in badges.windows(2) {
                    prop_assert!(!pair[1].is_earned || pair[0].is_earned);
                }
            }
        }
    }
}
