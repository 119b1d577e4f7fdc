//! Level resolution from cumulative XP.

use serde::Serialize;

/// XP needed to advance one level
pub const XP_PER_LEVEL: u64 = 1000;

/// Level and progress derived from a total XP value
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct LevelProgress {
    pub xp: u64,
    pub level: u64,
    /// XP at which the current level began
    pub level_start: u64,
    /// XP at which the next level begins
    pub next_level_at: u64,
    /// Percentage through the current level, in [0, 100)
    pub progress_to_next_level: f64,
}

/// Resolve level 1.. from `xp`. There is no level cap.
pub fn resolve_level(xp: u64) -> LevelProgress {
    let level = xp / XP_PER_LEVEL + 1;
    let level_start = (level - 1) * XP_PER_LEVEL;

    LevelProgress {
        xp,
        level,
        level_start,
        next_level_at: level_start + XP_PER_LEVEL,
        progress_to_next_level: (xp - level_start) as f64 / XP_PER_LEVEL as f64 * 100.0,
    }
}
