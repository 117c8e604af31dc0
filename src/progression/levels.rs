//! XP curve and level rollover
//!
//! The XP needed to advance from a level grows as `BASE_XP * level^1.5`.

use crate::domain::ProgressState;

/// XP needed to leave level 1
pub const BASE_XP: u64 = 100;

/// Growth exponent of the curve
pub const EXPONENT: f64 = 1.5;

/// XP required to advance from `level` to `level + 1`.
///
/// Levels below 1 are treated as level 1 so the threshold is always positive.
pub fn xp_required_for_level(level: u32) -> u64 {
    let level = level.max(1) as f64;
    // `level * sqrt(level)` is the reference form of level^1.5. `powf(1.5)`
    // rounds differently on a few very high levels.
    (BASE_XP as f64 * level * level.sqrt()).floor() as u64
}

/// A level up event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelUp {
    pub old_level: u32,
    pub new_level: u32,
}

impl LevelUp {
    pub fn levels_gained(&self) -> u32 {
        self.new_level - self.old_level
    }
}

/// Add XP and roll over as many levels as it covers.
///
/// Afterwards `current_xp < next_level_xp` holds and `total_xp` has grown by
/// exactly `amount` (saturating at `u64::MAX`). Returns the level change, if any.
pub fn apply_xp(state: &mut ProgressState, amount: u64) -> Option<LevelUp> {
    let old_level = state.level;
    state.current_xp = state.current_xp.saturating_add(amount);
    state.total_xp = state.total_xp.saturating_add(amount);

    if state.next_level_xp == 0 {
        state.next_level_xp = xp_required_for_level(state.level);
    }

    while state.current_xp >= state.next_level_xp {
        state.current_xp -= state.next_level_xp;
        state.level += 1;
        state.next_level_xp = xp_required_for_level(state.level);
    }

    (state.level > old_level).then_some(LevelUp {
        old_level,
        new_level: state.level,
    })
}
