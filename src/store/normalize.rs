//! Load-time repair of a deserialized progress record
//!
//! Runs once after loading. Missing sub-structures are already backfilled by
//! serde defaults; this pass restores the numeric invariants.

use crate::domain::ProgressState;
use crate::progression::{apply_xp, xp_required_for_level};

/// Restore the invariants of `state`. Returns true if anything was changed.
///
/// Idempotent: a second call on the result changes nothing.
pub fn normalize(state: &mut ProgressState) -> bool {
    let before = state.clone();

    if state.level == 0 {
        tracing::warn!("Saved level was 0, resetting to 1");
        state.level = 1;
    }

    if state.next_level_xp == 0 {
        tracing::warn!("Saved XP threshold was 0, recomputing for level {}", state.level);
        state.next_level_xp = xp_required_for_level(state.level);
    }

    // Carry any unresolved overflow into levels without counting new XP
    if state.current_xp >= state.next_level_xp {
        apply_xp(state, 0);
    }

    let mut seen = Vec::with_capacity(state.earned_badges.len());
    state.earned_badges.retain(|id| {
        if seen.contains(id) {
            tracing::warn!("Dropping duplicate badge id {}", id);
            false
        } else {
            seen.push(id.clone());
            true
        }
    });

    for quest in &mut state.quests {
        if quest.progress > quest.target {
            quest.progress = quest.target;
        }
        if quest.progress >= quest.target {
            quest.completed = true;
        }
    }

    *state != before
}
