//! Badge checking logic

use super::definitions::{Badge, BADGES};
use crate::domain::ProgressState;

/// Badges whose condition now holds but that are not yet earned.
///
/// Read-only: the caller records the returned ids and grants their bonus XP.
/// Results follow catalog order, so crossing several thresholds of the same
/// family at once yields them lowest first.
pub fn evaluate_achievements(state: &ProgressState) -> Vec<&'static Badge> {
    BADGES
        .iter()
        .filter(|badge| !state.has_badge(badge.id))
        .filter(|badge| badge.condition.is_met(state))
        .collect()
}

/// Next unearned badge of each condition family, with (current, target)
pub fn upcoming_badges(state: &ProgressState) -> Vec<(&'static Badge, u64, u64)> {
    let mut seen = Vec::new();
    let mut upcoming = Vec::new();

    for badge in BADGES.iter().filter(|b| !state.has_badge(b.id)) {
        let family = std::mem::discriminant(&badge.condition);
        if seen.contains(&family) {
            continue;
        }
        seen.push(family);
        let (current, target) = badge.condition.progress(state);
        upcoming.push((badge, current, target));
    }

    upcoming
}
