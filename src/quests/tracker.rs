//! Quest progress tracking

use crate::domain::{ProgressState, Quest, QuestKind};

/// Advance every open quest of `kind` by `amount`.
///
/// Progress is clamped to the target. Quests that reach their target in this
/// call are marked completed and returned in quest order; quests of other
/// kinds and already-completed quests are left untouched.
pub fn advance_quests(state: &mut ProgressState, kind: QuestKind, amount: u64) -> Vec<Quest> {
    let mut completed = Vec::new();
    if amount == 0 {
        return completed;
    }

    for quest in state
        .quests
        .iter_mut()
        .filter(|q| !q.completed && q.kind() == kind)
    {
        quest.progress = quest.progress.saturating_add(amount).min(quest.target);
        if quest.progress >= quest.target {
            quest.completed = true;
            completed.push(quest.clone());
        }
    }

    completed
}

/// Total reward XP of a set of quests
pub fn total_reward(quests: &[Quest]) -> u64 {
    quests.iter().map(|q| q.reward_xp).sum()
}
