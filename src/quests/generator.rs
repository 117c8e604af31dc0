//! Daily quest generation
//!
//! Three quests are drawn every day. Each draw picks a kind uniformly and a
//! target from the kind's fixed range; the reward is derived from the target.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use rand::Rng;

use crate::domain::{dates, ProgressState, Quest, QuestCategory, QuestKind, QuestMeta};

/// Number of quests generated per day
pub const DAILY_QUEST_COUNT: usize = 3;

/// Draw a target for `kind`
pub fn sample_target<R: Rng + ?Sized>(kind: QuestKind, rng: &mut R) -> u64 {
    match kind {
        QuestKind::Chars => rng.gen_range(1..=4u64) * 100,
        QuestKind::Notes => rng.gen_range(1..=3u64),
        QuestKind::Links => rng.gen_range(1..=5u64),
        QuestKind::Xp => rng.gen_range(1..=5u64) * 100,
    }
}

/// XP granted for completing a quest of `kind` with `target`
pub fn reward_for(kind: QuestKind, target: u64) -> u64 {
    match kind {
        QuestKind::Chars => target / 10,
        QuestKind::Notes => target * 50,
        QuestKind::Links => target * 20,
        QuestKind::Xp => target / 5,
    }
}

pub fn describe(kind: QuestKind, target: u64) -> String {
    match kind {
        QuestKind::Chars => format!("Write {} characters", target),
        QuestKind::Notes => format!("Create {} new notes", target),
        QuestKind::Links => format!("Add {} internal links", target),
        QuestKind::Xp => format!("Gain {} XP", target),
    }
}

/// Expiry stamp for quests generated at `now`: 24h later
pub fn daily_expiry(now: DateTime<Utc>) -> DateTime<Utc> {
    now + Duration::hours(24)
}

/// Build a fresh daily quest instance. `day` is the local date used in the id.
pub fn daily_quest(
    day: NaiveDate,
    index: usize,
    kind: QuestKind,
    target: u64,
    expires_at: DateTime<Utc>,
) -> Quest {
    Quest {
        id: format!("daily-{}-{}", dates::format_date(day), index),
        category: QuestCategory::Daily,
        description: describe(kind, target),
        target,
        progress: 0,
        completed: false,
        reward_xp: reward_for(kind, target),
        expires_at,
        meta: QuestMeta { kind },
    }
}

/// Replace yesterday's daily quests with a new set for `today`.
///
/// `today` is the local calendar day, `now` the current instant. Does nothing
/// if quests were already generated today. Non-daily quests are kept in place
/// ahead of the new dailies. Returns true if a new set was made.
pub fn generate_daily_quests<R: Rng + ?Sized>(
    state: &mut ProgressState,
    today: NaiveDate,
    now: DateTime<Utc>,
    rng: &mut R,
) -> bool {
    if state.last_quest_gen_date == Some(today) {
        return false;
    }

    state.quests.retain(|q| !q.is_daily());
    let expires_at = daily_expiry(now);

    for index in 0..DAILY_QUEST_COUNT {
        let kind = QuestKind::ALL[rng.gen_range(0..QuestKind::ALL.len())];
        let target = sample_target(kind, rng);
        state.quests.push(daily_quest(today, index, kind, target, expires_at));
    }

    state.last_quest_gen_date = Some(today);
    true
}
