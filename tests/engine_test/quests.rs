//! Tests for daily quest generation and tracking

use rand::rngs::StdRng;
use rand::SeedableRng;

use levelup::domain::{ProgressState, QuestCategory, QuestKind};
use levelup::quests::{
    advance_quests, daily_expiry, daily_quest, generate_daily_quests, reward_for,
    DAILY_QUEST_COUNT,
};

use crate::common::{day, noon};

#[test]
fn test_generation_is_once_per_day() {
    let mut state = ProgressState::default();
    let mut rng = StdRng::seed_from_u64(3);

    assert!(generate_daily_quests(&mut state, day(6, 1), noon(6, 1), &mut rng));
    let first = state.quests.clone();
    assert_eq!(first.len(), DAILY_QUEST_COUNT);

    assert!(!generate_daily_quests(&mut state, day(6, 1), noon(6, 1), &mut rng));
    assert_eq!(state.quests, first);

    assert!(generate_daily_quests(&mut state, day(6, 2), noon(6, 2), &mut rng));
    assert_eq!(state.quests.len(), DAILY_QUEST_COUNT);
    assert!(state.quests.iter().all(|q| q.id.starts_with("daily-2024-06-02-")));
}

#[test]
fn test_generated_quests_are_well_formed() {
    let mut rng = StdRng::seed_from_u64(99);
    for d in 1..=30 {
        let mut state = ProgressState::default();
        generate_daily_quests(&mut state, day(6, d), noon(6, d), &mut rng);
        for quest in &state.quests {
            assert_eq!(quest.category, QuestCategory::Daily);
            assert_eq!(quest.progress, 0);
            assert!(!quest.completed);
            assert!(quest.target > 0);
            assert_eq!(quest.reward_xp, reward_for(quest.kind(), quest.target));
            assert_eq!(quest.expires_at, daily_expiry(noon(6, d)));
            assert!(!quest.is_expired(noon(6, d)));
        }
    }
}

#[test]
fn test_weekly_quests_survive_regeneration() {
    let mut state = ProgressState::default();
    let mut weekly = daily_quest(day(6, 1), 9, QuestKind::Notes, 10, noon(6, 2));
    weekly.id = "weekly-2024-23".to_string();
    weekly.category = QuestCategory::Weekly;
    state.quests.push(weekly.clone());

    let mut rng = StdRng::seed_from_u64(1);
    generate_daily_quests(&mut state, day(6, 3), noon(6, 3), &mut rng);
    assert_eq!(state.quests.len(), DAILY_QUEST_COUNT + 1);
    assert_eq!(state.quests[0], weekly);
}

#[test]
fn test_tracking_completes_each_quest_once() {
    let mut state = ProgressState::default();
    state.quests = vec![
        daily_quest(day(6, 1), 0, QuestKind::Links, 3, noon(6, 2)),
        daily_quest(day(6, 1), 1, QuestKind::Chars, 100, noon(6, 2)),
        daily_quest(day(6, 1), 2, QuestKind::Links, 5, noon(6, 2)),
    ];

    assert!(advance_quests(&mut state, QuestKind::Links, 2).is_empty());

    let done = advance_quests(&mut state, QuestKind::Links, 10);
    let ids: Vec<_> = done.iter().map(|q| q.id.as_str()).collect();
    assert_eq!(ids, ["daily-2024-06-01-0", "daily-2024-06-01-2"]);
    assert_eq!(state.quests[0].progress, 3);
    assert_eq!(state.quests[2].progress, 5);

    // Chars quest untouched, completed ones stay completed
    assert_eq!(state.quests[1].progress, 0);
    assert!(advance_quests(&mut state, QuestKind::Links, 1).is_empty());
}
