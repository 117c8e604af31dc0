//! Tests for activity routing and the XP cascade

use chrono::{NaiveTime, TimeZone, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;

use levelup::domain::{ActivityEvent, ActivityKind, QuestKind};
use levelup::orchestrator::{Clock, FixedClock, GamificationEvent, Orchestrator};
use levelup::progression::xp_required_for_level;
use levelup::quests::daily_quest;
use levelup::store::SaveData;

use crate::common::{day, noon, orchestrator_at};

fn note(path: &str) -> ActivityEvent {
    ActivityKind::NoteCreated.into_event(path, 1)
}

/// A save that already checked in on `today` with one known notes quest
fn checked_in_with_notes_quest(target: u64) -> SaveData {
    let today = day(7, 10);
    let mut save = SaveData::default();
    save.data.streak = 1;
    save.data.last_activity_date = Some(today);
    save.data.last_quest_gen_date = Some(today);
    save.data.quests = vec![daily_quest(today, 0, QuestKind::Notes, target, noon(7, 11))];
    save
}

#[test]
fn test_quest_reward_and_badges_resolve_in_one_dispatch() {
    let mut orch = orchestrator_at(checked_in_with_notes_quest(1), day(7, 10));
    let outcome = orch.dispatch(&note("inbox/idea.md"));

    // note 50 + quest 50 reach level 2, then level-2 and note-1 pay 50 each
    let state = orch.state();
    assert_eq!(state.total_xp, 200);
    assert_eq!(state.level, 2);
    assert_eq!(state.current_xp, 100);
    assert_eq!(state.next_level_xp, xp_required_for_level(2));
    assert_eq!(state.earned_badges, ["level-2", "note-1"]);
    assert!(state.quests[0].completed);
    assert_eq!(state.xp_on(day(7, 10)), 200);

    assert_eq!(outcome.total_xp(), 200);
    assert_eq!(outcome.completed_quests().count(), 1);
    assert_eq!(outcome.level_ups().count(), 1);
    assert!(outcome.celebrate);
}

#[test]
fn test_completed_quest_pays_only_once() {
    let mut orch = orchestrator_at(checked_in_with_notes_quest(1), day(7, 10));
    orch.dispatch(&note("a.md"));
    let outcome = orch.dispatch(&note("b.md"));

    assert_eq!(outcome.completed_quests().count(), 0);
    assert_eq!(outcome.total_xp(), 50);
    assert_eq!(orch.state().stats.notes_created, 2);
}

#[test]
fn test_check_in_is_idempotent_per_day() {
    let mut orch = orchestrator_at(SaveData::default(), day(7, 1));
    let first = orch.check_in();
    assert!(!first.is_empty());
    assert_eq!(orch.state().quests.len(), 3);

    let snapshot = orch.save_data().clone();
    let second = orch.check_in();
    assert!(second.is_empty());
    assert_eq!(orch.save_data(), &snapshot);
}

#[test]
fn test_three_day_streak_unlocks_badge() {
    let mut orch = orchestrator_at(SaveData::default(), day(7, 1));
    orch.check_in();
    orch.clock().advance(1);
    orch.check_in();
    orch.clock().advance(1);
    let outcome = orch.check_in();

    assert_eq!(orch.state().streak, 3);
    assert!(outcome.earned_badges().any(|b| b.id == "streak-3"));
    assert!(outcome.events.iter().any(|e| matches!(
        e,
        GamificationEvent::StreakUpdated(update) if update.streak == 3
    )));
    assert_eq!(orch.state().last_activity_date, Some(day(7, 3)));
}

#[test]
fn test_new_day_replaces_daily_quests() {
    let mut orch = orchestrator_at(SaveData::default(), day(7, 1));
    orch.check_in();
    let first: Vec<_> = orch.state().quests.iter().map(|q| q.id.clone()).collect();

    orch.clock().advance(1);
    orch.dispatch(&ActivityKind::Reading.into_event("a.md", 1));
    let second: Vec<_> = orch.state().quests.iter().map(|q| q.id.clone()).collect();

    assert_eq!(second.len(), 3);
    assert!(second.iter().all(|id| !first.contains(id)));
    assert_eq!(orch.state().last_quest_gen_date, Some(orch.clock().today()));
}

#[test]
fn test_excluded_folder_is_ignored_before_any_engine() {
    let mut save = SaveData::default();
    save.settings.exclude("Templates/");
    let mut orch = orchestrator_at(save, day(7, 1));

    let snapshot = orch.save_data().clone();
    let outcome = orch.dispatch(&note("/Templates/daily.md"));
    assert!(outcome.excluded);
    assert_eq!(orch.save_data(), &snapshot);

    let outcome = orch.dispatch(&note("Journal/today.md"));
    assert!(!outcome.excluded);
    assert_eq!(orch.state().stats.notes_created, 1);
}

#[test]
fn test_history_always_sums_to_total() {
    let mut orch = orchestrator_at(SaveData::default(), day(7, 1));
    for d in 0..10 {
        orch.dispatch(&note(&format!("n{}.md", d)));
        orch.dispatch(&ActivityKind::Links.into_event("n.md", 3));
        orch.dispatch(&ActivityKind::Chars.into_event("n.md", 250));
        orch.clock().advance(if d % 4 == 3 { 2 } else { 1 });
    }

    let state = orch.state();
    assert_eq!(state.xp_history.values().sum::<u64>(), state.total_xp);
    assert!(state.current_xp < state.next_level_xp);
    assert_eq!(state.stats.links_created, 30);
    assert_eq!(state.stats.chars_written, 2_500);
    assert!(state.has_badge("link-10"));
    assert!(state.has_badge("char-1k"));
}

#[test]
fn test_evening_check_in_west_of_utc_gets_open_quests() {
    let clock = FixedClock::at(day(6, 3), NaiveTime::from_hms_opt(20, 0, 0).unwrap(), -8);
    let mut orch = Orchestrator::new(SaveData::default(), clock, StdRng::seed_from_u64(8));
    orch.check_in();

    let now = orch.clock().now();
    assert_eq!(now, Utc.with_ymd_and_hms(2024, 6, 4, 4, 0, 0).unwrap());
    let quests = &orch.state().quests;
    assert_eq!(quests.len(), 3);
    for quest in quests {
        assert!(quest.id.starts_with("daily-2024-06-03-"));
        assert!(!quest.is_expired(now));
        assert_eq!(quest.expires_at, Utc.with_ymd_and_hms(2024, 6, 5, 4, 0, 0).unwrap());
    }
}

#[test]
fn test_huge_deltas_never_decrease_counters() {
    let mut orch = orchestrator_at(SaveData::default(), day(7, 1));
    let mut last = orch.state().clone();

    for _ in 0..3 {
        orch.dispatch(&ActivityKind::Chars.into_event("big.md", i64::MAX));
        let state = orch.state();
        assert!(state.total_xp >= last.total_xp);
        assert!(state.stats.chars_written >= last.stats.chars_written);
        assert!(state.level >= last.level);
        assert!(state.xp_on(day(7, 1)) >= last.xp_on(day(7, 1)));
        assert!(state.current_xp < state.next_level_xp);
        last = state.clone();
    }

    assert_eq!(last.stats.chars_written, u64::MAX);
    assert_eq!(last.total_xp, u64::MAX);
}
