//! Tests for the badge catalog and evaluator

use std::collections::HashSet;

use levelup::achievements::{evaluate_achievements, upcoming_badges, Badge, BADGES};
use levelup::domain::ProgressState;

#[test]
fn test_catalog_ids_are_unique() {
    let ids: HashSet<_> = BADGES.iter().map(|b| b.id).collect();
    assert_eq!(ids.len(), BADGES.len());
    assert_eq!(Badge::total_count(), 29);
}

#[test]
fn test_fresh_state_earns_nothing() {
    assert!(evaluate_achievements(&ProgressState::default()).is_empty());
}

#[test]
fn test_thresholds_unlock_in_catalog_order() {
    let mut state = ProgressState::default();
    state.level = 5;
    state.streak = 7;
    state.stats.chars_written = 1_000;
    state.stats.notes_deleted = 1;

    let ids: Vec<_> = evaluate_achievements(&state).iter().map(|b| b.id).collect();
    assert_eq!(
        ids,
        [
            "level-2",
            "level-5",
            "streak-3",
            "streak-7",
            "char-1k",
            "event-cleaner"
        ]
    );
}

#[test]
fn test_level_jump_returns_every_crossed_tier() {
    let mut state = ProgressState::default();
    state.level = 10;

    let first: Vec<_> = evaluate_achievements(&state).iter().map(|b| b.id).collect();
    assert_eq!(first, ["level-2", "level-5", "level-10"]);

    // Read-only: same answer until the caller records the ids
    let second: Vec<_> = evaluate_achievements(&state).iter().map(|b| b.id).collect();
    assert_eq!(first, second);
    assert!(state.earned_badges.is_empty());
}

#[test]
fn test_earned_badges_are_not_returned_again() {
    let mut state = ProgressState::default();
    state.stats.notes_created = 12;
    for badge in evaluate_achievements(&state) {
        assert!(state.record_badge(badge.id));
    }
    assert_eq!(state.earned_badges, ["note-1", "note-10"]);
    assert!(evaluate_achievements(&state).is_empty());
    assert!(!state.record_badge("note-1"));
}

#[test]
fn test_upcoming_badges_report_progress() {
    let mut state = ProgressState::default();
    state.stats.links_created = 4;
    state.earned_badges.push("note-1".to_string());

    let upcoming = upcoming_badges(&state);
    let links = upcoming
        .iter()
        .find(|(badge, _, _)| badge.id == "link-10")
        .expect("link-10 is the next link badge");
    assert_eq!((links.1, links.2), (4, 10));
    assert!(upcoming.iter().all(|(badge, _, _)| badge.id != "note-1"));
}
