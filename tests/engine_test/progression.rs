//! Tests for XP, levels and streaks

use levelup::domain::ProgressState;
use levelup::progression::{
    apply_xp, continuation_bonus, title_for_level, update_streak, xp_required_for_level,
    StreakChange,
};

use crate::common::day;

#[test]
fn test_curve_matches_known_thresholds() {
    let expected = [(1, 100), (2, 282), (3, 519), (4, 800), (9, 2700)];
    for (level, xp) in expected {
        assert_eq!(xp_required_for_level(level), xp, "level {}", level);
    }
    assert_eq!(xp_required_for_level(0), 100);
}

#[test]
fn test_curve_is_strictly_increasing() {
    for level in 1..200 {
        assert!(xp_required_for_level(level + 1) > xp_required_for_level(level));
    }
}

#[test]
fn test_xp_invariants_hold_for_any_grant_sequence() {
    let mut state = ProgressState::default();
    let mut granted = 0;
    for amount in [0, 1, 99, 250, 7, 1_000, 3_333, 50] {
        apply_xp(&mut state, amount);
        granted += amount;
        assert_eq!(state.total_xp, granted);
        assert!(state.current_xp < state.next_level_xp);
        assert_eq!(state.next_level_xp, xp_required_for_level(state.level));
    }
}

#[test]
fn test_one_large_grant_spans_several_levels() {
    let mut state = ProgressState::default();
    let level_up = apply_xp(&mut state, 100 + 282 + 519 + 5).unwrap();
    assert_eq!(level_up.old_level, 1);
    assert_eq!(level_up.new_level, 4);
    assert_eq!(level_up.levels_gained(), 3);
    assert_eq!(state.current_xp, 5);
    assert_eq!(state.next_level_xp, 800);
}

#[test]
fn test_streak_over_a_week_with_a_gap() {
    let mut state = ProgressState::default();

    let first = update_streak(&mut state, day(5, 1));
    assert_eq!((first.change, first.streak, first.gained_xp), (StreakChange::Started, 1, 0));

    let second = update_streak(&mut state, day(5, 2));
    assert_eq!(second.change, StreakChange::Extended);
    assert_eq!(second.streak, 2);
    assert_eq!(second.gained_xp, continuation_bonus(2));
    assert_eq!(second.gained_xp, 70);

    // Same day again changes nothing
    let again = update_streak(&mut state, day(5, 2));
    assert!(!again.changed());
    assert_eq!(state.streak, 2);

    // Two missed days
    let back = update_streak(&mut state, day(5, 5));
    assert_eq!(back.change, StreakChange::Reset);
    assert_eq!(back.streak, 1);
    assert_eq!(back.gained_xp, 10);
    assert_eq!(state.last_activity_date, Some(day(5, 5)));
}

#[test]
fn test_continuation_bonus_is_capped() {
    assert_eq!(continuation_bonus(2), 70);
    assert_eq!(continuation_bonus(50), 550);
    assert_eq!(continuation_bonus(400), 550);
}

#[test]
fn test_titles_follow_levels() {
    assert_eq!(title_for_level(1).name, "Novice");
    assert_eq!(title_for_level(19).name, "Apprentice");
    assert_eq!(title_for_level(20).name, "Adept");
    assert_eq!(title_for_level(250).name, "Legend");
}
