//! Daily streak tracking
//!
//! A streak counts consecutive calendar days with activity. It is evaluated at
//! most once per day.

use chrono::NaiveDate;

use crate::domain::{dates, ProgressState};

/// Flat bonus for coming back after a broken streak
pub const REENGAGEMENT_BONUS: u64 = 10;

/// Base bonus for extending a streak by one day
pub const CONTINUATION_BASE: u64 = 50;

/// Cap on the per-day part of the continuation bonus
pub const CONTINUATION_CAP: u64 = 500;

/// Continuation bonus for reaching `streak` consecutive days
pub fn continuation_bonus(streak: u32) -> u64 {
    CONTINUATION_BASE + (streak as u64 * 10).min(CONTINUATION_CAP)
}

/// What happened to the streak on this evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreakChange {
    /// Already evaluated today (or the date moved backwards)
    Unchanged,
    /// First evaluation ever
    Started,
    /// Yesterday was active, streak grew by one
    Extended,
    /// One or more days were missed, streak restarted at 1
    Reset,
}

/// Result of [`update_streak`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreakUpdate {
    pub change: StreakChange,
    pub streak: u32,
    /// Bonus XP to grant. Not applied by this function.
    pub gained_xp: u64,
}

impl StreakUpdate {
    pub fn changed(&self) -> bool {
        self.change != StreakChange::Unchanged
    }
}

/// Evaluate the streak for `today`.
///
/// Idempotent per day. The returned bonus must be granted by the caller.
pub fn update_streak(state: &mut ProgressState, today: NaiveDate) -> StreakUpdate {
    let (change, gained_xp) = match state.last_activity_date {
        None => {
            state.streak = 1;
            (StreakChange::Started, 0)
        }
        Some(last) => match dates::days_between(last, today) {
            gap if gap <= 0 => {
                return StreakUpdate {
                    change: StreakChange::Unchanged,
                    streak: state.streak,
                    gained_xp: 0,
                };
            }
            1 => {
                state.streak += 1;
                (StreakChange::Extended, continuation_bonus(state.streak))
            }
            _ => {
                state.streak = 1;
                (StreakChange::Reset, REENGAGEMENT_BONUS)
            }
        },
    };

    state.last_activity_date = Some(today);
    StreakUpdate {
        change,
        streak: state.streak,
        gained_xp,
    }
}
