//! Progression engine: XP curve, level rollover, daily streaks and titles
//!
//! All functions are synchronous and operate on an explicitly passed
//! [`ProgressState`](crate::domain::ProgressState).

mod levels;
mod streaks;
mod titles;

pub use levels::{apply_xp, xp_required_for_level, LevelUp, BASE_XP, EXPONENT};
pub use streaks::{
    continuation_bonus, update_streak, StreakChange, StreakUpdate, CONTINUATION_BASE,
    CONTINUATION_CAP, REENGAGEMENT_BONUS,
};
pub use titles::{next_title, title_for_level, Title, TITLES};
