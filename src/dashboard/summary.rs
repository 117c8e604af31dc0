//! Dashboard data models
//!
//! Plain values computed from the progress record, ready for display.

use chrono::{DateTime, Days, NaiveDate, Utc};

use crate::achievements::{upcoming_badges, BADGES};
use crate::domain::{ProgressState, Quest};
use crate::progression::{next_title, title_for_level, Title};

/// Days shown in the XP trend
pub const TREND_DAYS: usize = 30;

/// Longest history window `days_ending` will build
pub const MAX_HEATMAP_DAYS: usize = 366;

/// Heatmap intensity thresholds: level N is reached above `INTENSITY_STEPS[N-1]` XP
pub const INTENSITY_STEPS: [u64; 4] = [0, 50, 100, 200];

/// Heatmap intensity (0-4) for a day's XP
pub fn intensity(xp: u64) -> u8 {
    INTENSITY_STEPS.iter().filter(|&&step| xp > step).count() as u8
}

/// Level, title and progress bar
#[derive(Debug, Clone)]
pub struct ProfileSummary {
    pub level: u32,
    pub title: &'static Title,
    pub next_title: Option<&'static Title>,
    pub total_xp: u64,
    pub streak: u32,
    pub current_xp: u64,
    pub next_level_xp: u64,
    /// Floored, capped at 100
    pub percent: u8,
}

impl ProfileSummary {
    pub fn from_state(state: &ProgressState) -> Self {
        let percent = if state.next_level_xp == 0 {
            100
        } else {
            (state.current_xp.saturating_mul(100) / state.next_level_xp).min(100) as u8
        };

        Self {
            level: state.level,
            title: title_for_level(state.level),
            next_title: next_title(state.level),
            total_xp: state.total_xp,
            streak: state.streak,
            current_xp: state.current_xp,
            next_level_xp: state.next_level_xp,
            percent,
        }
    }
}

/// One day of activity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayXp {
    pub date: NaiveDate,
    pub xp: u64,
    pub intensity: u8,
}

/// Progress toward the next badge of one family
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeProgress {
    pub name: &'static str,
    pub description: &'static str,
    pub current: u64,
    pub target: u64,
}

/// A quest as shown on the dashboard
#[derive(Debug, Clone)]
pub struct QuestLine {
    pub quest: Quest,
    pub expired: bool,
}

/// Everything the dashboard shows
#[derive(Debug, Clone)]
pub struct DashboardSummary {
    pub profile: ProfileSummary,
    /// Oldest first, ending today
    pub heatmap: Vec<DayXp>,
    /// Last [`TREND_DAYS`] days, oldest first
    pub trend: Vec<DayXp>,
    pub badges_earned: usize,
    pub badges_total: usize,
    pub upcoming: Vec<BadgeProgress>,
    pub quests: Vec<QuestLine>,
}

impl DashboardSummary {
    /// Build the summary for `today`, with a heatmap of `heatmap_days` days
    pub fn build(
        state: &ProgressState,
        today: NaiveDate,
        now: DateTime<Utc>,
        heatmap_days: usize,
    ) -> Self {
        let badges_earned = BADGES.iter().filter(|b| state.has_badge(b.id)).count();

        let upcoming = upcoming_badges(state)
            .into_iter()
            .map(|(badge, current, target)| BadgeProgress {
                name: badge.name,
                description: badge.description,
                current: current.min(target),
                target,
            })
            .collect();

        let quests = state
            .quests
            .iter()
            .map(|q| QuestLine {
                quest: q.clone(),
                expired: q.is_expired(now),
            })
            .collect();

        Self {
            profile: ProfileSummary::from_state(state),
            heatmap: days_ending(state, today, heatmap_days),
            trend: days_ending(state, today, TREND_DAYS),
            badges_earned,
            badges_total: BADGES.len(),
            upcoming,
            quests,
        }
    }

    /// Highest daily XP in the trend window
    pub fn trend_peak(&self) -> u64 {
        self.trend.iter().map(|d| d.xp).max().unwrap_or(0)
    }
}

/// XP for the `count` days ending at `today`, oldest first.
/// `count` is capped at [`MAX_HEATMAP_DAYS`].
pub fn days_ending(state: &ProgressState, today: NaiveDate, count: usize) -> Vec<DayXp> {
    (0..count.min(MAX_HEATMAP_DAYS) as u64)
        .rev()
        .filter_map(|back| today.checked_sub_days(Days::new(back)))
        .map(|date| {
            let xp = state.xp_on(date);
            DayXp {
                date,
                xp,
                intensity: intensity(xp),
            }
        })
        .collect()
}
