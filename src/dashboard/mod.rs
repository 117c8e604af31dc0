//! Dashboard: progress summary, activity heatmap and XP trend

mod render;
mod summary;

pub use render::{heatmap, profile, progress_bar, render, sparkline};
pub use summary::{
    days_ending, intensity, BadgeProgress, DashboardSummary, DayXp, ProfileSummary, QuestLine,
    INTENSITY_STEPS, MAX_HEATMAP_DAYS, TREND_DAYS,
};
