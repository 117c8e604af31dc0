//! LevelUp - gamified progress tracking for note taking
//!
//! Turns writing activity (notes created, links added, characters typed,
//! minutes spent reading) into experience points and layers the usual game
//! loop on top of it:
//!
//! - **Progression**: XP, a power-curve level table, daily streaks and titles
//! - **Quests**: three randomized daily goals with XP rewards
//! - **Achievements**: a fixed badge catalog unlocked by stat thresholds
//! - **Dashboard**: profile summary, activity heatmap and XP trend
//!
//! All engines operate on one [`domain::ProgressState`]; the
//! [`orchestrator::Orchestrator`] routes activity to them and resolves the
//! XP cascade, and [`store::Store`] persists the result as JSON.

pub mod achievements;
pub mod config;
pub mod dashboard;
pub mod domain;
pub mod orchestrator;
pub mod progression;
pub mod quests;
pub mod store;
