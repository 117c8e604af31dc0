//! Core domain types for LevelUp

mod activity;
pub mod dates;
mod progress;
mod quest;

pub use activity::{ActivityEvent, ActivityKind, ParseActivityError};
pub use progress::{ProgressState, Stats};
pub use quest::{Quest, QuestCategory, QuestKind, QuestMeta};
