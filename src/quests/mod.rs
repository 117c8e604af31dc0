//! Quest engine: daily generation and progress tracking

mod generator;
mod tracker;

pub use generator::{
    daily_expiry, daily_quest, describe, generate_daily_quests, reward_for, sample_target,
    DAILY_QUEST_COUNT,
};
pub use tracker::{advance_quests, total_reward};
