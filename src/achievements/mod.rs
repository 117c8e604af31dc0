//! Achievement engine: fixed badge catalog and its evaluator

mod checker;
mod definitions;

pub use checker::{evaluate_achievements, upcoming_badges};
pub use definitions::{Badge, BadgeCondition, BadgeTier, BADGES};
