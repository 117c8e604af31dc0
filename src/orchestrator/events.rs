//! Events produced while processing one tick

use std::fmt;

use crate::achievements::Badge;
use crate::domain::{ActivityKind, Quest};
use crate::progression::{LevelUp, StreakChange, StreakUpdate};

/// Where a grant of XP came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XpSource {
    Activity(ActivityKind),
    Streak,
    Quest(String),
    Badge(&'static str),
}

impl fmt::Display for XpSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Activity(kind) => write!(f, "activity: {}", kind),
            Self::Streak => f.write_str("daily streak bonus"),
            Self::Quest(id) => write!(f, "quest {}", id),
            Self::Badge(id) => write!(f, "badge {}", id),
        }
    }
}

/// Events that can happen during a tick
#[derive(Debug, Clone)]
pub enum GamificationEvent {
    XpAwarded { amount: u64, source: XpSource },
    LevelUp(LevelUp),
    StreakUpdated(StreakUpdate),
    QuestsGenerated { count: usize },
    QuestCompleted(Quest),
    BadgeEarned(&'static Badge),
}

impl GamificationEvent {
    /// Notification text for events worth showing to the user
    pub fn notice(&self) -> Option<String> {
        match self {
            Self::XpAwarded { .. } | Self::QuestsGenerated { .. } => None,
            Self::LevelUp(level_up) => Some(format!(
                "Level Up! You are now Level {}!",
                level_up.new_level
            )),
            Self::StreakUpdated(update) => match update.change {
                StreakChange::Unchanged => None,
                _ => Some(format!("Daily Streak: {} Days!", update.streak)),
            },
            Self::QuestCompleted(quest) => Some(format!(
                "Quest complete: {} (+{} XP)",
                quest.description, quest.reward_xp
            )),
            Self::BadgeEarned(badge) => Some(format!(
                "Badge unlocked: {} - {} (+{} XP)",
                badge.name, badge.description, badge.bonus_xp
            )),
        }
    }
}

/// Everything that happened while handling one activity or check-in
#[derive(Debug, Clone, Default)]
pub struct TickOutcome {
    pub events: Vec<GamificationEvent>,
    /// The activity was inside an excluded folder and was dropped
    pub excluded: bool,
    /// A level up or badge happened and effects are enabled
    pub celebrate: bool,
}

impl TickOutcome {
    pub fn push(&mut self, event: GamificationEvent) {
        self.events.push(event);
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Sum of all XP granted in this tick
    pub fn total_xp(&self) -> u64 {
        self.events
            .iter()
            .map(|e| match e {
                GamificationEvent::XpAwarded { amount, .. } => *amount,
                _ => 0,
            })
            .fold(0, u64::saturating_add)
    }

    pub fn level_ups(&self) -> impl Iterator<Item = &LevelUp> {
        self.events.iter().filter_map(|e| match e {
            GamificationEvent::LevelUp(level_up) => Some(level_up),
            _ => None,
        })
    }

    pub fn completed_quests(&self) -> impl Iterator<Item = &Quest> {
        self.events.iter().filter_map(|e| match e {
            GamificationEvent::QuestCompleted(quest) => Some(quest),
            _ => None,
        })
    }

    pub fn earned_badges(&self) -> impl Iterator<Item = &'static Badge> + '_ {
        self.events.iter().filter_map(|e| match e {
            GamificationEvent::BadgeEarned(badge) => Some(*badge),
            _ => None,
        })
    }

    /// Notification lines in event order
    pub fn notices(&self) -> Vec<String> {
        self.events.iter().filter_map(|e| e.notice()).collect()
    }
}
