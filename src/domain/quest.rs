//! Quest instances and their kinds

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Activity type that advances a quest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestKind {
    Chars,
    Notes,
    Links,
    Xp,
}

impl QuestKind {
    pub const ALL: [QuestKind; 4] = [Self::Chars, Self::Notes, Self::Links, Self::Xp];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Chars => "chars",
            Self::Notes => "notes",
            Self::Links => "links",
            Self::Xp => "xp",
        }
    }
}

/// Lifetime class of a quest. Daily quests are replaced every day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestCategory {
    Daily,
    Weekly,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestMeta {
    #[serde(rename = "type")]
    pub kind: QuestKind,
}

/// A quest instance generated from one of the fixed templates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quest {
    pub id: String,
    #[serde(rename = "type")]
    pub category: QuestCategory,
    pub description: String,
    pub target: u64,
    /// Never exceeds `target`
    pub progress: u64,
    /// Once set, stays set
    pub completed: bool,
    pub reward_xp: u64,
    pub expires_at: DateTime<Utc>,
    pub meta: QuestMeta,
}

impl Quest {
    pub fn kind(&self) -> QuestKind {
        self.meta.kind
    }

    pub fn is_daily(&self) -> bool {
        self.category == QuestCategory::Daily
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    pub fn remaining(&self) -> u64 {
        self.target.saturating_sub(self.progress)
    }

    /// Completion fraction (0.0 - 1.0)
    pub fn fraction(&self) -> f64 {
        if self.target == 0 {
            1.0
        } else {
            (self.progress as f64 / self.target as f64).min(1.0)
        }
    }
}
