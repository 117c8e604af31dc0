//! The progress record: everything the engines read and write

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::dates;
use super::quest::Quest;
use crate::progression::xp_required_for_level;

/// Lifetime activity counters (never decrease)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Stats {
    pub notes_created: u64,
    pub notes_deleted: u64,
    pub links_created: u64,
    pub chars_written: u64,
}

/// Root progress record.
///
/// Owned by the orchestrator and handed to each engine by reference. Every
/// field has a default so saves written by older versions backfill on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProgressState {
    pub level: u32,
    /// XP collected toward `level + 1`
    pub current_xp: u64,
    /// XP needed to go from `level` to `level + 1`
    pub next_level_xp: u64,
    pub total_xp: u64,
    pub streak: u32,
    /// Last day the streak was evaluated
    #[serde(
        rename = "lastDateJoined",
        alias = "lastActivityDate",
        with = "dates::optional"
    )]
    pub last_activity_date: Option<NaiveDate>,
    /// XP gained per calendar day
    pub xp_history: BTreeMap<NaiveDate, u64>,
    /// Earned badge ids in unlock order, no duplicates
    pub earned_badges: Vec<String>,
    pub stats: Stats,
    pub quests: Vec<Quest>,
    #[serde(with = "dates::optional")]
    pub last_quest_gen_date: Option<NaiveDate>,
}

impl Default for ProgressState {
    fn default() -> Self {
        Self {
            level: 1,
            current_xp: 0,
            next_level_xp: xp_required_for_level(1),
            total_xp: 0,
            streak: 0,
            last_activity_date: None,
            xp_history: BTreeMap::new(),
            earned_badges: Vec::new(),
            stats: Stats::default(),
            quests: Vec::new(),
            last_quest_gen_date: None,
        }
    }
}

impl ProgressState {
    /// Check whether a badge id has already been earned
    pub fn has_badge(&self, id: &str) -> bool {
        self.earned_badges.iter().any(|b| b == id)
    }

    /// Append a badge id. Returns false if it was already recorded.
    pub fn record_badge(&mut self, id: &str) -> bool {
        if self.has_badge(id) {
            return false;
        }
        self.earned_badges.push(id.to_string());
        true
    }

    /// Add XP to the history bucket for `day`
    pub fn record_history(&mut self, day: NaiveDate, amount: u64) {
        if amount == 0 {
            return;
        }
        let bucket = self.xp_history.entry(day).or_insert(0);
        *bucket = bucket.saturating_add(amount);
    }

    /// XP gained on `day` (0 if none)
    pub fn xp_on(&self, day: NaiveDate) -> u64 {
        self.xp_history.get(&day).copied().unwrap_or(0)
    }

    /// Progress toward the next level (0.0 - 1.0)
    pub fn level_progress(&self) -> f64 {
        if self.next_level_xp == 0 {
            return 1.0;
        }
        (self.current_xp as f64 / self.next_level_xp as f64).min(1.0)
    }
}
