//! Settings configuration types

use serde::{Deserialize, Serialize};

/// XP rates and behaviour switches, persisted next to the progress record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// XP per character typed
    #[serde(default = "default_xp_per_char")]
    pub xp_per_char: u64,

    /// XP per note created
    #[serde(default = "default_xp_per_note")]
    pub xp_per_note: u64,

    /// Kept so older saves round-trip; streak bonuses come from the progression curve
    #[serde(default = "default_streak_bonus")]
    pub streak_bonus: u64,

    /// XP per link added
    #[serde(default = "default_xp_per_link")]
    pub xp_per_link: u64,

    /// Kept so older saves round-trip
    #[serde(default = "default_link_factor")]
    pub link_factor: f64,

    /// XP per minute of reading
    #[serde(default = "default_xp_per_minute_reading")]
    pub xp_per_minute_reading: u64,

    /// Newline-separated path prefixes whose activity is ignored
    #[serde(default)]
    pub excluded_folders: String,

    /// Request celebratory effects on level ups and badges
    #[serde(default = "default_enable_effects")]
    pub enable_effects: bool,

    /// Log every XP grant
    #[serde(default = "default_debug")]
    pub debug: bool,
}

fn default_xp_per_char() -> u64 {
    1
}

fn default_xp_per_note() -> u64 {
    50
}

fn default_streak_bonus() -> u64 {
    100
}

fn default_xp_per_link() -> u64 {
    10
}

fn default_link_factor() -> f64 {
    0.5
}

fn default_xp_per_minute_reading() -> u64 {
    10
}

fn default_enable_effects() -> bool {
    true
}

fn default_debug() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            xp_per_char: default_xp_per_char(),
            xp_per_note: default_xp_per_note(),
            streak_bonus: default_streak_bonus(),
            xp_per_link: default_xp_per_link(),
            link_factor: default_link_factor(),
            xp_per_minute_reading: default_xp_per_minute_reading(),
            excluded_folders: String::new(),
            enable_effects: default_enable_effects(),
            debug: default_debug(),
        }
    }
}

impl Settings {
    /// Non-empty, trimmed exclusion prefixes
    pub fn excluded_prefixes(&self) -> impl Iterator<Item = &str> {
        self.excluded_folders
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
    }

    /// Check whether activity at `path` must be ignored
    pub fn is_excluded(&self, path: &str) -> bool {
        let path = path.trim_start_matches('/');
        self.excluded_prefixes()
            .any(|prefix| path.starts_with(prefix.trim_start_matches('/')))
    }

    /// Add a prefix to the exclusion list (no-op if already present)
    pub fn exclude(&mut self, prefix: &str) {
        let prefix = prefix.trim();
        if prefix.is_empty() || self.excluded_prefixes().any(|p| p == prefix) {
            return;
        }
        if !self.excluded_folders.is_empty() && !self.excluded_folders.ends_with('\n') {
            self.excluded_folders.push('\n');
        }
        self.excluded_folders.push_str(prefix);
    }
}
