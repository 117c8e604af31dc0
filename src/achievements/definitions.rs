//! Badge definitions and metadata
//!
//! The catalog is fixed at compile time. Order matters: badges are returned in
//! catalog order, so each family is listed from lowest to highest threshold.

use crate::domain::ProgressState;

/// Badge tier, used for presentation only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BadgeTier {
    Bronze,
    Silver,
    Gold,
    Platinum,
    Diamond,
    Master,
    Legend,
    /// One-off event badges, outside the ranked ladder
    Special,
}

impl BadgeTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bronze => "bronze",
            Self::Silver => "silver",
            Self::Gold => "gold",
            Self::Platinum => "platinum",
            Self::Diamond => "diamond",
            Self::Master => "master",
            Self::Legend => "legend",
            Self::Special => "special",
        }
    }

    /// Position on the ranked ladder (None for `Special`)
    pub fn rank(&self) -> Option<u8> {
        match self {
            Self::Bronze => Some(0),
            Self::Silver => Some(1),
            Self::Gold => Some(2),
            Self::Platinum => Some(3),
            Self::Diamond => Some(4),
            Self::Master => Some(5),
            Self::Legend => Some(6),
            Self::Special => None,
        }
    }
}

/// Unlock condition of a badge: a threshold on one field of the progress record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeCondition {
    Level(u32),
    Streak(u32),
    NotesCreated(u64),
    NotesDeleted(u64),
    LinksCreated(u64),
    CharsWritten(u64),
}

impl BadgeCondition {
    pub fn is_met(&self, state: &ProgressState) -> bool {
        match *self {
            Self::Level(min) => state.level >= min,
            Self::Streak(min) => state.streak >= min,
            Self::NotesCreated(min) => state.stats.notes_created >= min,
            Self::NotesDeleted(min) => state.stats.notes_deleted >= min,
            Self::LinksCreated(min) => state.stats.links_created >= min,
            Self::CharsWritten(min) => state.stats.chars_written >= min,
        }
    }

    /// Current value and target, for progress display
    pub fn progress(&self, state: &ProgressState) -> (u64, u64) {
        match *self {
            Self::Level(min) => (state.level as u64, min as u64),
            Self::Streak(min) => (state.streak as u64, min as u64),
            Self::NotesCreated(min) => (state.stats.notes_created, min),
            Self::NotesDeleted(min) => (state.stats.notes_deleted, min),
            Self::LinksCreated(min) => (state.stats.links_created, min),
            Self::CharsWritten(min) => (state.stats.chars_written, min),
        }
    }
}

/// Badge definition with all metadata
#[derive(Debug, Clone)]
pub struct Badge {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub tier: BadgeTier,
    pub bonus_xp: u64,
    pub condition: BadgeCondition,
}

/// All badge definitions
pub static BADGES: &[Badge] = &[
    // === LEVEL ===
    Badge {
        id: "level-2",
        name: "Beginner",
        description: "Reach Level 2",
        icon: "trophy",
        tier: BadgeTier::Bronze,
        bonus_xp: 50,
        condition: BadgeCondition::Level(2),
    },
    Badge {
        id: "level-5",
        name: "Apprentice",
        description: "Reach Level 5",
        icon: "trophy",
        tier: BadgeTier::Silver,
        bonus_xp: 100,
        condition: BadgeCondition::Level(5),
    },
    Badge {
        id: "level-10",
        name: "High Roller",
        description: "Reach Level 10",
        icon: "trophy",
        tier: BadgeTier::Gold,
        bonus_xp: 500,
        condition: BadgeCondition::Level(10),
    },
    Badge {
        id: "level-20",
        name: "Expert",
        description: "Reach Level 20",
        icon: "trophy",
        tier: BadgeTier::Platinum,
        bonus_xp: 1000,
        condition: BadgeCondition::Level(20),
    },
    Badge {
        id: "level-50",
        name: "Master",
        description: "Reach Level 50",
        icon: "trophy",
        tier: BadgeTier::Diamond,
        bonus_xp: 5000,
        condition: BadgeCondition::Level(50),
    },
    // === NOTES ===
    Badge {
        id: "note-1",
        name: "First Note",
        description: "Create your first note",
        icon: "file-text",
        tier: BadgeTier::Bronze,
        bonus_xp: 50,
        condition: BadgeCondition::NotesCreated(1),
    },
    Badge {
        id: "note-10",
        name: "Note Taker",
        description: "Create 10 notes",
        icon: "file-text",
        tier: BadgeTier::Silver,
        bonus_xp: 100,
        condition: BadgeCondition::NotesCreated(10),
    },
    Badge {
        id: "note-50",
        name: "Librarian",
        description: "Create 50 notes",
        icon: "file-text",
        tier: BadgeTier::Gold,
        bonus_xp: 300,
        condition: BadgeCondition::NotesCreated(50),
    },
    Badge {
        id: "note-100",
        name: "Archivist",
        description: "Create 100 notes",
        icon: "file-text",
        tier: BadgeTier::Platinum,
        bonus_xp: 500,
        condition: BadgeCondition::NotesCreated(100),
    },
    Badge {
        id: "note-500",
        name: "Knowledge Base",
        description: "Create 500 notes",
        icon: "file-text",
        tier: BadgeTier::Diamond,
        bonus_xp: 2000,
        condition: BadgeCondition::NotesCreated(500),
    },
    Badge {
        id: "note-1000",
        name: "Encyclopedia",
        description: "Create 1000 notes",
        icon: "file-text",
        tier: BadgeTier::Master,
        bonus_xp: 5000,
        condition: BadgeCondition::NotesCreated(1000),
    },
    // === STREAK ===
    Badge {
        id: "streak-3",
        name: "Consistency",
        description: "3 Days Streak",
        icon: "flame",
        tier: BadgeTier::Bronze,
        bonus_xp: 100,
        condition: BadgeCondition::Streak(3),
    },
    Badge {
        id: "streak-7",
        name: "On Fire",
        description: "7 Days Streak",
        icon: "flame",
        tier: BadgeTier::Silver,
        bonus_xp: 300,
        condition: BadgeCondition::Streak(7),
    },
    Badge {
        id: "streak-14",
        name: "Unstoppable",
        description: "14 Days Streak",
        icon: "flame",
        tier: BadgeTier::Gold,
        bonus_xp: 500,
        condition: BadgeCondition::Streak(14),
    },
    Badge {
        id: "streak-30",
        name: "Habit Builder",
        description: "30 Days Streak",
        icon: "flame",
        tier: BadgeTier::Platinum,
        bonus_xp: 1000,
        condition: BadgeCondition::Streak(30),
    },
    Badge {
        id: "streak-60",
        name: "Marathon",
        description: "60 Days Streak",
        icon: "flame",
        tier: BadgeTier::Diamond,
        bonus_xp: 2000,
        condition: BadgeCondition::Streak(60),
    },
    Badge {
        id: "streak-100",
        name: "Centurion",
        description: "100 Days Streak",
        icon: "flame",
        tier: BadgeTier::Master,
        bonus_xp: 5000,
        condition: BadgeCondition::Streak(100),
    },
    Badge {
        id: "streak-365",
        name: "Year of Power",
        description: "365 Days Streak",
        icon: "sun",
        tier: BadgeTier::Legend,
        bonus_xp: 10000,
        condition: BadgeCondition::Streak(365),
    },
    // === CHARACTERS ===
    Badge {
        id: "char-1k",
        name: "Scribbler",
        description: "Write 1,000 characters",
        icon: "feather",
        tier: BadgeTier::Bronze,
        bonus_xp: 50,
        condition: BadgeCondition::CharsWritten(1_000),
    },
    Badge {
        id: "char-10k",
        name: "Author",
        description: "Write 10,000 characters",
        icon: "feather",
        tier: BadgeTier::Silver,
        bonus_xp: 200,
        condition: BadgeCondition::CharsWritten(10_000),
    },
    Badge {
        id: "char-50k",
        name: "Novelist",
        description: "Write 50,000 characters",
        icon: "feather",
        tier: BadgeTier::Gold,
        bonus_xp: 1000,
        condition: BadgeCondition::CharsWritten(50_000),
    },
    Badge {
        id: "char-100k",
        name: "Prolific",
        description: "Write 100,000 characters",
        icon: "feather",
        tier: BadgeTier::Platinum,
        bonus_xp: 2000,
        condition: BadgeCondition::CharsWritten(100_000),
    },
    Badge {
        id: "char-500k",
        name: "Typewriter",
        description: "Write 500,000 characters",
        icon: "feather",
        tier: BadgeTier::Diamond,
        bonus_xp: 5000,
        condition: BadgeCondition::CharsWritten(500_000),
    },
    Badge {
        id: "char-1m",
        name: "Millionaire",
        description: "Write 1,000,000 characters",
        icon: "feather",
        tier: BadgeTier::Master,
        bonus_xp: 10000,
        condition: BadgeCondition::CharsWritten(1_000_000),
    },
    // === LINKS ===
    Badge {
        id: "link-10",
        name: "Connector",
        description: "Create 10 links",
        icon: "link",
        tier: BadgeTier::Bronze,
        bonus_xp: 100,
        condition: BadgeCondition::LinksCreated(10),
    },
    Badge {
        id: "link-50",
        name: "Networker",
        description: "Create 50 links",
        icon: "link",
        tier: BadgeTier::Silver,
        bonus_xp: 300,
        condition: BadgeCondition::LinksCreated(50),
    },
    Badge {
        id: "link-100",
        name: "Spider",
        description: "Create 100 links",
        icon: "link",
        tier: BadgeTier::Gold,
        bonus_xp: 500,
        condition: BadgeCondition::LinksCreated(100),
    },
    Badge {
        id: "link-500",
        name: "Webmaster",
        description: "Create 500 links",
        icon: "link",
        tier: BadgeTier::Platinum,
        bonus_xp: 2000,
        condition: BadgeCondition::LinksCreated(500),
    },
    // === EVENTS ===
    Badge {
        id: "event-cleaner",
        name: "Cleaner",
        description: "Delete your first note",
        icon: "trash-2",
        tier: BadgeTier::Special,
        bonus_xp: 50,
        condition: BadgeCondition::NotesDeleted(1),
    },
];

impl Badge {
    /// Get badge definition by id
    pub fn get(id: &str) -> Option<&'static Badge> {
        BADGES.iter().find(|b| b.id == id)
    }

    /// Get total number of badges
    pub fn total_count() -> usize {
        BADGES.len()
    }

    /// Get total bonus XP from all badges
    pub fn total_bonus_xp() -> u64 {
        BADGES.iter().map(|b| b.bonus_xp).sum()
    }
}
