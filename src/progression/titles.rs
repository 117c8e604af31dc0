//! Titles shown next to the level on the dashboard

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Title {
    pub min_level: u32,
    pub name: &'static str,
    pub avatar: &'static str,
}

/// All titles (must be sorted by `min_level`)
pub static TITLES: &[Title] = &[
    Title {
        min_level: 1,
        name: "Novice",
        avatar: "🌱",
    },
    Title {
        min_level: 10,
        name: "Apprentice",
        avatar: "🌿",
    },
    Title {
        min_level: 20,
        name: "Adept",
        avatar: "🌳",
    },
    Title {
        min_level: 40,
        name: "Expert",
        avatar: "🧙",
    },
    Title {
        min_level: 60,
        name: "Master",
        avatar: "👑",
    },
    Title {
        min_level: 100,
        name: "Legend",
        avatar: "🐲",
    },
];

/// Highest title whose `min_level` is reached
pub fn title_for_level(level: u32) -> &'static Title {
    TITLES
        .iter()
        .rev()
        .find(|t| level >= t.min_level)
        .unwrap_or(&TITLES[0])
}

/// Next title to unlock (None at the top)
pub fn next_title(level: u32) -> Option<&'static Title> {
    TITLES.iter().find(|t| level < t.min_level)
}
