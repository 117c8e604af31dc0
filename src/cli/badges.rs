//! Badges command implementation

use anyhow::Result;

use levelup::achievements::BADGES;
use levelup::store::Store;

/// List earned badges, or the whole catalog with `all`
pub fn badges_command(store: &Store, all: bool) -> Result<()> {
    let save = store.load()?;
    let state = &save.data;

    let earned = BADGES.iter().filter(|b| state.has_badge(b.id)).count();
    println!("Badges ({}/{}):\n", earned, BADGES.len());

    for badge in BADGES {
        let has = state.has_badge(badge.id);
        if !has && !all {
            continue;
        }
        let (current, target) = badge.condition.progress(state);
        println!(
            "  [{}] {:<16} {:<9} {} (+{} XP){}",
            if has { "x" } else { " " },
            badge.name,
            badge.tier.as_str(),
            badge.description,
            badge.bonus_xp,
            if has {
                String::new()
            } else {
                format!(" {}/{}", current.min(target), target)
            }
        );
    }

    Ok(())
}
