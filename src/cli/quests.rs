//! Quests command implementation

use anyhow::Result;

use levelup::orchestrator::Clock;
use levelup::store::Store;

use super::{open, print_outcome};

/// Check in (so today's quests exist) and list them
pub fn quests_command(store: &Store) -> Result<()> {
    let mut orchestrator = open(store)?;
    let outcome = orchestrator.check_in();
    if !outcome.is_empty() {
        print_outcome(&outcome);
        store.save(orchestrator.save_data())?;
    }

    let now = orchestrator.clock().now();
    let quests = &orchestrator.state().quests;
    if quests.is_empty() {
        println!("No quests.");
        return Ok(());
    }

    println!("Quests ({}):\n", quests.len());
    for quest in quests {
        let status = if quest.completed {
            "done"
        } else if quest.is_expired(now) {
            "expired"
        } else {
            "open"
        };
        println!(
            "  {} [{}] {} {}/{} (+{} XP)",
            quest.id, status, quest.description, quest.progress, quest.target, quest.reward_xp
        );
    }

    Ok(())
}
