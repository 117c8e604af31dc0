//! Check-in command implementation

use anyhow::Result;

use levelup::store::Store;

use super::{open, print_outcome};

/// Evaluate today's streak and roll the daily quests
pub fn check_in_command(store: &Store) -> Result<()> {
    let mut orchestrator = open(store)?;
    let outcome = orchestrator.check_in();

    if outcome.is_empty() {
        println!(
            "Already checked in today. Streak: {} days",
            orchestrator.state().streak
        );
        return Ok(());
    }

    print_outcome(&outcome);
    store.save(orchestrator.save_data())?;
    Ok(())
}
