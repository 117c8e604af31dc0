//! CLI command implementations

pub mod badges;
pub mod check_in;
pub mod dashboard;
pub mod exclude;
pub mod quests;
pub mod record;
pub mod reset;
pub mod status;

use anyhow::Result;

use levelup::orchestrator::{Orchestrator, TickOutcome};
use levelup::store::Store;

/// Load the save file and wrap it in an orchestrator on the system clock
pub fn open(store: &Store) -> Result<Orchestrator> {
    let save = store.load()?;
    Ok(Orchestrator::with_system_clock(save))
}

/// Print notices for everything worth telling the user
pub fn print_outcome(outcome: &TickOutcome) {
    for notice in outcome.notices() {
        println!("  {}", notice);
    }
    if outcome.celebrate {
        println!("  *** Congratulations! ***");
    }
}
