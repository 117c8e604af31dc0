//! Record command implementation

use anyhow::Result;

use levelup::domain::ActivityKind;
use levelup::store::Store;

use super::{open, print_outcome};

/// Feed one activity notification through the orchestrator and save
pub fn record_command(store: &Store, kind: ActivityKind, amount: i64, path: &str) -> Result<()> {
    let mut orchestrator = open(store)?;
    let event = kind.into_event(path, amount);
    let outcome = orchestrator.dispatch(&event);

    if outcome.excluded {
        println!("Ignored: {} is in an excluded folder", path);
        return Ok(());
    }

    let state = orchestrator.state();
    println!(
        "+{} XP ({}) - Level {} {}/{}",
        outcome.total_xp(),
        kind,
        state.level,
        state.current_xp,
        state.next_level_xp
    );
    print_outcome(&outcome);

    store.save(orchestrator.save_data())?;
    Ok(())
}
