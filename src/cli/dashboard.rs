//! Dashboard command implementation

use anyhow::Result;

use levelup::dashboard::{render, DashboardSummary};
use levelup::orchestrator::{Clock, SystemClock};
use levelup::store::Store;

/// Render the full dashboard. Read-only: does not check in.
pub fn dashboard_command(store: &Store, days: usize) -> Result<()> {
    let save = store.load()?;
    let clock = SystemClock;
    let summary = DashboardSummary::build(&save.data, clock.today(), clock.now(), days);
    print!("{}", render(&summary));
    Ok(())
}
