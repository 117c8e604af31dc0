//! Reset command implementation

use anyhow::{bail, Result};

use levelup::store::Store;

/// Delete all progress and settings
pub fn reset_command(store: &Store, yes: bool) -> Result<()> {
    if !yes {
        bail!(
            "This deletes all progress in {}. Re-run with --yes to confirm.",
            store.path().display()
        );
    }

    store.reset()?;
    println!("Progress reset.");
    Ok(())
}
