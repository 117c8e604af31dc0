//! Status command implementation

use anyhow::Result;

use levelup::dashboard::{profile, ProfileSummary};
use levelup::store::Store;

/// Show level, XP and streak
pub fn status_command(store: &Store) -> Result<()> {
    let save = store.load()?;
    let summary = ProfileSummary::from_state(&save.data);
    print!("{}", profile(&summary));

    let stats = &save.data.stats;
    println!(
        "Notes: {} created, {} deleted | Links: {} | Characters: {}",
        stats.notes_created, stats.notes_deleted, stats.links_created, stats.chars_written
    );

    Ok(())
}
