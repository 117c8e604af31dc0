//! Exclude command implementation

use anyhow::Result;

use levelup::store::Store;

/// Add a folder prefix whose activity is ignored, or list the current ones
pub fn exclude_command(store: &Store, prefix: Option<String>) -> Result<()> {
    let mut save = store.load()?;

    if let Some(prefix) = prefix {
        save.settings.exclude(&prefix);
        store.save(&save)?;
        tracing::info!("Excluded folder prefix: {}", prefix.trim());
    }

    let prefixes: Vec<_> = save.settings.excluded_prefixes().collect();
    if prefixes.is_empty() {
        println!("No excluded folders.");
    } else {
        println!("Excluded folders:");
        for prefix in prefixes {
            println!("  {}", prefix);
        }
    }

    Ok(())
}
