//! Configuration: XP rates, exclusions and file locations

mod settings;

pub use settings::Settings;

use std::path::PathBuf;

/// Get the global data directory path (~/.levelup/)
pub fn global_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".levelup")
}

/// Get the default save file path (~/.levelup/data.json)
pub fn default_data_path() -> PathBuf {
    global_data_dir().join("data.json")
}
