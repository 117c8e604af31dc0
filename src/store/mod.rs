//! Persistence of the progress record and settings
//!
//! A single JSON document `{ "data": ProgressState, "settings": Settings }`
//! is read at startup and written after every change.

mod normalize;

pub use normalize::normalize;

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fs2::FileExt;
use serde::{Deserialize, Serialize};

use crate::config::{default_data_path, Settings};
use crate::domain::ProgressState;

/// Everything that is persisted
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaveData {
    pub data: ProgressState,
    pub settings: Settings,
}

impl SaveData {
    /// Parse a save document, backfill defaults and normalize the record
    pub fn from_json(content: &str) -> Result<Self, StoreError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let mut save: SaveData = serde_json::from_str(content).map_err(StoreError::Corrupt)?;
        normalize(&mut save.data);
        Ok(save)
    }

    pub fn to_json(&self) -> Result<String, StoreError> {
        serde_json::to_string_pretty(self).map_err(StoreError::Serialize)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Save file is not a valid progress record: {0}")]
    Corrupt(#[source] serde_json::Error),

    #[error("Failed to serialize progress record: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// JSON file store with locked, atomic writes
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the default location (~/.levelup/data.json)
    pub fn open_default() -> Self {
        Self::new(default_data_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the save file. A missing file yields the defaults.
    pub fn load(&self) -> Result<SaveData> {
        if !self.path.exists() {
            tracing::debug!("No save file at {}, starting fresh", self.path.display());
            return Ok(SaveData::default());
        }

        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read save file: {}", self.path.display()))?;

        let save = SaveData::from_json(&content)
            .with_context(|| format!("Failed to load save file: {}", self.path.display()))?;

        Ok(save)
    }

    /// Save with an exclusive lock and atomic rename.
    ///
    /// 1. Exclusive lock on a sibling `.lock` file serializes writers
    /// 2. Content goes to a `.tmp` file first and is synced
    /// 3. Rename replaces the old save in one step
    pub fn save(&self, save: &SaveData) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create data directory: {}", parent.display())
                })?;
            }
        }

        let content = save.to_json()?;

        let lock_path = self.path.with_extension("json.lock");
        let lock_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&lock_path)
            .with_context(|| format!("Failed to create lock file: {}", lock_path.display()))?;

        lock_file
            .lock_exclusive()
            .with_context(|| "Failed to acquire save lock")?;

        let temp_path = self.path.with_extension("json.tmp");
        let mut temp_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)
            .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;

        temp_file
            .write_all(content.as_bytes())
            .with_context(|| "Failed to write save content")?;

        temp_file
            .sync_all()
            .with_context(|| "Failed to sync save file")?;

        std::fs::rename(&temp_path, &self.path)
            .with_context(|| format!("Failed to rename save file: {}", self.path.display()))?;

        tracing::debug!("Saved progress to {}", self.path.display());
        Ok(())
    }

    /// Delete the save file (progress and settings)
    pub fn reset(&self) -> Result<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)
                .with_context(|| format!("Failed to remove save file: {}", self.path.display()))?;
        }
        Ok(())
    }
}
