// src/store.rs
//! The single persisted "current JD" slot: one JSON file at a well-known
//! path, overwritten by each new extraction (last-write-wins, no conflict
//! detection) and read once at workflow start.

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::info;

use crate::extraction::JdRecord;

pub struct JdStore {
    path: PathBuf,
}

impl JdStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Read the stored record, or `None` when nothing was saved yet.
    pub async fn load(&self) -> Result<Option<JdRecord>> {
        if tokio::fs::metadata(&self.path).await.is_err() {
            return Ok(None);
        }

        let content = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read JD store: {}", self.path.display()))?;

        let record = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JD store: {}", self.path.display()))?;

        Ok(Some(record))
    }

    /// Overwrite the slot with `record`.
    pub async fn save(&self, record: &JdRecord) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let content =
            serde_json::to_string_pretty(record).context("Failed to serialize JD record")?;

        tokio::fs::write(&self.path, content)
            .await
            .with_context(|| format!("Failed to write JD store: {}", self.path.display()))?;

        info!("Stored current JD from {}", record.source_url);
        Ok(())
    }

    /// Remove the stored record, if any.
    pub async fn clear(&self) -> Result<()> {
        if tokio::fs::metadata(&self.path).await.is_ok() {
            tokio::fs::remove_file(&self.path)
                .await
                .with_context(|| format!("Failed to remove JD store: {}", self.path.display()))?;
        }
        Ok(())
    }
}
