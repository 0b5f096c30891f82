//! JSON file storage for the memory record.

use crate::types::{MemoryConfig, MemoryRecord};
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, info, warn};
use wellness_common::{Result, WellnessError};

/// Loads and saves the [`MemoryRecord`] for one user profile.
pub struct MemoryStore {
    config: MemoryConfig,
}

impl MemoryStore {
    /// Create a store backed by the configured file. Nothing is read yet.
    pub fn new(config: MemoryConfig) -> Self {
        Self { config }
    }

    pub fn path(&self) -> &Path {
        &self.config.path
    }

    /// Read the record from disk.
    ///
    /// A missing file yields the default record. So does a file that cannot
    /// be read or parsed: the problem is logged and the session carries on
    /// with a fresh record, which the next save will overwrite.
    pub async fn load(&self) -> MemoryRecord {
        let path = self.path();

        let content = match tokio::fs::read_to_string(path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "No memory file, starting fresh");
                return MemoryRecord::default();
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to read memory file, using defaults");
                return MemoryRecord::default();
            }
        };

        match serde_json::from_str::<MemoryRecord>(&content) {
            Ok(record) => {
                info!(
                    path = %path.display(),
                    topics = record.topics.len(),
                    risk_flag = record.risk_flag,
                    "Loaded memory"
                );
                record
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Malformed memory file, using defaults");
                MemoryRecord::default()
            }
        }
    }

    /// Overwrite the file with `record`, pretty-printed.
    pub async fn save(&self, record: &MemoryRecord) -> Result<()> {
        let path = self.path();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await.map_err(|e| {
                    WellnessError::Memory(format!(
                        "Failed to create directory '{}': {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        let json = serde_json::to_string_pretty(record)?;
        tokio::fs::write(path, json).await.map_err(|e| {
            WellnessError::Memory(format!("Failed to write '{}': {}", path.display(), e))
        })?;

        debug!(
            path = %path.display(),
            topics = record.topics.len(),
            risk_flag = record.risk_flag,
            "Saved memory"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_exposes_configured_path() {
        let store = MemoryStore::new(MemoryConfig {
            path: "profiles/alice.json".into(),
        });
        assert_eq!(store.path(), Path::new("profiles/alice.json"));
    }

    #[tokio::test]
    async fn saved_file_uses_two_space_indent() {
        let dir = tempfile::TempDir::new().unwrap();
        let store = MemoryStore::new(MemoryConfig {
            path: dir.path().join("memory.json"),
        });

        let mut record = MemoryRecord::default();
        record.record_topic("sleep");
        store.save(&record).await.unwrap();

        let written = std::fs::read_to_string(store.path()).unwrap();
        assert_eq!(
            written,
            "{\n  \"topics\": [\n    \"sleep\"\n  ],\n  \"risk_flag\": false\n}"
        );
    }
}
