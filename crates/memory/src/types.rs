//! Memory record and configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The persisted per-user record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryRecord {
    /// Intent labels of guidance turns, append-only, duplicates kept
    #[serde(default)]
    pub topics: Vec<String>,

    /// Set on the first crisis detection
    #[serde(default)]
    pub risk_flag: bool,
}

impl MemoryRecord {
    /// Append a topic label.
    pub fn record_topic(&mut self, topic: impl Into<String>) {
        self.topics.push(topic.into());
    }

    /// Raise the risk flag. There is no way to lower it again.
    pub fn flag_risk(&mut self) {
        self.risk_flag = true;
    }
}

/// Configuration for the memory store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryConfig {
    /// Path to the JSON memory file
    #[serde(default = "default_memory_path")]
    pub path: PathBuf,
}

fn default_memory_path() -> PathBuf {
    PathBuf::from("user_memory.json")
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            path: default_memory_path(),
        }
    }
}
