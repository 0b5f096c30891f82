//! Configuration for the coordinator.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;
use wellness_llm::GeneratorConfig;
use wellness_memory::MemoryConfig;

/// Main coordinator configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CoordinatorConfig {
    #[serde(default)]
    pub memory: MemoryConfig,

    /// Model delegate used when no local script applies
    #[serde(default)]
    pub generator: GeneratorConfig,

    #[serde(default)]
    pub marker_policy: MarkerPolicy,

    #[serde(default)]
    pub risk_policy: RiskPolicy,
}

/// When a pending follow-up question is forgotten.
///
/// Crisis turns never touch the marker under any policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerPolicy {
    /// Never cleared: a later "yes" replays the routine indefinitely
    Sticky,
    /// Cleared once the follow-up has been answered
    #[default]
    ClearAfterFollowUp,
    /// Cleared by any turn that does not set it
    NextTurnOnly,
}

/// Whether a raised risk flag changes later replies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskPolicy {
    /// Flag is recorded only
    #[default]
    Ignore,
    /// Canned replies get a helpline reminder while the flag is set
    RemindHelpline,
}

impl CoordinatorConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read config file '{}': {}", path.display(), e))?;
        let config: Self = toml::from_str(&content)?;

        if config.generator.api_key.is_some() {
            warn!(
                "API key found in config file '{}'. Prefer the OPENAI_API_KEY environment variable.",
                path.display()
            );
        }

        Ok(config)
    }
}
