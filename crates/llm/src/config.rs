use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use wellness_common::{Result, WellnessError};

use crate::client::TextGenerator;
use crate::fallback::DEFAULT_FALLBACK_REPLY;
use crate::ollama::{self, OllamaCliGenerator};
use crate::openai::OpenAiGenerator;

/// Model delegate configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Provider type: "ollama" (local CLI) or "openai" (HTTP endpoint)
    #[serde(default = "default_provider")]
    pub provider: String,

    #[serde(default = "default_model")]
    pub model: String,

    /// CLI binary for the "ollama" provider
    #[serde(default = "default_binary")]
    pub binary: String,

    /// CLI arguments; `{model}` is replaced with the model name
    #[serde(default = "ollama::default_args")]
    pub args: Vec<String>,

    /// Base URL for the "openai" provider
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    /// If not set, `OPENAI_API_KEY` is consulted for the "openai" provider.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Reply returned when the delegate fails
    #[serde(default = "default_fallback_reply")]
    pub fallback_reply: String,
}

fn default_provider() -> String {
    "ollama".into()
}

fn default_model() -> String {
    ollama::DEFAULT_MODEL.into()
}

fn default_binary() -> String {
    ollama::DEFAULT_BINARY.into()
}

fn default_timeout_secs() -> u64 {
    60
}

fn default_fallback_reply() -> String {
    DEFAULT_FALLBACK_REPLY.into()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            model: default_model(),
            binary: default_binary(),
            args: ollama::default_args(),
            api_url: None,
            api_key: None,
            timeout_secs: default_timeout_secs(),
            fallback_reply: default_fallback_reply(),
        }
    }
}

impl GeneratorConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Explicit `api_key` first, then `OPENAI_API_KEY` for the "openai" provider.
    pub fn resolve_api_key(&self) -> Option<String> {
        if let Some(ref key) = self.api_key {
            if !key.is_empty() {
                return Some(key.clone());
            }
        }

        match self.provider.as_str() {
            "openai" => std::env::var("OPENAI_API_KEY").ok(),
            _ => None,
        }
    }
}

pub fn build_generator(config: &GeneratorConfig) -> Result<Arc<dyn TextGenerator>> {
    if config.timeout_secs == 0 {
        return Err(WellnessError::Config(
            "Generator timeout must be at least one second".to_string(),
        ));
    }

    let generator: Arc<dyn TextGenerator> = match config.provider.as_str() {
        "ollama" => Arc::new(
            OllamaCliGenerator::new(config.model.clone())
                .with_binary(config.binary.clone())
                .with_args(config.args.clone())
                .with_timeout(config.timeout()),
        ),
        "openai" => Arc::new(OpenAiGenerator::new(
            config.api_url.clone(),
            config.model.clone(),
            config.resolve_api_key(),
            config.timeout(),
        )),
        other => {
            return Err(WellnessError::Config(format!(
                "Unknown generator provider: {other}"
            )));
        }
    };

    Ok(generator)
}
