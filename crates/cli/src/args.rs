//! Command line arguments.

use clap::Parser;
use std::path::PathBuf;
use wellness_coordinator::CoordinatorConfig;

#[derive(Debug, Parser)]
#[command(name = "wellness")]
#[command(version)]
#[command(about = "Terminal chat with a wellness assistant that remembers, guides and stays safe")]
pub struct Args {
    /// Path to a TOML configuration file
    #[arg(long, short = 'c', env = "WELLNESS_CONFIG")]
    pub config: Option<PathBuf>,

    /// JSON file holding the long-term memory
    #[arg(long, short = 'm', env = "WELLNESS_MEMORY_FILE")]
    pub memory_file: Option<PathBuf>,

    /// Model name passed to the delegate
    #[arg(long, env = "WELLNESS_MODEL")]
    pub model: Option<String>,

    /// Delegate provider: "ollama" or "openai"
    #[arg(long)]
    pub provider: Option<String>,

    /// Seconds to wait for the model before using the fallback reply
    #[arg(long)]
    pub timeout_secs: Option<u64>,
}

impl Args {
    /// Build the effective configuration: file (or defaults), then flags.
    pub fn load_config(&self) -> anyhow::Result<CoordinatorConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::info!(path = %path.display(), "Loading configuration");
                CoordinatorConfig::from_file(path)?
            }
            None => CoordinatorConfig::default(),
        };
        self.apply_overrides(&mut config);
        Ok(config)
    }

    fn apply_overrides(&self, config: &mut CoordinatorConfig) {
        if let Some(ref path) = self.memory_file {
            config.memory.path = path.clone();
        }
        if let Some(ref model) = self.model {
            config.generator.model = model.clone();
        }
        if let Some(ref provider) = self.provider {
            config.generator.provider = provider.clone();
        }
        if let Some(secs) = self.timeout_secs {
            config.generator.timeout_secs = secs;
        }
    }
}
