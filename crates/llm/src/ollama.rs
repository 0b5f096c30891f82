//! Local model delegate that shells out to the `ollama` CLI.
//!
//! The prompt goes to the child's stdin and the reply is read from its
//! stdout. The whole exchange is bounded by a timeout; a child still running
//! when it expires is killed.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, info, warn};
use wellness_common::{Result, WellnessError};

use crate::client::TextGenerator;

pub const DEFAULT_BINARY: &str = "ollama";
pub const DEFAULT_MODEL: &str = "llama3:8b";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// A [`TextGenerator`] backed by a CLI binary.
///
/// Arguments are templated: `"{model}"` is replaced with the model name,
/// so the default `["run", "{model}"]` runs `ollama run llama3:8b`.
pub struct OllamaCliGenerator {
    binary: String,
    args_template: Vec<String>,
    model: String,
    timeout: Duration,
}

impl OllamaCliGenerator {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            binary: DEFAULT_BINARY.to_string(),
            args_template: default_args(),
            model: model.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_binary(mut self, binary: impl Into<String>) -> Self {
        self.binary = binary.into();
        self
    }

    pub fn with_args(mut self, args_template: Vec<String>) -> Self {
        self.args_template = args_template;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn build_args(&self) -> Vec<String> {
        self.args_template
            .iter()
            .map(|arg| arg.replace("{model}", &self.model))
            .collect()
    }

    async fn run(&self, prompt: &str) -> Result<std::process::Output> {
        let mut child = Command::new(&self.binary)
            .args(self.build_args())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                WellnessError::Generator(format!("Failed to spawn '{}': {}", self.binary, e))
            })?;

        // Feed stdin from its own task so a child that fills its stdout pipe
        // before draining the prompt cannot stall both sides.
        let writer = child.stdin.take().map(|mut stdin| {
            let prompt = prompt.to_owned();
            tokio::spawn(async move {
                let written = stdin.write_all(prompt.as_bytes()).await;
                drop(stdin);
                written
            })
        });

        let output = child.wait_with_output().await.map_err(|e| {
            WellnessError::Generator(format!("Failed to wait for '{}': {}", self.binary, e))
        })?;

        if let Some(writer) = writer {
            match writer.await {
                Ok(Ok(())) => {}
                // The child may exit without reading its input; its status decides.
                Ok(Err(e)) if e.kind() == ErrorKind::BrokenPipe => {
                    debug!(binary = %self.binary, "Model process closed stdin early");
                }
                Ok(Err(e)) => {
                    return Err(WellnessError::Generator(format!(
                        "Failed to write prompt to '{}': {}",
                        self.binary, e
                    )));
                }
                Err(e) => {
                    return Err(WellnessError::Generator(format!(
                        "Prompt writer for '{}' failed: {}",
                        self.binary, e
                    )));
                }
            }
        }

        Ok(output)
    }
}

pub(crate) fn default_args() -> Vec<String> {
    vec!["run".into(), "{model}".into()]
}

#[async_trait]
impl TextGenerator for OllamaCliGenerator {
    async fn generate(&self, prompt: &str) -> Result<String> {
        info!(binary = %self.binary, model = %self.model, "Invoking local model");

        let output = tokio::time::timeout(self.timeout, self.run(prompt))
            .await
            .map_err(|_| {
                warn!(binary = %self.binary, timeout = ?self.timeout, "Model process timed out");
                WellnessError::Generator(format!(
                    "'{}' timed out after {:?}",
                    self.binary, self.timeout
                ))
            })??;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(WellnessError::Generator(format!(
                "'{}' exited with {}: {}",
                self.binary,
                output.status,
                stderr.trim()
            )));
        }

        let reply = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if reply.is_empty() {
            return Err(WellnessError::Generator(format!(
                "'{}' produced no output",
                self.binary
            )));
        }

        debug!(model = %self.model, chars = reply.len(), "Local model replied");
        Ok(reply)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
