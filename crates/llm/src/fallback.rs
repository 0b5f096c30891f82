use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;
use wellness_common::Result;

use crate::client::TextGenerator;

/// Reply used whenever the model delegate cannot answer.
pub const DEFAULT_FALLBACK_REPLY: &str = "I’m here with you. Let’s slow things down.\n\n\
Can you tell me a little more about what you’re feeling?";

/// Wraps a generator so that it never fails.
///
/// The inner generator is called exactly once per prompt. Any error is
/// logged and replaced by the fixed fallback reply.
pub struct FallbackGenerator {
    inner: Arc<dyn TextGenerator>,
    reply: String,
}

impl FallbackGenerator {
    pub fn new(inner: Arc<dyn TextGenerator>, reply: impl Into<String>) -> Self {
        Self {
            inner,
            reply: reply.into(),
        }
    }

    pub async fn generate_or_fallback(&self, prompt: &str) -> String {
        match self.inner.generate(prompt).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!(
                    model = %self.inner.model_name(),
                    error = %e,
                    "Model delegate failed, using fallback reply"
                );
                self.reply.clone()
            }
        }
    }
}

#[async_trait]
impl TextGenerator for FallbackGenerator {
    async fn generate(&self, prompt: &str) -> Result<String> {
        Ok(self.generate_or_fallback(prompt).await)
    }

    fn model_name(&self) -> &str {
        self.inner.model_name()
    }
}
