use async_trait::async_trait;
use std::sync::Arc;
use wellness_common::Result;

/// A text-generation capability: prompt in, reply out.
///
/// Implementations report every failure (spawn, timeout, bad status,
/// empty output) as `WellnessError::Generator`.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String>;
    fn model_name(&self) -> &str;
}

#[async_trait]
impl TextGenerator for Box<dyn TextGenerator> {
    async fn generate(&self, prompt: &str) -> Result<String> {
        (**self).generate(prompt).await
    }
    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}

#[async_trait]
impl TextGenerator for Arc<dyn TextGenerator> {
    async fn generate(&self, prompt: &str) -> Result<String> {
        (**self).generate(prompt).await
    }
    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}
