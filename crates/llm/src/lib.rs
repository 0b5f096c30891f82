pub mod client;
pub mod config;
pub mod fallback;
pub mod ollama;
pub mod openai;
pub mod prompt;

pub use client::TextGenerator;
pub use config::{build_generator, GeneratorConfig};
pub use fallback::{FallbackGenerator, DEFAULT_FALLBACK_REPLY};
pub use ollama::OllamaCliGenerator;
pub use openai::OpenAiGenerator;
pub use prompt::build_prompt;
