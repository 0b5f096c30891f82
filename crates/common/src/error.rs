//! Error types for the wellness assistant.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WellnessError {
    #[error("Memory error: {0}")]
    Memory(String),

    #[error("Generator error: {0}")]
    Generator(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, WellnessError>;
