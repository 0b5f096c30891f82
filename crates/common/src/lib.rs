//! Common types shared across the wellness crates.
//!
//! Holds the error type every library crate returns and the role-tagged
//! transcript messages the session keeps for display.

pub mod error;
pub mod message;

pub use error::{Result, WellnessError};
pub use message::{ChatMessage, MessageRole};
