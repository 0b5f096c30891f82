//! Long-term memory for the wellness assistant.
//!
//! A single small record per user profile, kept in a JSON file:
//!
//! - **topics**: every guidance topic the user raised, in turn order
//! - **risk_flag**: set once a crisis phrase has been seen, never cleared
//!
//! The record is loaded once at session start and fully rewritten on every
//! turn that changes it. There is no locking; one writer per file is assumed.

pub mod store;
pub mod types;

pub use store::MemoryStore;
pub use types::{MemoryConfig, MemoryRecord};
