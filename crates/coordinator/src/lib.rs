//! Turn-by-turn coordinator for the wellness assistant.
//!
//! Each user turn flows through:
//!
//! ```text
//! user text
//!     │
//!     ▼
//! ┌──────────────┐  crisis   ┌────────────────────────────┐
//! │    safety    ├──────────►│ safety script + risk flag  │
//! └──────┬───────┘           └────────────────────────────┘
//!        ▼
//! ┌──────────────┐  yes + pending offer  ┌─────────────────┐
//! │    intent    ├──────────────────────►│ breathing script│
//! └──────┬───────┘                       └─────────────────┘
//!        │ topic                    ┌───────────────────────┐
//!        ├─────────────────────────►│ guidance + memory     │
//!        │ yes / no / general       └───────────────────────┘
//!        ▼
//!  model delegate (fallback reply on failure)
//! ```

pub mod config;
pub mod intent;
pub mod responder;
pub mod routing;
pub mod safety;
pub mod scripts;
pub mod session;

pub use config::{CoordinatorConfig, MarkerPolicy, RiskPolicy};
pub use intent::Intent;
pub use responder::Responder;
pub use routing::{QuestionMarker, RouteDecision};
pub use safety::is_crisis;
pub use session::SessionState;
