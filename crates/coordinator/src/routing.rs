//! Route decision types.

use crate::intent::Intent;
use serde::{Deserialize, Serialize};

/// A yes/no follow-up the assistant has just offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionMarker {
    /// "Would you like a guided calming routine?"
    Calming,
}

/// How one user turn will be answered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RouteDecision {
    /// Crisis phrase detected: safety script, risk flag raised. Overrides everything.
    Safety,

    /// Affirmative answer to a pending follow-up question
    FollowUp { marker: QuestionMarker },

    /// Topic guidance script, topic recorded in memory
    Guidance { topic: Intent },

    /// No local script applies; ask the model delegate
    Delegate { intent: Intent, prompt: String },
}

impl RouteDecision {
    /// Short label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            RouteDecision::Safety => "safety",
            RouteDecision::FollowUp { .. } => "follow_up",
            RouteDecision::Guidance { .. } => "guidance",
            RouteDecision::Delegate { .. } => "delegate",
        }
    }
}
