//! Per-session conversation state.

use crate::routing::QuestionMarker;
use chrono::{DateTime, Local};
use wellness_common::ChatMessage;
use wellness_memory::MemoryRecord;

/// Everything one conversation carries between turns.
///
/// Owned by the caller and handed to the responder by `&mut` on each turn.
#[derive(Debug, Clone)]
pub struct SessionState {
    /// Display-only; routing never reads it
    pub transcript: Vec<ChatMessage>,

    /// Follow-up question asked by the assistant, if any
    pub last_question: Option<QuestionMarker>,

    /// Long-term memory loaded at session start
    pub memory: MemoryRecord,

    pub started_at: DateTime<Local>,
}

impl SessionState {
    pub fn new(memory: MemoryRecord) -> Self {
        Self {
            transcript: Vec::new(),
            last_question: None,
            memory,
            started_at: Local::now(),
        }
    }

    /// Caption shown under the conversation, e.g. `Session Time: 14:05:09`.
    pub fn time_caption(&self) -> String {
        self.started_at.format("Session Time: %H:%M:%S").to_string()
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(MemoryRecord::default())
    }
}
