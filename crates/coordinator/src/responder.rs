//! The turn responder: safety check, intent triage, then execution.

use crate::config::{CoordinatorConfig, MarkerPolicy, RiskPolicy};
use crate::intent::Intent;
use crate::routing::{QuestionMarker, RouteDecision};
use crate::safety::is_crisis;
use crate::scripts::{self, BREATHING_ROUTINE, HELPLINE_REMINDER, SAFETY_SCRIPT};
use crate::session::SessionState;
use std::sync::Arc;
use tracing::{debug, error, info};
use wellness_common::{ChatMessage, Result};
use wellness_llm::{build_generator, build_prompt, FallbackGenerator, TextGenerator};
use wellness_memory::MemoryStore;

/// Answers user turns.
///
/// Stateless between turns apart from the memory file; all conversation
/// state lives in the [`SessionState`] passed to each call.
pub struct Responder {
    memory_store: MemoryStore,
    generator: FallbackGenerator,
    marker_policy: MarkerPolicy,
    risk_policy: RiskPolicy,
}

impl Responder {
    /// Create a responder with the model delegate described by `config`.
    pub fn new(config: CoordinatorConfig) -> Result<Self> {
        let generator = build_generator(&config.generator)?;
        Ok(Self::with_generator(config, generator))
    }

    /// Create a responder around an already-built delegate.
    pub fn with_generator(config: CoordinatorConfig, generator: Arc<dyn TextGenerator>) -> Self {
        info!(
            model = %generator.model_name(),
            memory = %config.memory.path.display(),
            marker_policy = ?config.marker_policy,
            risk_policy = ?config.risk_policy,
            "Initializing responder"
        );

        Self {
            generator: FallbackGenerator::new(generator, config.generator.fallback_reply.clone()),
            memory_store: MemoryStore::new(config.memory),
            marker_policy: config.marker_policy,
            risk_policy: config.risk_policy,
        }
    }

    /// Load memory and open a new session.
    pub async fn start_session(&self) -> SessionState {
        SessionState::new(self.memory_store.load().await)
    }

    /// Decide how to answer `text`. Pure: nothing is mutated.
    pub fn triage(&self, state: &SessionState, text: &str) -> RouteDecision {
        if is_crisis(text) {
            return RouteDecision::Safety;
        }

        let intent = Intent::classify(text);

        if intent == Intent::Yes && state.last_question == Some(QuestionMarker::Calming) {
            return RouteDecision::FollowUp {
                marker: QuestionMarker::Calming,
            };
        }

        if intent.is_topic() {
            return RouteDecision::Guidance { topic: intent };
        }

        RouteDecision::Delegate {
            intent,
            prompt: build_prompt(text),
        }
    }

    /// Carry out a decision against the session and return the reply.
    pub async fn execute(&self, state: &mut SessionState, decision: RouteDecision) -> String {
        match decision {
            RouteDecision::Safety => {
                state.memory.flag_risk();
                self.persist(state).await;
                SAFETY_SCRIPT.to_string()
            }

            RouteDecision::FollowUp { marker } => {
                if self.marker_policy != MarkerPolicy::Sticky {
                    debug!(marker = ?marker, "Clearing answered follow-up");
                    state.last_question = None;
                }
                match marker {
                    QuestionMarker::Calming => self.with_risk_note(state, BREATHING_ROUTINE),
                }
            }

            RouteDecision::Guidance { topic } => {
                state.memory.record_topic(topic.as_str());
                self.persist(state).await;

                if topic == Intent::Stress {
                    state.last_question = Some(QuestionMarker::Calming);
                } else {
                    self.expire_marker(state);
                }

                let script = scripts::guidance_script(topic).unwrap_or_default();
                self.with_risk_note(state, script)
            }

            RouteDecision::Delegate { intent, prompt } => {
                debug!(intent = %intent, "No local script, delegating to model");
                self.expire_marker(state);
                self.generator.generate_or_fallback(&prompt).await
            }
        }
    }

    /// Answer one user message: triage, then execute.
    pub async fn respond(&self, state: &mut SessionState, text: &str) -> String {
        let decision = self.triage(state, text);
        info!(route = decision.kind(), "Routing turn");
        self.execute(state, decision).await
    }

    /// Record the user message, answer it, and record the reply.
    pub async fn turn(&self, state: &mut SessionState, text: &str) -> String {
        state.transcript.push(ChatMessage::user(text));
        let reply = self.respond(state, text).await;
        state.transcript.push(ChatMessage::assistant(reply.clone()));
        reply
    }

    fn expire_marker(&self, state: &mut SessionState) {
        if self.marker_policy == MarkerPolicy::NextTurnOnly {
            state.last_question = None;
        }
    }

    fn with_risk_note(&self, state: &SessionState, script: &str) -> String {
        match self.risk_policy {
            RiskPolicy::RemindHelpline if state.memory.risk_flag => {
                format!("{script}{HELPLINE_REMINDER}")
            }
            _ => script.to_string(),
        }
    }

    /// A failed save is logged; the turn still gets its reply.
    async fn persist(&self, state: &SessionState) {
        if let Err(e) = self.memory_store.save(&state.memory).await {
            error!(
                path = %self.memory_store.path().display(),
                error = %e,
                "Failed to persist memory"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use wellness_common::WellnessError;
    use wellness_memory::MemoryConfig;

    struct FailingGenerator;

    #[async_trait]
    impl TextGenerator for FailingGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String> {
            Err(WellnessError::Generator("not running".into()))
        }
        fn model_name(&self) -> &str {
            "failing"
        }
    }

    fn responder(dir: &tempfile::TempDir) -> Responder {
        let config = CoordinatorConfig {
            memory: MemoryConfig {
                path: dir.path().join("memory.json"),
            },
            ..Default::default()
        };
        Responder::with_generator(config, Arc::new(FailingGenerator))
    }

    #[test]
    fn crisis_overrides_topic_keywords() {
        let dir = tempfile::TempDir::new().unwrap();
        let responder = responder(&dir);
        let state = SessionState::default();
        assert_eq!(
            responder.triage(&state, "the stress makes me want to hurt myself"),
            RouteDecision::Safety
        );
    }

    #[test]
    fn yes_without_marker_is_delegated() {
        let dir = tempfile::TempDir::new().unwrap();
        let responder = responder(&dir);
        let state = SessionState::default();
        assert!(matches!(
            responder.triage(&state, "yes"),
            RouteDecision::Delegate { intent: Intent::Yes, .. }
        ));
    }

    #[test]
    fn no_after_calming_offer_is_delegated() {
        let dir = tempfile::TempDir::new().unwrap();
        let responder = responder(&dir);
        let mut state = SessionState::default();
        state.last_question = Some(QuestionMarker::Calming);
        assert!(matches!(
            responder.triage(&state, "no"),
            RouteDecision::Delegate { intent: Intent::No, .. }
        ));
    }

    #[tokio::test]
    async fn delegate_failure_uses_fallback_reply() {
        let dir = tempfile::TempDir::new().unwrap();
        let responder = responder(&dir);
        let mut state = SessionState::default();

        let reply = responder.respond(&mut state, "tell me a joke").await;
        assert_eq!(reply, wellness_llm::DEFAULT_FALLBACK_REPLY);
    }

    #[tokio::test]
    async fn save_failure_does_not_fail_the_turn() {
        let dir = tempfile::TempDir::new().unwrap();
        // A directory where the file should be makes every write fail.
        let blocked = dir.path().join("memory.json");
        std::fs::create_dir(&blocked).unwrap();

        let responder = responder(&dir);
        let mut state = SessionState::default();
        let reply = responder.respond(&mut state, "I can't sleep").await;

        assert_eq!(reply, scripts::SLEEP_GUIDANCE);
        assert_eq!(state.memory.topics, vec!["sleep"]);
    }
}
