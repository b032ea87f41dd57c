//! Chat session management
//!
//! The `ChatSession` struct owns the conversation for one interactive session
//! and the gateway used to answer it. It is created by the caller and passed
//! by reference to whatever renders it; there is no global session state.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::conversation::{Conversation, Turn};
use crate::core::{ChatResult, SessionState};
use crate::gateway::CompletionGateway;
use crate::llm::TextGenerationProvider;

/// Agent reply used when the model returns nothing after cleanup
pub const EMPTY_RESPONSE_FALLBACK: &str =
    "I'm sorry, I couldn't come up with an answer to that. Could you rephrase your question?";

/// A single user's conversation with the travel assistant
pub struct ChatSession<P> {
    session_id: String,
    started_at: DateTime<Utc>,
    state: SessionState,
    conversation: Conversation,
    gateway: CompletionGateway<P>,
}

impl<P: TextGenerationProvider> ChatSession<P> {
    /// Create an uninitialized session
    ///
    /// The conversation is seeded on the first call to [`turns`](Self::turns)
    /// or [`submit`](Self::submit).
    pub fn new(gateway: CompletionGateway<P>) -> Self {
        let session_id = Uuid::new_v4().to_string();
        tracing::info!("Creating chat session: {}", session_id);

        Self {
            session_id,
            started_at: Utc::now(),
            state: SessionState::Uninitialized,
            conversation: Conversation::default(),
            gateway,
        }
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Current conversation without triggering initialization
    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub fn gateway(&self) -> &CompletionGateway<P> {
        &self.gateway
    }

    /// Seed the conversation with the greeting (no-op once active)
    pub fn initialize(&mut self) {
        if self.state.is_active() {
            return;
        }

        self.conversation = Conversation::initialize();
        self.state = SessionState::Active;

        tracing::info!("Session {} is now {}", self.session_id, self.state);
    }

    /// All turns for rendering, oldest first
    pub fn turns(&mut self) -> &[Turn] {
        self.initialize();
        self.conversation.all()
    }

    /// Handle one piece of user input
    ///
    /// Blank input is ignored and returns `Ok(None)` without touching the
    /// conversation or the endpoint. Otherwise the user turn is appended, the
    /// gateway is asked for an answer, and the resulting agent turn is
    /// appended and returned.
    ///
    /// If the endpoint call fails the error is returned and the user turn
    /// stays in the history.
    pub async fn submit(&mut self, input: &str) -> ChatResult<Option<&Turn>> {
        self.initialize();

        if input.trim().is_empty() {
            tracing::debug!("Ignoring blank input in session {}", self.session_id);
            return Ok(None);
        }

        let history_len = self.conversation.len();
        self.conversation.append(Turn::user(input));

        tracing::info!(
            "Session {}: requesting answer with {} turns of history",
            self.session_id,
            history_len
        );

        let history = &self.conversation.all()[..history_len];
        let answer = match self.gateway.complete(history, input).await {
            Ok(answer) => answer,
            Err(e) => {
                tracing::error!("Session {}: completion failed: {:#}", self.session_id, e);
                return Err(e.into());
            }
        };

        let answer = if answer.is_empty() {
            tracing::warn!(
                "Session {}: model returned an empty answer, using fallback reply",
                self.session_id
            );
            EMPTY_RESPONSE_FALLBACK.to_string()
        } else {
            answer
        };

        self.conversation.append(Turn::agent(answer));

        tracing::info!(
            "Session {}: conversation now has {} turns",
            self.session_id,
            self.conversation.len()
        );

        Ok(self.conversation.last())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversation::{Speaker, GREETING};
    use crate::core::ChatError;
    use crate::gateway::testing::ScriptedProvider;

    fn session_with(replies: &[&str]) -> ChatSession<ScriptedProvider> {
        ChatSession::new(CompletionGateway::new(ScriptedProvider::new(
            replies.iter().copied(),
        )))
    }

    #[test]
    fn test_new_session_is_uninitialized() {
        let session = session_with(&[]);
        assert_eq!(session.state(), SessionState::Uninitialized);
        assert!(session.conversation().is_empty());
        assert!(Uuid::parse_str(session.session_id()).is_ok());
    }

    #[test]
    fn test_first_render_initializes() {
        let mut session = session_with(&[]);

        assert_eq!(session.turns(), &[Turn::agent(GREETING)]);
        assert_eq!(session.state(), SessionState::Active);

        // Second render does not reseed
        assert_eq!(session.turns().len(), 1);
    }

    #[tokio::test]
    async fn test_example_scenario() {
        let mut session = session_with(&["AI response:  Sure, when would you like to travel?"]);
        session.turns();

        let reply = session
            .submit("Book me a flight to Paris")
            .await
            .unwrap()
            .cloned();

        assert_eq!(reply, Some(Turn::agent("Sure, when would you like to travel?")));
        assert_eq!(
            session.conversation().all(),
            &[
                Turn::agent(GREETING),
                Turn::user("Book me a flight to Paris"),
                Turn::agent("Sure, when would you like to travel?"),
            ]
        );

        // The gateway saw the greeting as history and the new text as the question
        let prompts = session.gateway().provider().prompts();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains(
            "Chat history:\nAI: Hello, I am Yatra Sevak.AI How can I help you?\n\nUser question:\nBook me a flight to Paris"
        ));
    }

    #[tokio::test]
    async fn test_turns_alternate_after_submissions() {
        let mut session = session_with(&["one", "two", "three"]);

        for question in ["Hotels in Goa?", "Weather in Goa?", "Visa for Goa?"] {
            session.submit(question).await.unwrap();
        }

        let turns = session.turns();
        assert_eq!(turns.len(), 1 + 2 * 3);

        let speakers: Vec<Speaker> = turns.iter().map(|t| t.speaker()).collect();
        assert_eq!(
            speakers,
            vec![
                Speaker::Agent,
                Speaker::User,
                Speaker::Agent,
                Speaker::User,
                Speaker::Agent,
                Speaker::User,
                Speaker::Agent,
            ]
        );
    }

    #[tokio::test]
    async fn test_blank_input_is_ignored() {
        let mut session = session_with(&["unused"]);
        session.turns();

        for input in ["", "   ", "\n\t"] {
            assert!(session.submit(input).await.unwrap().is_none());
        }

        assert_eq!(session.conversation().len(), 1);
        assert_eq!(session.gateway().provider().calls(), 0);
    }

    #[tokio::test]
    async fn test_failure_keeps_user_turn() {
        let mut session = ChatSession::new(CompletionGateway::new(ScriptedProvider::failing(
            "HuggingFace API error (401): Invalid token",
        )));

        let err = session.submit("Hi").await.unwrap_err();
        assert!(matches!(err, ChatError::Completion(_)));
        assert!(err.to_string().contains("401"));

        assert_eq!(
            session.conversation().all(),
            &[Turn::agent(GREETING), Turn::user("Hi")]
        );
    }

    #[tokio::test]
    async fn test_empty_answer_uses_fallback() {
        let mut session = session_with(&["  bot response:  "]);

        let reply = session.submit("Hello?").await.unwrap().cloned();
        assert_eq!(reply, Some(Turn::agent(EMPTY_RESPONSE_FALLBACK)));
        assert_eq!(session.conversation().len(), 3);
    }

    #[tokio::test]
    async fn test_user_text_stored_as_typed() {
        let mut session = session_with(&["Noted."]);

        session.submit("  Paris in spring ").await.unwrap();
        assert_eq!(session.conversation().all()[1], Turn::user("  Paris in spring "));
    }

    #[tokio::test]
    async fn test_submit_initializes_lazily() {
        let mut session = session_with(&["Welcome!"]);

        session.submit("Hi").await.unwrap();
        assert_eq!(session.state(), SessionState::Active);
        assert_eq!(session.conversation().all()[0], Turn::agent(GREETING));
    }
}
