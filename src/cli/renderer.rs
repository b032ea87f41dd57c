//! Chat Renderer - drives a chat session from the terminal
//!
//! The `ChatRenderer` is the rendering surface for a [`ChatSession`]:
//! - Renders the conversation (the greeting on first start)
//! - Reads user input and hands it to the session
//! - Prints the agent's reply, or the error if the endpoint call failed
//!
//! The session is owned by the caller and borrowed for the duration of `run`.

use std::io;

use crate::llm::TextGenerationProvider;
use crate::session::ChatSession;

use super::console::Console;

/// What the input loop should do after a line has been handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// Console renderer for a chat session
///
/// # Example
///
/// ```ignore
/// let mut session = ChatSession::new(CompletionGateway::new(provider));
/// ChatRenderer::new().run(&mut session).await?;
/// ```
pub struct ChatRenderer {
    console: Console,
}

impl ChatRenderer {
    /// Create a new renderer with the default console
    pub fn new() -> Self {
        Self {
            console: Console::new(),
        }
    }

    /// Create a renderer with a custom console
    pub fn with_console(console: Console) -> Self {
        Self { console }
    }

    /// Run the interactive loop
    ///
    /// Returns when the user types "exit"/"quit" or stdin closes.
    pub async fn run<P: TextGenerationProvider>(&self, session: &mut ChatSession<P>) -> io::Result<()> {
        self.console.print_banner();
        self.console.print_turns(session.turns());

        loop {
            let input = match self.console.read_input()? {
                Some(input) => input,
                None => {
                    self.console.println();
                    break;
                }
            };

            if self.handle_input(session, &input).await == LoopControl::Exit {
                break;
            }
        }

        tracing::info!("Session {} ended", session.session_id());

        Ok(())
    }

    /// Handle one line of user input
    pub async fn handle_input<P: TextGenerationProvider>(
        &self,
        session: &mut ChatSession<P>,
        input: &str,
    ) -> LoopControl {
        let trimmed = input.trim();

        if trimmed.eq_ignore_ascii_case("exit") || trimmed.eq_ignore_ascii_case("quit") {
            self.console.print_system("Goodbye, safe travels!");
            return LoopControl::Exit;
        }

        if trimmed.is_empty() {
            return LoopControl::Continue;
        }

        self.console.print_thinking();
        let result = session.submit(input).await;
        self.console.clear_thinking();

        match result {
            Ok(Some(reply)) => self.console.print_turn(reply),
            Ok(None) => {}
            Err(e) => self.console.print_error(&e.to_string()),
        }
        self.console.println();

        LoopControl::Continue
    }
}

impl Default for ChatRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversation::Turn;
    use crate::gateway::testing::ScriptedProvider;
    use crate::gateway::CompletionGateway;

    fn session_with(replies: &[&str]) -> ChatSession<ScriptedProvider> {
        ChatSession::new(CompletionGateway::new(ScriptedProvider::new(
            replies.iter().copied(),
        )))
    }

    #[tokio::test]
    async fn test_exit_commands() {
        let renderer = ChatRenderer::new();
        let mut session = session_with(&[]);

        assert_eq!(renderer.handle_input(&mut session, "exit").await, LoopControl::Exit);
        assert_eq!(renderer.handle_input(&mut session, " QUIT ").await, LoopControl::Exit);
        assert_eq!(session.gateway().provider().calls(), 0);
    }

    #[tokio::test]
    async fn test_blank_input_skipped() {
        let renderer = ChatRenderer::new();
        let mut session = session_with(&[]);
        session.turns();

        assert_eq!(renderer.handle_input(&mut session, "   ").await, LoopControl::Continue);
        assert_eq!(session.conversation().len(), 1);
    }

    #[tokio::test]
    async fn test_reply_appended() {
        let renderer = ChatRenderer::new();
        let mut session = session_with(&["chat response: Try Kyoto in April."]);

        let control = renderer.handle_input(&mut session, "Where should I go?").await;
        assert_eq!(control, LoopControl::Continue);
        assert_eq!(
            session.conversation().last(),
            Some(&Turn::agent("Try Kyoto in April."))
        );
    }

    #[tokio::test]
    async fn test_failure_does_not_end_loop() {
        let renderer = ChatRenderer::new();
        let mut session =
            ChatSession::new(CompletionGateway::new(ScriptedProvider::failing("timed out")));

        let control = renderer.handle_input(&mut session, "Hello").await;
        assert_eq!(control, LoopControl::Continue);
        assert_eq!(session.conversation().len(), 2);
    }
}
