use anyhow::Result;

use super::parser;
use super::prompt::PromptTemplate;
use crate::conversation::Turn;
use crate::llm::TextGenerationProvider;

/// Turns (history, question) into a cleaned model answer
///
/// The gateway is stateless: everything it knows about the conversation comes
/// from the history passed to [`CompletionGateway::complete`]. Each call runs
/// three stages in order:
///
/// 1. render the prompt template
/// 2. invoke the remote endpoint
/// 3. parse the raw output
///
/// Endpoint failures are returned unchanged. There is no retry.
pub struct CompletionGateway<P> {
    provider: P,
    template: PromptTemplate,
    max_history_turns: Option<usize>,
}

impl<P: TextGenerationProvider> CompletionGateway<P> {
    /// Create a gateway using the travel assistant template and full history replay
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            template: PromptTemplate::travel_assistant(),
            max_history_turns: None,
        }
    }

    /// Use a different prompt template
    pub fn with_template(mut self, template: PromptTemplate) -> Self {
        self.template = template;
        self
    }

    /// Only replay the trailing `max` turns of history into the prompt
    pub fn with_max_history_turns(mut self, max: Option<usize>) -> Self {
        self.max_history_turns = max;
        self
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Stage 1: render the prompt
    pub fn render_prompt(&self, chat_history: &[Turn], user_question: &str) -> String {
        let window = match self.max_history_turns {
            Some(n) if n < chat_history.len() => &chat_history[chat_history.len() - n..],
            _ => chat_history,
        };

        if window.len() < chat_history.len() {
            tracing::debug!(
                "Replaying {} of {} turns into prompt",
                window.len(),
                chat_history.len()
            );
        }

        self.template.render(window, user_question)
    }

    /// Stage 2: call the endpoint
    pub async fn invoke(&self, prompt: &str) -> Result<String> {
        self.provider.generate(prompt).await
    }

    /// Run the full pipeline
    pub async fn complete(&self, chat_history: &[Turn], user_question: &str) -> Result<String> {
        let prompt = self.render_prompt(chat_history, user_question);

        tracing::debug!(
            "Prompt built from {} turns, {} chars, model {}",
            chat_history.len(),
            prompt.len(),
            self.provider.model()
        );

        let raw = self.invoke(&prompt).await?;
        let answer = parser::clean(&raw);

        if answer.len() != raw.len() {
            tracing::debug!("Cleaned completion from {} to {} chars", raw.len(), answer.len());
        }

        Ok(answer)
    }
}
