//! Text generation provider trait
//!
//! Abstracts the remote endpoint so the completion gateway does not care which
//! hosted backend produces the text.

use anyhow::Result;

/// Trait for hosted text-generation backends.
///
/// A provider takes one fully rendered prompt and returns the raw completion.
/// Failures (network, authentication, endpoint-side) are returned as errors
/// and are not retried.
#[async_trait::async_trait]
pub trait TextGenerationProvider: Send + Sync {
    /// Submit a rendered prompt and return the generated text.
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Get the current model reference.
    fn model(&self) -> String;

    /// Get the provider name (e.g., "huggingface").
    fn provider_name(&self) -> &str;
}
