//! Hugging Face Inference API client
//!
//! Talks to the hosted `text-generation` task: one rendered prompt goes out,
//! one completion comes back.
//!
//! # Authentication
//!
//! Uses a Hugging Face access token (set via `HUGGINGFACEHUB_API_TOKEN` or passed
//! directly). The token is sent as a bearer token when present.
//!
//! ```ignore
//! // With explicit token
//! let llm = HuggingFaceProvider::new("hf_...")
//!     .with_model("mistralai/Mixtral-8x7B-Instruct-v0.1");
//!
//! // From a parsed configuration
//! let llm = HuggingFaceProvider::from_config(&ChatConfig::from_env()?)?;
//! ```

use anyhow::{Context, Result};
use reqwest::Client;
use std::future::Future;
use std::sync::Arc;

use super::auth::{auth_provider, AuthConfig, AuthProvider, AuthSource};
use super::provider::TextGenerationProvider;
use super::types::{
    GenerationParameters, TextGenerationRequest, TextGenerationResponse, TEXT_GENERATION_TASK,
};
use crate::core::{ChatError, ChatResult};
use crate::session::ChatConfig;

pub const DEFAULT_API_BASE: &str = "https://api-inference.huggingface.co";

pub const DEFAULT_MODEL: &str = "mistralai/Mixtral-8x7B-Instruct-v0.1";

/// Hugging Face hosted inference provider
pub struct HuggingFaceProvider {
    client: Client,
    auth: AuthSource,
    model: String,
    api_base: String,
    parameters: GenerationParameters,
}

impl HuggingFaceProvider {
    /// Create a provider from a parsed configuration
    ///
    /// Fails if the configured task kind is anything other than `text-generation`.
    pub fn from_config(config: &ChatConfig) -> ChatResult<Self> {
        tracing::info!("Creating HuggingFace provider from configuration");

        if config.task != TEXT_GENERATION_TASK {
            return Err(ChatError::invalid_config(format!(
                "Unsupported task kind '{}', only '{}' is available",
                config.task, TEXT_GENERATION_TASK
            )));
        }

        if config.api_token.is_none() {
            tracing::warn!("No API token configured; requests will be sent unauthenticated");
        }

        tracing::info!("Using model: {}", config.repo_id);
        tracing::info!("Max new tokens: {}", config.parameters.max_new_tokens);

        Ok(Self {
            client: Client::new(),
            auth: AuthSource::Static(AuthConfig {
                token: config.api_token.clone(),
                base_url: None,
            }),
            model: config.repo_id.clone(),
            api_base: config.api_base.clone(),
            parameters: config.parameters.clone(),
        })
    }

    /// Create a new provider with a specific token
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_auth_source(AuthSource::Static(AuthConfig::new(token)))
    }

    /// Create a new provider with a dynamic auth provider callback
    ///
    /// The callback is called before each API request. `AuthConfig.base_url`
    /// (if set) overrides the default inference API base URL.
    pub fn with_auth_provider<F, Fut>(provider: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<AuthConfig>> + Send + 'static,
    {
        Self::with_auth_source(AuthSource::Dynamic(Arc::new(auth_provider(provider))))
    }

    /// Create a new provider with a trait object auth provider
    pub fn with_auth_provider_boxed(provider: Arc<dyn AuthProvider>) -> Self {
        Self::with_auth_source(AuthSource::Dynamic(provider))
    }

    fn with_auth_source(auth: AuthSource) -> Self {
        Self {
            client: Client::new(),
            auth,
            model: DEFAULT_MODEL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            parameters: GenerationParameters::default(),
        }
    }

    /// Set the model repository to use
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the inference API base URL
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Replace all generation parameters
    pub fn with_parameters(mut self, parameters: GenerationParameters) -> Self {
        self.parameters = parameters;
        self
    }

    /// Set the max new tokens for responses
    pub fn with_max_new_tokens(mut self, max_new_tokens: u32) -> Self {
        self.parameters.max_new_tokens = max_new_tokens;
        self
    }

    /// Set the sampling temperature
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.parameters.temperature = temperature;
        self
    }

    /// Use a preconfigured HTTP client (proxies, timeouts, TLS settings)
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    pub fn parameters(&self) -> &GenerationParameters {
        &self.parameters
    }

    fn model_url(&self, api_base: &str) -> String {
        format!("{}/models/{}", api_base.trim_end_matches('/'), self.model)
    }

    /// Send a request to the inference endpoint and decode the body
    async fn send_request(&self, request: &TextGenerationRequest) -> Result<TextGenerationResponse> {
        let auth_config = self
            .auth
            .get_auth()
            .await
            .context("Failed to get authentication credentials")?;
        let api_base = auth_config.base_url.as_deref().unwrap_or(&self.api_base);
        let url = self.model_url(api_base);

        let request_json =
            serde_json::to_string(request).context("Failed to serialize HuggingFace request")?;
        tracing::debug!("[HuggingFace] POST {} ({} bytes)", url, request_json.len());

        let mut request_builder = self
            .client
            .post(&url)
            .header("Content-Type", "application/json");

        if let Some(token) = auth_config.token.as_deref() {
            request_builder = request_builder.bearer_auth(token);
        }

        let response = request_builder
            .body(request_json)
            .send()
            .await
            .context("Failed to send request to HuggingFace API")?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .context("Failed to read HuggingFace response body")?;

        tracing::debug!("[HuggingFace] Response status: {}", status);
        tracing::debug!("[HuggingFace] Response body: {}", response_text);

        if !status.is_success() {
            tracing::error!("[HuggingFace] API error: {} - {}", status, response_text);
            let message = serde_json::from_str::<TextGenerationResponse>(&response_text)
                .ok()
                .and_then(|body| body.into_text().err())
                .unwrap_or(response_text);
            anyhow::bail!("HuggingFace API error ({}): {}", status, message);
        }

        serde_json::from_str(&response_text).context("Failed to parse HuggingFace API response")
    }
}

#[async_trait::async_trait]
impl TextGenerationProvider for HuggingFaceProvider {
    async fn generate(&self, prompt: &str) -> Result<String> {
        tracing::info!("[HuggingFace] Requesting completion from {}", self.model);
        tracing::debug!("[HuggingFace] Prompt length: {} chars", prompt.len());

        let request = TextGenerationRequest {
            inputs: prompt.to_string(),
            parameters: self.parameters.clone(),
        };

        let response = self.send_request(&request).await?;
        let text = response.into_text().map_err(|message| {
            tracing::error!("[HuggingFace] Endpoint reported error: {}", message);
            anyhow::anyhow!("HuggingFace API error: {}", message)
        })?;

        tracing::info!("[HuggingFace] Received completion, length: {} chars", text.len());

        Ok(text)
    }

    fn model(&self) -> String {
        self.model.clone()
    }

    fn provider_name(&self) -> &str {
        "huggingface"
    }
}
