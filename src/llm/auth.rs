//! Authentication for the inference endpoint
//!
//! Supports both static and dynamic credentials:
//! - Static: token read once from the environment
//! - Dynamic: callback that provides a fresh token before each request
//!
//! A missing token is not an error here. The request is sent without an
//! `Authorization` header and the remote endpoint decides what to do with it.
//!
//! # Example: token fetched from a secrets service
//!
//! ```ignore
//! use yatra_sevak::llm::{AuthConfig, HuggingFaceProvider};
//!
//! let llm = HuggingFaceProvider::with_auth_provider(|| async {
//!     let token = vault.read("hf-token").await?;
//!     Ok(AuthConfig::new(token))
//! });
//! ```

use anyhow::Result;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Authentication configuration for API requests
#[derive(Clone, Default)]
pub struct AuthConfig {
    /// Bearer token, if one is configured
    pub token: Option<String>,
    /// Optional custom base URL (overrides the default inference API)
    pub base_url: Option<String>,
}

impl AuthConfig {
    /// Create a new auth config with a token
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            base_url: None,
        }
    }

    /// Create an auth config with no token
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Create a new auth config with token and custom base URL
    pub fn with_base_url(token: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            base_url: Some(base_url.into()),
        }
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Type alias for the boxed future returned by auth providers
pub type AuthFuture<'a> = Pin<Box<dyn Future<Output = Result<AuthConfig>> + Send + 'a>>;

/// Trait for providing authentication credentials dynamically
///
/// Called before each API request. Implementations handle caching and
/// refresh internally.
pub trait AuthProvider: Send + Sync {
    fn get_auth(&self) -> AuthFuture<'_>;
}

/// Wrapper to implement AuthProvider for async closures
pub struct FnAuthProvider<F> {
    func: F,
}

impl<F, Fut> AuthProvider for FnAuthProvider<F>
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = Result<AuthConfig>> + Send + 'static,
{
    fn get_auth(&self) -> AuthFuture<'_> {
        Box::pin((self.func)())
    }
}

/// Create an auth provider from an async closure
pub fn auth_provider<F, Fut>(func: F) -> FnAuthProvider<F>
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = Result<AuthConfig>> + Send + 'static,
{
    FnAuthProvider { func }
}

/// Internal auth source - either static or dynamic
#[derive(Clone)]
pub(crate) enum AuthSource {
    /// Static credentials set at creation time
    Static(AuthConfig),
    /// Dynamic credentials from a provider
    Dynamic(Arc<dyn AuthProvider>),
}

impl AuthSource {
    /// Get auth config (either returns static or calls provider)
    pub(crate) async fn get_auth(&self) -> Result<AuthConfig> {
        match self {
            AuthSource::Static(config) => Ok(config.clone()),
            AuthSource::Dynamic(provider) => provider.get_auth().await,
        }
    }
}
