//! Chat error types

use thiserror::Error;

/// Errors that can occur while running a chat session
#[derive(Error, Debug)]
pub enum ChatError {
    /// The remote text-generation call failed (network, auth, or endpoint-side)
    #[error("Completion failed: {0}")]
    Completion(#[from] anyhow::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ChatError {
    /// Create a configuration error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        ChatError::InvalidConfig(msg.into())
    }

    /// Whether the error came from the remote endpoint call
    pub fn is_completion(&self) -> bool {
        matches!(self, ChatError::Completion(_))
    }
}

/// Result type alias for chat operations
pub type ChatResult<T> = Result<T, ChatError>;
