//! Session lifecycle state

use serde::{Deserialize, Serialize};

/// Lifecycle of a chat session
///
/// A session starts uninitialized and becomes active the first time it is
/// rendered or receives input. Teardown is implicit when the session is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    /// No conversation exists yet
    Uninitialized,

    /// Conversation is seeded and accepting input
    Active,
}

impl SessionState {
    /// Check if the session has been initialized
    pub fn is_active(&self) -> bool {
        matches!(self, SessionState::Active)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        SessionState::Uninitialized
    }
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionState::Uninitialized => write!(f, "Uninitialized"),
            SessionState::Active => write!(f, "Active"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_checks() {
        assert!(!SessionState::default().is_active());
        assert!(SessionState::Active.is_active());
    }

    #[test]
    fn test_state_display() {
        assert_eq!(SessionState::Uninitialized.to_string(), "Uninitialized");
        assert_eq!(SessionState::Active.to_string(), "Active");
    }
}
