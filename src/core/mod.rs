//! Core types for the chat front-end
//!
//! This module provides the fundamental types used throughout the crate:
//! - `SessionState` - Lifecycle of a chat session
//! - `ChatError` - Error types

pub mod error;
pub mod state;

pub use error::{ChatError, ChatResult};
pub use state::SessionState;
