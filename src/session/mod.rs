//! Session management for the travel assistant
//!
//! This module provides:
//! - `ChatSession` - Caller-owned conversation state plus its gateway
//! - `ChatConfig` - Endpoint and session settings from the environment

pub mod config;
pub mod session;

pub use config::ChatConfig;
pub use session::{ChatSession, EMPTY_RESPONSE_FALLBACK};
