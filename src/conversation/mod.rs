//! In-memory conversation store

pub mod conversation;
pub mod message;

pub use conversation::{Conversation, GREETING};
pub use message::{Speaker, Turn};
