pub mod conversation;
pub mod core;
pub mod gateway;
pub mod llm;
pub mod session;

// Terminal rendering surface
pub mod cli;
pub mod logging;
