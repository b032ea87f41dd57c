//! Completion gateway: prompt assembly, endpoint call, output cleanup

pub mod gateway;
pub mod parser;
pub mod prompt;

#[cfg(test)]
pub(crate) mod testing;

pub use gateway::CompletionGateway;
pub use parser::{clean, BOILERPLATE_PREFIXES};
pub use prompt::{format_history, PromptTemplate, TRAVEL_ASSISTANT_TEMPLATE};
