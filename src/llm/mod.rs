pub mod auth;
pub mod huggingface;
pub mod provider;
pub mod types;

pub use auth::{auth_provider, AuthConfig, AuthProvider, FnAuthProvider};
pub use huggingface::{HuggingFaceProvider, DEFAULT_API_BASE, DEFAULT_MODEL};
pub use provider::TextGenerationProvider;
pub use types::{
    ApiErrorBody, ApiErrorMessage, GeneratedText, GenerationParameters, TextGenerationRequest,
    TextGenerationResponse, TEXT_GENERATION_TASK,
};
