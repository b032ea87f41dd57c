//! Hugging Face Inference API types for the `text-generation` task
//!
//! These types serialize/deserialize the JSON bodies exchanged with the
//! hosted inference endpoint.

use serde::{Deserialize, Serialize};

/// The only task kind this crate talks to
pub const TEXT_GENERATION_TASK: &str = "text-generation";

// ============================================================================
// Request Types
// ============================================================================

/// Generation parameters sent alongside the prompt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationParameters {
    /// Maximum number of tokens to generate
    pub max_new_tokens: u32,

    /// Sampling temperature
    pub temperature: f32,

    /// Nucleus sampling threshold
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,

    /// Typical decoding mass
    #[serde(skip_serializing_if = "Option::is_none")]
    pub typical_p: Option<f32>,

    /// Top-k sampling (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,

    /// Repetition penalty (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repetition_penalty: Option<f32>,

    /// Whether the endpoint should echo the prompt in `generated_text`
    pub return_full_text: bool,
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self {
            max_new_tokens: 512,
            temperature: 0.8,
            top_p: Some(0.95),
            typical_p: Some(0.95),
            top_k: None,
            repetition_penalty: None,
            return_full_text: false,
        }
    }
}

/// Request body for a text-generation call
#[derive(Debug, Clone, Serialize)]
pub struct TextGenerationRequest {
    /// The rendered prompt
    pub inputs: String,

    /// Generation parameters
    pub parameters: GenerationParameters,
}

// ============================================================================
// Response Types
// ============================================================================

/// One generated completion
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratedText {
    pub generated_text: String,
}

/// Error body returned by the endpoint (model loading, bad token, etc.)
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub error: ApiErrorMessage,
    /// Seconds until the model is expected to be loaded, when it is cold
    #[serde(default)]
    pub estimated_time: Option<f64>,
}

/// The `error` field is usually a string but some endpoints send a list
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ApiErrorMessage {
    Single(String),
    Many(Vec<String>),
}

impl std::fmt::Display for ApiErrorMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiErrorMessage::Single(msg) => f.write_str(msg),
            ApiErrorMessage::Many(msgs) => f.write_str(&msgs.join("; ")),
        }
    }
}

/// Any body the text-generation endpoint may send back
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TextGenerationResponse {
    /// `[{"generated_text": "..."}]`
    Batch(Vec<GeneratedText>),
    /// `{"generated_text": "..."}`
    Single(GeneratedText),
    /// `{"error": "..."}`
    Error(ApiErrorBody),
}

impl TextGenerationResponse {
    /// Extract the completion text, or the endpoint's error message
    pub fn into_text(self) -> Result<String, String> {
        match self {
            TextGenerationResponse::Batch(items) => items
                .into_iter()
                .next()
                .map(|item| item.generated_text)
                .ok_or_else(|| "Endpoint returned an empty completion list".to_string()),
            TextGenerationResponse::Single(item) => Ok(item.generated_text),
            TextGenerationResponse::Error(body) => Err(match body.estimated_time {
                Some(secs) => format!("{} (estimated time: {:.0}s)", body.error, secs),
                None => body.error.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serialization() {
        let request = TextGenerationRequest {
            inputs: "Hello".to_string(),
            parameters: GenerationParameters::default(),
        };
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["inputs"], "Hello");
        assert_eq!(json["parameters"]["max_new_tokens"], 512);
        assert_eq!(json["parameters"]["return_full_text"], false);
        assert!(json["parameters"].get("top_k").is_none());
        assert!(json["parameters"].get("repetition_penalty").is_none());
    }

    #[test]
    fn test_batch_response() {
        let json = r#"[{"generated_text": " Sure thing"}]"#;
        let response: TextGenerationResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.into_text().unwrap(), " Sure thing");
    }

    #[test]
    fn test_single_response() {
        let json = r#"{"generated_text": "Bonjour"}"#;
        let response: TextGenerationResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.into_text().unwrap(), "Bonjour");
    }

    #[test]
    fn test_empty_batch_is_error() {
        let response: TextGenerationResponse = serde_json::from_str("[]").unwrap();
        assert!(response.into_text().is_err());
    }

    #[test]
    fn test_error_response() {
        let json = r#"{"error": "Model is currently loading", "estimated_time": 20.0}"#;
        let response: TextGenerationResponse = serde_json::from_str(json).unwrap();
        let err = response.into_text().unwrap_err();
        assert!(err.contains("Model is currently loading"));
        assert!(err.contains("20s"));

        let json = r#"{"error": ["first", "second"]}"#;
        let response: TextGenerationResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.into_text().unwrap_err(), "first; second");
    }
}
