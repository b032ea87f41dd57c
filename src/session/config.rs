//! Chat Configuration
//!
//! Settings for the hosted endpoint and the session, read from the process
//! environment (optionally seeded from a `.env` file).

use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};

use crate::core::{ChatError, ChatResult};
use crate::llm::{GenerationParameters, DEFAULT_API_BASE, DEFAULT_MODEL, TEXT_GENERATION_TASK};

pub const API_TOKEN_VAR: &str = "HUGGINGFACEHUB_API_TOKEN";
pub const REPO_ID_VAR: &str = "YATRA_MODEL_REPO_ID";
pub const API_BASE_VAR: &str = "YATRA_API_BASE";
pub const MAX_NEW_TOKENS_VAR: &str = "YATRA_MAX_NEW_TOKENS";
pub const TEMPERATURE_VAR: &str = "YATRA_TEMPERATURE";
pub const MAX_HISTORY_TURNS_VAR: &str = "YATRA_MAX_HISTORY_TURNS";
pub const LOG_DIR_VAR: &str = "YATRA_LOG_DIR";

/// Configuration for a chat session
///
/// ```ignore
/// let config = ChatConfig::from_env()?
///     .with_max_history_turns(Some(20));
/// ```
#[derive(Clone)]
pub struct ChatConfig {
    /// Access token for the inference API. Not validated locally.
    pub api_token: Option<String>,

    /// Model repository on the hub
    pub repo_id: String,

    /// Task kind requested from the endpoint
    pub task: String,

    /// Inference API base URL
    pub api_base: String,

    /// Sampling parameters
    pub parameters: GenerationParameters,

    /// Trailing turns replayed into each prompt (`None` replays everything)
    pub max_history_turns: Option<usize>,

    /// Directory for log files
    pub log_dir: PathBuf,

    /// Env file the settings were seeded from, if any
    pub env_file: Option<PathBuf>,
}

impl ChatConfig {
    /// Load configuration from the environment, reading `.env` first if present
    ///
    /// Runs before logging is installed, so the loaded file is recorded in
    /// [`env_file`](Self::env_file) instead of being logged here.
    pub fn from_env() -> ChatResult<Self> {
        let env_file = dotenv::dotenv().ok();

        let mut config = Self::from_lookup(|key| env::var(key).ok())?;
        config.env_file = env_file;
        Ok(config)
    }

    /// Load configuration from a specific env file
    ///
    /// Variables already set in the process environment take precedence over
    /// the file, matching `.env` semantics. The process environment is not
    /// modified.
    pub fn from_env_file(path: impl AsRef<Path>) -> ChatResult<Self> {
        let path = path.as_ref();
        let vars = dotenv::from_path_iter(path)
            .map_err(|e| ChatError::invalid_config(format!("Failed to read {:?}: {}", path, e)))?
            .collect::<Result<HashMap<String, String>, _>>()
            .map_err(|e| ChatError::invalid_config(format!("Failed to parse {:?}: {}", path, e)))?;

        let mut config =
            Self::from_lookup(|key| env::var(key).ok().or_else(|| vars.get(key).cloned()))?;
        config.env_file = Some(path.to_path_buf());
        Ok(config)
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> ChatResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let mut config = Self::default();
        config.api_token = get(API_TOKEN_VAR);

        if let Some(repo_id) = get(REPO_ID_VAR) {
            config.repo_id = repo_id;
        }
        if let Some(api_base) = get(API_BASE_VAR) {
            config.api_base = api_base;
        }
        if let Some(raw) = get(MAX_NEW_TOKENS_VAR) {
            config.parameters.max_new_tokens = parse_var(MAX_NEW_TOKENS_VAR, &raw)?;
        }
        if let Some(raw) = get(TEMPERATURE_VAR) {
            config.parameters.temperature = parse_var(TEMPERATURE_VAR, &raw)?;
        }
        if let Some(raw) = get(MAX_HISTORY_TURNS_VAR) {
            config.max_history_turns = Some(parse_var(MAX_HISTORY_TURNS_VAR, &raw)?);
        }
        if let Some(dir) = get(LOG_DIR_VAR) {
            config.log_dir = PathBuf::from(dir);
        }

        Ok(config)
    }

    /// Set the model repository
    pub fn with_repo_id(mut self, repo_id: impl Into<String>) -> Self {
        self.repo_id = repo_id.into();
        self
    }

    /// Set the API token
    pub fn with_api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    /// Set max new tokens per completion
    pub fn with_max_new_tokens(mut self, max: u32) -> Self {
        self.parameters.max_new_tokens = max;
        self
    }

    /// Limit how much history is replayed per call
    pub fn with_max_history_turns(mut self, max: Option<usize>) -> Self {
        self.max_history_turns = max;
        self
    }
}

fn parse_var<T: std::str::FromStr>(key: &str, raw: &str) -> ChatResult<T>
where
    T::Err: std::fmt::Display,
{
    raw.parse()
        .map_err(|e| ChatError::invalid_config(format!("{} has invalid value '{}': {}", key, raw, e)))
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            api_token: None,
            repo_id: DEFAULT_MODEL.to_string(),
            task: TEXT_GENERATION_TASK.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            parameters: GenerationParameters::default(),
            max_history_turns: None,
            log_dir: PathBuf::from("logs"),
            env_file: None,
        }
    }
}

impl std::fmt::Debug for ChatConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatConfig")
            .field("api_token", &self.api_token.as_ref().map(|_| "<redacted>"))
            .field("repo_id", &self.repo_id)
            .field("task", &self.task)
            .field("api_base", &self.api_base)
            .field("parameters", &self.parameters)
            .field("max_history_turns", &self.max_history_turns)
            .field("log_dir", &self.log_dir)
            .field("env_file", &self.env_file)
            .finish()
    }
}
