use serde::{Deserialize, Serialize};

/// Who authored a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Speaker {
    Agent,
    User,
}

impl Speaker {
    /// Label used both on screen and when replaying history into the prompt
    pub fn label(&self) -> &'static str {
        match self {
            Speaker::Agent => "AI",
            Speaker::User => "Human",
        }
    }
}

impl std::fmt::Display for Speaker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One message in the conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "speaker", rename_all = "snake_case")]
pub enum Turn {
    /// Authored by the assistant
    Agent { text: String },
    /// Authored by the user
    User { text: String },
}

impl Turn {
    /// Create an agent turn
    pub fn agent(text: impl Into<String>) -> Self {
        Turn::Agent { text: text.into() }
    }

    /// Create a user turn
    pub fn user(text: impl Into<String>) -> Self {
        Turn::User { text: text.into() }
    }

    pub fn speaker(&self) -> Speaker {
        match self {
            Turn::Agent { .. } => Speaker::Agent,
            Turn::User { .. } => Speaker::User,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Turn::Agent { text } | Turn::User { text } => text,
        }
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
