use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Hosted model used for every request.
pub const MODEL_NAME: &str = "gemini-2.5-flash";

/// Sampling temperature used for every request.
pub const TEMPERATURE: f64 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}

/// A text completion model.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Complete an ordered conversation and return the model's reply text.
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String>;

    /// Send `prompt` as a single user turn with no history.
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.complete(&[ChatMessage::user(prompt)]).await
    }
}
