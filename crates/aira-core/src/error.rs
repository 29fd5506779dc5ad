use thiserror::Error;

pub type Result<T> = std::result::Result<T, AiraError>;

#[derive(Debug, Error)]
pub enum AiraError {
    /// A required setting is missing. Fatal at startup.
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{service} error: {message}")]
    Upstream {
        service: &'static str,
        message: String,
    },

    #[error("Validation error: {0}")]
    Validation(String),
}

impl AiraError {
    pub fn upstream(service: &'static str, message: impl Into<String>) -> Self {
        Self::Upstream {
            service,
            message: message.into(),
        }
    }

    pub fn is_upstream(&self) -> bool {
        matches!(self, Self::Upstream { .. })
    }
}
