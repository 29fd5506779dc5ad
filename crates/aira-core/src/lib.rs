pub mod alerts;
pub mod analysis;
pub mod chat;
pub mod error;
pub mod llm;
pub mod prompt;
pub mod reformat;
pub mod summary;

pub use alerts::{alerts_query, decode_alerts_response, Alert, AlertSource, DateWindow};
pub use analysis::{AlertAnalyzer, DEFAULT_DAYS};
pub use chat::ChatSession;
pub use error::{AiraError, Result};
pub use llm::{ChatMessage, LanguageModel, Role, MODEL_NAME, TEMPERATURE};
pub use prompt::{analysis_prompt, CHAT_SYSTEM_PROMPT};
pub use reformat::reformat;
pub use summary::{summarize_alerts, NO_ALERTS};

pub use chrono::NaiveDate;
