use aira_core::{AiraError, ChatMessage, LanguageModel, Result, Role, MODEL_NAME, TEMPERATURE};
use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::{debug, warn};

const GEMINI: &str = "Gemini";

/// Google Gemini `generateContent` client.
pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            MODEL_NAME
        )
    }
}

/// Map a transcript onto Gemini's request shape.
///
/// System messages go to `systemInstruction`; assistant turns use role `model`.
fn generate_content_request(messages: &[ChatMessage]) -> Value {
    let system: Vec<Value> = messages
        .iter()
        .filter(|m| m.role == Role::System)
        .map(|m| json!({ "text": m.content }))
        .collect();

    let contents: Vec<Value> = messages
        .iter()
        .filter_map(|m| {
            let role = match m.role {
                Role::System => return None,
                Role::User => "user",
                Role::Assistant => "model",
            };
            Some(json!({ "role": role, "parts": [{ "text": m.content }] }))
        })
        .collect();

    let mut body = json!({
        "contents": contents,
        "generationConfig": { "temperature": TEMPERATURE },
    });
    if !system.is_empty() {
        body["systemInstruction"] = json!({ "parts": system });
    }
    body
}

/// Concatenated text parts of the first candidate.
///
/// A candidate without text parts yields an empty reply. Only a response with
/// no candidate at all is an error.
fn parse_generate_content_response(body: &Value) -> Result<String> {
    let candidate = match body
        .get("candidates")
        .and_then(Value::as_array)
        .and_then(|c| c.first())
    {
        Some(c) => c,
        None => {
            let reason = body
                .pointer("/promptFeedback/blockReason")
                .and_then(Value::as_str)
                .unwrap_or("no candidates returned");
            return Err(AiraError::upstream(GEMINI, format!("empty response: {}", reason)));
        }
    };

    let text: String = candidate
        .pointer("/content/parts")
        .and_then(Value::as_array)
        .map(|parts| {
            parts
                .iter()
                .filter_map(|p| p.get("text").and_then(Value::as_str))
                .collect()
        })
        .unwrap_or_default();

    if text.is_empty() {
        let reason = candidate
            .get("finishReason")
            .and_then(Value::as_str)
            .unwrap_or("unknown");
        warn!("Gemini candidate carried no text (finish reason {})", reason);
    }
    Ok(text)
}

#[async_trait]
impl LanguageModel for GeminiClient {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String> {
        debug!("Calling {} with {} messages", MODEL_NAME, messages.len());

        let resp = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&generate_content_request(messages))
            .send()
            .await
            .map_err(|e| AiraError::upstream(GEMINI, format!("request failed: {}", e)))?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(AiraError::upstream(GEMINI, format!("HTTP {} - {}", status, text)));
        }

        let body: Value = resp
            .json()
            .await
            .map_err(|e| AiraError::upstream(GEMINI, format!("invalid JSON response: {}", e)))?;

        parse_generate_content_response(&body)
    }
}
