use aira_core::alerts::MAPBIOMAS;
use aira_core::{alerts_query, decode_alerts_response, AiraError, Alert, AlertSource, DateWindow, Result};
use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::debug;

/// MapBiomas Alerta GraphQL client authenticated with a bearer token.
pub struct MapBiomasClient {
    http: reqwest::Client,
    url: String,
    token: String,
}

impl MapBiomasClient {
    pub fn new(http: reqwest::Client, url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
            token: token.into(),
        }
    }
}

fn request_body(window: &DateWindow) -> Value {
    json!({ "query": alerts_query(window) })
}

#[async_trait]
impl AlertSource for MapBiomasClient {
    async fn fetch_alerts(&self, window: &DateWindow) -> Result<Vec<Alert>> {
        debug!("Querying MapBiomas alerts {} .. {}", window.start, window.end);

        let resp = self
            .http
            .post(&self.url)
            .bearer_auth(&self.token)
            .json(&request_body(window))
            .send()
            .await
            .map_err(|e| AiraError::upstream(MAPBIOMAS, format!("request failed: {}", e)))?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(AiraError::upstream(
                MAPBIOMAS,
                format!("HTTP {} - {}", status, text),
            ));
        }

        let body: Value = resp
            .json()
            .await
            .map_err(|e| AiraError::upstream(MAPBIOMAS, format!("invalid JSON response: {}", e)))?;

        decode_alerts_response(body)
    }
}
