use aira_core::*;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

struct FixedAlerts(Vec<Alert>);

#[async_trait]
impl AlertSource for FixedAlerts {
    async fn fetch_alerts(&self, _window: &DateWindow) -> Result<Vec<Alert>> {
        Ok(self.0.clone())
    }
}

/// Records every conversation it is shown and answers with a canned reply.
struct EchoModel {
    reply: String,
    seen: Mutex<Vec<Vec<ChatMessage>>>,
}

impl EchoModel {
    fn new(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: reply.to_string(),
            seen: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl LanguageModel for EchoModel {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String> {
        self.seen.lock().unwrap().push(messages.to_vec());
        Ok(self.reply.clone())
    }
}

fn mapbiomas_body() -> serde_json::Value {
    serde_json::json!({
        "data": {
            "alerts": [
                {
                    "id": 101,
                    "geomAreaHa": 35.2,
                    "date": "2024-03-01",
                    "biome": "Amazônia",
                    "municipality": "Altamira",
                    "state": "PA",
                    "beforeImageUrl": "https://example.org/101/before.png",
                    "afterImageUrl": "https://example.org/101/after.png"
                },
                {
                    "id": 102,
                    "geomAreaHa": 8.0,
                    "date": "2024-03-02",
                    "biome": "Cerrado",
                    "state": "MT"
                }
            ]
        }
    })
}

// ── Alert analysis ───────────────────────────────────────────────────────────

#[tokio::test]
async fn test_decoded_alerts_flow_into_analysis_prompt() {
    let alerts = decode_alerts_response(mapbiomas_body()).unwrap();
    let model = EchoModel::new("1) Resumo geral: 2 alertas 2) Destaques: PA e MT");
    let analyzer = AlertAnalyzer::new(Arc::new(FixedAlerts(alerts)), model.clone());

    let today = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
    let analysis = analyzer.analyze_on(7, today).await.unwrap();
    assert_eq!(
        analysis,
        "1) Resumo geral: 2 alertas\n2) Destaques: PA e MT"
    );

    let seen = model.seen.lock().unwrap();
    let prompt = &seen[0][0].content;
    assert!(prompt.contains(
        "- 2024-03-01: 35.2 ha em Altamira/PA (Amazônia)\n\
         - 2024-03-02: 8.0 ha em ?/MT (Cerrado)"
    ));
}

#[tokio::test]
async fn test_empty_response_uses_sentinel_summary() {
    let alerts = decode_alerts_response(serde_json::json!({"data": {"alerts": []}})).unwrap();
    let model = EchoModel::new("Nada a relatar");
    let analyzer = AlertAnalyzer::new(Arc::new(FixedAlerts(alerts)), model.clone());

    analyzer.analyze(3).await.unwrap();

    let seen = model.seen.lock().unwrap();
    assert_eq!(seen[0], vec![ChatMessage::user(analysis_prompt(3, NO_ALERTS))]);
}

// ── Chat ─────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_chat_and_analysis_share_model_but_not_history() {
    let model = EchoModel::new("resposta curta");
    let analyzer = AlertAnalyzer::new(Arc::new(FixedAlerts(Vec::new())), model.clone());
    let session = ChatSession::new(model.clone());

    session.submit("oi").await.unwrap();
    analyzer.analyze(7).await.unwrap();
    session.submit("e agora?").await.unwrap();

    let seen = model.seen.lock().unwrap();
    assert_eq!(seen.len(), 3);
    assert_eq!(seen[1].len(), 1, "analysis never sees the chat transcript");
    assert_eq!(seen[2].len(), 4);
    assert_eq!(seen[2][0], ChatMessage::system(CHAT_SYSTEM_PROMPT));
    assert_eq!(session.transcript_len(), 5);
}
