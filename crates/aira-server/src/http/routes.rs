use super::{AppResult, AppState, ErrorBody};
use aira_core::DEFAULT_DAYS;
use axum::{
    extract::{Query, State},
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/analise-alertas", get(analyze_alerts))
        .route("/chat", post(chat))
        .layer(cors())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Any origin, method and header, with credentials. A literal `*` cannot be
/// combined with credentials, so the request's own values are echoed back.
fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

#[derive(Serialize)]
struct RootResponse {
    mensagem: &'static str,
    versao: &'static str,
}

async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        mensagem: "🌱 API AIRA - Amazônia e preservação está rodando!",
        versao: env!("CARGO_PKG_VERSION"),
    })
}

#[derive(Serialize)]
struct HealthResponse {
    healthy: bool,
    version: String,
    uptime_seconds: u64,
    transcript_messages: usize,
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        transcript_messages: state.chat.transcript_len(),
    })
}

fn default_days() -> i64 {
    DEFAULT_DAYS
}

#[derive(Deserialize)]
struct AnalysisQuery {
    #[serde(default = "default_days")]
    dias: i64,
}

#[derive(Serialize)]
#[serde(untagged)]
enum AnalysisResponse {
    Done { dias: i64, analise: String },
    Failed(ErrorBody),
}

/// Failures are reported in the body with status 200.
async fn analyze_alerts(
    State(state): State<AppState>,
    Query(query): Query<AnalysisQuery>,
) -> Json<AnalysisResponse> {
    info!("Analyzing alerts for the last {} days", query.dias);

    match state.analyzer.analyze(query.dias).await {
        Ok(analise) => Json(AnalysisResponse::Done {
            dias: query.dias,
            analise,
        }),
        Err(e) => {
            warn!("Alert analysis failed: {}", e);
            Json(AnalysisResponse::Failed(ErrorBody { erro: e.to_string() }))
        }
    }
}

#[derive(Deserialize)]
struct ChatRequest {
    pergunta: String,
}

#[derive(Serialize)]
struct ChatResponse {
    pergunta: String,
    resposta: String,
}

/// Failures surface as a 500.
async fn chat(
    State(state): State<AppState>,
    Json(body): Json<ChatRequest>,
) -> AppResult<Json<ChatResponse>> {
    let resposta = state.chat.submit(&body.pergunta).await?;

    Ok(Json(ChatResponse {
        pergunta: body.pergunta,
        resposta,
    }))
}
