mod routes;

pub use routes::create_router;

use aira_core::{AlertAnalyzer, ChatSession};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub analyzer: AlertAnalyzer,
    pub chat: Arc<ChatSession>,
    pub start_time: std::time::Instant,
}

/// Error payload shape shared by every route: `{"erro": "..."}`.
#[derive(Serialize)]
pub struct ErrorBody {
    pub erro: String,
}

/// Handler error rendered as a 500 with an `ErrorBody`.
pub struct AppError(anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!("Request failed: {:#}", self.0);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody {
                erro: self.0.to_string(),
            }),
        )
            .into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

pub type AppResult<T> = Result<T, AppError>;
