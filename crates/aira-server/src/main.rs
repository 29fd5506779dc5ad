mod config;
mod http;
mod upstream;

use aira_core::{AlertAnalyzer, ChatSession, LanguageModel, MODEL_NAME};
use clap::Parser;
use config::Config;
use std::sync::Arc;
use tracing::info;
use upstream::{GeminiClient, MapBiomasClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // A missing .env is fine; values may come from the environment.
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            return Err(e.into());
        }
    }

    let config = Config::parse();
    let secrets = config.validate()?;

    info!("Starting AIRA server v{}", env!("CARGO_PKG_VERSION"));
    info!("HTTP: {}", config.http_addr);
    info!("MapBiomas: {}", config.mapbiomas_url);
    info!("Model: {}", MODEL_NAME);

    let http_client = reqwest::Client::new();
    let alerts = Arc::new(MapBiomasClient::new(
        http_client.clone(),
        config.mapbiomas_url.clone(),
        secrets.mapbiomas_token,
    ));
    let model: Arc<dyn LanguageModel> = Arc::new(GeminiClient::new(
        http_client,
        config.gemini_url.clone(),
        secrets.gemini_api_key,
    ));

    let app_state = http::AppState {
        analyzer: AlertAnalyzer::new(alerts, model.clone()),
        chat: Arc::new(ChatSession::new(model)),
        start_time: std::time::Instant::now(),
    };
    let app = http::create_router(app_state);

    let listener = tokio::net::TcpListener::bind(config.http_addr).await?;
    info!("AIRA server ready on {}", config.http_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received, terminating...");
}
