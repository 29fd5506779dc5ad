use aira_core::AiraError;
use clap::Parser;
use std::net::SocketAddr;

pub const DEFAULT_MAPBIOMAS_URL: &str = "https://plataforma.alerta.mapbiomas.org/api/v2/graphql";
pub const DEFAULT_GEMINI_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Parser, Debug, Clone)]
#[command(name = "aira")]
#[command(version, about = "AIRA: deforestation alert analysis and Amazon chat assistant")]
pub struct Config {
    /// HTTP listen address
    #[arg(long, env = "AIRA_HTTP_ADDR", default_value = "127.0.0.1:8000")]
    pub http_addr: SocketAddr,

    /// Google Gemini API key
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub gemini_api_key: Option<String>,

    /// MapBiomas Alerta bearer token
    #[arg(long, env = "MAPBIOMAS_TOKEN", hide_env_values = true)]
    pub mapbiomas_token: Option<String>,

    /// MapBiomas Alerta GraphQL endpoint
    #[arg(long, env = "MAPBIOMAS_URL", default_value = DEFAULT_MAPBIOMAS_URL)]
    pub mapbiomas_url: String,

    /// Gemini API base URL
    #[arg(long, env = "GEMINI_URL", default_value = DEFAULT_GEMINI_URL)]
    pub gemini_url: String,
}

/// Both upstream secrets, checked present.
#[derive(Debug, Clone)]
pub struct Secrets {
    pub gemini_api_key: String,
    pub mapbiomas_token: String,
}

impl Config {
    pub fn validate(&self) -> Result<Secrets, AiraError> {
        Ok(Secrets {
            gemini_api_key: required(&self.gemini_api_key, "GEMINI_API_KEY")?,
            mapbiomas_token: required(&self.mapbiomas_token, "MAPBIOMAS_TOKEN")?,
        })
    }
}

fn required(value: &Option<String>, var: &str) -> Result<String, AiraError> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(AiraError::Config(format!(
            "{} is not set (define it in the environment or in .env)",
            var
        ))),
    }
}
