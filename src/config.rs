use anyhow::{Context, Result};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_ALLOWED_ORIGINS: &str =
    "https://braille-translator-4v85.vercel.app,http://localhost:3000";

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub transcription_model: String,
    pub translation_model: String,
    pub allowed_origins: Vec<String>,
    pub cache_dir: String,
}

impl Config {
    /// Read configuration from the process environment at startup.
    pub fn from_env() -> Result<Self> {
        let port = match std::env::var("PORT") {
            Ok(value) => value
                .parse()
                .with_context(|| format!("PORT is not a valid port number: {}", value))?,
            Err(_) => 8080,
        };

        let openai_api_key = std::env::var("OPENAI_API_KEY")
            .context("OPENAI_API_KEY must be set in the environment")?;

        let openai_base_url = std::env::var("OPENAI_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let transcription_model =
            std::env::var("TRANSCRIPTION_MODEL").unwrap_or_else(|_| "whisper-1".to_string());

        let translation_model =
            std::env::var("TRANSLATION_MODEL").unwrap_or_else(|_| "gpt-4".to_string());

        let allowed_origins = parse_origins(
            &std::env::var("ALLOWED_ORIGINS")
                .unwrap_or_else(|_| DEFAULT_ALLOWED_ORIGINS.to_string()),
        );

        let cache_dir = std::env::var("CACHE_DIR").unwrap_or_else(|_| "cache".to_string());

        Ok(Self {
            port,
            openai_api_key,
            openai_base_url,
            transcription_model,
            translation_model,
            allowed_origins,
            cache_dir,
        })
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|origin| origin.trim().trim_end_matches('/').to_string())
        .filter(|origin| !origin.is_empty())
        .collect()
}
