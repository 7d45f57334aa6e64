mod asr;
mod config;
mod error;
mod handlers;
mod routes;
mod state;
mod temp_audio;
mod translate;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::http::{HeaderValue, Method};
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use asr::OpenAIWhisperASR;
use config::Config;
use state::AppState;
use translate::OpenAIBrailleTranslator;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("braille_relay=debug,tower_http=debug")
        .init();

    let config = Config::from_env()?;
    std::fs::create_dir_all(&config.cache_dir)?;

    // Provider clients are built once here and injected into the state.
    let asr = Arc::new(OpenAIWhisperASR::new(
        config.openai_base_url.clone(),
        config.openai_api_key.clone(),
        config.transcription_model.clone(),
    ));
    let translator = Arc::new(OpenAIBrailleTranslator::new(
        config.openai_base_url.clone(),
        config.openai_api_key.clone(),
        config.translation_model.clone(),
    ));
    let app_state = AppState::new(config.clone(), asr, translator);

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    let app = Router::new()
        .merge(routes::create_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Server running on port {}", config.port);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
