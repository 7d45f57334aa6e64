use axum::body::Bytes;
use axum::extract::{Multipart, State};
use axum::Json;
use serde_json::{json, Value};
use tracing::{debug, info};

use crate::error::RelayError;
use crate::state::AppState;
use crate::temp_audio::TempAudio;

const NO_TRANSCRIPTION: &str = "No transcription available.";
const NO_TRANSLATION: &str = "No translation available.";

/// POST /translate-voice
///
/// Accepts one `audio` multipart field, transcribes it, asks the
/// generation provider for a Braille rendering, and returns
/// `{"braille": ...}`. The temp file is released on every exit path.
pub async fn translate_voice(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<Value>, RelayError> {
    let mut upload: Option<(String, Bytes)> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| RelayError::MissingAudio)?
    {
        if field.name() == Some("audio") {
            let file_name = field.file_name().unwrap_or("audio.webm").to_string();
            let data = field.bytes().await.map_err(|_| RelayError::MissingAudio)?;
            upload = Some((file_name, data));
            break;
        }
    }

    let (file_name, data) = upload.ok_or(RelayError::MissingAudio)?;
    debug!("Received audio upload: {} ({} bytes)", file_name, data.len());

    let temp = TempAudio::write(&state.config.cache_dir, &file_name, &data).await?;
    let braille = run_pipeline(&state, &temp).await?;

    Ok(Json(json!({ "braille": braille })))
}

async fn run_pipeline(state: &AppState, temp: &TempAudio) -> Result<String, anyhow::Error> {
    let transcript = state
        .asr
        .transcribe_file(temp.path())
        .await?
        .unwrap_or_else(|| NO_TRANSCRIPTION.to_string());
    info!("Transcribed audio to {} chars", transcript.len());

    let braille = state
        .translator
        .translate(&transcript)
        .await?
        .unwrap_or_else(|| NO_TRANSLATION.to_string());

    Ok(braille)
}
