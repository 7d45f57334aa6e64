use std::path::Path;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Deserialize;
use tracing::{error, info};

use super::interface::ASRInterface;

/// Speech-to-text client for the OpenAI audio transcription endpoint.
pub struct OpenAIWhisperASR {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

#[derive(Debug, Deserialize)]
struct TranscriptionResponse {
    text: String,
}

impl OpenAIWhisperASR {
    pub fn new(base_url: String, api_key: String, model: String) -> Self {
        info!(
            "Initialized OpenAIWhisperASR: model={}, base_url={}",
            model, base_url
        );
        Self {
            client: Client::new(),
            base_url,
            api_key,
            model,
        }
    }
}

#[async_trait]
impl ASRInterface for OpenAIWhisperASR {
    async fn transcribe_file(&self, audio_path: &Path) -> Result<Option<String>> {
        let bytes = tokio::fs::read(audio_path)
            .await
            .with_context(|| format!("failed to read audio file {}", audio_path.display()))?;

        let file_name = audio_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("audio.webm")
            .to_string();
        let mime = mime_for(&file_name);

        let part = Part::bytes(bytes)
            .file_name(file_name)
            .mime_str(mime)
            .context("invalid mime type for audio part")?;
        let form = Form::new()
            .part("file", part)
            .text("model", self.model.clone());

        let url = format!("{}/audio/transcriptions", self.base_url);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await
            .context("transcription request failed to send")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!("Transcription provider returned {}: {}", status, body);
            anyhow::bail!("transcription provider returned status {}", status);
        }

        let result: TranscriptionResponse = response
            .json()
            .await
            .context("failed to decode transcription response")?;

        Ok(Some(result.text).filter(|text| !text.trim().is_empty()))
    }
}

fn mime_for(file_name: &str) -> &'static str {
    let ext = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();
    match ext.as_str() {
        "webm" => "audio/webm",
        "wav" => "audio/wav",
        "mp3" | "mpga" => "audio/mpeg",
        "ogg" | "oga" => "audio/ogg",
        "m4a" | "mp4" => "audio/mp4",
        "flac" => "audio/flac",
        _ => "application/octet-stream",
    }
}
