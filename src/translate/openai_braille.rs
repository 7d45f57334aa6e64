use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info};

use super::interface::BrailleTranslatorInterface;

const SYSTEM_PROMPT: &str =
    "You are a Braille translator. Only respond with the translated text.";

/// Chat-completion client that asks the model for a Braille rendering
/// of a transcript.
pub struct OpenAIBrailleTranslator {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl OpenAIBrailleTranslator {
    pub fn new(base_url: String, api_key: String, model: String) -> Self {
        info!(
            "Initialized OpenAIBrailleTranslator: model={}, base_url={}",
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
impl BrailleTranslatorInterface for OpenAIBrailleTranslator {
    async fn translate(&self, text: &str) -> Result<Option<String>> {
        let body = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                {
                    "role": "user",
                    "content": format!("Translate the following text into Braille: {}", text),
                },
            ],
        });

        let url = format!("{}/chat/completions", self.base_url);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .context("translation request failed to send")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!("Translation provider returned {}: {}", status, body);
            anyhow::bail!("translation provider returned status {}", status);
        }

        let result: ChatCompletionResponse = response
            .json()
            .await
            .context("failed to decode chat completion response")?;

        Ok(result
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty()))
    }
}
