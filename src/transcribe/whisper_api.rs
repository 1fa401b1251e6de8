use crate::config::TranscriptionConfig;
use crate::error::WorkflowError;
use crate::language::Language;
use crate::transcribe::{SpeechToText, Transcript};
use anyhow::{Context, Result};
use reqwest::multipart;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

/// OpenAI Whisper transcription client.
pub struct WhisperApi {
    client: reqwest::Client,
    api_key: String,
    model: String,
    /// Override base URL for tests / mock servers.
    base_url: String,
}

/// OpenAI error response body.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// Minimal response shape — the API returns `{ "text": "..." }`.
#[derive(Debug, Deserialize)]
struct TranscriptionResponse {
    text: String,
}

impl WhisperApi {
    pub fn new(api_key: String, config: &TranscriptionConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to build transcription HTTP client")?;

        Ok(Self {
            client,
            api_key,
            model: config.model.clone(),
            base_url: config.base_url.clone(),
        })
    }

    /// Create with a custom base URL (for tests / mock servers).
    pub fn with_base_url(api_key: String, config: &TranscriptionConfig, base_url: String) -> Result<Self> {
        let mut api = Self::new(api_key, config)?;
        api.base_url = base_url;
        Ok(api)
    }
}

#[async_trait::async_trait]
impl SpeechToText for WhisperApi {
    fn name(&self) -> &str {
        "openai-whisper"
    }

    async fn transcribe(
        &self,
        media: &Path,
        language: Language,
    ) -> Result<Transcript, WorkflowError> {
        let bytes = tokio::fs::read(media)
            .await
            .map_err(|e| WorkflowError::TranscriptionFailed(format!("read media: {e}")))?;

        // The API infers the container format from the file name.
        let file_name = media
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("audio.bin")
            .to_string();

        let file_part = multipart::Part::bytes(bytes).file_name(file_name);
        let form = multipart::Form::new()
            .part("file", file_part)
            .text("model", self.model.clone())
            .text("language", language.code())
            .text("response_format", "json");

        debug!("Sending {} to Whisper (model {})", media.display(), self.model);

        let response = self
            .client
            .post(format!("{}/audio/transcriptions", self.base_url))
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| WorkflowError::TranscriptionFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let api_msg = serde_json::from_str::<ApiErrorBody>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(WorkflowError::TranscriptionFailed(format!(
                "HTTP {status}: {api_msg}"
            )));
        }

        let parsed: TranscriptionResponse = response
            .json()
            .await
            .map_err(|e| WorkflowError::TranscriptionFailed(format!("decode response: {e}")))?;

        info!(
            "Whisper transcription completed ({} chars, {})",
            parsed.text.len(),
            language.code()
        );

        Ok(Transcript {
            text: parsed.text.trim().to_string(),
            language,
        })
    }
}
