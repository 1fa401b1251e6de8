use crate::config::TranslationConfig;
use crate::error::WorkflowError;
use crate::language::Language;
use crate::translate::Translator;
use anyhow::{Context, Result};
use serde_json::Value;
use std::time::Duration;
use tracing::info;

/// Client for the unauthenticated Google Translate endpoint
/// (`translate_a/single?client=gtx`).
///
/// The response is a nested JSON array whose first element holds the
/// translated segments; everything else is ignored.
pub struct GoogleTranslate {
    client: reqwest::Client,
    /// Override base URL for tests / mock servers.
    base_url: String,
}

impl GoogleTranslate {
    pub fn new(config: &TranslationConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to build translation HTTP client")?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// Create with a custom base URL (for tests / mock servers).
    pub fn with_base_url(config: &TranslationConfig, base_url: String) -> Result<Self> {
        let mut translate = Self::new(config)?;
        translate.base_url = base_url;
        Ok(translate)
    }
}

#[async_trait::async_trait]
impl Translator for GoogleTranslate {
    fn name(&self) -> &str {
        "google-translate"
    }

    async fn translate(
        &self,
        text: &str,
        source: Language,
        target: Language,
    ) -> Result<String, WorkflowError> {
        let response = self
            .client
            .get(format!("{}/translate_a/single", self.base_url))
            .query(&[
                ("client", "gtx"),
                ("dt", "t"),
                ("sl", source.code()),
                ("tl", target.code()),
                ("q", text),
            ])
            .send()
            .await
            .map_err(|e| WorkflowError::TranslationFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(WorkflowError::TranslationFailed(format!("HTTP {status}")));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| WorkflowError::TranslationFailed(format!("decode response: {e}")))?;

        let segments = body
            .get(0)
            .and_then(Value::as_array)
            .ok_or_else(|| WorkflowError::TranslationFailed("unexpected response shape".into()))?;

        let mut translated = String::new();
        for segment in segments {
            if let Some(part) = segment.get(0).and_then(Value::as_str) {
                translated.push_str(part);
            }
        }

        if translated.is_empty() {
            return Err(WorkflowError::TranslationFailed("empty translation".into()));
        }

        info!(
            "Translated {} chars {} -> {}",
            text.len(),
            source.code(),
            target.code()
        );

        Ok(translated)
    }
}
