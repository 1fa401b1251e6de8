use crate::error::WorkflowError;
use crate::language::Language;
use std::path::Path;

/// Transcribed text paired with the language it was transcribed in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    pub text: String,
    pub language: Language,
}

/// Speech-to-text engine the orchestrator calls into.
#[async_trait::async_trait]
pub trait SpeechToText: Send + Sync {
    /// Engine name for logging.
    fn name(&self) -> &str;

    /// Transcribe the media file at `media`, hinting the service with the
    /// user-declared source language.
    async fn transcribe(
        &self,
        media: &Path,
        language: Language,
    ) -> Result<Transcript, WorkflowError>;
}
