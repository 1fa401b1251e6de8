use thiserror::Error;

/// Error taxonomy for the transcription workflow.
///
/// Intake and orchestration errors are caught at the bot-handler boundary and
/// converted to a single user-visible message. `UnrecognizedSelection` and
/// `SessionNotFound` come from stale or forged callback data and are not
/// surfaced as failures.
#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("message carries no audio or video payload")]
    NoMediaFound,

    #[error("failed to download media: {0}")]
    DownloadFailed(String),

    #[error("transcription failed: {0}")]
    TranscriptionFailed(String),

    #[error("translation failed: {0}")]
    TranslationFailed(String),

    #[error("no open session for chat {0}")]
    SessionNotFound(i64),

    #[error("unrecognized selection payload")]
    UnrecognizedSelection,
}
