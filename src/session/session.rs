use crate::language::Language;
use crate::media::MediaHandle;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Position of a session in the selection/processing state machine.
///
/// The stage only ever advances; no event sequence moves it backward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    AwaitingSourceLanguage,
    AwaitingTargetLanguage,
    Processing,
    Done,
    /// Terminal stage reached when an external call fails. The session is
    /// removed from the store immediately afterwards.
    Aborted,
}

/// Everything the orchestrator needs from a completed session.
///
/// Handed out exactly once, when the session enters `Processing`. Carries the
/// generation id of the session it was claimed from, so completion can tell
/// whether the stored session is still the same one (new media may have
/// restarted the chat in the meantime).
#[derive(Debug, Clone)]
pub struct CompletedRequest {
    pub session_id: Uuid,
    pub media: MediaHandle,
    pub source: Language,
    pub target: Language,
}

/// Per-chat in-progress state for one transcription/translation request.
///
/// Created when media intake succeeds, destroyed once the final reply is sent
/// or on terminal failure. The target language can only be recorded after the
/// source language.
#[derive(Debug, Clone)]
pub struct Session {
    /// Generation id, unique per opened session. Distinguishes a session from
    /// the one that replaces it when new media restarts the flow.
    id: Uuid,
    media: MediaHandle,
    source_language: Option<Language>,
    target_language: Option<Language>,
    stage: Stage,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new(media: MediaHandle) -> Self {
        Self {
            id: Uuid::new_v4(),
            media,
            source_language: None,
            target_language: None,
            stage: Stage::AwaitingSourceLanguage,
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn media(&self) -> &MediaHandle {
        &self.media
    }

    /// The media file to discard when this session is replaced by new media.
    ///
    /// `None` while the session is `Processing`: that file belongs to the
    /// in-flight orchestration, which deletes it itself once done.
    pub fn discardable_media(&self) -> Option<&MediaHandle> {
        (self.stage != Stage::Processing).then(|| &self.media)
    }

    pub fn source_language(&self) -> Option<Language> {
        self.source_language
    }

    pub fn target_language(&self) -> Option<Language> {
        self.target_language
    }

    /// Record the source language and advance to `AwaitingTargetLanguage`.
    ///
    /// Returns `false`, leaving the session untouched, when the session is in
    /// any other stage (duplicate tap, out-of-order delivery).
    pub fn select_source(&mut self, language: Language) -> bool {
        if self.stage != Stage::AwaitingSourceLanguage {
            return false;
        }
        self.source_language = Some(language);
        self.stage = Stage::AwaitingTargetLanguage;
        true
    }

    /// Record the target language, advance to `Processing`, and hand out the
    /// completed request for the orchestrator.
    ///
    /// Only the caller that performs the `AwaitingTargetLanguage → Processing`
    /// transition receives `Some`; a racing duplicate sees `Processing` and
    /// gets `None`, so the orchestrator can never be invoked twice for one
    /// session.
    pub fn select_target(&mut self, language: Language) -> Option<CompletedRequest> {
        if self.stage != Stage::AwaitingTargetLanguage {
            return None;
        }
        let source = self.source_language?;
        self.target_language = Some(language);
        self.stage = Stage::Processing;
        Some(CompletedRequest {
            session_id: self.id,
            media: self.media.clone(),
            source,
            target: language,
        })
    }

    /// Mark the session finished after a successful reply.
    pub fn finish(&mut self) {
        if self.stage == Stage::Processing {
            self.stage = Stage::Done;
        }
    }

    /// Mark the session failed after an external-call error.
    pub fn abort(&mut self) {
        if self.stage == Stage::Processing {
            self.stage = Stage::Aborted;
        }
    }
}
