use crate::session::SessionStore;
use crate::transcribe::SpeechToText;
use crate::translate::Translator;
use std::path::PathBuf;
use std::sync::Arc;

/// Shared handles cloned into every bot handler.
#[derive(Clone)]
pub struct BotState {
    /// Open sessions (chat id → session).
    pub sessions: SessionStore,
    pub transcriber: Arc<dyn SpeechToText>,
    pub translator: Arc<dyn Translator>,
    /// Where downloaded media files are staged.
    pub temp_dir: PathBuf,
}

impl BotState {
    pub fn new(
        transcriber: Arc<dyn SpeechToText>,
        translator: Arc<dyn Translator>,
        temp_dir: PathBuf,
    ) -> Self {
        Self {
            sessions: SessionStore::new(),
            transcriber,
            translator,
            temp_dir,
        }
    }
}
