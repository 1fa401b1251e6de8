pub mod bot;
pub mod config;
pub mod error;
pub mod language;
pub mod media;
pub mod session;
pub mod transcribe;
pub mod translate;
pub mod workflow;

pub use bot::BotState;
pub use config::{Config, Secrets};
pub use error::WorkflowError;
pub use language::Language;
pub use media::{select_media, MediaHandle, MediaKind, MediaRef, MessageParts};
pub use session::{CompletedRequest, Selection, Session, SessionStore, Stage};
pub use transcribe::{SpeechToText, Transcript, WhisperApi};
pub use translate::{GoogleTranslate, Translator};
pub use workflow::{process_request, WorkflowReply};
