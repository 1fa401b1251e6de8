//! Speech-to-text boundary
//!
//! The workflow talks to transcription through the `SpeechToText` trait; the
//! production implementation is the OpenAI Whisper HTTP API. Tests substitute
//! their own implementations.

mod engine;
mod whisper_api;

pub use engine::{SpeechToText, Transcript};
pub use whisper_api::WhisperApi;
