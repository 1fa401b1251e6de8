//! Per-chat session management
//!
//! This module provides the state that carries one transcription request
//! from media intake to the final reply:
//! - `Session` and its stage machine (source language → target language →
//!   processing)
//! - `SessionStore`, the process-wide chat-id → session registry
//! - `Selection`, the typed decode of inline-keyboard callback payloads

mod selection;
mod session;
mod store;

pub use selection::Selection;
pub use session::{CompletedRequest, Session, Stage};
pub use store::SessionStore;
