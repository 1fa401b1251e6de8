//! Transcription/translation orchestrator
//!
//! Runs a completed session end to end: transcribe with the source-language
//! hint, translate unless source and target match, compose the labeled
//! reply. The temp media file is deleted on every exit path.

mod orchestrator;

pub use orchestrator::{process_request, WorkflowReply};
