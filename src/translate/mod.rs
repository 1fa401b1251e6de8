//! Translation boundary
//!
//! Mirror of the transcription seam: the orchestrator calls through the
//! `Translator` trait, production uses the free Google Translate endpoint.

mod google;
mod translator;

pub use google::GoogleTranslate;
pub use translator::Translator;
