use crate::error::WorkflowError;
use crate::language::Language;

const SOURCE_PREFIX: &str = "input_lang_";
const TARGET_PREFIX: &str = "output_lang_";

/// Typed decode of an inline-keyboard callback payload.
///
/// Payload format is `"<stage>_lang_<code>"` with stage `input` or `output`.
/// Parsing failures (bad stage, unknown code, malformed payload) are
/// `UnrecognizedSelection` and never reach the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Source(Language),
    Target(Language),
}

impl Selection {
    pub fn parse(data: &str) -> Result<Selection, WorkflowError> {
        let selection = if let Some(code) = data.strip_prefix(SOURCE_PREFIX) {
            Language::from_code(code).map(Selection::Source)
        } else if let Some(code) = data.strip_prefix(TARGET_PREFIX) {
            Language::from_code(code).map(Selection::Target)
        } else {
            None
        };
        selection.ok_or(WorkflowError::UnrecognizedSelection)
    }

    /// Callback payload for a source-language button.
    pub fn source_data(language: Language) -> String {
        format!("{SOURCE_PREFIX}{}", language.code())
    }

    /// Callback payload for a target-language button.
    pub fn target_data(language: Language) -> String {
        format!("{TARGET_PREFIX}{}", language.code())
    }
}
