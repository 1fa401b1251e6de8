use crate::error::WorkflowError;
use crate::session::CompletedRequest;
use crate::transcribe::SpeechToText;
use crate::translate::Translator;
use tracing::{info, warn};

/// The final message for the user, plus whether the translation step failed.
///
/// A failed translation still carries the transcript — the user keeps what
/// was already obtained — but the caller records the session as aborted
/// rather than done.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowReply {
    pub text: String,
    pub translation_failed: bool,
}

/// Run a completed request: transcribe, conditionally translate, compose the
/// labeled reply.
///
/// Steps are strictly sequential. A transcription failure aborts before any
/// translation is attempted. When source and target language match, the
/// translated text is the transcript verbatim and the translator is never
/// invoked. The temp media file is deleted regardless of which step failed.
pub async fn process_request(
    request: CompletedRequest,
    transcriber: &dyn SpeechToText,
    translator: &dyn Translator,
) -> Result<WorkflowReply, WorkflowError> {
    let result = run(&request, transcriber, translator).await;
    request.media.cleanup().await;
    result
}

async fn run(
    request: &CompletedRequest,
    transcriber: &dyn SpeechToText,
    translator: &dyn Translator,
) -> Result<WorkflowReply, WorkflowError> {
    info!(
        "Processing request via {}: {} -> {}",
        transcriber.name(),
        request.source.code(),
        request.target.code()
    );

    let transcript = transcriber
        .transcribe(request.media.path(), request.source)
        .await?;

    if request.source == request.target {
        return Ok(WorkflowReply {
            text: compose(&transcript.text, request, &transcript.text),
            translation_failed: false,
        });
    }

    match translator
        .translate(&transcript.text, request.source, request.target)
        .await
    {
        Ok(translated) => Ok(WorkflowReply {
            text: compose(&transcript.text, request, &translated),
            translation_failed: false,
        }),
        Err(e) => {
            // The transcript is not thrown away on a translation failure;
            // reply with it and a note instead.
            warn!("Translation via {} failed: {}", translator.name(), e);
            Ok(WorkflowReply {
                text: format!(
                    "Original text ({}):\n{}\n\nTranslation to {} failed; \
                     only the original text is available.",
                    request.source.label(),
                    transcript.text,
                    request.target.label(),
                ),
                translation_failed: true,
            })
        }
    }
}

fn compose(original: &str, request: &CompletedRequest, translated: &str) -> String {
    format!(
        "Original text ({}):\n{}\n\nTranslated text ({}):\n{}",
        request.source.label(),
        original,
        request.target.label(),
        translated,
    )
}
