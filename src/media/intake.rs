use crate::error::WorkflowError;
use teloxide::types::Message;

/// The kind of media payload found on an inbound message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Voice,
    Audio,
    Video,
    /// Generic file whose declared MIME type starts with `audio/`.
    AudioDocument,
    /// Generic file whose declared MIME type starts with `video/`.
    VideoDocument,
}

/// A downloadable reference selected from an inbound message.
#[derive(Debug, Clone)]
pub struct MediaRef {
    /// Telegram file id, resolvable to a download path via `getFile`.
    pub file_id: String,
    pub kind: MediaKind,
}

/// A generic-file attachment with its declared MIME type.
#[derive(Debug, Clone, Default)]
pub struct DocumentPart {
    pub file_id: String,
    pub mime_type: Option<String>,
}

/// Neutral snapshot of a message's optional media fields.
///
/// Built from a `teloxide` message by [`MessageParts::from_message`]; tests
/// construct it directly, keeping classification logic independent of the
/// Telegram types.
#[derive(Debug, Clone, Default)]
pub struct MessageParts {
    pub voice: Option<String>,
    pub audio: Option<String>,
    pub video: Option<String>,
    pub document: Option<DocumentPart>,
}

impl MessageParts {
    pub fn from_message(msg: &Message) -> Self {
        Self {
            voice: msg.voice().map(|v| v.file.id.clone()),
            audio: msg.audio().map(|a| a.file.id.clone()),
            video: msg.video().map(|v| v.file.id.clone()),
            document: msg.document().map(|d| DocumentPart {
                file_id: d.file.id.clone(),
                mime_type: d.mime_type.as_ref().map(|m| m.to_string()),
            }),
        }
    }
}

/// Select the downloadable payload from a message, in priority order:
/// voice, then audio, then video, then a generic file whose declared MIME
/// type starts with `audio/` or `video/`.
///
/// Returns `NoMediaFound` when nothing matches; the caller must reply with a
/// rejection message and must not create a session.
pub fn select_media(parts: &MessageParts) -> Result<MediaRef, WorkflowError> {
    if let Some(file_id) = &parts.voice {
        return Ok(MediaRef {
            file_id: file_id.clone(),
            kind: MediaKind::Voice,
        });
    }
    if let Some(file_id) = &parts.audio {
        return Ok(MediaRef {
            file_id: file_id.clone(),
            kind: MediaKind::Audio,
        });
    }
    if let Some(file_id) = &parts.video {
        return Ok(MediaRef {
            file_id: file_id.clone(),
            kind: MediaKind::Video,
        });
    }
    if let Some(doc) = &parts.document {
        let kind = match doc.mime_type.as_deref() {
            Some(mime) if mime.starts_with("audio/") => Some(MediaKind::AudioDocument),
            Some(mime) if mime.starts_with("video/") => Some(MediaKind::VideoDocument),
            _ => None,
        };
        if let Some(kind) = kind {
            return Ok(MediaRef {
                file_id: doc.file_id.clone(),
                kind,
            });
        }
    }
    Err(WorkflowError::NoMediaFound)
}
