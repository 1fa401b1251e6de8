//! Media intake
//!
//! This module turns an inbound Telegram message into a downloaded media file:
//! - Classify the message's payload (voice, audio, video, audio/video document)
//! - Reject everything else with `NoMediaFound`
//! - Download the selected file to a temp location and hand back an opaque
//!   `MediaHandle` that the workflow cleans up when it is done

mod handle;
mod intake;

pub use handle::MediaHandle;
pub use intake::{select_media, DocumentPart, MediaKind, MediaRef, MessageParts};
