use crate::bot::keyboard;
use crate::bot::state::BotState;
use crate::error::WorkflowError;
use crate::media::{select_media, MediaHandle, MessageParts};
use crate::session::{CompletedRequest, Selection, Session};
use crate::workflow;
use anyhow::Result;
use teloxide::prelude::*;
use teloxide::types::ChatId;
use teloxide::utils::command::BotCommands;
use tracing::{debug, error, info, warn};

#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "Supported commands:")]
pub enum Command {
    #[command(description = "start a new transcription request.")]
    Start,
    #[command(description = "show usage help.")]
    Help,
}

pub async fn handle_command(bot: Bot, msg: Message, cmd: Command) -> Result<()> {
    match cmd {
        Command::Start => {
            bot.send_message(
                msg.chat.id,
                "Hi! Send me a voice, audio, or video file and I will \
                 transcribe it — and translate it if you want.",
            )
            .await?;
        }
        Command::Help => {
            bot.send_message(msg.chat.id, Command::descriptions().to_string())
                .await?;
        }
    }
    Ok(())
}

/// Media-message handler: intake, download, open a session, present the
/// source-language keyboard.
pub async fn handle_media(bot: Bot, msg: Message, state: BotState) -> Result<()> {
    let chat_id = msg.chat.id;
    let parts = MessageParts::from_message(&msg);

    let media = match select_media(&parts) {
        Ok(media) => media,
        Err(WorkflowError::NoMediaFound) => {
            // A document without an audio/video MIME type. No session.
            bot.send_message(chat_id, "Please send a valid audio or video file.")
                .await?;
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    info!("Chat {} sent {:?} media", chat_id, media.kind);

    let handle = match MediaHandle::download(&bot, &media, &state.temp_dir).await {
        Ok(handle) => handle,
        Err(e) => {
            error!("Download for chat {} failed: {}", chat_id, e);
            bot.send_message(chat_id, "I could not download that file. Please send it again.")
                .await?;
            return Ok(());
        }
    };

    // "Always restart": new media replaces any open session for this chat.
    if let Some(previous) = state.sessions.insert(chat_id, Session::new(handle)).await {
        if let Some(media) = previous.discardable_media() {
            media.cleanup().await;
        }
    }

    bot.send_message(chat_id, "Which language is the recording in?")
        .reply_markup(keyboard::source_language_keyboard())
        .await?;

    Ok(())
}

/// Callback handler: decode the payload, apply the matching transition, and
/// kick off orchestration when the session completes.
pub async fn handle_callback(bot: Bot, q: CallbackQuery, state: BotState) -> Result<()> {
    // Stop the client-side spinner whatever happens next.
    bot.answer_callback_query(q.id.clone()).await?;

    let Some(message) = q.message.as_ref() else {
        return Ok(());
    };
    let chat_id = message.chat().id;

    let Some(data) = q.data.as_deref() else {
        return Ok(());
    };
    let selection = match Selection::parse(data) {
        Ok(selection) => selection,
        Err(_) => {
            // Stale or forged payload; nothing changes.
            debug!("Chat {} sent unrecognized callback payload {:?}", chat_id, data);
            return Ok(());
        }
    };

    match selection {
        Selection::Source(language) => {
            match state
                .sessions
                .update(chat_id, |s| s.select_source(language))
                .await
            {
                Ok(true) => {
                    bot.send_message(chat_id, "Which language should the text be translated to?")
                        .reply_markup(keyboard::target_language_keyboard())
                        .await?;
                }
                // Duplicate tap or out-of-order delivery; ignore.
                Ok(false) => {}
                Err(_) => {
                    reply_session_expired(&bot, chat_id).await?;
                }
            }
        }
        Selection::Target(language) => {
            let request = match state
                .sessions
                .update(chat_id, |s| s.select_target(language))
                .await
            {
                // This caller won the transition into Processing.
                Ok(Some(request)) => request,
                // Someone else already did, or the stage never matched.
                Ok(None) => return Ok(()),
                Err(_) => {
                    reply_session_expired(&bot, chat_id).await?;
                    return Ok(());
                }
            };

            bot.send_message(chat_id, "Processing your file, please wait…")
                .await?;

            finish_request(&bot, chat_id, request, &state).await?;
        }
    }

    Ok(())
}

/// Run the orchestrator for a completed session and deliver the outcome.
/// The request's own session generation is removed on every path; a session
/// opened by newer media in the meantime is left alone.
async fn finish_request(
    bot: &Bot,
    chat_id: ChatId,
    request: CompletedRequest,
    state: &BotState,
) -> Result<()> {
    // Only this request's own session generation may be touched afterwards:
    // new media may replace the session while the orchestrator runs, and the
    // new session must survive this completion.
    let session_id = request.session_id;

    let outcome = workflow::process_request(
        request,
        state.transcriber.as_ref(),
        state.translator.as_ref(),
    )
    .await;

    match outcome {
        Ok(reply) => {
            let _ = state
                .sessions
                .update(chat_id, |s| {
                    if s.id() == session_id {
                        if reply.translation_failed {
                            s.abort()
                        } else {
                            s.finish()
                        }
                    }
                })
                .await;
            state.sessions.remove_if(chat_id, session_id).await;
            bot.send_message(chat_id, reply.text).await?;
        }
        Err(e) => {
            warn!("Request for chat {} failed: {}", chat_id, e);
            let _ = state
                .sessions
                .update(chat_id, |s| {
                    if s.id() == session_id {
                        s.abort()
                    }
                })
                .await;
            state.sessions.remove_if(chat_id, session_id).await;
            let text = match e {
                WorkflowError::TranscriptionFailed(_) => {
                    "Sorry, I could not transcribe that file. Please try again later."
                }
                _ => "Something went wrong while processing your file. Please try again later.",
            };
            bot.send_message(chat_id, text).await?;
        }
    }

    Ok(())
}

async fn reply_session_expired(bot: &Bot, chat_id: ChatId) -> Result<()> {
    bot.send_message(
        chat_id,
        "That request has expired. Send a new file to start over.",
    )
    .await?;
    Ok(())
}
