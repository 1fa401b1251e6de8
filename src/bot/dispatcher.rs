use crate::bot::handlers::{self, Command};
use crate::bot::state::BotState;
use teloxide::prelude::*;

fn has_media_payload(msg: Message) -> bool {
    msg.voice().is_some()
        || msg.audio().is_some()
        || msg.video().is_some()
        || msg.document().is_some()
}

/// Run the long-polling dispatcher until shutdown (ctrl-c).
pub async fn run(bot: Bot, state: BotState) {
    let handler = dptree::entry()
        .branch(
            Update::filter_message()
                .filter_command::<Command>()
                .endpoint(handlers::handle_command),
        )
        .branch(
            Update::filter_message()
                .filter(has_media_payload)
                .endpoint(handlers::handle_media),
        )
        .branch(Update::filter_callback_query().endpoint(handlers::handle_callback));

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![state])
        .error_handler(LoggingErrorHandler::with_custom_text(
            "Error in update handler",
        ))
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;
}
