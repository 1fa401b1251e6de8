//! Telegram surface
//!
//! Everything that touches `teloxide` directly:
//! - `/start` and `/help` commands
//! - the media-message handler (intake → download → open session → source
//!   keyboard)
//! - the callback handler (selection transitions → orchestration → reply)
//! - the dispatcher wiring

mod dispatcher;
mod handlers;
mod keyboard;
mod state;

pub use dispatcher::run;
pub use handlers::Command;
pub use state::BotState;
