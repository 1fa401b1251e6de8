use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::info;
use voxbridge::bot::{self, BotState};
use voxbridge::{Config, GoogleTranslate, Secrets, WhisperApi};

#[derive(Parser)]
#[command(name = "voxbridge", about = "Telegram voice transcription & translation bot")]
struct Cli {
    /// Path to a TOML config file (optional; env overrides still apply).
    #[arg(long)]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let cfg = Config::load(cli.config.as_deref())?;
    let secrets = Secrets::from_env()?;

    let temp_dir = PathBuf::from(&cfg.media.temp_dir);
    tokio::fs::create_dir_all(&temp_dir)
        .await
        .with_context(|| format!("Failed to create media temp dir {}", temp_dir.display()))?;

    info!("voxbridge v0.1.0");
    info!("Whisper model: {}", cfg.transcription.model);
    info!("Media temp dir: {}", temp_dir.display());

    let bot = Bot::new(&secrets.telegram_token);
    let me = bot
        .get_me()
        .await
        .context("Telegram rejected the bot token")?;
    info!("Authorized as @{}", me.username());

    let state = BotState::new(
        Arc::new(WhisperApi::new(secrets.openai_api_key, &cfg.transcription)?),
        Arc::new(GoogleTranslate::new(&cfg.translation)?),
        temp_dir,
    );

    info!("Bot is running");
    bot::run(bot, state).await;

    Ok(())
}
