use anyhow::{Context, Result};
use serde::Deserialize;

/// Tunable settings, loaded from an optional TOML file plus environment
/// overrides (`VOXBRIDGE__SECTION__KEY`). Every field has a default, so the
/// bot runs with no config file at all.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub transcription: TranscriptionConfig,
    #[serde(default)]
    pub translation: TranslationConfig,
    #[serde(default)]
    pub media: MediaConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptionConfig {
    /// Whisper model name.
    #[serde(default = "default_whisper_model")]
    pub model: String,
    #[serde(default = "default_openai_base_url")]
    pub base_url: String,
    /// Bound on the whole transcription request.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranslationConfig {
    #[serde(default = "default_translate_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MediaConfig {
    /// Where downloaded media files live until the workflow deletes them.
    #[serde(default = "default_temp_dir")]
    pub temp_dir: String,
}

fn default_whisper_model() -> String {
    "whisper-1".to_string()
}

fn default_openai_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_translate_base_url() -> String {
    "https://translate.googleapis.com".to_string()
}

fn default_timeout_secs() -> u64 {
    60
}

fn default_temp_dir() -> String {
    std::env::temp_dir()
        .join("voxbridge")
        .to_string_lossy()
        .into_owned()
}

impl Default for TranscriptionConfig {
    fn default() -> Self {
        Self {
            model: default_whisper_model(),
            base_url: default_openai_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            base_url: default_translate_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            temp_dir: default_temp_dir(),
        }
    }
}

impl Config {
    pub fn load(path: Option<&str>) -> Result<Self> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(config::File::with_name(path));
        }
        builder = builder.add_source(config::Environment::with_prefix("VOXBRIDGE").separator("__"));

        let settings = builder.build().context("Failed to load configuration")?;
        Ok(settings.try_deserialize()?)
    }
}

/// Required credentials, supplied via the process environment. Absence fails
/// process startup, never a per-request path.
#[derive(Clone)]
pub struct Secrets {
    pub telegram_token: String,
    pub openai_api_key: String,
}

impl Secrets {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            telegram_token: std::env::var("TELEGRAM_TOKEN")
                .context("TELEGRAM_TOKEN must be set")?,
            openai_api_key: std::env::var("OPENAI_API_KEY")
                .context("OPENAI_API_KEY must be set")?,
        })
    }
}
