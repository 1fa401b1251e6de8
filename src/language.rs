use serde::{Deserialize, Serialize};
use std::fmt;

/// A language the bot can transcribe from and translate between.
///
/// The set is fixed at compile time and shared by every session; each variant
/// carries a stable machine code (used in callback payloads and API calls)
/// and a display label (used in replies and keyboard buttons).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    Persian,
    English,
    Arabic,
}

impl Language {
    /// All supported languages, in keyboard display order.
    pub const ALL: [Language; 3] = [Language::Persian, Language::English, Language::Arabic];

    /// Stable machine code (ISO 639-1).
    pub fn code(&self) -> &'static str {
        match self {
            Language::Persian => "fa",
            Language::English => "en",
            Language::Arabic => "ar",
        }
    }

    /// Human-readable display name.
    pub fn label(&self) -> &'static str {
        match self {
            Language::Persian => "Persian",
            Language::English => "English",
            Language::Arabic => "Arabic",
        }
    }

    /// Look up a language by its machine code.
    ///
    /// Returns `None` for anything outside the supported set, so stale or
    /// forged callback payloads never reach the state machine.
    pub fn from_code(code: &str) -> Option<Language> {
        Language::ALL.iter().copied().find(|l| l.code() == code)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
