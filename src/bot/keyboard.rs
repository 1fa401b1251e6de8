use crate::language::Language;
use crate::session::Selection;
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

/// One row of buttons, one per supported language. The same builder serves
/// both selection steps; only the callback payloads differ.
fn language_row(data: impl Fn(Language) -> String) -> InlineKeyboardMarkup {
    let row: Vec<InlineKeyboardButton> = Language::ALL
        .iter()
        .map(|lang| InlineKeyboardButton::callback(lang.label(), data(*lang)))
        .collect();
    InlineKeyboardMarkup::new(vec![row])
}

pub fn source_language_keyboard() -> InlineKeyboardMarkup {
    language_row(Selection::source_data)
}

pub fn target_language_keyboard() -> InlineKeyboardMarkup {
    language_row(Selection::target_data)
}
