// Configuration defaults and language-table sanity checks.

use voxbridge::{Config, Language};

#[test]
fn test_config_defaults() {
    let cfg = Config::default();

    assert_eq!(cfg.transcription.model, "whisper-1");
    assert_eq!(cfg.transcription.base_url, "https://api.openai.com/v1");
    assert_eq!(cfg.transcription.timeout_secs, 60);
    assert_eq!(cfg.translation.base_url, "https://translate.googleapis.com");
    assert_eq!(cfg.translation.timeout_secs, 60);
    assert!(cfg.media.temp_dir.ends_with("voxbridge"));
}

#[test]
fn test_config_loads_without_file() {
    let cfg = Config::load(None).unwrap();
    assert_eq!(cfg.transcription.model, "whisper-1");
}

#[test]
fn test_language_codes_round_trip() {
    for lang in Language::ALL {
        assert_eq!(Language::from_code(lang.code()), Some(lang));
    }
    assert_eq!(Language::from_code("de"), None);
    assert_eq!(Language::from_code(""), None);
}

#[test]
fn test_language_labels() {
    assert_eq!(Language::Persian.label(), "Persian");
    assert_eq!(Language::English.label(), "English");
    assert_eq!(Language::Arabic.label(), "Arabic");
    assert_eq!(Language::Persian.to_string(), "Persian");
}
