// Tests for the session state machine and the shared session store:
// stage monotonicity, idempotence against duplicate/out-of-order taps,
// the restart-on-new-media policy, and the claim-once guarantee for the
// transition into Processing.

use std::path::PathBuf;
use teloxide::types::ChatId;
use voxbridge::{Language, MediaHandle, Selection, Session, SessionStore, Stage, WorkflowError};

fn session() -> Session {
    Session::new(MediaHandle::from_path(PathBuf::from("/tmp/voxbridge-test.ogg")))
}

#[test]
fn test_new_session_awaits_source_language() {
    let s = session();
    assert_eq!(s.stage(), Stage::AwaitingSourceLanguage);
    assert!(s.source_language().is_none());
    assert!(s.target_language().is_none());
}

#[test]
fn test_source_then_target_advances_to_processing() {
    let mut s = session();

    assert!(s.select_source(Language::Persian));
    assert_eq!(s.stage(), Stage::AwaitingTargetLanguage);
    assert_eq!(s.source_language(), Some(Language::Persian));

    let request = s.select_target(Language::English).unwrap();
    assert_eq!(s.stage(), Stage::Processing);
    assert_eq!(s.target_language(), Some(Language::English));
    assert_eq!(request.source, Language::Persian);
    assert_eq!(request.target, Language::English);
}

#[test]
fn test_target_before_source_is_ignored() {
    let mut s = session();
    assert!(s.select_target(Language::English).is_none());
    assert_eq!(s.stage(), Stage::AwaitingSourceLanguage);
    assert!(s.target_language().is_none());
}

#[test]
fn test_duplicate_source_selection_is_ignored() {
    let mut s = session();
    assert!(s.select_source(Language::Persian));
    assert!(!s.select_source(Language::Arabic));
    // First selection wins; stage did not move backward.
    assert_eq!(s.source_language(), Some(Language::Persian));
    assert_eq!(s.stage(), Stage::AwaitingTargetLanguage);
}

#[test]
fn test_stage_is_monotonic() {
    let mut s = session();
    let mut last = s.stage();

    s.select_source(Language::English);
    assert!(s.stage() >= last);
    last = s.stage();

    // Invalid events in every stage never move it backward.
    s.select_source(Language::Arabic);
    assert!(s.stage() >= last);

    s.select_target(Language::English);
    assert!(s.stage() >= last);
    last = s.stage();

    s.select_target(Language::Arabic);
    s.select_source(Language::Arabic);
    assert_eq!(s.stage(), last);

    s.finish();
    assert!(s.stage() >= last);
    assert_eq!(s.stage(), Stage::Done);
}

#[test]
fn test_processing_session_keeps_its_media_on_restart() {
    let mut s = session();
    assert!(s.discardable_media().is_some());

    s.select_source(Language::Persian);
    assert!(s.discardable_media().is_some());

    // Once claimed, the media file belongs to the in-flight orchestration
    // and must not be deleted by a restart.
    s.select_target(Language::English).unwrap();
    assert!(s.discardable_media().is_none());
}

#[test]
fn test_selection_events_after_processing_are_ignored() {
    let mut s = session();
    s.select_source(Language::Persian);
    s.select_target(Language::English).unwrap();

    assert!(s.select_target(Language::Arabic).is_none());
    assert!(!s.select_source(Language::Arabic));
    assert_eq!(s.stage(), Stage::Processing);
    assert_eq!(s.target_language(), Some(Language::English));
}

#[test]
fn test_unrecognized_payloads_never_decode() {
    for payload in [
        "input_lang_xx",
        "output_lang_",
        "lang_fa",
        "reset",
        "",
        "input_lang_fa_extra",
    ] {
        assert!(matches!(
            Selection::parse(payload),
            Err(WorkflowError::UnrecognizedSelection)
        ));
    }
}

#[test]
fn test_selection_round_trip() {
    for lang in Language::ALL {
        assert_eq!(
            Selection::parse(&Selection::source_data(lang)).unwrap(),
            Selection::Source(lang)
        );
        assert_eq!(
            Selection::parse(&Selection::target_data(lang)).unwrap(),
            Selection::Target(lang)
        );
    }
}

#[tokio::test]
async fn test_store_update_missing_chat_is_not_found() {
    let store = SessionStore::new();
    let result = store.update(ChatId(404), |s| s.stage()).await;
    assert!(matches!(result, Err(WorkflowError::SessionNotFound(404))));
}

#[tokio::test]
async fn test_new_media_restarts_open_session() {
    let store = SessionStore::new();
    let chat = ChatId(1);

    store.insert(chat, session()).await;
    store
        .update(chat, |s| s.select_source(Language::Persian))
        .await
        .unwrap();

    // New media for the same chat replaces the session and discards its
    // accumulated selections.
    let previous = store.insert(chat, session()).await.unwrap();
    assert_eq!(previous.source_language(), Some(Language::Persian));

    assert_eq!(store.stage(chat).await, Some(Stage::AwaitingSourceLanguage));
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn test_removed_chat_is_absent() {
    let store = SessionStore::new();
    let chat = ChatId(7);

    store.insert(chat, session()).await;
    assert!(store.contains(chat).await);
    assert!(store.get(chat).await.is_some());

    store.remove(chat).await;
    assert!(!store.contains(chat).await);
    assert!(store.get(chat).await.is_none());
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_distinct_chats_do_not_interfere() {
    let store = SessionStore::new();
    store.insert(ChatId(1), session()).await;
    store.insert(ChatId(2), session()).await;

    store
        .update(ChatId(1), |s| s.select_source(Language::Arabic))
        .await
        .unwrap();

    assert_eq!(store.stage(ChatId(1)).await, Some(Stage::AwaitingTargetLanguage));
    assert_eq!(store.stage(ChatId(2)).await, Some(Stage::AwaitingSourceLanguage));
}

#[tokio::test]
async fn test_racing_target_selections_claim_once() {
    let store = SessionStore::new();
    let chat = ChatId(42);

    store.insert(chat, session()).await;
    store
        .update(chat, |s| s.select_source(Language::Persian))
        .await
        .unwrap();

    // Two duplicate taps racing; exactly one may claim the completed request.
    let a = {
        let store = store.clone();
        tokio::spawn(async move {
            store
                .update(chat, |s| s.select_target(Language::English))
                .await
        })
    };
    let b = {
        let store = store.clone();
        tokio::spawn(async move {
            store
                .update(chat, |s| s.select_target(Language::English))
                .await
        })
    };

    let claimed = [a.await.unwrap(), b.await.unwrap()]
        .into_iter()
        .filter(|r| matches!(r, Ok(Some(_))))
        .count();

    assert_eq!(claimed, 1);
    assert_eq!(store.stage(chat).await, Some(Stage::Processing));
}

#[tokio::test]
async fn test_completion_of_replaced_session_leaves_new_session() {
    let store = SessionStore::new();
    let chat = ChatId(9);

    store.insert(chat, session()).await;
    store
        .update(chat, |s| s.select_source(Language::Persian))
        .await
        .unwrap();
    let request = store
        .update(chat, |s| s.select_target(Language::English))
        .await
        .unwrap()
        .unwrap();

    // New media arrives while the claimed request is still processing; the
    // restart policy replaces the session with a fresh generation.
    store.insert(chat, session()).await;

    // The old request completes. Its bookkeeping is keyed to its own
    // generation, so the new session is untouched and not removed.
    let _ = store
        .update(chat, |s| {
            if s.id() == request.session_id {
                s.abort()
            }
        })
        .await;
    assert!(store.remove_if(chat, request.session_id).await.is_none());

    assert!(store.contains(chat).await);
    assert_eq!(store.stage(chat).await, Some(Stage::AwaitingSourceLanguage));
}

#[tokio::test]
async fn test_remove_if_removes_matching_generation() {
    let store = SessionStore::new();
    let chat = ChatId(10);

    store.insert(chat, session()).await;
    store
        .update(chat, |s| s.select_source(Language::English))
        .await
        .unwrap();
    let request = store
        .update(chat, |s| s.select_target(Language::English))
        .await
        .unwrap()
        .unwrap();

    // No restart happened; completion removes its own session.
    assert!(store.remove_if(chat, request.session_id).await.is_some());
    assert!(!store.contains(chat).await);
}
