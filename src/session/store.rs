use crate::error::WorkflowError;
use crate::session::{Session, Stage};
use std::collections::HashMap;
use std::sync::Arc;
use teloxide::types::ChatId;
use tokio::sync::RwLock;
use tracing::info;

/// Process-wide registry of open sessions (chat id → session).
///
/// One shared instance per process; reset on restart. Every mutation runs
/// under the map's write lock, so transitions for the same chat are
/// serialized while distinct chats proceed concurrently. During the external
/// calls no lock is held — the session simply stays in `Processing`, which
/// makes concurrent selection events no-ops rather than queued work.
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<ChatId, Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a session for a chat, replacing any session already open for it.
    ///
    /// New media always restarts the flow: accumulated selections of the
    /// previous session are discarded. The replaced session is returned so
    /// the caller can release its media file.
    pub async fn insert(&self, chat: ChatId, session: Session) -> Option<Session> {
        let mut sessions = self.sessions.write().await;
        let previous = sessions.insert(chat, session);
        if let Some(previous) = &previous {
            info!(
                "Chat {} sent new media; restarting its session open since {}",
                chat, previous.created_at
            );
        }
        previous
    }

    /// Apply a mutation to the chat's session under the write lock.
    ///
    /// The closure's return value is handed back to the caller, which is how
    /// the state machine reports whether a transition actually happened.
    pub async fn update<F, R>(&self, chat: ChatId, f: F) -> Result<R, WorkflowError>
    where
        F: FnOnce(&mut Session) -> R,
    {
        let mut sessions = self.sessions.write().await;
        let session = sessions
            .get_mut(&chat)
            .ok_or(WorkflowError::SessionNotFound(chat.0))?;
        Ok(f(session))
    }

    /// Snapshot of the chat's session, if one is open.
    pub async fn get(&self, chat: ChatId) -> Option<Session> {
        self.sessions.read().await.get(&chat).cloned()
    }

    pub async fn stage(&self, chat: ChatId) -> Option<Stage> {
        self.sessions.read().await.get(&chat).map(|s| s.stage())
    }

    pub async fn contains(&self, chat: ChatId) -> bool {
        self.sessions.read().await.contains_key(&chat)
    }

    pub async fn remove(&self, chat: ChatId) -> Option<Session> {
        self.sessions.write().await.remove(&chat)
    }

    /// Remove the chat's session only if it is still the given generation.
    ///
    /// Used when a request completes: new media may have replaced the session
    /// while the orchestrator was running, and that new session must survive
    /// the old request's completion.
    pub async fn remove_if(&self, chat: ChatId, id: uuid::Uuid) -> Option<Session> {
        let mut sessions = self.sessions.write().await;
        if sessions.get(&chat).map(|s| s.id()) == Some(id) {
            sessions.remove(&chat)
        } else {
            None
        }
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}
