//! Open editor session registry.
//!
//! Each editing surface gets its own [`EditorSession`], addressed by a
//! generated UUID. Thread-safe via an interior `RwLock`; designed to be
//! wrapped in `Arc` and shared across the application.

use std::collections::HashMap;

use tokio::sync::RwLock;
use uuid::Uuid;

use veranda_core::session::EditorSession;

/// Manages all open editor sessions.
pub struct SessionManager {
    sessions: RwLock<HashMap<Uuid, EditorSession>>,
}

impl SessionManager {
    /// Create a new, empty registry.
    pub fn new() -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Register a session and return its generated id.
    pub async fn create(&self, session: EditorSession) -> Uuid {
        let id = Uuid::new_v4();
        self.sessions.write().await.insert(id, session);
        id
    }

    /// Run a closure against a session, if it exists.
    ///
    /// Returns `None` when the id is unknown. The registry lock is held
    /// for the duration of the closure, which must not block.
    pub async fn with_session<R>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut EditorSession) -> R,
    ) -> Option<R> {
        let mut sessions = self.sessions.write().await;
        sessions.get_mut(&id).map(f)
    }

    /// Remove a session, returning it if it existed.
    pub async fn remove(&self, id: Uuid) -> Option<EditorSession> {
        self.sessions.write().await.remove(&id)
    }

    /// Number of open sessions.
    pub async fn count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new()
    }
}
