//! Shared application state.

use std::sync::Arc;

use tokio::sync::RwLock;

use veranda_store::PageStore;

use crate::sessions::SessionManager;

/// Shared application state available to all handlers via `State<AppState>`.
///
/// Cheaply cloneable; the inner data lives behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// The landing page collection.
    pub store: Arc<RwLock<PageStore>>,
    /// Open editor sessions.
    pub sessions: Arc<SessionManager>,
}
