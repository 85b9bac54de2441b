//! Session Registry
//!
//! Tracks live diary sessions so the server can cap how many run at once.
//! Sessions share no diary state; each one owns its own page.

use std::collections::HashSet;
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Unique identifier for a live session
pub type SessionId = String;

/// Registry of active sessions
pub struct SessionHub {
    sessions: RwLock<HashSet<SessionId>>,
    config: HubConfig,
}

/// Configuration for the session registry
#[derive(Debug, Clone)]
pub struct HubConfig {
    /// Maximum number of concurrent sessions
    pub max_sessions: usize,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self { max_sessions: 100 }
    }
}

impl SessionHub {
    /// Create a new registry
    pub fn new(config: HubConfig) -> Self {
        Self {
            sessions: RwLock::new(HashSet::new()),
            config,
        }
    }

    /// Register a new session.
    ///
    /// Returns the session ID, or an error once the limit is reached.
    pub async fn register(&self) -> Result<SessionId, HubError> {
        let mut sessions = self.sessions.write().await;
        if sessions.len() >= self.config.max_sessions {
            return Err(HubError::TooManySessions(self.config.max_sessions));
        }

        let id = Uuid::new_v4().to_string();
        sessions.insert(id.clone());

        tracing::info!(session_id = %id, active = sessions.len(), "Diary session opened");
        Ok(id)
    }

    /// Remove a session
    pub async fn unregister(&self, id: &str) {
        let mut sessions = self.sessions.write().await;
        if sessions.remove(id) {
            tracing::info!(session_id = %id, active = sessions.len(), "Diary session closed");
        }
    }

    /// Get the current session count
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

/// Errors that can occur in the session registry
#[derive(Debug, Error)]
pub enum HubError {
    #[error("Too many sessions (limit: {0})")]
    TooManySessions(usize),
}
