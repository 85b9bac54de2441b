//! Application State
//!
//! Shared state accessible by all handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::sync::Arc;

use crate::config::ApiConfig;
use crate::storage::EntryStore;
use crate::websocket::{HubConfig, SessionHub};

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Handle to the diary file
    pub store: EntryStore,
    /// Registry of live diary sessions
    pub sessions: Arc<SessionHub>,
}

impl AppState {
    /// Create a new AppState
    pub fn new(store: EntryStore, config: &ApiConfig) -> Self {
        let hub_config = HubConfig {
            max_sessions: config.max_sessions,
        };

        Self {
            store,
            sessions: Arc::new(SessionHub::new(hub_config)),
        }
    }
}
