//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::store::NoteStore;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// The note store.
    pub store: Arc<NoteStore>,

    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Create application state with a fresh, empty store.
    pub fn new(config: ServerConfig) -> Self {
        Self {
            store: Arc::new(NoteStore::new()),
            config: Arc::new(config),
        }
    }

    /// Use an existing store instead of a fresh one.
    pub fn with_store(mut self, store: Arc<NoteStore>) -> Self {
        self.store = store;
        self
    }
}
