//! Session context: who is logged in, and the display name cache.
//!
//! Modeled as an explicit object passed to whoever needs it rather than
//! ambient global state. The display name is persisted across restarts; the
//! authenticated flag is not: the session cookie lives in the HTTP client
//! and a fresh process must log in again.

mod store;

pub use store::SessionStore;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session cache I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("session cache serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Session context for the running process.
#[derive(Debug)]
pub struct Session {
    store: SessionStore,
    user_name: Option<String>,
    authenticated: bool,
}

impl Session {
    /// Load the session context at startup, recovering a cached display name.
    pub fn load(store: SessionStore) -> Self {
        let user_name = store.load();
        Self {
            store,
            user_name,
            authenticated: false,
        }
    }

    /// Record a successful login and persist the display name.
    ///
    /// Cache write failures are logged, not fatal: the session is still live.
    pub fn login(&mut self, user_name: &str) {
        self.user_name = Some(user_name.to_string());
        self.authenticated = true;
        if let Err(e) = self.store.save(user_name) {
            tracing::warn!(error = %e, "failed to persist display name");
        }
    }

    /// Clear the session and the cached display name.
    pub fn logout(&mut self) {
        self.user_name = None;
        self.authenticated = false;
        if let Err(e) = self.store.clear() {
            tracing::warn!(error = %e, "failed to clear display name cache");
        }
    }

    /// Whether a login has happened in this process.
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Display name, cached or from the current login.
    pub fn display_name(&self) -> Option<&str> {
        self.user_name.as_deref()
    }
}
