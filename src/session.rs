//! Explicit session context.
//!
//! The credential is not ambient global state: the REST client is handed a
//! `SessionContext` at construction, fills it on login and clears it on
//! logout or on the first 401. Consumers watch `is_authenticated()` to
//! decide when to route back to the login view.

use std::sync::Mutex;

#[derive(Debug, Clone)]
struct SessionData {
    token: String,
    user_id: i64,
    username: String,
}

/// Shared credential holder. Writes are serialized behind a mutex because
/// the client is shared across page controllers.
#[derive(Debug, Default)]
pub struct SessionContext {
    inner: Mutex<Option<SessionData>>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the credential returned by a successful login.
    pub fn begin(&self, token: String, user_id: i64, username: String) {
        let mut guard = self.lock();
        *guard = Some(SessionData {
            token,
            user_id,
            username,
        });
    }

    /// Drop the credential. Called on logout and on 401.
    pub fn clear(&self) {
        let mut guard = self.lock();
        if guard.take().is_some() {
            log::info!("Session credential cleared");
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.lock().is_some()
    }

    pub fn token(&self) -> Option<String> {
        self.lock().as_ref().map(|s| s.token.clone())
    }

    pub fn user_id(&self) -> Option<i64> {
        self.lock().as_ref().map(|s| s.user_id)
    }

    pub fn username(&self) -> Option<String> {
        self.lock().as_ref().map(|s| s.username.clone())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<SessionData>> {
        // A poisoned lock only means a panic elsewhere; the data is a plain
        // credential and stays usable.
        self.inner.lock().unwrap_or_else(|p| p.into_inner())
    }
}
