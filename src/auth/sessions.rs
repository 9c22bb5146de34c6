// src/auth/sessions.rs
use crate::auth::token::{generate_token_default, hash_token};
use crate::errors::ServerError;
use std::collections::HashMap;
use std::sync::Mutex;

pub const SESSION_TTL_SECS: i64 = 60 * 60 * 24 * 7; // 7 days
pub const SESSION_COOKIE: &str = "session";

/// In-memory admin session registry: token hash -> expiry. Sessions live
/// only as long as the process, which matches the mocked auth model.
pub struct SessionStore {
    sessions: Mutex<HashMap<[u8; 32], i64>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
        }
    }

    fn with_sessions<F, T>(&self, f: F) -> Result<T, ServerError>
    where
        F: FnOnce(&mut HashMap<[u8; 32], i64>) -> T,
    {
        let mut sessions = self
            .sessions
            .lock()
            .map_err(|_| ServerError::InternalError)?;
        Ok(f(&mut sessions))
    }

    /// Create a session and return the raw token (never stored).
    pub fn create(&self, now: i64) -> Result<String, ServerError> {
        let raw_token = generate_token_default();
        let hash = hash_token(&raw_token);
        self.with_sessions(|sessions| {
            sessions.insert(hash, now + SESSION_TTL_SECS);
        })?;
        Ok(raw_token)
    }

    /// Check a raw token. Expired entries are dropped on sight.
    pub fn is_valid(&self, raw_token: &str, now: i64) -> Result<bool, ServerError> {
        let hash = hash_token(raw_token);
        self.with_sessions(|sessions| match sessions.get(&hash).copied() {
            Some(expires_at) if expires_at > now => true,
            Some(_) => {
                sessions.remove(&hash);
                false
            }
            None => false,
        })
    }

    /// Teardown at logout.
    pub fn revoke(&self, raw_token: &str) -> Result<(), ServerError> {
        let hash = hash_token(raw_token);
        self.with_sessions(|sessions| {
            sessions.remove(&hash);
        })
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
