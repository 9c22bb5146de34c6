// src/auth/gate.rs
use crate::auth::sessions::SessionStore;
use crate::domain::{validate_login, ValidationErrors};
use crate::errors::ServerError;
use std::thread;
use std::time::Duration;

/// Outcome of a login attempt: a raw session token, or the field errors
/// to re-render the form with.
pub enum LoginOutcome {
    Granted(String),
    Invalid(ValidationErrors),
}

/// Mocked admin login. Accepts any syntactically valid email plus any
/// non-empty password after a fixed delay; performs NO credential check.
/// Real authentication would replace the body of `login` wholesale.
pub struct LoginGate {
    delay: Duration,
}

impl LoginGate {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn login(
        &self,
        sessions: &SessionStore,
        email: &str,
        password: &str,
        now: i64,
    ) -> Result<LoginOutcome, ServerError> {
        let errors = validate_login(email, password);
        if !errors.is_empty() {
            return Ok(LoginOutcome::Invalid(errors));
        }

        // Stands in for the round trip a real credential check would make.
        thread::sleep(self.delay);

        let token = sessions.create(now)?;
        Ok(LoginOutcome::Granted(token))
    }

    pub fn logout(&self, sessions: &SessionStore, raw_token: &str) -> Result<(), ServerError> {
        sessions.revoke(raw_token)
    }
}
