// src/submit.rs
use crate::domain::NominationForm;
use crate::errors::ServerError;
use std::thread;
use std::time::Duration;

/// Capability that accepts a validated nomination. Form handling only
/// depends on this trait, so a real backend can slot in later without
/// touching the routes.
pub trait NominationSubmitter: Send + Sync {
    fn submit(&self, form: &NominationForm) -> Result<(), ServerError>;
}

/// Stand-in for the future backend: waits a fixed delay, then accepts.
/// There is intentionally no failure path.
pub struct DelayedSubmitter {
    delay: Duration,
}

impl DelayedSubmitter {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl NominationSubmitter for DelayedSubmitter {
    fn submit(&self, form: &NominationForm) -> Result<(), ServerError> {
        thread::sleep(self.delay);
        println!(
            "📨 Nomination received: {} ({})",
            form.candidate_name, form.category
        );
        Ok(())
    }
}
