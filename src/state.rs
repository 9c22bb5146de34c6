// src/state.rs
use crate::auth::{LoginGate, SessionStore};
use crate::store::NominationStore;
use crate::submit::NominationSubmitter;

/// Everything the router needs, built once in `main` and shared across
/// worker threads. Keeping sessions and records here (instead of ambient
/// globals) gives login/logout and startup seeding one obvious home.
pub struct AppState {
    pub store: NominationStore,
    pub sessions: SessionStore,
    pub gate: LoginGate,
    pub submitter: Box<dyn NominationSubmitter>,
}

impl AppState {
    pub fn new(
        store: NominationStore,
        gate: LoginGate,
        submitter: Box<dyn NominationSubmitter>,
    ) -> Self {
        Self {
            store,
            sessions: SessionStore::new(),
            gate,
            submitter,
        }
    }
}
