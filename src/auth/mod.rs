pub mod gate;
pub mod sessions;
pub mod token;

pub use gate::{LoginGate, LoginOutcome};
pub use sessions::{SessionStore, SESSION_COOKIE};
