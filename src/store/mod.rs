pub mod nominations;
pub mod seed;

pub use nominations::{NominationStore, StoreStats};
pub use seed::seed_records;
