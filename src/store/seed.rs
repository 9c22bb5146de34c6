// src/store/seed.rs
use crate::domain::NominationRecord;

const SEED_JSON: &str = include_str!("../../data/seed_nominations.json");

/// Fixed sample nominations loaded once at startup. There is no durable
/// storage behind the dashboard; this is the whole data set.
pub fn seed_records() -> Result<Vec<NominationRecord>, serde_json::Error> {
    serde_json::from_str(SEED_JSON)
}
