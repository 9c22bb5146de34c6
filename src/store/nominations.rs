// src/store/nominations.rs
use crate::domain::{NominationRecord, Status};
use crate::errors::ServerError;
use std::sync::Mutex;

/// Counts for the dashboard stat cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreStats {
    pub total: usize,
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
}

/// In-memory ordered collection of nomination records. Seeded once at
/// startup and mutated only by the dashboard's approve/reject/delete
/// actions; nothing is persisted anywhere.
///
/// The astra server runs handlers on worker threads, so the record list
/// sits behind a mutex; every operation is a single short lock.
pub struct NominationStore {
    records: Mutex<Vec<NominationRecord>>,
}

impl NominationStore {
    pub fn from_records(records: Vec<NominationRecord>) -> Self {
        Self {
            records: Mutex::new(records),
        }
    }

    /// Provides the record list to the closure, mirroring the usual
    /// with-connection shape so poisoning maps onto `ServerError`.
    fn with_records<F, T>(&self, f: F) -> Result<T, ServerError>
    where
        F: FnOnce(&mut Vec<NominationRecord>) -> T,
    {
        let mut records = self
            .records
            .lock()
            .map_err(|_| ServerError::InternalError)?;
        Ok(f(&mut records))
    }

    /// Filtered view: case-insensitive substring search over candidate
    /// name, email, and organization (OR), exact category and status
    /// matches (AND), original relative order preserved. `None` filters
    /// mean "all".
    pub fn list(
        &self,
        search: &str,
        category: Option<&str>,
        status: Option<Status>,
    ) -> Result<Vec<NominationRecord>, ServerError> {
        let term = search.trim().to_lowercase();

        self.with_records(|records| {
            records
                .iter()
                .filter(|rec| {
                    let matches_search = term.is_empty()
                        || rec.candidate_name.to_lowercase().contains(&term)
                        || rec.email.to_lowercase().contains(&term)
                        || rec.organization.to_lowercase().contains(&term);

                    let matches_category = category.map_or(true, |c| rec.category == c);
                    let matches_status = status.map_or(true, |s| rec.status == s);

                    matches_search && matches_category && matches_status
                })
                .cloned()
                .collect()
        })
    }

    pub fn stats(&self) -> Result<StoreStats, ServerError> {
        self.with_records(|records| {
            let count = |s: Status| records.iter().filter(|r| r.status == s).count();
            StoreStats {
                total: records.len(),
                pending: count(Status::Pending),
                approved: count(Status::Approved),
                rejected: count(Status::Rejected),
            }
        })
    }

    /// Apply a status change. Only pending records transition; re-applying
    /// the current status is a no-op. Returns the resulting status, or
    /// `None` when no record has the given id.
    pub fn set_status(&self, id: u64, new: Status) -> Result<Option<Status>, ServerError> {
        self.with_records(|records| {
            let rec = records.iter_mut().find(|r| r.id == id)?;
            if rec.status == Status::Pending || rec.status == new {
                rec.status = new;
            }
            Some(rec.status)
        })
    }

    /// Delete the record with the given id. Returns whether one existed.
    /// (The confirmation prompt lives on the dashboard's delete form.)
    pub fn remove(&self, id: u64) -> Result<bool, ServerError> {
        self.with_records(|records| {
            let before = records.len();
            records.retain(|r| r.id != id);
            records.len() < before
        })
    }
}
