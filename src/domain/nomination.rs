// src/domain/nomination.rs
use chrono::NaiveDate;
use mime::Mime;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Lifecycle stage of a nomination. New records start pending; review
/// moves them to approved or rejected, never back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Pending,
    Approved,
    Rejected,
}

impl Status {
    /// Capitalized label for badges ("Pending", "Approved", "Rejected").
    pub fn label(&self) -> &'static str {
        match self {
            Status::Pending => "Pending",
            Status::Approved => "Approved",
            Status::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Status::Pending => "pending",
            Status::Approved => "approved",
            Status::Rejected => "rejected",
        };
        write!(f, "{s}")
    }
}

impl FromStr for Status {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Status::Pending),
            "approved" => Ok(Status::Approved),
            "rejected" => Ok(Status::Rejected),
            _ => Err(()),
        }
    }
}

/// A reviewed candidate record held by the nomination store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NominationRecord {
    pub id: u64,
    pub candidate_name: String,
    pub email: String,
    pub phone: String,
    pub category: String,
    pub organization: String,
    pub achievements: String,
    pub status: Status,
    pub submitted_date: NaiveDate,
}

/// Metadata of an uploaded file. Only type and size are checked;
/// the bytes themselves are not retained.
#[derive(Debug, Clone)]
pub struct FileUpload {
    pub filename: String,
    pub content_type: Mime,
    pub size: u64,
}

/// Transient input of the public nomination form. Built per request
/// from the parsed POST body and discarded afterwards.
#[derive(Debug, Clone, Default)]
pub struct NominationForm {
    pub candidate_name: String,
    pub email: String,
    pub phone: String,
    pub category: String,
    pub organization: String,
    pub achievements: String,
    pub document: Option<FileUpload>,
    pub image: Option<FileUpload>,
}

impl NominationForm {
    /// Build from urlencoded fields (no file uploads possible there).
    pub fn from_fields(fields: &HashMap<String, String>) -> Self {
        let get = |name: &str| fields.get(name).cloned().unwrap_or_default();
        Self {
            candidate_name: get("candidateName"),
            email: get("email"),
            phone: get("phone"),
            category: get("category"),
            organization: get("organization"),
            achievements: get("achievements"),
            document: None,
            image: None,
        }
    }
}
