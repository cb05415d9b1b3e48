//! Error taxonomy for fetching, record handling, and project management.
//!
//! Three tiers with different blast radii:
//!
//! - [`RecordError`] — a defect in one record's data. Absorbed at the metric
//!   that hit it (logged through `msg_debug!`), never aborts a report.
//! - [`FetchError`] — the upstream source itself failed. Fatal to the whole
//!   operation; propagated unmodified, partial reports are never returned.
//! - [`ServiceError`] — a management operation was refused by a validation
//!   guard, or its underlying fetch failed.

use reqwest::StatusCode;
use thiserror::Error;

/// Defect in a single record, scoped to one metric.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    /// A date-like field is present but cannot be converted to an instant.
    #[error("invalid date value: {value:?}")]
    InvalidDate { value: String },
    /// A field a metric depends on is absent from the record.
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },
}

/// Failure reaching or decoding the upstream data source.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("portal request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("portal returned status {0}")]
    Status(StatusCode),
    #[error("failed to decode records: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("failed to read snapshot: {0}")]
    Io(#[from] std::io::Error),
}

/// Refusal or failure of a project management operation.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("project not found: {0}")]
    ProjectNotFound(String),
    #[error("no user registered with email {0}")]
    UserNotFound(String),
    #[error("the project owner cannot be added as a collaborator")]
    OwnerAsCollaborator,
    #[error("user {0} is already a collaborator on this project")]
    AlreadyCollaborator(String),
    #[error("user {0} is not a collaborator on this project")]
    NotACollaborator(String),
    #[error(transparent)]
    Fetch(#[from] FetchError),
}
