//! Error types for Folio

use thiserror::Error;

/// Main error type for Folio operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FolioError {
    /// A form field name that is not one of the contact form's fields
    #[error("Unknown form field: {0}")]
    UnknownField(String),

    /// The contact form is locked while a submission is in flight
    #[error("A submission is already in flight")]
    SubmissionInFlight,
}

/// Result type alias using FolioError
pub type FolioResult<T> = Result<T, FolioError>;
