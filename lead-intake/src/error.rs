//! Error types for the lead intake library

use thiserror::Error;

/// Failure of the hosted store insert.
///
/// The session never shows these to the user; they are logged and replaced
/// by a generic notice.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Store rejected insert (status {status}): {message}")]
    Rejected {
        status: u16,
        code: Option<String>,
        message: String,
    },
}

/// The form state cannot be turned into a submission record
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("Representative type is not selected")]
    MissingRepresentativeType,
}
