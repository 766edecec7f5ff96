use thiserror::Error;

/// Error type for failures while writing to the backing key-value store.
///
/// Read paths never produce these: malformed persisted data degrades to the
/// hardcoded defaults instead of surfacing an error.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Rejection reasons for a record draft. Nothing is persisted when any of
/// these fire; the caller owns the user-facing message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DraftError {
    #[error("record date must not be empty")]
    MissingDate,
    #[error("record description must not be empty")]
    MissingDescription,
    #[error("record category must not be empty")]
    MissingCategory,
    #[error("amount `{0}` is not a finite number")]
    InvalidAmount(String),
}

/// Failure of an operation that validates input and then persists.
#[derive(Debug, Error)]
pub enum AppendError {
    #[error(transparent)]
    Draft(#[from] DraftError),
    #[error(transparent)]
    Store(#[from] StoreError),
}
