//! Error surface of the extraction stage.
//!
//! Collaborator failures are propagated unmodified: this stage performs no
//! retry and no suppression, so callers see exactly what the store or
//! backend reported.

use thiserror::Error;

/// Failure surfaced by the persistence collaborator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StoreError {
    /// The store could not be reached or its state is unusable.
    #[error("feature store unavailable: {0}")]
    Unavailable(String),
    /// The store refused a write.
    #[error("write rejected for id {id}: {reason}")]
    WriteRejected { id: String, reason: String },
}

/// Failure surfaced by the similarity-search collaborator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BackendError {
    /// The backend could not be reached.
    #[error("similarity backend unavailable: {0}")]
    Unavailable(String),
    /// The backend rejected the query vector or configuration.
    #[error("similarity backend rejected query: {0}")]
    RejectedQuery(String),
}

/// Errors produced by the extraction stage.
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum ExtractError {
    /// Persistence collaborator failure, propagated unmodified.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
    /// Similarity backend failure, propagated unmodified.
    #[error("backend error: {0}")]
    Backend(#[from] BackendError),
    /// Scoring-stage contract violation.
    #[error("score error: {0}")]
    Score(#[from] score::ScoreError),
}
