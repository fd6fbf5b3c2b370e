//! Loader error taxonomy.
//!
//! These errors exist for logging and for internal plumbing only. The
//! loader's public operations collapse every failure to an absence signal
//! (`None`) at the boundary; callers never observe a `LoaderError`.

use crate::store::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum LoaderError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("document retrieval failed: {0}")]
    Store(#[from] StoreError),
    #[error("failed to deserialise document: {0}")]
    Deserialization(serde_json::Error),
}

pub type LoaderResult<T> = std::result::Result<T, LoaderError>;
