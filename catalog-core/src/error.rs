use crate::id::RecordId;
use crate::record::RecordKind;

/// Errors produced by the `catalog-core` crate.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CoreError {
    /// No record with this identifier exists in the collection.
    #[error("{kind} not found")]
    NotFound { kind: RecordKind, id: RecordId },

    /// A creation payload is missing a required field or has one out of range.
    #[error("{0}")]
    Validation(String),
}
