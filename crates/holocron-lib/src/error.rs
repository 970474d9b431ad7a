use thiserror::Error;

use crate::record::RecordId;

/// Convenient result alias for the Holocron library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
///
/// Every variant is scoped to a single operation; none of them leave the
/// store modified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Raised when an add would introduce a second record with the same id.
    #[error("Item with id {id} already exists")]
    DuplicateId { id: RecordId },

    /// Raised when a delete targets an id that is not in the store.
    #[error("Item with id {id} not found")]
    NotFound { id: RecordId },
}
