//! Repository errors
//!
//! "Not found" is not an error here: lookups return `Option`, deletes return
//! `bool`. These variants cover failures the caller cannot fix by changing
//! the id.

use thiserror::Error;

use crate::storage::StoreError;

/// Result type for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Reading or writing the document failed
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A previous operation panicked while holding the store
    #[error("Document store lock poisoned")]
    LockPoisoned,

    /// A freshly generated id is already taken
    #[error("Product id already exists: {0}")]
    DuplicateId(String),
}
