//! In-memory document store, used by tests and ephemeral runs

use super::document::Document;
use super::errors::StoreResult;
use super::DocumentStore;

/// Store that never touches disk; `write` is a no-op.
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: Document,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing document
    pub fn with_document(data: Document) -> Self {
        Self { data }
    }
}

impl DocumentStore for MemoryStore {
    fn read(&mut self) -> StoreResult<&mut Document> {
        Ok(&mut self.data)
    }

    fn write(&mut self) -> StoreResult<()> {
        Ok(())
    }
}
