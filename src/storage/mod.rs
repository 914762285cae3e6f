//! Document storage
//!
//! The store owns one [`Document`] and moves it between memory and durable
//! storage as a unit. Readers call [`DocumentStore::read`] to pick up external
//! changes before every operation; mutators change the returned document in
//! place and call [`DocumentStore::write`] before returning.

mod document;
mod errors;
mod json_file;
mod memory;

pub use document::Document;
pub use errors::{StoreError, StoreResult};
pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

/// Whole-document read/write access to durable storage
pub trait DocumentStore: Send {
    /// Load the current document, initialising and persisting an empty one
    /// if nothing is stored yet.
    fn read(&mut self) -> StoreResult<&mut Document>;

    /// Persist the in-memory document, replacing what is stored.
    fn write(&mut self) -> StoreResult<()>;
}
