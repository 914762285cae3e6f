//! JSON file backed document store
//!
//! The whole document lives in one pretty-printed JSON file. Reads load the
//! full file; writes replace it in one step by writing a sibling temp file,
//! fsyncing it, and renaming it over the target.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use super::document::Document;
use super::errors::{StoreError, StoreResult};
use super::DocumentStore;

/// Document store persisted as a single JSON file on disk
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    data: Document,
}

impl JsonFileStore {
    /// Create a store for `path`. Nothing is touched on disk until the first
    /// [`DocumentStore::read`].
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            data: Document::empty(),
        }
    }

    /// Create a store and load (or initialise) its file immediately.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let mut store = Self::new(path);
        store.read()?;
        Ok(store)
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the file into memory.
    ///
    /// Returns `None` when the file is absent or blank.
    fn load(&self) -> StoreResult<Option<Document>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StoreError::read(&self.path, e)),
        };

        if content.trim().is_empty() {
            return Ok(None);
        }

        serde_json::from_str(&content)
            .map(Some)
            .map_err(|source| StoreError::Corrupt {
                path: self.path.clone(),
                source,
            })
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "document.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl DocumentStore for JsonFileStore {
    fn read(&mut self) -> StoreResult<&mut Document> {
        match self.load()? {
            Some(document) => self.data = document,
            None => {
                tracing::info!(path = %self.path.display(), "initialising empty document file");
                self.data = Document::empty();
                self.write()?;
            }
        }
        Ok(&mut self.data)
    }

    fn write(&mut self) -> StoreResult<()> {
        let json = serde_json::to_string_pretty(&self.data).map_err(StoreError::Serialize)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| StoreError::write(parent, e))?;
            }
        }

        let temp_path = self.temp_path();
        let mut file = File::create(&temp_path).map_err(|e| StoreError::write(&temp_path, e))?;
        file.write_all(json.as_bytes())
            .map_err(|e| StoreError::write(&temp_path, e))?;
        file.sync_all().map_err(|e| StoreError::write(&temp_path, e))?;
        drop(file);

        fs::rename(&temp_path, &self.path).map_err(|e| StoreError::write(&self.path, e))?;

        tracing::debug!(
            path = %self.path.display(),
            products = self.data.products.len(),
            "document written"
        );
        Ok(())
    }
}
