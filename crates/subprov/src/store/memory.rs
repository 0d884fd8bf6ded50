//! In-process document store with an optional JSON snapshot file.
//!
//! [`MemoryStore`] keeps every collection as an ordered list of documents
//! behind a single [`parking_lot::Mutex`]. It implements the same upsert
//! semantics the control plane's store offers: a put replaces the first
//! matching document in full and seeds the stored copy with the filter's
//! fields, so the document stays addressable by the same key afterwards.
//!
//! When opened with a path, the state is loaded from that file (a missing file
//! starts empty) and [`MemoryStore::flush`] writes it back atomically via a
//! temporary file and rename.

use super::{Document, DocumentStore, Filter, PutOutcome, StoreError};
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

type Collections = BTreeMap<String, Vec<Document>>;

#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: Mutex<Collections>,
    path: Option<PathBuf>,
}

impl MemoryStore {
    /// Creates an empty store that is never persisted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a store backed by the snapshot at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the file exists but cannot be read, or
    /// [`StoreError::Snapshot`] if it is not a valid snapshot.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let collections = match std::fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str::<Collections>(&raw)?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Collections::new(),
            Err(source) => return Err(StoreError::Io { path, source }),
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            path = %path.display(),
            collections = collections.len(),
            "opened document store snapshot"
        );

        Ok(Self {
            collections: Mutex::new(collections),
            path: Some(path),
        })
    }

    /// The snapshot path, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Writes the current state to the snapshot file. A store without a path
    /// has nothing to flush.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] or [`StoreError::Snapshot`] if the snapshot
    /// cannot be written.
    pub fn flush(&self) -> Result<(), StoreError> {
        let Some(path) = self.path.as_ref() else {
            return Ok(());
        };

        let payload = {
            let collections = self.collections.lock();
            serde_json::to_vec_pretty(&*collections)?
        };

        let io_err = |source: std::io::Error| StoreError::Io {
            path: path.clone(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }

        let temp_path = path.with_extension("tmp");
        std::fs::write(&temp_path, payload).map_err(io_err)?;
        std::fs::rename(&temp_path, path).map_err(io_err)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(path = %path.display(), "flushed document store snapshot");
        Ok(())
    }

    /// A copy of every document in `collection`, in storage order.
    pub fn documents(&self, collection: &str) -> Vec<Document> {
        self.collections
            .lock()
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }

    /// Number of documents in `collection` matching `filter`.
    pub fn count(&self, collection: &str, filter: &Filter) -> usize {
        self.collections
            .lock()
            .get(collection)
            .map_or(0, |docs| docs.iter().filter(|doc| filter.matches(doc)).count())
    }
}

impl DocumentStore for MemoryStore {
    fn get_one(&self, collection: &str, filter: &Filter) -> Result<Option<Document>, StoreError> {
        Ok(self
            .collections
            .lock()
            .get(collection)
            .and_then(|docs| docs.iter().find(|doc| filter.matches(doc)))
            .cloned())
    }

    fn put_one(
        &self,
        collection: &str,
        filter: &Filter,
        mut document: Document,
    ) -> Result<PutOutcome, StoreError> {
        filter.overlay(&mut document);

        let mut collections = self.collections.lock();
        let docs = collections.entry(collection.to_string()).or_default();
        match docs.iter_mut().find(|doc| filter.matches(doc)) {
            Some(existing) => {
                *existing = document;
                Ok(PutOutcome::Replaced)
            }
            None => {
                docs.push(document);
                Ok(PutOutcome::Inserted)
            }
        }
    }

    fn delete_many(&self, collection: &str, filter: &Filter) -> Result<usize, StoreError> {
        let mut collections = self.collections.lock();
        let Some(docs) = collections.get_mut(collection) else {
            return Ok(0);
        };
        let before = docs.len();
        docs.retain(|doc| !filter.matches(doc));
        Ok(before - docs.len())
    }

    fn post_many(
        &self,
        collection: &str,
        filter: &Filter,
        documents: Vec<Document>,
    ) -> Result<usize, StoreError> {
        let inserted = documents.len();
        let mut collections = self.collections.lock();
        let docs = collections.entry(collection.to_string()).or_default();
        docs.extend(documents.into_iter().map(|mut doc| {
            filter.overlay(&mut doc);
            doc
        }));
        Ok(inserted)
    }
}
