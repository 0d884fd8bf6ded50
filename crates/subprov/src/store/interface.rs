use super::{Document, Filter, StoreError};
use std::sync::Arc;

/// Result of [`DocumentStore::put_one`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PutOutcome {
    /// No document matched; a new one was inserted.
    Inserted,
    /// An existing document was replaced in full.
    Replaced,
}

/// A key-addressed document store.
///
/// This is the only seam between provisioning and persistence. The store is
/// not expected to offer transactions spanning more than one call; the
/// synchronization engine relies on call ordering instead.
///
/// Every method takes `&self`; implementations provide their own interior
/// synchronization.
pub trait DocumentStore {
    /// Returns the first document in `collection` matching `filter`.
    fn get_one(&self, collection: &str, filter: &Filter) -> Result<Option<Document>, StoreError>;

    /// Replaces the first document matching `filter` with `document`, or
    /// inserts it when none matches. The replacement is a full-document
    /// replace, never a field-level merge.
    fn put_one(
        &self,
        collection: &str,
        filter: &Filter,
        document: Document,
    ) -> Result<PutOutcome, StoreError>;

    /// Deletes every document matching `filter` and returns how many were
    /// removed.
    fn delete_many(&self, collection: &str, filter: &Filter) -> Result<usize, StoreError>;

    /// Inserts `documents` under the scope described by `filter` and returns
    /// how many were inserted.
    fn post_many(
        &self,
        collection: &str,
        filter: &Filter,
        documents: Vec<Document>,
    ) -> Result<usize, StoreError>;
}

impl<S: DocumentStore + ?Sized> DocumentStore for &S {
    fn get_one(&self, collection: &str, filter: &Filter) -> Result<Option<Document>, StoreError> {
        (**self).get_one(collection, filter)
    }

    fn put_one(
        &self,
        collection: &str,
        filter: &Filter,
        document: Document,
    ) -> Result<PutOutcome, StoreError> {
        (**self).put_one(collection, filter, document)
    }

    fn delete_many(&self, collection: &str, filter: &Filter) -> Result<usize, StoreError> {
        (**self).delete_many(collection, filter)
    }

    fn post_many(
        &self,
        collection: &str,
        filter: &Filter,
        documents: Vec<Document>,
    ) -> Result<usize, StoreError> {
        (**self).post_many(collection, filter, documents)
    }
}

impl<S: DocumentStore + ?Sized> DocumentStore for Arc<S> {
    fn get_one(&self, collection: &str, filter: &Filter) -> Result<Option<Document>, StoreError> {
        (**self).get_one(collection, filter)
    }

    fn put_one(
        &self,
        collection: &str,
        filter: &Filter,
        document: Document,
    ) -> Result<PutOutcome, StoreError> {
        (**self).put_one(collection, filter, document)
    }

    fn delete_many(&self, collection: &str, filter: &Filter) -> Result<usize, StoreError> {
        (**self).delete_many(collection, filter)
    }

    fn post_many(
        &self,
        collection: &str,
        filter: &Filter,
        documents: Vec<Document>,
    ) -> Result<usize, StoreError> {
        (**self).post_many(collection, filter, documents)
    }
}
