//! Test doubles shared by the engine and driver tests.

use crate::{
    Document, DocumentStore, Filter, MemoryStore, NotifyError, PutOutcome, RechargeNotifier,
    StoreError,
};
use parking_lot::Mutex;

/// A [`MemoryStore`] that rejects every call against one collection, or only
/// calls whose filter matches `when`.
pub struct FailingStore {
    pub inner: MemoryStore,
    fail_on: &'static str,
    when: Option<Filter>,
}

impl FailingStore {
    pub fn new(fail_on: &'static str) -> Self {
        Self {
            inner: MemoryStore::new(),
            fail_on,
            when: None,
        }
    }

    /// Fails only calls whose filter has every field of `when`.
    pub fn when(mut self, when: Filter) -> Self {
        self.when = Some(when);
        self
    }

    fn check(&self, collection: &str, filter: &Filter) -> Result<(), StoreError> {
        let selected = self.when.as_ref().is_none_or(|when| {
            when.fields()
                .all(|(field, value)| filter.get(field) == Some(value))
        });
        if collection == self.fail_on && selected {
            return Err(StoreError::backend(format!("injected failure on {collection}")));
        }
        Ok(())
    }
}

impl DocumentStore for FailingStore {
    fn get_one(&self, collection: &str, filter: &Filter) -> Result<Option<Document>, StoreError> {
        self.check(collection, filter)?;
        self.inner.get_one(collection, filter)
    }

    fn put_one(
        &self,
        collection: &str,
        filter: &Filter,
        document: Document,
    ) -> Result<PutOutcome, StoreError> {
        self.check(collection, filter)?;
        self.inner.put_one(collection, filter, document)
    }

    fn delete_many(&self, collection: &str, filter: &Filter) -> Result<usize, StoreError> {
        self.check(collection, filter)?;
        self.inner.delete_many(collection, filter)
    }

    fn post_many(
        &self,
        collection: &str,
        filter: &Filter,
        documents: Vec<Document>,
    ) -> Result<usize, StoreError> {
        self.check(collection, filter)?;
        self.inner.post_many(collection, filter, documents)
    }
}

/// Remembers every recharge signal, optionally reporting failure for each.
#[derive(Default)]
pub struct RecordingNotifier {
    pub calls: Mutex<Vec<(String, i64)>>,
    pub fail: bool,
}

impl RecordingNotifier {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<(String, i64)> {
        self.calls.lock().clone()
    }
}

impl RechargeNotifier for RecordingNotifier {
    fn notify_recharge(&self, ue_id: &str, rating_group: i64) -> Result<(), NotifyError> {
        self.calls.lock().push((ue_id.to_string(), rating_group));
        if self.fail {
            return Err(NotifyError::new("charging function unreachable"));
        }
        Ok(())
    }
}
