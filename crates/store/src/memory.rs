// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! In-memory document store.
//!
//! The reference backend for development and tests. Ids are monotonic,
//! creation timestamps are wall-clock, and listings are stable: documents
//! sharing a timestamp come back in insertion order. Collections can be
//! marked denied to exercise the access-policy failure path.

use crate::document::{DocumentRecord, DocumentStore};
use crate::error::StoreError;
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use time::OffsetDateTime;

/// In-memory [`DocumentStore`] backend.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: Mutex<HashMap<String, Vec<DocumentRecord>>>,
    denied: Mutex<HashSet<String>>,
    next_id: AtomicU64,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a collection as denied: every subsequent operation against it
    /// fails with `StoreError::PermissionDenied`, the way the managed
    /// platform rejects operations under its access rules.
    pub fn deny_collection(&self, collection: &str) {
        if let Ok(mut denied) = self.denied.lock() {
            denied.insert(collection.to_string());
        }
    }

    /// Lifts a previous denial.
    pub fn allow_collection(&self, collection: &str) {
        if let Ok(mut denied) = self.denied.lock() {
            denied.remove(collection);
        }
    }

    /// Returns the number of documents currently held in a collection.
    #[must_use]
    pub fn document_count(&self, collection: &str) -> usize {
        self.collections
            .lock()
            .ok()
            .and_then(|collections| collections.get(collection).map(Vec::len))
            .unwrap_or(0)
    }

    fn check_access(&self, collection: &str) -> Result<(), StoreError> {
        let denied = self
            .denied
            .lock()
            .map_err(|_| StoreError::Unavailable(String::from("store lock poisoned")))?;
        if denied.contains(collection) {
            return Err(StoreError::PermissionDenied {
                collection: collection.to_string(),
            });
        }
        Ok(())
    }

    fn sorted_newest_first(mut records: Vec<DocumentRecord>) -> Vec<DocumentRecord> {
        // Ids are monotonic, so same-instant records still list newest
        // first and repeated listings are identical.
        records.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        records
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn insert(
        &self,
        collection: &str,
        fields: Map<String, Value>,
    ) -> Result<DocumentRecord, StoreError> {
        self.check_access(collection)?;
        let sequence: u64 = self.next_id.fetch_add(1, Ordering::Relaxed);
        let record: DocumentRecord = DocumentRecord {
            id: format!("{sequence:016x}"),
            created_at: OffsetDateTime::now_utc(),
            fields,
        };
        let mut collections = self
            .collections
            .lock()
            .map_err(|_| StoreError::Unavailable(String::from("store lock poisoned")))?;
        collections
            .entry(collection.to_string())
            .or_default()
            .push(record.clone());
        Ok(record)
    }

    async fn list(&self, collection: &str) -> Result<Vec<DocumentRecord>, StoreError> {
        self.check_access(collection)?;
        let collections = self
            .collections
            .lock()
            .map_err(|_| StoreError::Unavailable(String::from("store lock poisoned")))?;
        let records: Vec<DocumentRecord> = collections.get(collection).cloned().unwrap_or_default();
        Ok(Self::sorted_newest_first(records))
    }

    async fn query_by_field(
        &self,
        collection: &str,
        field: &str,
        value: &Value,
    ) -> Result<Vec<DocumentRecord>, StoreError> {
        self.check_access(collection)?;
        let collections = self
            .collections
            .lock()
            .map_err(|_| StoreError::Unavailable(String::from("store lock poisoned")))?;
        let records: Vec<DocumentRecord> = collections
            .get(collection)
            .map(|records| {
                records
                    .iter()
                    .filter(|record| record.fields.get(field) == Some(value))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        Ok(Self::sorted_newest_first(records))
    }

    async fn update_field(
        &self,
        collection: &str,
        id: &str,
        field: &str,
        value: Value,
    ) -> Result<(), StoreError> {
        self.check_access(collection)?;
        let mut collections = self
            .collections
            .lock()
            .map_err(|_| StoreError::Unavailable(String::from("store lock poisoned")))?;
        let record: &mut DocumentRecord = collections
            .get_mut(collection)
            .and_then(|records| records.iter_mut().find(|record| record.id == id))
            .ok_or_else(|| StoreError::NotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            })?;
        record.fields.insert(field.to_string(), value);
        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError> {
        self.check_access(collection)?;
        let mut collections = self
            .collections
            .lock()
            .map_err(|_| StoreError::Unavailable(String::from("store lock poisoned")))?;
        let records: &mut Vec<DocumentRecord> =
            collections
                .get_mut(collection)
                .ok_or_else(|| StoreError::NotFound {
                    collection: collection.to_string(),
                    id: id.to_string(),
                })?;
        let index: usize = records
            .iter()
            .position(|record| record.id == id)
            .ok_or_else(|| StoreError::NotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            })?;
        records.remove(index);
        Ok(())
    }
}
