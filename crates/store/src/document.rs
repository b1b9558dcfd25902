// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The document-database interface.
//!
//! The portal consumes the document database as an opaque collaborator:
//! one collection per request type, server-assigned ids and creation
//! timestamps, equality queries ordered by creation time. This trait is
//! the whole contract; the repository never reaches around it.

use crate::error::StoreError;
use async_trait::async_trait;
use serde_json::{Map, Value};
use time::OffsetDateTime;

/// One stored document: server-assigned id and creation time plus the
/// client-supplied field map.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentRecord {
    /// Opaque identifier assigned by the store at creation.
    pub id: String,
    /// Creation timestamp assigned by the store, never by the client.
    pub created_at: OffsetDateTime,
    /// The persisted field map.
    pub fields: Map<String, Value>,
}

impl DocumentRecord {
    /// Returns a string field, if present and a string.
    #[must_use]
    pub fn str_field(&self, field: &str) -> Option<&str> {
        self.fields.get(field).and_then(Value::as_str)
    }
}

/// The external document database.
///
/// Every listing is ordered newest-first by the server-assigned creation
/// time; ordering among same-instant documents is backend-defined but
/// must be deterministic across repeated listings.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Writes a new document, assigning its id and creation timestamp.
    ///
    /// # Errors
    ///
    /// Returns an error if the write is denied or the store is
    /// unreachable. The caller cannot assume anything about whether the
    /// document exists after an error.
    async fn insert(
        &self,
        collection: &str,
        fields: Map<String, Value>,
    ) -> Result<DocumentRecord, StoreError>;

    /// Lists every document in a collection, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the read is denied or the store is unreachable.
    async fn list(&self, collection: &str) -> Result<Vec<DocumentRecord>, StoreError>;

    /// Lists documents whose `field` equals `value`, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the read is denied or the store is unreachable.
    async fn query_by_field(
        &self,
        collection: &str,
        field: &str,
        value: &Value,
    ) -> Result<Vec<DocumentRecord>, StoreError>;

    /// Overwrites a single field of an existing document, leaving every
    /// other field untouched.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the document does not exist.
    async fn update_field(
        &self,
        collection: &str,
        id: &str,
        field: &str,
        value: Value,
    ) -> Result<(), StoreError>;

    /// Removes a document permanently.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the document does not exist.
    async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError>;
}
