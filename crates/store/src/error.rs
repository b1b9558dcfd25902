// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use seva_portal_domain::DomainError;

/// Errors surfaced by the external document and blob stores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The store rejected the operation under its access policy.
    PermissionDenied {
        /// The collection the operation targeted.
        collection: String,
    },
    /// The target document does not exist.
    NotFound {
        /// The collection the operation targeted.
        collection: String,
        /// The missing document id.
        id: String,
    },
    /// The store could not be reached or failed internally.
    Unavailable(String),
    /// A record could not be serialized or deserialized.
    Serialization(String),
    /// The blob store rejected or lost an upload.
    UploadFailed(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PermissionDenied { collection } => {
                write!(f, "Permission denied on collection '{collection}'")
            }
            Self::NotFound { collection, id } => {
                write!(f, "Document '{id}' not found in collection '{collection}'")
            }
            Self::Unavailable(msg) => write!(f, "Store unavailable: {msg}"),
            Self::Serialization(msg) => write!(f, "Serialization error: {msg}"),
            Self::UploadFailed(msg) => write!(f, "Upload failed: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Errors surfaced by the request repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// A domain rule was violated (unknown type, disallowed status).
    Domain(DomainError),
    /// The underlying store operation failed.
    Store(StoreError),
    /// A stored record does not match the expected shape.
    MalformedRecord {
        /// The collection holding the record.
        collection: String,
        /// The record id.
        id: String,
        /// What was wrong with the record.
        detail: String,
    },
}

impl std::fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Domain(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
            Self::MalformedRecord {
                collection,
                id,
                detail,
            } => {
                write!(
                    f,
                    "Malformed record '{id}' in collection '{collection}': {detail}"
                )
            }
        }
    }
}

impl std::error::Error for RepositoryError {}

impl From<DomainError> for RepositoryError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

impl From<StoreError> for RepositoryError {
    fn from(err: StoreError) -> Self {
        Self::Store(err)
    }
}
