// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use seva_portal_domain::{DomainError, RequestType, ValidationErrors};
use seva_portal_store::{RepositoryError, StoreError};
use thiserror::Error;

/// API-level errors.
///
/// These are distinct from domain/store errors and represent the API
/// contract. Every error is recoverable at the UI boundary; none aborts
/// the process.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The submission violated field-level rules; no I/O was attempted.
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    /// The attachment upload failed; the submission was aborted before
    /// any record write.
    #[error("Attachment upload failed: {message}")]
    UploadFailure { message: String },

    /// The status is not in the request type's allowed set (or is not a
    /// status at all).
    #[error("Status '{status}' is not allowed for {request_type} requests")]
    InvalidTransition {
        request_type: RequestType,
        status: String,
    },

    /// The store rejected the operation under its access policy.
    #[error("Permission denied on collection '{collection}'")]
    PermissionDenied { collection: String },

    /// The target record no longer exists.
    #[error("Request '{id}' was not found in '{collection}'; it may already be removed")]
    NotFound { collection: String, id: String },

    /// The request-type tag or collection name is not registered.
    #[error("Unknown request type: '{tag}'")]
    UnknownRequestType { tag: String },

    /// One of the dashboard source queries failed; the whole aggregation
    /// is reported as failed rather than showing a partial dashboard.
    #[error("Dashboard aggregation failed on {request_type}: {message}")]
    AggregationFailed {
        request_type: RequestType,
        message: String,
    },

    /// An internal error occurred.
    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Translates a repository error into an API error.
///
/// This translation is explicit and ensures domain/store errors are not
/// leaked directly.
#[must_use]
pub fn translate_repository_error(err: RepositoryError) -> ApiError {
    match err {
        RepositoryError::Domain(domain_err) => match domain_err {
            DomainError::InvalidTransition {
                request_type,
                status,
            } => ApiError::InvalidTransition {
                request_type,
                status: status.as_str().to_string(),
            },
            DomainError::UnknownRequestType(tag) => ApiError::UnknownRequestType { tag },
            DomainError::UnknownStatus(_) | DomainError::InvalidTicketNumber(_) => {
                ApiError::Internal {
                    message: domain_err.to_string(),
                }
            }
        },
        RepositoryError::Store(store_err) => match store_err {
            StoreError::PermissionDenied { collection } => {
                ApiError::PermissionDenied { collection }
            }
            StoreError::NotFound { collection, id } => ApiError::NotFound { collection, id },
            StoreError::Unavailable(_) | StoreError::Serialization(_) => ApiError::Internal {
                message: store_err.to_string(),
            },
            StoreError::UploadFailed(message) => ApiError::UploadFailure { message },
        },
        RepositoryError::MalformedRecord { .. } => ApiError::Internal {
            message: err.to_string(),
        },
    }
}
