// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::request_type::RequestType;
use crate::status::RequestStatus;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The request-type tag or collection name is not registered.
    UnknownRequestType(String),
    /// The status string is not a known status value.
    UnknownStatus(String),
    /// The status is not in the request type's allowed set.
    InvalidTransition {
        /// The request type whose vocabulary was violated.
        request_type: RequestType,
        /// The rejected status.
        status: RequestStatus,
    },
    /// The ticket number does not match the `GRV-` format.
    InvalidTicketNumber(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownRequestType(tag) => {
                write!(f, "Unknown request type: '{tag}'")
            }
            Self::UnknownStatus(status) => {
                write!(f, "Unknown status: '{status}'")
            }
            Self::InvalidTransition {
                request_type,
                status,
            } => {
                write!(
                    f,
                    "Status '{status}' is not allowed for {} requests",
                    request_type.display_name()
                )
            }
            Self::InvalidTicketNumber(value) => {
                write!(
                    f,
                    "Invalid ticket number '{value}': expected 'GRV-' followed by digits"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
