// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request status values and the status lifecycle checks.
//!
//! Status changes are staff-initiated only; the system never advances a
//! request on its own. A transition is legal when the target status belongs
//! to the request type's allowed set. The set is deliberately flat: staff
//! may move a record between any two allowed statuses, there is no enforced
//! ordering.

use crate::error::DomainError;
use crate::request_type::RequestType;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Every concrete status a request may hold, across all request types.
///
/// Each request type admits only a subset of these; see
/// [`RequestType::allowed_statuses`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    /// Awaiting staff attention (appointments).
    Pending,
    /// Appointment confirmed by staff.
    Confirmed,
    /// Work finished.
    Completed,
    /// Appointment cancelled.
    Cancelled,
    /// Freshly submitted, not yet picked up.
    Submitted,
    /// Staff are reviewing the request.
    UnderReview,
    /// Grievance resolved.
    Resolved,
    /// Grievance closed without resolution.
    Closed,
    /// Health request being processed.
    Processing,
    /// Request approved.
    Approved,
    /// Request rejected.
    Rejected,
    /// Consultancy in progress.
    InProgress,
}

/// Coarse display classification of a status.
///
/// Buckets drive dashboard counts and badge coloring. Every consumer reads
/// this one mapping; in particular `confirmed` counts as resolved
/// everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusBucket {
    /// Submitted but untouched.
    Pending,
    /// Staff are working on it.
    Active,
    /// Finished successfully.
    Resolved,
    /// Cancelled, rejected, or closed.
    Rejected,
}

impl RequestStatus {
    /// Returns the string representation of the status.
    ///
    /// This is used for persistence and API serialization.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
            Self::Submitted => "submitted",
            Self::UnderReview => "under_review",
            Self::Resolved => "resolved",
            Self::Closed => "closed",
            Self::Processing => "processing",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::InProgress => "in_progress",
        }
    }

    /// Parses a status from its string representation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownStatus` if the string is not a valid
    /// status.
    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            "submitted" => Ok(Self::Submitted),
            "under_review" => Ok(Self::UnderReview),
            "resolved" => Ok(Self::Resolved),
            "closed" => Ok(Self::Closed),
            "processing" => Ok(Self::Processing),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            "in_progress" => Ok(Self::InProgress),
            _ => Err(DomainError::UnknownStatus(s.to_string())),
        }
    }

    /// Returns the display bucket for this status.
    #[must_use]
    pub const fn bucket(&self) -> StatusBucket {
        match self {
            Self::Pending | Self::Submitted => StatusBucket::Pending,
            Self::UnderReview | Self::Processing | Self::InProgress => StatusBucket::Active,
            Self::Completed | Self::Resolved | Self::Approved | Self::Confirmed => {
                StatusBucket::Resolved
            }
            Self::Cancelled | Self::Rejected | Self::Closed => StatusBucket::Rejected,
        }
    }
}

impl StatusBucket {
    /// Returns the string representation of the bucket.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Active => "active",
            Self::Resolved => "resolved",
            Self::Rejected => "rejected",
        }
    }
}

impl FromStr for RequestStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::fmt::Display for StatusBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Validates that staff may assign `status` to a request of `request_type`.
///
/// Membership in the type's allowed set is the only rule; the current
/// status of the record does not constrain the target.
///
/// # Errors
///
/// Returns `DomainError::InvalidTransition` if the status is outside the
/// type's allowed set.
pub fn validate_assignment(
    request_type: RequestType,
    status: RequestStatus,
) -> Result<(), DomainError> {
    if request_type.is_status_allowed(status) {
        Ok(())
    } else {
        Err(DomainError::InvalidTransition {
            request_type,
            status,
        })
    }
}
