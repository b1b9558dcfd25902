// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The service-request type registry.
//!
//! Each request type maps to exactly one storage collection, one status
//! vocabulary, and one set of staff summary fields. The validator, the
//! repository, the lifecycle checks, and the dashboard aggregation all
//! resolve these through this registry; nothing else restates them.

use crate::error::DomainError;
use crate::status::RequestStatus;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The six citizen service-request categories.
///
/// A request belongs to exactly one type for its whole lifetime; the type
/// determines its storage collection and its status vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestType {
    /// Appointment booking with a public office.
    Appointment,
    /// Citizen grievance with a tracking ticket number.
    Grievance,
    /// Health assistance request.
    HealthSupport,
    /// Education assistance request.
    EducationSupport,
    /// Real estate consultancy request.
    RealEstate,
    /// Event invitation request.
    Invitation,
}

impl RequestType {
    /// Every registered request type, in the canonical merge order used by
    /// dashboard aggregation.
    pub const ALL: [Self; 6] = [
        Self::Appointment,
        Self::Grievance,
        Self::HealthSupport,
        Self::EducationSupport,
        Self::RealEstate,
        Self::Invitation,
    ];

    /// Returns the string tag of the request type.
    ///
    /// This is used for persistence and API serialization.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Appointment => "appointment",
            Self::Grievance => "grievance",
            Self::HealthSupport => "health_support",
            Self::EducationSupport => "education_support",
            Self::RealEstate => "real_estate",
            Self::Invitation => "invitation",
        }
    }

    /// Parses a request type from its string tag.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownRequestType` if the tag is not one of
    /// the six registered types.
    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "appointment" => Ok(Self::Appointment),
            "grievance" => Ok(Self::Grievance),
            "health_support" => Ok(Self::HealthSupport),
            "education_support" => Ok(Self::EducationSupport),
            "real_estate" => Ok(Self::RealEstate),
            "invitation" => Ok(Self::Invitation),
            _ => Err(DomainError::UnknownRequestType(s.to_string())),
        }
    }

    /// Resolves a request type from its storage collection name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownRequestType` if the collection name is
    /// not one of the six registered collections.
    pub fn from_collection(collection: &str) -> Result<Self, DomainError> {
        Self::ALL
            .iter()
            .find(|request_type| request_type.collection_name() == collection)
            .copied()
            .ok_or_else(|| DomainError::UnknownRequestType(collection.to_string()))
    }

    /// Returns the storage collection name holding records of this type.
    #[must_use]
    pub const fn collection_name(&self) -> &'static str {
        match self {
            Self::Appointment => "appointments",
            Self::Grievance => "grievances",
            Self::HealthSupport => "health-requests",
            Self::EducationSupport => "education-requests",
            Self::RealEstate => "real-estate-requests",
            Self::Invitation => "invitation-requests",
        }
    }

    /// Returns the human-readable name used in citizen-facing messages.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Appointment => "Appointment Booking",
            Self::Grievance => "Grievance",
            Self::HealthSupport => "Health Support",
            Self::EducationSupport => "Education Support",
            Self::RealEstate => "Real Estate Consultancy",
            Self::Invitation => "Invitation Request",
        }
    }

    /// Returns the full set of statuses staff may assign to this type.
    ///
    /// The set is flat: any listed status may be assigned regardless of the
    /// record's current status. Membership is the only lifecycle rule.
    #[must_use]
    pub const fn allowed_statuses(&self) -> &'static [RequestStatus] {
        match self {
            Self::Appointment => &[
                RequestStatus::Pending,
                RequestStatus::Confirmed,
                RequestStatus::Completed,
                RequestStatus::Cancelled,
            ],
            Self::Grievance => &[
                RequestStatus::Submitted,
                RequestStatus::UnderReview,
                RequestStatus::Resolved,
                RequestStatus::Closed,
            ],
            Self::HealthSupport => &[
                RequestStatus::Submitted,
                RequestStatus::Processing,
                RequestStatus::Approved,
                RequestStatus::Completed,
            ],
            Self::EducationSupport | Self::Invitation => &[
                RequestStatus::Submitted,
                RequestStatus::UnderReview,
                RequestStatus::Approved,
                RequestStatus::Rejected,
            ],
            Self::RealEstate => &[
                RequestStatus::Submitted,
                RequestStatus::UnderReview,
                RequestStatus::InProgress,
                RequestStatus::Completed,
            ],
        }
    }

    /// Returns the status stamped on a newly created record of this type.
    #[must_use]
    pub const fn initial_status(&self) -> RequestStatus {
        match self {
            Self::Appointment => RequestStatus::Pending,
            Self::Grievance
            | Self::HealthSupport
            | Self::EducationSupport
            | Self::RealEstate
            | Self::Invitation => RequestStatus::Submitted,
        }
    }

    /// Returns true if staff may assign the given status to this type.
    #[must_use]
    pub fn is_status_allowed(&self, status: RequestStatus) -> bool {
        self.allowed_statuses().contains(&status)
    }

    /// Returns the persisted field names staff summary views render for
    /// records of this type, in display order.
    #[must_use]
    pub const fn display_fields(&self) -> &'static [&'static str] {
        match self {
            Self::Appointment => &[
                "fullName",
                "mobile",
                "email",
                "purpose",
                "appointmentDate",
                "timeSlot",
            ],
            Self::Grievance => &["fullName", "mobile", "email", "category", "ticketNumber"],
            Self::HealthSupport => &["fullName", "mobile", "email", "assistanceType"],
            Self::EducationSupport => &[
                "studentName",
                "mobile",
                "email",
                "requestType",
                "institution",
            ],
            Self::RealEstate => &[
                "fullName",
                "mobile",
                "email",
                "consultationType",
                "propertyLocation",
            ],
            Self::Invitation => &[
                "organizationName",
                "mobile",
                "email",
                "eventName",
                "eventDate",
                "venue",
            ],
        }
    }
}

impl FromStr for RequestType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for RequestType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
