// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Core request types shared across the portal.
//!
//! Persisted field names are camelCase; the serde renames here define the
//! stored record shape for every collection.

use crate::request_type::RequestType;
use crate::status::RequestStatus;
use crate::ticket::TicketNumber;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Identifier of the submitting citizen, taken from the authenticated
/// session. Never empty on a stored record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId {
    value: String,
}

impl UserId {
    /// Creates a new `UserId`.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
        }
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns true if the identifier is empty.
    ///
    /// An empty id means no authenticated session was attached; such a
    /// submission must be refused before any write.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

/// Opaque record identifier assigned by the document store at creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId {
    value: String,
}

impl RequestId {
    /// Creates a `RequestId` from a store-assigned value.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
        }
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the first 8 characters, used as a citizen-facing reference
    /// for request types that carry no ticket number.
    #[must_use]
    pub fn short_ref(&self) -> String {
        self.value.chars().take(8).collect()
    }
}

/// Appointment booking form fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentDetails {
    pub full_name: String,
    pub mobile: String,
    pub email: String,
    pub purpose: String,
    /// Requested date, ISO 8601 calendar date (`YYYY-MM-DD`).
    pub appointment_date: String,
    pub time_slot: String,
}

/// Grievance form fields. The tracking ticket number is stamped at
/// creation and lives on the record envelope, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrievanceDetails {
    pub full_name: String,
    pub mobile: String,
    pub email: String,
    pub category: String,
    pub description: String,
}

/// Health support form fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthDetails {
    pub full_name: String,
    pub mobile: String,
    pub email: String,
    pub assistance_type: String,
    pub description: String,
}

/// Education support form fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationDetails {
    pub student_name: String,
    pub mobile: String,
    pub email: String,
    /// Kind of support requested (scholarship, admission, ...). Persisted
    /// as `requestType` for compatibility with existing records.
    #[serde(rename = "requestType")]
    pub request_kind: String,
    pub institution: String,
    pub justification: String,
}

/// Real estate consultancy form fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RealEstateDetails {
    pub full_name: String,
    pub mobile: String,
    pub email: String,
    pub consultation_type: String,
    pub property_location: String,
    pub description: String,
}

/// Invitation request form fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvitationDetails {
    pub organization_name: String,
    pub mobile: String,
    pub email: String,
    pub event_name: String,
    /// Event date, ISO 8601 calendar date (`YYYY-MM-DD`).
    pub event_date: String,
    pub venue: String,
    pub description: String,
}

/// The type-specific payload of a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestDetails {
    Appointment(AppointmentDetails),
    Grievance(GrievanceDetails),
    HealthSupport(HealthDetails),
    EducationSupport(EducationDetails),
    RealEstate(RealEstateDetails),
    Invitation(InvitationDetails),
}

impl RequestDetails {
    /// Returns the request type this payload belongs to.
    #[must_use]
    pub const fn request_type(&self) -> RequestType {
        match self {
            Self::Appointment(_) => RequestType::Appointment,
            Self::Grievance(_) => RequestType::Grievance,
            Self::HealthSupport(_) => RequestType::HealthSupport,
            Self::EducationSupport(_) => RequestType::EducationSupport,
            Self::RealEstate(_) => RequestType::RealEstate,
            Self::Invitation(_) => RequestType::Invitation,
        }
    }

    /// Returns the name of the person or organization behind the request.
    #[must_use]
    pub fn applicant_name(&self) -> &str {
        match self {
            Self::Appointment(details) => &details.full_name,
            Self::Grievance(details) => &details.full_name,
            Self::HealthSupport(details) => &details.full_name,
            Self::EducationSupport(details) => &details.student_name,
            Self::RealEstate(details) => &details.full_name,
            Self::Invitation(details) => &details.organization_name,
        }
    }

    /// Returns the contact mobile number.
    #[must_use]
    pub const fn mobile(&self) -> &String {
        match self {
            Self::Appointment(details) => &details.mobile,
            Self::Grievance(details) => &details.mobile,
            Self::HealthSupport(details) => &details.mobile,
            Self::EducationSupport(details) => &details.mobile,
            Self::RealEstate(details) => &details.mobile,
            Self::Invitation(details) => &details.mobile,
        }
    }

    /// Returns the contact email address.
    #[must_use]
    pub const fn email(&self) -> &String {
        match self {
            Self::Appointment(details) => &details.email,
            Self::Grievance(details) => &details.email,
            Self::HealthSupport(details) => &details.email,
            Self::EducationSupport(details) => &details.email,
            Self::RealEstate(details) => &details.email,
            Self::Invitation(details) => &details.email,
        }
    }
}

/// The normalized read model shared by all six request types.
///
/// `id`, `user_id`, and `submitted_at` never change after creation;
/// `status` is staff-mutable within the type's allowed set;
/// `document_url` is set at most once, at creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceRequest {
    pub id: RequestId,
    pub request_type: RequestType,
    pub user_id: UserId,
    pub status: RequestStatus,
    pub submitted_at: OffsetDateTime,
    pub document_url: Option<String>,
    /// Present on grievances only.
    pub ticket_number: Option<TicketNumber>,
    pub details: RequestDetails,
}

impl ServiceRequest {
    /// Returns the type-specific one-line summary shown on dashboards:
    /// the purpose, ticket number, assistance type, support kind,
    /// consultation type, or event name depending on the request type.
    #[must_use]
    pub fn summary(&self) -> &str {
        match &self.details {
            RequestDetails::Appointment(details) => &details.purpose,
            RequestDetails::Grievance(details) => self
                .ticket_number
                .as_ref()
                .map_or(details.category.as_str(), TicketNumber::value),
            RequestDetails::HealthSupport(details) => &details.assistance_type,
            RequestDetails::EducationSupport(details) => &details.request_kind,
            RequestDetails::RealEstate(details) => &details.consultation_type,
            RequestDetails::Invitation(details) => &details.event_name,
        }
    }

    /// Returns the citizen-facing reference: the ticket number when the
    /// record carries one, else the first 8 characters of the record id.
    #[must_use]
    pub fn reference(&self) -> String {
        self.ticket_number
            .as_ref()
            .map_or_else(|| self.id.short_ref(), |ticket| ticket.value().to_string())
    }
}
