// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! These DTOs are distinct from domain types and represent the API
//! contract. The `user_id` on every submission comes from the external
//! identity provider's session, not from form input.

use serde::{Deserialize, Serialize};
use seva_portal_domain::{RequestStatus, RequestType, StatusBucket};
use seva_portal_store::PendingAttachment;

/// An inline attachment carried with a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachmentUpload {
    /// Original file name as selected by the citizen.
    pub file_name: String,
    /// MIME content type reported by the client.
    pub content_type: String,
    /// File content.
    pub data: Vec<u8>,
}

impl AttachmentUpload {
    /// Converts the DTO into the store-layer upload shape.
    #[must_use]
    pub fn to_pending(&self) -> PendingAttachment {
        PendingAttachment {
            file_name: self.file_name.clone(),
            content_type: self.content_type.clone(),
            bytes: self.data.clone(),
        }
    }
}

/// API request to book an appointment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAppointmentRequest {
    /// The authenticated citizen's id.
    pub user_id: String,
    pub full_name: String,
    pub mobile: String,
    pub email: String,
    pub purpose: String,
    /// Requested date, `YYYY-MM-DD`.
    pub appointment_date: String,
    pub time_slot: String,
    /// Optional supporting document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment: Option<AttachmentUpload>,
}

/// API request to file a grievance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitGrievanceRequest {
    /// The authenticated citizen's id.
    pub user_id: String,
    pub full_name: String,
    pub mobile: String,
    pub email: String,
    pub category: String,
    pub description: String,
    /// Optional supporting document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment: Option<AttachmentUpload>,
}

/// API request for health support.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitHealthRequest {
    /// The authenticated citizen's id.
    pub user_id: String,
    pub full_name: String,
    pub mobile: String,
    pub email: String,
    pub assistance_type: String,
    pub description: String,
    /// Optional supporting document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment: Option<AttachmentUpload>,
}

/// API request for education support.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitEducationRequest {
    /// The authenticated citizen's id.
    pub user_id: String,
    pub student_name: String,
    pub mobile: String,
    pub email: String,
    /// Kind of support requested (scholarship, admission, ...).
    pub request_type: String,
    pub institution: String,
    pub justification: String,
    /// Optional supporting document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment: Option<AttachmentUpload>,
}

/// API request for a real estate consultancy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRealEstateRequest {
    /// The authenticated citizen's id.
    pub user_id: String,
    pub full_name: String,
    pub mobile: String,
    pub email: String,
    pub consultation_type: String,
    pub property_location: String,
    pub description: String,
    /// Optional supporting document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment: Option<AttachmentUpload>,
}

/// API request for an event invitation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitInvitationRequest {
    /// The authenticated citizen's id.
    pub user_id: String,
    pub organization_name: String,
    pub mobile: String,
    pub email: String,
    pub event_name: String,
    /// Event date, `YYYY-MM-DD`.
    pub event_date: String,
    pub venue: String,
    pub description: String,
    /// Optional supporting document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment: Option<AttachmentUpload>,
}

/// API response for a successful submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse {
    /// The store-assigned record id.
    pub id: String,
    pub request_type: RequestType,
    /// The stamped initial status.
    pub status: RequestStatus,
    /// The tracking reference stamped on grievances.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticket_number: Option<String>,
    /// A success message.
    pub message: String,
}

/// API request to change a request's status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdateRequest {
    /// The target status value.
    pub status: String,
}

/// API response for a successful status change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdateResponse {
    /// The record id.
    pub id: String,
    pub request_type: RequestType,
    /// The status now stored on the record.
    pub status: RequestStatus,
    /// A success message.
    pub message: String,
}

/// One row of a dashboard: the normalized shape shared by all six
/// request types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardEntry {
    /// The store-assigned record id.
    pub id: String,
    pub request_type: RequestType,
    pub status: RequestStatus,
    /// The coarse display bucket of the status.
    pub bucket: StatusBucket,
    /// Submission time, RFC 3339.
    pub submitted_at: String,
    /// Type-specific one-line summary.
    pub details: String,
    /// The ticket number when present, else the first 8 characters of
    /// the record id.
    pub reference: String,
}

/// A dashboard: entries newest first plus derived counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub entries: Vec<DashboardEntry>,
    /// Total number of requests.
    pub total: usize,
    /// Requests in the pending or active buckets.
    pub pending: usize,
    /// Requests in the resolved bucket.
    pub resolved: usize,
}

/// One record in a staff per-type listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffRecord {
    /// The store-assigned record id.
    pub id: String,
    /// Citizen-facing reference.
    pub reference: String,
    /// Name of the person or organization behind the request.
    pub applicant: String,
    pub mobile: String,
    pub email: String,
    /// Type-specific one-line summary.
    pub summary: String,
    pub status: RequestStatus,
    pub bucket: StatusBucket,
    /// Submission time, RFC 3339.
    pub submitted_at: String,
    /// Attached document URL, when one was uploaded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_url: Option<String>,
}

/// Staff per-type listing: the records plus the field names the summary
/// view renders, straight from the request type registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffListing {
    pub request_type: RequestType,
    /// Persisted field names rendered by the summary view, in order.
    pub display_fields: Vec<String>,
    pub records: Vec<StaffRecord>,
}
