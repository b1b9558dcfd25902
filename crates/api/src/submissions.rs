// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-type submission flows.
//!
//! Every flow runs the same three steps in order: validate the whole
//! submission (form fields plus attachment metadata, no I/O), upload the
//! attachment if one was selected, then create the record. A validation
//! failure stops before any network call; an upload failure stops before
//! any record write.

use crate::error::{ApiError, translate_repository_error};
use crate::request_response::{
    AttachmentUpload, SubmitAppointmentRequest, SubmitEducationRequest, SubmitGrievanceRequest,
    SubmitHealthRequest, SubmitInvitationRequest, SubmitRealEstateRequest, SubmitResponse,
};
use seva_portal_domain::{
    AppointmentDetails, EducationDetails, GrievanceDetails, HealthDetails, InvitationDetails,
    RealEstateDetails, RequestDetails, UserId, ValidationErrors, validate_appointment,
    validate_attachment, validate_education, validate_grievance, validate_health,
    validate_invitation, validate_real_estate,
};
use seva_portal_store::{
    BlobStore, CreatedRequest, DocumentStore, RequestRepository, upload_attachment,
};
use time::Date;
use tracing::info;

/// Books an appointment.
///
/// # Errors
///
/// Returns `ApiError::Validation` (before any I/O), `UploadFailure`
/// (before any record write), or a translated repository error.
pub async fn submit_appointment<S: DocumentStore, B: BlobStore>(
    repository: &RequestRepository<S>,
    blobs: &B,
    request: SubmitAppointmentRequest,
    today: Date,
) -> Result<SubmitResponse, ApiError> {
    let details: RequestDetails = RequestDetails::Appointment(AppointmentDetails {
        full_name: request.full_name,
        mobile: request.mobile,
        email: request.email,
        purpose: request.purpose,
        appointment_date: request.appointment_date,
        time_slot: request.time_slot,
    });
    let errors: ValidationErrors = collect_errors(&details, today);
    finalize_submission(
        repository,
        blobs,
        details,
        &request.user_id,
        request.attachment,
        errors,
    )
    .await
}

/// Files a grievance. The response carries the stamped `GRV-` tracking
/// reference.
///
/// # Errors
///
/// Returns `ApiError::Validation` (before any I/O), `UploadFailure`
/// (before any record write), or a translated repository error.
pub async fn submit_grievance<S: DocumentStore, B: BlobStore>(
    repository: &RequestRepository<S>,
    blobs: &B,
    request: SubmitGrievanceRequest,
    today: Date,
) -> Result<SubmitResponse, ApiError> {
    let details: RequestDetails = RequestDetails::Grievance(GrievanceDetails {
        full_name: request.full_name,
        mobile: request.mobile,
        email: request.email,
        category: request.category,
        description: request.description,
    });
    let errors: ValidationErrors = collect_errors(&details, today);
    finalize_submission(
        repository,
        blobs,
        details,
        &request.user_id,
        request.attachment,
        errors,
    )
    .await
}

/// Requests health support.
///
/// # Errors
///
/// Returns `ApiError::Validation` (before any I/O), `UploadFailure`
/// (before any record write), or a translated repository error.
pub async fn submit_health<S: DocumentStore, B: BlobStore>(
    repository: &RequestRepository<S>,
    blobs: &B,
    request: SubmitHealthRequest,
    today: Date,
) -> Result<SubmitResponse, ApiError> {
    let details: RequestDetails = RequestDetails::HealthSupport(HealthDetails {
        full_name: request.full_name,
        mobile: request.mobile,
        email: request.email,
        assistance_type: request.assistance_type,
        description: request.description,
    });
    let errors: ValidationErrors = collect_errors(&details, today);
    finalize_submission(
        repository,
        blobs,
        details,
        &request.user_id,
        request.attachment,
        errors,
    )
    .await
}

/// Requests education support.
///
/// # Errors
///
/// Returns `ApiError::Validation` (before any I/O), `UploadFailure`
/// (before any record write), or a translated repository error.
pub async fn submit_education<S: DocumentStore, B: BlobStore>(
    repository: &RequestRepository<S>,
    blobs: &B,
    request: SubmitEducationRequest,
    today: Date,
) -> Result<SubmitResponse, ApiError> {
    let details: RequestDetails = RequestDetails::EducationSupport(EducationDetails {
        student_name: request.student_name,
        mobile: request.mobile,
        email: request.email,
        request_kind: request.request_type,
        institution: request.institution,
        justification: request.justification,
    });
    let errors: ValidationErrors = collect_errors(&details, today);
    finalize_submission(
        repository,
        blobs,
        details,
        &request.user_id,
        request.attachment,
        errors,
    )
    .await
}

/// Requests a real estate consultancy.
///
/// # Errors
///
/// Returns `ApiError::Validation` (before any I/O), `UploadFailure`
/// (before any record write), or a translated repository error.
pub async fn submit_real_estate<S: DocumentStore, B: BlobStore>(
    repository: &RequestRepository<S>,
    blobs: &B,
    request: SubmitRealEstateRequest,
    today: Date,
) -> Result<SubmitResponse, ApiError> {
    let details: RequestDetails = RequestDetails::RealEstate(RealEstateDetails {
        full_name: request.full_name,
        mobile: request.mobile,
        email: request.email,
        consultation_type: request.consultation_type,
        property_location: request.property_location,
        description: request.description,
    });
    let errors: ValidationErrors = collect_errors(&details, today);
    finalize_submission(
        repository,
        blobs,
        details,
        &request.user_id,
        request.attachment,
        errors,
    )
    .await
}

/// Requests an event invitation.
///
/// # Errors
///
/// Returns `ApiError::Validation` (before any I/O), `UploadFailure`
/// (before any record write), or a translated repository error.
pub async fn submit_invitation<S: DocumentStore, B: BlobStore>(
    repository: &RequestRepository<S>,
    blobs: &B,
    request: SubmitInvitationRequest,
    today: Date,
) -> Result<SubmitResponse, ApiError> {
    let details: RequestDetails = RequestDetails::Invitation(InvitationDetails {
        organization_name: request.organization_name,
        mobile: request.mobile,
        email: request.email,
        event_name: request.event_name,
        event_date: request.event_date,
        venue: request.venue,
        description: request.description,
    });
    let errors: ValidationErrors = collect_errors(&details, today);
    finalize_submission(
        repository,
        blobs,
        details,
        &request.user_id,
        request.attachment,
        errors,
    )
    .await
}

/// Runs the type-specific field rules.
fn collect_errors(details: &RequestDetails, today: Date) -> ValidationErrors {
    let result: Result<(), ValidationErrors> = match details {
        RequestDetails::Appointment(details) => validate_appointment(details, today),
        RequestDetails::Grievance(details) => validate_grievance(details),
        RequestDetails::HealthSupport(details) => validate_health(details),
        RequestDetails::EducationSupport(details) => validate_education(details),
        RequestDetails::RealEstate(details) => validate_real_estate(details),
        RequestDetails::Invitation(details) => validate_invitation(details, today),
    };
    result.err().unwrap_or_default()
}

/// The shared tail of every submission flow: session check, attachment
/// validation, upload, create, response.
async fn finalize_submission<S: DocumentStore, B: BlobStore>(
    repository: &RequestRepository<S>,
    blobs: &B,
    details: RequestDetails,
    user_id: &str,
    attachment: Option<AttachmentUpload>,
    mut errors: ValidationErrors,
) -> Result<SubmitResponse, ApiError> {
    let user_id: UserId = UserId::new(user_id);
    if user_id.is_empty() {
        errors.insert("userId", "No authenticated session");
    }
    if let Some(upload) = &attachment {
        if let Err(attachment_errors) = validate_attachment(&upload.to_pending().meta()) {
            errors.merge(attachment_errors);
        }
    }
    if let Err(errors) = errors.into_result() {
        return Err(ApiError::Validation(errors));
    }

    // Upload before create: a record must never reference a URL the blob
    // store did not return.
    let document_url: Option<String> = match &attachment {
        Some(upload) => Some(
            upload_attachment(blobs, &upload.to_pending())
                .await
                .map_err(|err| ApiError::UploadFailure {
                    message: err.to_string(),
                })?,
        ),
        None => None,
    };

    let created: CreatedRequest = repository
        .create(&details, &user_id, document_url)
        .await
        .map_err(translate_repository_error)?;

    let request_type = details.request_type();
    info!(
        request_type = %request_type,
        id = %created.id.value(),
        "Accepted citizen submission"
    );

    let message: String = created.ticket_number.as_ref().map_or_else(
        || format!("{} submitted successfully", request_type.display_name()),
        |ticket| {
            format!(
                "{} submitted successfully; your tracking reference is {}",
                request_type.display_name(),
                ticket.value()
            )
        },
    );

    Ok(SubmitResponse {
        id: created.id.value().to_string(),
        request_type,
        status: request_type.initial_status(),
        ticket_number: created
            .ticket_number
            .as_ref()
            .map(|ticket| ticket.value().to_string()),
        message,
    })
}
