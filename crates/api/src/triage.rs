// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Staff triage operations: per-type listings, status changes, and
//! deletion. The observed admin gate sits at the UI boundary; these
//! functions assume the caller is staff.

use crate::error::{ApiError, translate_repository_error};
use crate::request_response::{StaffListing, StaffRecord, StatusUpdateResponse};
use seva_portal_domain::{RequestId, RequestStatus, RequestType, ServiceRequest};
use seva_portal_store::{DocumentStore, RequestRepository};
use std::str::FromStr;
use time::format_description::well_known::Rfc3339;
use tracing::info;

/// Lists every request of a type for the staff summary view, together
/// with the field names the view renders.
///
/// # Errors
///
/// Returns a translated repository error if the listing fails.
pub async fn staff_listing<S: DocumentStore>(
    repository: &RequestRepository<S>,
    request_type: RequestType,
) -> Result<StaffListing, ApiError> {
    let requests: Vec<ServiceRequest> = repository
        .list_all(request_type)
        .await
        .map_err(translate_repository_error)?;
    let records: Vec<StaffRecord> = requests
        .iter()
        .map(to_staff_record)
        .collect::<Result<Vec<StaffRecord>, ApiError>>()?;
    Ok(StaffListing {
        request_type,
        display_fields: request_type
            .display_fields()
            .iter()
            .map(|field| (*field).to_string())
            .collect(),
        records,
    })
}

/// Changes the status of a request.
///
/// An unknown status string and a status outside the type's allowed set
/// both fail the same way: nothing is written and the caller is told the
/// transition is invalid.
///
/// # Errors
///
/// Returns `ApiError::InvalidTransition` or a translated repository
/// error.
pub async fn change_status<S: DocumentStore>(
    repository: &RequestRepository<S>,
    request_type: RequestType,
    id: &RequestId,
    status: &str,
) -> Result<StatusUpdateResponse, ApiError> {
    let new_status: RequestStatus =
        RequestStatus::from_str(status).map_err(|_| ApiError::InvalidTransition {
            request_type,
            status: status.to_string(),
        })?;
    repository
        .update_status(request_type, id, new_status)
        .await
        .map_err(translate_repository_error)?;
    info!(
        request_type = %request_type,
        id = %id.value(),
        status = %new_status,
        "Staff changed request status"
    );
    Ok(StatusUpdateResponse {
        id: id.value().to_string(),
        request_type,
        status: new_status,
        message: format!("Status changed to '{new_status}'"),
    })
}

/// Permanently deletes a request. The UI is responsible for requiring
/// operator confirmation before calling this.
///
/// # Errors
///
/// Returns a translated repository error; a missing record surfaces as
/// `ApiError::NotFound` ("already removed").
pub async fn remove_request<S: DocumentStore>(
    repository: &RequestRepository<S>,
    request_type: RequestType,
    id: &RequestId,
) -> Result<(), ApiError> {
    repository
        .delete(request_type, id)
        .await
        .map_err(translate_repository_error)?;
    info!(
        request_type = %request_type,
        id = %id.value(),
        "Staff deleted request"
    );
    Ok(())
}

fn to_staff_record(request: &ServiceRequest) -> Result<StaffRecord, ApiError> {
    let submitted_at: String =
        request
            .submitted_at
            .format(&Rfc3339)
            .map_err(|err| ApiError::Internal {
                message: format!("failed to format submission time: {err}"),
            })?;
    Ok(StaffRecord {
        id: request.id.value().to_string(),
        reference: request.reference(),
        applicant: request.details.applicant_name().to_string(),
        mobile: request.details.mobile().clone(),
        email: request.details.email().clone(),
        summary: request.summary().to_string(),
        status: request.status,
        bucket: request.status.bucket(),
        submitted_at,
        document_url: request.document_url.clone(),
    })
}
