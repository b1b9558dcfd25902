// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The request repository.
//!
//! Translates validated submissions into stored records and later reads,
//! updates, and deletes them. Collection names and status vocabularies
//! are resolved through the request type registry; nothing here restates
//! them.
//!
//! Failure policy: a failed write propagates to the caller and is also
//! recorded as a diagnostic event for operators. The repository never
//! retries; a caller retrying `create` after an ambiguous failure may
//! produce a duplicate record. Concurrent status updates are
//! last-write-wins; the store offers no conflict detection.

use crate::document::{DocumentRecord, DocumentStore};
use crate::error::{RepositoryError, StoreError};
use serde_json::{Map, Value};
use seva_portal_diagnostics::{DiagnosticEvent, DiagnosticSink};
use seva_portal_domain::{
    AppointmentDetails, EducationDetails, GrievanceDetails, HealthDetails, InvitationDetails,
    RealEstateDetails, RequestDetails, RequestId, RequestStatus, RequestType, ServiceRequest,
    TicketNumber, UserId, validate_assignment,
};
use std::str::FromStr;
use std::sync::Arc;
use time::OffsetDateTime;
use tracing::debug;

const FIELD_USER_ID: &str = "userId";
const FIELD_STATUS: &str = "status";
const FIELD_DOCUMENT_URL: &str = "documentUrl";
const FIELD_TICKET_NUMBER: &str = "ticketNumber";

/// The outcome of a successful `create`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedRequest {
    /// The store-assigned record id.
    pub id: RequestId,
    /// The tracking reference stamped on grievances.
    pub ticket_number: Option<TicketNumber>,
}

/// Create/read/update/delete operations over service-request records,
/// parameterized by the document store backend.
pub struct RequestRepository<S: DocumentStore> {
    store: Arc<S>,
    diagnostics: Arc<dyn DiagnosticSink>,
}

impl<S: DocumentStore> RequestRepository<S> {
    /// Creates a repository over a store backend and a diagnostic sink.
    pub fn new(store: Arc<S>, diagnostics: Arc<dyn DiagnosticSink>) -> Self {
        Self { store, diagnostics }
    }

    /// Writes a new request record.
    ///
    /// Stamps the submitting citizen's id, the type's initial status, and
    /// (for grievances) a freshly generated ticket number; the creation
    /// timestamp is assigned by the store, never by the client.
    ///
    /// # Errors
    ///
    /// Propagates any store failure after recording it for operators.
    /// Never retries.
    pub async fn create(
        &self,
        details: &RequestDetails,
        user_id: &UserId,
        document_url: Option<String>,
    ) -> Result<CreatedRequest, RepositoryError> {
        let request_type: RequestType = details.request_type();
        let collection: &str = request_type.collection_name();

        let mut fields: Map<String, Value> = details_to_fields(details)?;
        fields.insert(
            FIELD_USER_ID.to_string(),
            Value::String(user_id.value().to_string()),
        );
        fields.insert(
            FIELD_STATUS.to_string(),
            Value::String(request_type.initial_status().as_str().to_string()),
        );
        let ticket_number: Option<TicketNumber> = if request_type == RequestType::Grievance {
            let ticket: TicketNumber = TicketNumber::generate(OffsetDateTime::now_utc());
            fields.insert(
                FIELD_TICKET_NUMBER.to_string(),
                Value::String(ticket.value().to_string()),
            );
            Some(ticket)
        } else {
            None
        };
        if let Some(url) = document_url {
            fields.insert(FIELD_DOCUMENT_URL.to_string(), Value::String(url));
        }

        let record: DocumentRecord = self
            .store
            .insert(collection, fields)
            .await
            .map_err(|err| self.note_write_failure("create", collection, err))?;
        debug!(collection, id = %record.id, "Created request record");

        Ok(CreatedRequest {
            id: RequestId::new(&record.id),
            ticket_number,
        })
    }

    /// Lists one citizen's records of a type, newest first.
    ///
    /// # Errors
    ///
    /// Propagates store failures; access-policy rejections are also
    /// recorded for operators.
    pub async fn list_for_user(
        &self,
        request_type: RequestType,
        user_id: &UserId,
    ) -> Result<Vec<ServiceRequest>, RepositoryError> {
        let collection: &str = request_type.collection_name();
        let records: Vec<DocumentRecord> = self
            .store
            .query_by_field(
                collection,
                FIELD_USER_ID,
                &Value::String(user_id.value().to_string()),
            )
            .await
            .map_err(|err| self.note_read_failure("list_for_user", collection, err))?;
        records
            .into_iter()
            .map(|record| record_to_request(request_type, record))
            .collect()
    }

    /// Lists every record of a type, newest first. No page limit is
    /// applied; staff views receive the full collection.
    ///
    /// # Errors
    ///
    /// Propagates store failures; access-policy rejections are also
    /// recorded for operators.
    pub async fn list_all(
        &self,
        request_type: RequestType,
    ) -> Result<Vec<ServiceRequest>, RepositoryError> {
        let collection: &str = request_type.collection_name();
        let records: Vec<DocumentRecord> = self
            .store
            .list(collection)
            .await
            .map_err(|err| self.note_read_failure("list_all", collection, err))?;
        records
            .into_iter()
            .map(|record| record_to_request(request_type, record))
            .collect()
    }

    /// Overwrites the `status` field of a record, leaving every other
    /// field untouched.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTransition` (without touching the
    /// store) if the status is outside the type's allowed set; propagates
    /// store failures after recording them for operators.
    pub async fn update_status(
        &self,
        request_type: RequestType,
        id: &RequestId,
        new_status: RequestStatus,
    ) -> Result<(), RepositoryError> {
        validate_assignment(request_type, new_status)?;
        let collection: &str = request_type.collection_name();
        self.store
            .update_field(
                collection,
                id.value(),
                FIELD_STATUS,
                Value::String(new_status.as_str().to_string()),
            )
            .await
            .map_err(|err| self.note_write_failure("update_status", collection, err))?;
        debug!(collection, id = %id.value(), status = %new_status, "Updated request status");
        Ok(())
    }

    /// Removes a record permanently. Irreversible; requiring operator
    /// confirmation is the caller's responsibility.
    ///
    /// # Errors
    ///
    /// Propagates store failures after recording them for operators.
    pub async fn delete(
        &self,
        request_type: RequestType,
        id: &RequestId,
    ) -> Result<(), RepositoryError> {
        let collection: &str = request_type.collection_name();
        self.store
            .delete(collection, id.value())
            .await
            .map_err(|err| self.note_write_failure("delete", collection, err))?;
        debug!(collection, id = %id.value(), "Deleted request record");
        Ok(())
    }

    fn note_write_failure(
        &self,
        operation: &str,
        collection: &str,
        err: StoreError,
    ) -> RepositoryError {
        self.diagnostics.record(DiagnosticEvent::new(
            operation,
            collection,
            &err.to_string(),
        ));
        RepositoryError::Store(err)
    }

    fn note_read_failure(
        &self,
        operation: &str,
        collection: &str,
        err: StoreError,
    ) -> RepositoryError {
        // Reads are recorded only when the access policy rejected them;
        // those point at rule misconfigurations operators must review.
        if matches!(err, StoreError::PermissionDenied { .. }) {
            self.diagnostics.record(DiagnosticEvent::new(
                operation,
                collection,
                &err.to_string(),
            ));
        }
        RepositoryError::Store(err)
    }
}

fn details_to_fields(details: &RequestDetails) -> Result<Map<String, Value>, RepositoryError> {
    let value: Value = match details {
        RequestDetails::Appointment(details) => serde_json::to_value(details),
        RequestDetails::Grievance(details) => serde_json::to_value(details),
        RequestDetails::HealthSupport(details) => serde_json::to_value(details),
        RequestDetails::EducationSupport(details) => serde_json::to_value(details),
        RequestDetails::RealEstate(details) => serde_json::to_value(details),
        RequestDetails::Invitation(details) => serde_json::to_value(details),
    }
    .map_err(StoreError::from)?;
    match value {
        Value::Object(fields) => Ok(fields),
        _ => Err(RepositoryError::Store(StoreError::Serialization(
            String::from("request details did not serialize to an object"),
        ))),
    }
}

fn record_to_request(
    request_type: RequestType,
    record: DocumentRecord,
) -> Result<ServiceRequest, RepositoryError> {
    let malformed = |detail: &str| RepositoryError::MalformedRecord {
        collection: request_type.collection_name().to_string(),
        id: record.id.clone(),
        detail: detail.to_string(),
    };

    let user_id: UserId = record
        .str_field(FIELD_USER_ID)
        .map(UserId::new)
        .ok_or_else(|| malformed("missing userId"))?;
    let status: RequestStatus = record
        .str_field(FIELD_STATUS)
        .ok_or_else(|| malformed("missing status"))
        .and_then(|status| {
            RequestStatus::from_str(status).map_err(|err| malformed(&err.to_string()))
        })?;
    let document_url: Option<String> = record
        .str_field(FIELD_DOCUMENT_URL)
        .map(std::string::ToString::to_string);
    let ticket_number: Option<TicketNumber> = match record.str_field(FIELD_TICKET_NUMBER) {
        Some(ticket) => {
            Some(TicketNumber::parse(ticket).map_err(|err| malformed(&err.to_string()))?)
        }
        None => None,
    };

    let fields: Value = Value::Object(record.fields.clone());
    let details: RequestDetails = match request_type {
        RequestType::Appointment => serde_json::from_value::<AppointmentDetails>(fields)
            .map(RequestDetails::Appointment)
            .map_err(|err| malformed(&err.to_string()))?,
        RequestType::Grievance => serde_json::from_value::<GrievanceDetails>(fields)
            .map(RequestDetails::Grievance)
            .map_err(|err| malformed(&err.to_string()))?,
        RequestType::HealthSupport => serde_json::from_value::<HealthDetails>(fields)
            .map(RequestDetails::HealthSupport)
            .map_err(|err| malformed(&err.to_string()))?,
        RequestType::EducationSupport => serde_json::from_value::<EducationDetails>(fields)
            .map(RequestDetails::EducationSupport)
            .map_err(|err| malformed(&err.to_string()))?,
        RequestType::RealEstate => serde_json::from_value::<RealEstateDetails>(fields)
            .map(RequestDetails::RealEstate)
            .map_err(|err| malformed(&err.to_string()))?,
        RequestType::Invitation => serde_json::from_value::<InvitationDetails>(fields)
            .map(RequestDetails::Invitation)
            .map_err(|err| malformed(&err.to_string()))?,
    };

    Ok(ServiceRequest {
        id: RequestId::new(&record.id),
        request_type,
        user_id,
        status,
        submitted_at: record.created_at,
        document_url,
        ticket_number,
        details,
    })
}
