// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{TestHarness, appointment_details, citizen, grievance_details, harness};
use crate::{CreatedRequest, DocumentStore, RepositoryError, StoreError};
use serde_json::{Map, Value};
use seva_portal_domain::{
    DomainError, RequestDetails, RequestStatus, RequestType, ServiceRequest, UserId,
};

#[tokio::test]
async fn test_create_appointment_stamps_initial_status() {
    let h: TestHarness = harness();

    let created: CreatedRequest = h
        .repository
        .create(&appointment_details(), &citizen(), None)
        .await
        .unwrap();
    assert!(created.ticket_number.is_none());

    let requests: Vec<ServiceRequest> = h
        .repository
        .list_for_user(RequestType::Appointment, &citizen())
        .await
        .unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].status, RequestStatus::Pending);
    assert_eq!(requests[0].id, created.id);
}

#[tokio::test]
async fn test_create_grievance_stamps_ticket_number() {
    let h: TestHarness = harness();

    let created: CreatedRequest = h
        .repository
        .create(&grievance_details(), &citizen(), None)
        .await
        .unwrap();

    let ticket = created.ticket_number.unwrap();
    assert!(ticket.value().starts_with("GRV-"));
    assert!(ticket.value()["GRV-".len()..].bytes().all(|b| b.is_ascii_digit()));

    let requests: Vec<ServiceRequest> = h
        .repository
        .list_for_user(RequestType::Grievance, &citizen())
        .await
        .unwrap();
    assert_eq!(requests[0].status, RequestStatus::Submitted);
    assert_eq!(requests[0].ticket_number.as_ref(), Some(&ticket));
}

#[tokio::test]
async fn test_round_trip_preserves_every_submitted_field() {
    let h: TestHarness = harness();
    let details: RequestDetails = appointment_details();

    h.repository
        .create(
            &details,
            &citizen(),
            Some(String::from("memblob://uploads/1-deadbeef-scan.pdf")),
        )
        .await
        .unwrap();

    let requests: Vec<ServiceRequest> = h
        .repository
        .list_for_user(RequestType::Appointment, &citizen())
        .await
        .unwrap();
    assert_eq!(requests.len(), 1);
    let request: &ServiceRequest = &requests[0];
    assert_eq!(request.details, details);
    assert_eq!(request.user_id, citizen());
    assert_eq!(
        request.document_url.as_deref(),
        Some("memblob://uploads/1-deadbeef-scan.pdf")
    );
}

#[tokio::test]
async fn test_list_for_user_returns_only_matching_records() {
    let h: TestHarness = harness();
    let other: UserId = UserId::new("citizen-99");

    h.repository
        .create(&appointment_details(), &citizen(), None)
        .await
        .unwrap();
    h.repository
        .create(&appointment_details(), &other, None)
        .await
        .unwrap();
    h.repository
        .create(&appointment_details(), &citizen(), None)
        .await
        .unwrap();

    let requests: Vec<ServiceRequest> = h
        .repository
        .list_for_user(RequestType::Appointment, &citizen())
        .await
        .unwrap();
    assert_eq!(requests.len(), 2);
    assert!(requests.iter().all(|request| request.user_id == citizen()));
}

#[tokio::test]
async fn test_listings_are_newest_first() {
    let h: TestHarness = harness();

    for _ in 0..3 {
        h.repository
            .create(&appointment_details(), &citizen(), None)
            .await
            .unwrap();
    }

    let requests: Vec<ServiceRequest> = h
        .repository
        .list_all(RequestType::Appointment)
        .await
        .unwrap();
    assert_eq!(requests.len(), 3);
    for pair in requests.windows(2) {
        assert!(pair[0].submitted_at >= pair[1].submitted_at);
    }
}

#[tokio::test]
async fn test_list_all_is_idempotent() {
    let h: TestHarness = harness();

    h.repository
        .create(&grievance_details(), &citizen(), None)
        .await
        .unwrap();
    h.repository
        .create(&grievance_details(), &citizen(), None)
        .await
        .unwrap();

    let first: Vec<ServiceRequest> = h.repository.list_all(RequestType::Grievance).await.unwrap();
    let second: Vec<ServiceRequest> = h.repository.list_all(RequestType::Grievance).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_update_status_with_allowed_status_succeeds() {
    let h: TestHarness = harness();
    let created: CreatedRequest = h
        .repository
        .create(&appointment_details(), &citizen(), None)
        .await
        .unwrap();

    h.repository
        .update_status(
            RequestType::Appointment,
            &created.id,
            RequestStatus::Confirmed,
        )
        .await
        .unwrap();

    let requests: Vec<ServiceRequest> = h
        .repository
        .list_all(RequestType::Appointment)
        .await
        .unwrap();
    assert_eq!(requests[0].status, RequestStatus::Confirmed);
}

#[tokio::test]
async fn test_update_status_outside_allowed_set_fails_and_leaves_record() {
    let h: TestHarness = harness();
    let created: CreatedRequest = h
        .repository
        .create(&grievance_details(), &citizen(), None)
        .await
        .unwrap();

    let result = h
        .repository
        .update_status(RequestType::Grievance, &created.id, RequestStatus::Approved)
        .await;
    assert!(matches!(
        result,
        Err(RepositoryError::Domain(DomainError::InvalidTransition {
            request_type: RequestType::Grievance,
            status: RequestStatus::Approved,
        }))
    ));

    let requests: Vec<ServiceRequest> = h.repository.list_all(RequestType::Grievance).await.unwrap();
    assert_eq!(requests[0].status, RequestStatus::Submitted);
}

#[tokio::test]
async fn test_update_status_only_touches_status_field() {
    let h: TestHarness = harness();
    let details: RequestDetails = grievance_details();
    let created: CreatedRequest = h
        .repository
        .create(&details, &citizen(), None)
        .await
        .unwrap();

    h.repository
        .update_status(
            RequestType::Grievance,
            &created.id,
            RequestStatus::UnderReview,
        )
        .await
        .unwrap();

    let requests: Vec<ServiceRequest> = h.repository.list_all(RequestType::Grievance).await.unwrap();
    assert_eq!(requests[0].details, details);
    assert_eq!(requests[0].ticket_number, created.ticket_number);
}

#[tokio::test]
async fn test_update_status_of_missing_record_is_not_found() {
    let h: TestHarness = harness();

    let result = h
        .repository
        .update_status(
            RequestType::Appointment,
            &seva_portal_domain::RequestId::new("does-not-exist"),
            RequestStatus::Confirmed,
        )
        .await;
    assert!(matches!(
        result,
        Err(RepositoryError::Store(StoreError::NotFound { .. }))
    ));
}

#[tokio::test]
async fn test_delete_removes_record_and_second_delete_fails() {
    let h: TestHarness = harness();
    let created: CreatedRequest = h
        .repository
        .create(&appointment_details(), &citizen(), None)
        .await
        .unwrap();

    h.repository
        .delete(RequestType::Appointment, &created.id)
        .await
        .unwrap();
    assert_eq!(h.store.document_count("appointments"), 0);

    let result = h.repository.delete(RequestType::Appointment, &created.id).await;
    assert!(matches!(
        result,
        Err(RepositoryError::Store(StoreError::NotFound { .. }))
    ));
}

#[tokio::test]
async fn test_denied_create_propagates_and_records_diagnostic() {
    let h: TestHarness = harness();
    h.store.deny_collection("grievances");

    let result = h
        .repository
        .create(&grievance_details(), &citizen(), None)
        .await;
    assert!(matches!(
        result,
        Err(RepositoryError::Store(StoreError::PermissionDenied { .. }))
    ));

    let events = h.diagnostics.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].operation, "create");
    assert_eq!(events[0].collection, "grievances");
}

#[tokio::test]
async fn test_denied_read_propagates_and_records_diagnostic() {
    let h: TestHarness = harness();
    h.store.deny_collection("appointments");

    let result = h
        .repository
        .list_for_user(RequestType::Appointment, &citizen())
        .await;
    assert!(matches!(
        result,
        Err(RepositoryError::Store(StoreError::PermissionDenied { .. }))
    ));
    assert_eq!(h.diagnostics.len(), 1);
}

#[tokio::test]
async fn test_successful_operations_record_no_diagnostics() {
    let h: TestHarness = harness();

    h.repository
        .create(&appointment_details(), &citizen(), None)
        .await
        .unwrap();
    h.repository
        .list_all(RequestType::Appointment)
        .await
        .unwrap();

    assert!(h.diagnostics.is_empty());
}

#[tokio::test]
async fn test_malformed_stored_record_surfaces_as_error() {
    let h: TestHarness = harness();

    // A record written without the envelope fields the portal stamps.
    let mut fields: Map<String, Value> = Map::new();
    fields.insert(String::from("garbage"), Value::Bool(true));
    h.store.insert("appointments", fields).await.unwrap();

    let result = h.repository.list_all(RequestType::Appointment).await;
    assert!(matches!(
        result,
        Err(RepositoryError::MalformedRecord { .. })
    ));
}
