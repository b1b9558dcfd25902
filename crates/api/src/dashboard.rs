// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Dashboard aggregation.
//!
//! Merges up to six heterogeneously-shaped collections into one
//! normalized, newest-first list. The six per-type queries run
//! concurrently with no relative ordering; the merge step provides the
//! only ordering guarantee. If any query fails the whole aggregation is
//! reported as failed rather than showing a partial dashboard.

use crate::error::ApiError;
use crate::request_response::{Dashboard, DashboardEntry};
use futures::future::join_all;
use seva_portal_domain::{RequestType, ServiceRequest, StatusBucket, UserId};
use seva_portal_store::{DocumentStore, RepositoryError, RequestRepository};
use time::format_description::well_known::Rfc3339;

/// Builds one citizen's dashboard from their own requests across all six
/// types.
///
/// # Errors
///
/// Returns `ApiError::AggregationFailed` naming the request type whose
/// query failed; no partial dashboard is returned.
pub async fn citizen_dashboard<S: DocumentStore>(
    repository: &RequestRepository<S>,
    user_id: &UserId,
) -> Result<Dashboard, ApiError> {
    let results: Vec<Result<Vec<ServiceRequest>, RepositoryError>> = join_all(
        RequestType::ALL
            .iter()
            .map(|request_type| repository.list_for_user(*request_type, user_id)),
    )
    .await;
    build_dashboard(results)
}

/// Builds the staff dashboard from every request across all six types.
///
/// # Errors
///
/// Returns `ApiError::AggregationFailed` naming the request type whose
/// query failed; no partial dashboard is returned.
pub async fn staff_dashboard<S: DocumentStore>(
    repository: &RequestRepository<S>,
) -> Result<Dashboard, ApiError> {
    let results: Vec<Result<Vec<ServiceRequest>, RepositoryError>> = join_all(
        RequestType::ALL
            .iter()
            .map(|request_type| repository.list_all(*request_type)),
    )
    .await;
    build_dashboard(results)
}

fn build_dashboard(
    results: Vec<Result<Vec<ServiceRequest>, RepositoryError>>,
) -> Result<Dashboard, ApiError> {
    let mut merged: Vec<ServiceRequest> = Vec::new();
    for (request_type, result) in RequestType::ALL.iter().zip(results) {
        match result {
            Ok(requests) => merged.extend(requests),
            Err(err) => {
                return Err(ApiError::AggregationFailed {
                    request_type: *request_type,
                    message: err.to_string(),
                });
            }
        }
    }

    // Stable sort: same-timestamp entries keep their merge order.
    merged.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));

    let total: usize = merged.len();
    let pending: usize = merged
        .iter()
        .filter(|request| {
            matches!(
                request.status.bucket(),
                StatusBucket::Pending | StatusBucket::Active
            )
        })
        .count();
    let resolved: usize = merged
        .iter()
        .filter(|request| request.status.bucket() == StatusBucket::Resolved)
        .count();

    let entries: Vec<DashboardEntry> = merged
        .iter()
        .map(to_entry)
        .collect::<Result<Vec<DashboardEntry>, ApiError>>()?;

    Ok(Dashboard {
        entries,
        total,
        pending,
        resolved,
    })
}

fn to_entry(request: &ServiceRequest) -> Result<DashboardEntry, ApiError> {
    let submitted_at: String =
        request
            .submitted_at
            .format(&Rfc3339)
            .map_err(|err| ApiError::Internal {
                message: format!("failed to format submission time: {err}"),
            })?;
    Ok(DashboardEntry {
        id: request.id.value().to_string(),
        request_type: request.request_type,
        status: request.status,
        bucket: request.status.bucket(),
        submitted_at,
        details: request.summary().to_string(),
        reference: request.reference(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use seva_portal_diagnostics::BufferSink;
    use seva_portal_domain::{
        AppointmentDetails, GrievanceDetails, RequestDetails, RequestStatus,
    };
    use seva_portal_store::MemoryStore;
    use std::sync::Arc;

    fn repository() -> (Arc<MemoryStore>, RequestRepository<MemoryStore>) {
        let store: Arc<MemoryStore> = Arc::new(MemoryStore::new());
        let repository: RequestRepository<MemoryStore> =
            RequestRepository::new(Arc::clone(&store), Arc::new(BufferSink::new()));
        (store, repository)
    }

    fn citizen() -> UserId {
        UserId::new("citizen-42")
    }

    fn appointment() -> RequestDetails {
        RequestDetails::Appointment(AppointmentDetails {
            full_name: String::from("Asha Verma"),
            mobile: String::from("9876543210"),
            email: String::from("asha.verma@example.com"),
            purpose: String::from("Property tax records correction"),
            appointment_date: String::from("2026-08-10"),
            time_slot: String::from("10:00-10:30"),
        })
    }

    fn grievance() -> RequestDetails {
        RequestDetails::Grievance(GrievanceDetails {
            full_name: String::from("Asha Verma"),
            mobile: String::from("9876543210"),
            email: String::from("asha.verma@example.com"),
            category: String::from("Sanitation"),
            description: String::from("Garbage has not been collected for two weeks"),
        })
    }

    #[tokio::test]
    async fn test_empty_dashboard_has_zero_counts() {
        let (_store, repository) = repository();

        let dashboard: Dashboard = citizen_dashboard(&repository, &citizen()).await.unwrap();

        assert!(dashboard.entries.is_empty());
        assert_eq!(dashboard.total, 0);
        assert_eq!(dashboard.pending, 0);
        assert_eq!(dashboard.resolved, 0);
    }

    #[tokio::test]
    async fn test_mixed_types_merge_into_one_sorted_list() {
        let (_store, repository) = repository();
        repository
            .create(&appointment(), &citizen(), None)
            .await
            .unwrap();
        repository
            .create(&appointment(), &citizen(), None)
            .await
            .unwrap();
        let created = repository
            .create(&grievance(), &citizen(), None)
            .await
            .unwrap();

        let dashboard: Dashboard = citizen_dashboard(&repository, &citizen()).await.unwrap();

        assert_eq!(dashboard.entries.len(), 3);
        assert_eq!(dashboard.total, 3);
        for pair in dashboard.entries.windows(2) {
            assert!(pair[0].submitted_at >= pair[1].submitted_at);
        }
        let grievance_entry: &DashboardEntry = dashboard
            .entries
            .iter()
            .find(|entry| entry.request_type == RequestType::Grievance)
            .unwrap();
        assert_eq!(
            Some(grievance_entry.reference.as_str()),
            created.ticket_number.as_ref().map(|t| t.value())
        );
        let appointment_entry: &DashboardEntry = dashboard
            .entries
            .iter()
            .find(|entry| entry.request_type == RequestType::Appointment)
            .unwrap();
        assert_eq!(appointment_entry.reference.chars().count(), 8);
        assert_eq!(appointment_entry.details, "Property tax records correction");
    }

    #[tokio::test]
    async fn test_dashboard_is_scoped_to_the_citizen() {
        let (_store, repository) = repository();
        repository
            .create(&appointment(), &citizen(), None)
            .await
            .unwrap();
        repository
            .create(&appointment(), &UserId::new("citizen-99"), None)
            .await
            .unwrap();

        let dashboard: Dashboard = citizen_dashboard(&repository, &citizen()).await.unwrap();
        assert_eq!(dashboard.total, 1);
    }

    #[tokio::test]
    async fn test_staff_dashboard_sees_every_citizen() {
        let (_store, repository) = repository();
        repository
            .create(&appointment(), &citizen(), None)
            .await
            .unwrap();
        repository
            .create(&grievance(), &UserId::new("citizen-99"), None)
            .await
            .unwrap();

        let dashboard: Dashboard = staff_dashboard(&repository).await.unwrap();
        assert_eq!(dashboard.total, 2);
    }

    #[tokio::test]
    async fn test_counts_follow_the_bucket_mapping() {
        let (_store, repository) = repository();
        let first = repository
            .create(&appointment(), &citizen(), None)
            .await
            .unwrap();
        repository
            .create(&appointment(), &citizen(), None)
            .await
            .unwrap();
        repository
            .update_status(
                RequestType::Appointment,
                &first.id,
                RequestStatus::Confirmed,
            )
            .await
            .unwrap();

        let dashboard: Dashboard = citizen_dashboard(&repository, &citizen()).await.unwrap();

        // confirmed counts as resolved; pending stays pending.
        assert_eq!(dashboard.total, 2);
        assert_eq!(dashboard.pending, 1);
        assert_eq!(dashboard.resolved, 1);
    }

    #[tokio::test]
    async fn test_one_failing_source_fails_the_whole_aggregation() {
        let (store, repository) = repository();
        repository
            .create(&appointment(), &citizen(), None)
            .await
            .unwrap();
        store.deny_collection("grievances");

        let result = citizen_dashboard(&repository, &citizen()).await;

        assert!(matches!(
            result,
            Err(ApiError::AggregationFailed {
                request_type: RequestType::Grievance,
                ..
            })
        ));
    }
}
