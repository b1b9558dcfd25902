// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use seva_portal_api::{
    ApiError, Dashboard, StaffListing, StatusUpdateRequest, StatusUpdateResponse,
    SubmitAppointmentRequest, SubmitEducationRequest, SubmitGrievanceRequest, SubmitHealthRequest,
    SubmitInvitationRequest, SubmitRealEstateRequest, SubmitResponse, change_status,
    citizen_dashboard, remove_request, staff_dashboard, staff_listing, submit_appointment,
    submit_education, submit_grievance, submit_health, submit_invitation, submit_real_estate,
};
use seva_portal_diagnostics::TracingSink;
use seva_portal_domain::{RequestId, RequestType, UserId, ValidationErrors};
use seva_portal_store::{MemoryBlobStore, MemoryStore, RequestRepository};
use std::sync::Arc;
use time::{Date, OffsetDateTime};
use tracing::{error, info};

/// Seva Portal Server - HTTP server for the citizen-services portal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

/// Application state shared across handlers.
///
/// The store backends here are the in-memory reference implementations;
/// a deployment against the managed platform provides its client behind
/// the same traits.
#[derive(Clone)]
struct AppState {
    /// The request repository over the document store.
    repository: Arc<RequestRepository<MemoryStore>>,
    /// The blob store holding uploaded attachments.
    blobs: Arc<MemoryBlobStore>,
}

/// Query parameters for the citizen dashboard.
#[derive(Debug, Deserialize)]
struct DashboardQuery {
    /// The authenticated citizen's id.
    user_id: String,
}

/// API response for delete operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct DeleteResponse {
    /// Success indicator.
    success: bool,
    /// A success message.
    message: String,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
    /// Field-scoped validation violations, when applicable.
    #[serde(skip_serializing_if = "Option::is_none")]
    fields: Option<ValidationErrors>,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
    /// Field-scoped validation violations, when applicable.
    fields: Option<ValidationErrors>,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
            fields: self.fields,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Validation(ref errors) => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
                fields: Some(errors.clone()),
            },
            ApiError::InvalidTransition { .. } => Self {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                message: err.to_string(),
                fields: None,
            },
            ApiError::PermissionDenied { .. } => Self {
                status: StatusCode::FORBIDDEN,
                message: err.to_string(),
                fields: None,
            },
            ApiError::NotFound { .. } | ApiError::UnknownRequestType { .. } => Self {
                status: StatusCode::NOT_FOUND,
                message: err.to_string(),
                fields: None,
            },
            ApiError::UploadFailure { .. } | ApiError::AggregationFailed { .. } => Self {
                status: StatusCode::BAD_GATEWAY,
                message: err.to_string(),
                fields: None,
            },
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: err.to_string(),
                    fields: None,
                }
            }
        }
    }
}

/// Resolves a path segment (a collection name) to a request type.
fn parse_collection(collection: &str) -> Result<RequestType, HttpError> {
    RequestType::from_collection(collection).map_err(|err| HttpError {
        status: StatusCode::NOT_FOUND,
        message: err.to_string(),
        fields: None,
    })
}

/// The calendar date submissions are validated against.
fn today() -> Date {
    OffsetDateTime::now_utc().date()
}

/// Handler for POST `/requests/appointments`.
async fn handle_submit_appointment(
    AxumState(state): AxumState<AppState>,
    Json(req): Json<SubmitAppointmentRequest>,
) -> Result<Json<SubmitResponse>, HttpError> {
    info!(user_id = %req.user_id, "Handling appointment submission");
    let response: SubmitResponse =
        submit_appointment(&state.repository, state.blobs.as_ref(), req, today()).await?;
    Ok(Json(response))
}

/// Handler for POST `/requests/grievances`.
async fn handle_submit_grievance(
    AxumState(state): AxumState<AppState>,
    Json(req): Json<SubmitGrievanceRequest>,
) -> Result<Json<SubmitResponse>, HttpError> {
    info!(user_id = %req.user_id, "Handling grievance submission");
    let response: SubmitResponse =
        submit_grievance(&state.repository, state.blobs.as_ref(), req, today()).await?;
    Ok(Json(response))
}

/// Handler for POST `/requests/health-requests`.
async fn handle_submit_health(
    AxumState(state): AxumState<AppState>,
    Json(req): Json<SubmitHealthRequest>,
) -> Result<Json<SubmitResponse>, HttpError> {
    info!(user_id = %req.user_id, "Handling health support submission");
    let response: SubmitResponse =
        submit_health(&state.repository, state.blobs.as_ref(), req, today()).await?;
    Ok(Json(response))
}

/// Handler for POST `/requests/education-requests`.
async fn handle_submit_education(
    AxumState(state): AxumState<AppState>,
    Json(req): Json<SubmitEducationRequest>,
) -> Result<Json<SubmitResponse>, HttpError> {
    info!(user_id = %req.user_id, "Handling education support submission");
    let response: SubmitResponse =
        submit_education(&state.repository, state.blobs.as_ref(), req, today()).await?;
    Ok(Json(response))
}

/// Handler for POST `/requests/real-estate-requests`.
async fn handle_submit_real_estate(
    AxumState(state): AxumState<AppState>,
    Json(req): Json<SubmitRealEstateRequest>,
) -> Result<Json<SubmitResponse>, HttpError> {
    info!(user_id = %req.user_id, "Handling real estate consultancy submission");
    let response: SubmitResponse =
        submit_real_estate(&state.repository, state.blobs.as_ref(), req, today()).await?;
    Ok(Json(response))
}

/// Handler for POST `/requests/invitation-requests`.
async fn handle_submit_invitation(
    AxumState(state): AxumState<AppState>,
    Json(req): Json<SubmitInvitationRequest>,
) -> Result<Json<SubmitResponse>, HttpError> {
    info!(user_id = %req.user_id, "Handling invitation submission");
    let response: SubmitResponse =
        submit_invitation(&state.repository, state.blobs.as_ref(), req, today()).await?;
    Ok(Json(response))
}

/// Handler for GET `/dashboard`.
///
/// Returns the citizen's own requests across all six types, newest
/// first, with derived counts.
async fn handle_citizen_dashboard(
    AxumState(state): AxumState<AppState>,
    Query(params): Query<DashboardQuery>,
) -> Result<Json<Dashboard>, HttpError> {
    info!(user_id = %params.user_id, "Handling citizen dashboard request");
    let user_id: UserId = UserId::new(&params.user_id);
    let dashboard: Dashboard = citizen_dashboard(&state.repository, &user_id).await?;
    Ok(Json(dashboard))
}

/// Handler for GET `/admin/dashboard`.
///
/// Returns every request across all six types, newest first.
async fn handle_staff_dashboard(
    AxumState(state): AxumState<AppState>,
) -> Result<Json<Dashboard>, HttpError> {
    info!("Handling staff dashboard request");
    let dashboard: Dashboard = staff_dashboard(&state.repository).await?;
    Ok(Json(dashboard))
}

/// Handler for GET `/admin/requests/{collection}`.
async fn handle_staff_listing(
    AxumState(state): AxumState<AppState>,
    Path(collection): Path<String>,
) -> Result<Json<StaffListing>, HttpError> {
    info!(collection = %collection, "Handling staff listing request");
    let request_type: RequestType = parse_collection(&collection)?;
    let listing: StaffListing = staff_listing(&state.repository, request_type).await?;
    Ok(Json(listing))
}

/// Handler for POST `/admin/requests/{collection}/{id}/status`.
async fn handle_change_status(
    AxumState(state): AxumState<AppState>,
    Path((collection, id)): Path<(String, String)>,
    Json(req): Json<StatusUpdateRequest>,
) -> Result<Json<StatusUpdateResponse>, HttpError> {
    info!(collection = %collection, id = %id, status = %req.status, "Handling status change");
    let request_type: RequestType = parse_collection(&collection)?;
    let response: StatusUpdateResponse = change_status(
        &state.repository,
        request_type,
        &RequestId::new(&id),
        &req.status,
    )
    .await?;
    Ok(Json(response))
}

/// Handler for DELETE `/admin/requests/{collection}/{id}`.
///
/// Irreversible; the UI requires operator confirmation before calling.
async fn handle_delete_request(
    AxumState(state): AxumState<AppState>,
    Path((collection, id)): Path<(String, String)>,
) -> Result<Json<DeleteResponse>, HttpError> {
    info!(collection = %collection, id = %id, "Handling request deletion");
    let request_type: RequestType = parse_collection(&collection)?;
    remove_request(&state.repository, request_type, &RequestId::new(&id)).await?;
    Ok(Json(DeleteResponse {
        success: true,
        message: format!("Request {id} deleted"),
    }))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/requests/appointments", post(handle_submit_appointment))
        .route("/requests/grievances", post(handle_submit_grievance))
        .route("/requests/health-requests", post(handle_submit_health))
        .route(
            "/requests/education-requests",
            post(handle_submit_education),
        )
        .route(
            "/requests/real-estate-requests",
            post(handle_submit_real_estate),
        )
        .route(
            "/requests/invitation-requests",
            post(handle_submit_invitation),
        )
        .route("/dashboard", get(handle_citizen_dashboard))
        .route("/admin/dashboard", get(handle_staff_dashboard))
        .route("/admin/requests/{collection}", get(handle_staff_listing))
        .route(
            "/admin/requests/{collection}/{id}/status",
            post(handle_change_status),
        )
        .route(
            "/admin/requests/{collection}/{id}",
            delete(handle_delete_request),
        )
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Seva Portal Server");

    let repository: RequestRepository<MemoryStore> = RequestRepository::new(
        Arc::new(MemoryStore::new()),
        Arc::new(TracingSink::new()),
    );
    let app_state: AppState = AppState {
        repository: Arc::new(repository),
        blobs: Arc::new(MemoryBlobStore::new()),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
