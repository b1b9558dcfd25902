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

//! API boundary layer for the Seva citizen-services portal.
//!
//! This crate is what the UI event handlers call: per-type submission
//! flows (validate, upload the attachment, create the record, in that
//! order), the dashboard aggregation for citizens and staff, and the
//! staff triage operations. Domain and store errors never leak through
//! unchanged; every failure is translated into [`ApiError`].

mod dashboard;
mod error;
mod request_response;
mod submissions;
mod triage;

pub use dashboard::{citizen_dashboard, staff_dashboard};
pub use error::{ApiError, translate_repository_error};
pub use request_response::{
    AttachmentUpload, Dashboard, DashboardEntry, StaffListing, StaffRecord, StatusUpdateRequest,
    StatusUpdateResponse, SubmitAppointmentRequest, SubmitEducationRequest, SubmitGrievanceRequest,
    SubmitHealthRequest, SubmitInvitationRequest, SubmitRealEstateRequest, SubmitResponse,
};
pub use submissions::{
    submit_appointment, submit_education, submit_grievance, submit_health, submit_invitation,
    submit_real_estate,
};
pub use triage::{change_status, remove_request, staff_listing};
