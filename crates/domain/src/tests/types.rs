// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    AppointmentDetails, GrievanceDetails, RequestDetails, RequestId, RequestStatus, RequestType,
    ServiceRequest, TicketNumber, UserId,
};
use time::macros::datetime;

fn appointment_request() -> ServiceRequest {
    ServiceRequest {
        id: RequestId::new("a1b2c3d4e5f60718"),
        request_type: RequestType::Appointment,
        user_id: UserId::new("citizen-42"),
        status: RequestStatus::Pending,
        submitted_at: datetime!(2026-08-01 10:00:00 UTC),
        document_url: None,
        ticket_number: None,
        details: RequestDetails::Appointment(AppointmentDetails {
            full_name: String::from("Asha Verma"),
            mobile: String::from("9876543210"),
            email: String::from("asha.verma@example.com"),
            purpose: String::from("Property tax records correction"),
            appointment_date: String::from("2026-08-10"),
            time_slot: String::from("10:00-10:30"),
        }),
    }
}

fn grievance_request(ticket: Option<TicketNumber>) -> ServiceRequest {
    ServiceRequest {
        id: RequestId::new("f9e8d7c6b5a43210"),
        request_type: RequestType::Grievance,
        user_id: UserId::new("citizen-42"),
        status: RequestStatus::Submitted,
        submitted_at: datetime!(2026-08-02 09:00:00 UTC),
        document_url: None,
        ticket_number: ticket,
        details: RequestDetails::Grievance(GrievanceDetails {
            full_name: String::from("Asha Verma"),
            mobile: String::from("9876543210"),
            email: String::from("asha.verma@example.com"),
            category: String::from("Sanitation"),
            description: String::from("Garbage has not been collected for two weeks"),
        }),
    }
}

#[test]
fn test_user_id_empty_check() {
    assert!(UserId::new("").is_empty());
    assert!(!UserId::new("citizen-42").is_empty());
}

#[test]
fn test_request_id_short_ref_takes_first_eight_characters() {
    let id: RequestId = RequestId::new("a1b2c3d4e5f60718");
    assert_eq!(id.short_ref(), "a1b2c3d4");
}

#[test]
fn test_request_id_short_ref_of_short_id_is_whole_id() {
    let id: RequestId = RequestId::new("abc");
    assert_eq!(id.short_ref(), "abc");
}

#[test]
fn test_details_know_their_request_type() {
    let request: ServiceRequest = appointment_request();
    assert_eq!(request.details.request_type(), RequestType::Appointment);
}

#[test]
fn test_appointment_summary_is_purpose() {
    let request: ServiceRequest = appointment_request();
    assert_eq!(request.summary(), "Property tax records correction");
}

#[test]
fn test_grievance_summary_is_ticket_number() {
    let ticket: TicketNumber = TicketNumber::generate(datetime!(2026-08-02 09:00:00 UTC));
    let request: ServiceRequest = grievance_request(Some(ticket.clone()));
    assert_eq!(request.summary(), ticket.value());
}

#[test]
fn test_grievance_summary_falls_back_to_category() {
    let request: ServiceRequest = grievance_request(None);
    assert_eq!(request.summary(), "Sanitation");
}

#[test]
fn test_reference_prefers_ticket_number() {
    let ticket: TicketNumber = TicketNumber::generate(datetime!(2026-08-02 09:00:00 UTC));
    let request: ServiceRequest = grievance_request(Some(ticket.clone()));
    assert_eq!(request.reference(), ticket.value());
}

#[test]
fn test_reference_falls_back_to_short_id() {
    let request: ServiceRequest = appointment_request();
    assert_eq!(request.reference(), "a1b2c3d4");
}
