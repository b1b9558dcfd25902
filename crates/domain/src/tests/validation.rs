// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    AppointmentDetails, AttachmentMeta, EducationDetails, GrievanceDetails, HealthDetails,
    InvitationDetails, RealEstateDetails, ValidationErrors, validate_appointment,
    validate_attachment, validate_education, validate_grievance, validate_health,
    validate_invitation, validate_real_estate,
};
use time::Date;
use time::macros::date;

const TODAY: Date = date!(2026-08-05);

fn valid_appointment() -> AppointmentDetails {
    AppointmentDetails {
        full_name: String::from("Asha Verma"),
        mobile: String::from("9876543210"),
        email: String::from("asha.verma@example.com"),
        purpose: String::from("Property tax records correction"),
        appointment_date: String::from("2026-08-10"),
        time_slot: String::from("10:00-10:30"),
    }
}

fn valid_grievance() -> GrievanceDetails {
    GrievanceDetails {
        full_name: String::from("Ravi Kumar"),
        mobile: String::from("9123456780"),
        email: String::from("ravi.kumar@example.com"),
        category: String::from("Sanitation"),
        description: String::from("Garbage has not been collected for two weeks"),
    }
}

fn valid_health() -> HealthDetails {
    HealthDetails {
        full_name: String::from("Meena Joshi"),
        mobile: String::from("9988776655"),
        email: String::from("meena.joshi@example.com"),
        assistance_type: String::from("Surgery cost support"),
        description: String::from("Need assistance with hospital charges"),
    }
}

fn valid_education() -> EducationDetails {
    EducationDetails {
        student_name: String::from("Kiran Patil"),
        mobile: String::from("9012345678"),
        email: String::from("kiran.patil@example.com"),
        request_kind: String::from("Scholarship"),
        institution: String::from("Government College of Engineering"),
        justification: String::from("Family income does not cover the tuition fees this year"),
    }
}

fn valid_real_estate() -> RealEstateDetails {
    RealEstateDetails {
        full_name: String::from("Sunil Shah"),
        mobile: String::from("9090909090"),
        email: String::from("sunil.shah@example.com"),
        consultation_type: String::from("Title verification"),
        property_location: String::from("Plot 14, Sector 9"),
        description: String::from("Need the title chain verified before purchase"),
    }
}

fn valid_invitation() -> InvitationDetails {
    InvitationDetails {
        organization_name: String::from("Rotary Club"),
        mobile: String::from("9871234560"),
        email: String::from("events@rotary.example.org"),
        event_name: String::from("Annual Health Camp"),
        event_date: String::from("2026-09-01"),
        venue: String::from("Community Hall, Ward 4"),
        description: String::from("Inauguration of the annual free health camp"),
    }
}

#[test]
fn test_valid_appointment_passes() {
    let result: Result<(), ValidationErrors> = validate_appointment(&valid_appointment(), TODAY);
    assert!(result.is_ok());
}

#[test]
fn test_appointment_rejects_short_phone() {
    let mut details: AppointmentDetails = valid_appointment();
    details.mobile = String::from("12345");

    let result: Result<(), ValidationErrors> = validate_appointment(&details, TODAY);
    let errors: ValidationErrors = result.unwrap_err();
    assert_eq!(errors.message("mobile"), Some("Must be exactly 10 digits"));
}

#[test]
fn test_appointment_rejects_non_digit_phone() {
    let mut details: AppointmentDetails = valid_appointment();
    details.mobile = String::from("98765abc10");

    let result: Result<(), ValidationErrors> = validate_appointment(&details, TODAY);
    assert!(result.unwrap_err().message("mobile").is_some());
}

#[test]
fn test_appointment_rejects_date_inside_notice_window() {
    let mut details: AppointmentDetails = valid_appointment();
    details.appointment_date = String::from("2026-08-06");

    let result: Result<(), ValidationErrors> = validate_appointment(&details, TODAY);
    assert!(result.unwrap_err().message("appointmentDate").is_some());
}

#[test]
fn test_appointment_accepts_date_exactly_two_days_out() {
    let mut details: AppointmentDetails = valid_appointment();
    details.appointment_date = String::from("2026-08-07");

    let result: Result<(), ValidationErrors> = validate_appointment(&details, TODAY);
    assert!(result.is_ok());
}

#[test]
fn test_appointment_rejects_past_date() {
    let mut details: AppointmentDetails = valid_appointment();
    details.appointment_date = String::from("2026-08-01");

    let result: Result<(), ValidationErrors> = validate_appointment(&details, TODAY);
    assert!(result.unwrap_err().message("appointmentDate").is_some());
}

#[test]
fn test_appointment_rejects_malformed_date() {
    let mut details: AppointmentDetails = valid_appointment();
    details.appointment_date = String::from("10/08/2026");

    let result: Result<(), ValidationErrors> = validate_appointment(&details, TODAY);
    assert_eq!(
        result.unwrap_err().message("appointmentDate"),
        Some("Must be a date in YYYY-MM-DD format")
    );
}

#[test]
fn test_appointment_collects_multiple_violations() {
    let details: AppointmentDetails = AppointmentDetails {
        full_name: String::from("A"),
        mobile: String::from("12"),
        email: String::from("not-an-email"),
        purpose: String::from("tax"),
        appointment_date: String::from("2026-08-20"),
        time_slot: String::new(),
    };

    let errors: ValidationErrors = validate_appointment(&details, TODAY).unwrap_err();
    assert_eq!(errors.len(), 5);
    assert!(errors.message("fullName").is_some());
    assert!(errors.message("mobile").is_some());
    assert!(errors.message("email").is_some());
    assert!(errors.message("purpose").is_some());
    assert!(errors.message("timeSlot").is_some());
}

#[test]
fn test_valid_grievance_passes() {
    assert!(validate_grievance(&valid_grievance()).is_ok());
}

#[test]
fn test_grievance_rejects_short_description() {
    let mut details: GrievanceDetails = valid_grievance();
    details.description = String::from("broken");

    let errors: ValidationErrors = validate_grievance(&details).unwrap_err();
    assert_eq!(
        errors.message("description"),
        Some("Must be at least 10 characters")
    );
}

#[test]
fn test_grievance_rejects_missing_category() {
    let mut details: GrievanceDetails = valid_grievance();
    details.category = String::from("   ");

    let errors: ValidationErrors = validate_grievance(&details).unwrap_err();
    assert_eq!(errors.message("category"), Some("Required"));
}

#[test]
fn test_valid_health_passes() {
    assert!(validate_health(&valid_health()).is_ok());
}

#[test]
fn test_health_rejects_invalid_email() {
    let mut details: HealthDetails = valid_health();
    details.email = String::from("meena@nodot");

    let errors: ValidationErrors = validate_health(&details).unwrap_err();
    assert!(errors.message("email").is_some());
}

#[test]
fn test_valid_education_passes() {
    assert!(validate_education(&valid_education()).is_ok());
}

#[test]
fn test_education_requires_twenty_character_justification() {
    let mut details: EducationDetails = valid_education();
    details.justification = String::from("need money for fees");

    let errors: ValidationErrors = validate_education(&details).unwrap_err();
    assert_eq!(
        errors.message("justification"),
        Some("Must be at least 20 characters")
    );
}

#[test]
fn test_valid_real_estate_passes() {
    assert!(validate_real_estate(&valid_real_estate()).is_ok());
}

#[test]
fn test_real_estate_rejects_one_character_name() {
    let mut details: RealEstateDetails = valid_real_estate();
    details.full_name = String::from("S");

    let errors: ValidationErrors = validate_real_estate(&details).unwrap_err();
    assert_eq!(
        errors.message("fullName"),
        Some("Must be at least 2 characters")
    );
}

#[test]
fn test_valid_invitation_passes() {
    assert!(validate_invitation(&valid_invitation(), TODAY).is_ok());
}

#[test]
fn test_invitation_accepts_event_today() {
    let mut details: InvitationDetails = valid_invitation();
    details.event_date = String::from("2026-08-05");

    assert!(validate_invitation(&details, TODAY).is_ok());
}

#[test]
fn test_invitation_rejects_past_event_date() {
    let mut details: InvitationDetails = valid_invitation();
    details.event_date = String::from("2026-08-04");

    let errors: ValidationErrors = validate_invitation(&details, TODAY).unwrap_err();
    assert_eq!(errors.message("eventDate"), Some("Must not be in the past"));
}

#[test]
fn test_attachment_accepts_small_pdf() {
    let meta: AttachmentMeta = AttachmentMeta {
        file_name: String::from("ration-card.pdf"),
        size_bytes: 120 * 1024,
    };
    assert!(validate_attachment(&meta).is_ok());
}

#[test]
fn test_attachment_extension_check_is_case_insensitive() {
    let meta: AttachmentMeta = AttachmentMeta {
        file_name: String::from("SCAN.JPG"),
        size_bytes: 1024,
    };
    assert!(validate_attachment(&meta).is_ok());
}

#[test]
fn test_attachment_rejects_disallowed_format() {
    let meta: AttachmentMeta = AttachmentMeta {
        file_name: String::from("virus.exe"),
        size_bytes: 1024,
    };
    let errors: ValidationErrors = validate_attachment(&meta).unwrap_err();
    assert!(errors.message("document").is_some());
}

#[test]
fn test_attachment_rejects_missing_extension() {
    let meta: AttachmentMeta = AttachmentMeta {
        file_name: String::from("document"),
        size_bytes: 1024,
    };
    assert!(validate_attachment(&meta).is_err());
}

#[test]
fn test_attachment_rejects_oversized_file() {
    let meta: AttachmentMeta = AttachmentMeta {
        file_name: String::from("album.png"),
        size_bytes: 6 * 1024 * 1024,
    };
    let errors: ValidationErrors = validate_attachment(&meta).unwrap_err();
    assert_eq!(errors.message("document"), Some("File must not exceed 5 MB"));
}

#[test]
fn test_attachment_accepts_file_at_exact_limit() {
    let meta: AttachmentMeta = AttachmentMeta {
        file_name: String::from("scan.jpeg"),
        size_bytes: 5 * 1024 * 1024,
    };
    assert!(validate_attachment(&meta).is_ok());
}

#[test]
fn test_validation_errors_display_joins_fields() {
    let mut errors: ValidationErrors = ValidationErrors::new();
    errors.insert("email", "Must be a valid email address");
    errors.insert("mobile", "Must be exactly 10 digits");

    assert_eq!(
        errors.to_string(),
        "email: Must be a valid email address; mobile: Must be exactly 10 digits"
    );
}
