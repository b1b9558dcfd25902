// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-type submission validation.
//!
//! Every rule here is pure and runs before any network or storage
//! interaction; an invalid submission never produces a partial write.
//! Violations are field-scoped so the form can highlight the offending
//! input. Date rules take `today` as an argument to stay deterministic.

use crate::types::{
    AppointmentDetails, EducationDetails, GrievanceDetails, HealthDetails, InvitationDetails,
    RealEstateDetails,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use time::macros::format_description;
use time::{Date, Duration};

/// Maximum accepted attachment size, in bytes (5 MB).
pub const MAX_ATTACHMENT_BYTES: u64 = 5 * 1024 * 1024;

/// File extensions accepted for attached documents.
pub const ALLOWED_ATTACHMENT_EXTENSIONS: [&str; 6] = ["pdf", "jpg", "jpeg", "png", "doc", "docx"];

/// Fewest calendar days between booking and the requested appointment date.
const APPOINTMENT_MIN_NOTICE_DAYS: i64 = 2;

/// Field-scoped validation violations, keyed by the form field name.
///
/// Iteration order is the field name order, which keeps error rendering
/// and test assertions deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: BTreeMap<String, String>,
}

impl ValidationErrors {
    /// Creates an empty violation map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a violation against a field.
    pub fn insert(&mut self, field: &str, message: impl Into<String>) {
        self.errors.insert(field.to_string(), message.into());
    }

    /// Returns true if no violations were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of violated fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns the violation message for a field, if any.
    #[must_use]
    pub fn message(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// Iterates over `(field, message)` pairs in field-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors
            .iter()
            .map(|(field, message)| (field.as_str(), message.as_str()))
    }

    /// Absorbs every violation from `other`, overwriting entries for
    /// fields present in both.
    pub fn merge(&mut self, other: Self) {
        self.errors.extend(other.errors);
    }

    /// Converts an accumulated map into a validation result.
    ///
    /// # Errors
    ///
    /// Returns `self` if any violation was recorded.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first: bool = true;
        for (field, message) in &self.errors {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

/// Attachment metadata checked before any upload is attempted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentMeta {
    /// Original file name as selected by the citizen.
    pub file_name: String,
    /// File size in bytes.
    pub size_bytes: u64,
}

fn check_name(errors: &mut ValidationErrors, field: &str, value: &str) {
    if value.trim().chars().count() < 2 {
        errors.insert(field, "Must be at least 2 characters");
    }
}

fn check_mobile(errors: &mut ValidationErrors, field: &str, value: &str) {
    // Country code is handled outside this field.
    if value.len() != 10 || !value.bytes().all(|b| b.is_ascii_digit()) {
        errors.insert(field, "Must be exactly 10 digits");
    }
}

fn check_email(errors: &mut ValidationErrors, field: &str, value: &str) {
    if !is_valid_email(value) {
        errors.insert(field, "Must be a valid email address");
    }
}

fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

fn check_min_length(errors: &mut ValidationErrors, field: &str, value: &str, min: usize) {
    if value.trim().chars().count() < min {
        errors.insert(field, format!("Must be at least {min} characters"));
    }
}

fn check_required(errors: &mut ValidationErrors, field: &str, value: &str) {
    if value.trim().is_empty() {
        errors.insert(field, "Required");
    }
}

/// Parses an ISO 8601 calendar date, recording a violation on failure.
fn parse_date(errors: &mut ValidationErrors, field: &str, value: &str) -> Option<Date> {
    let format = format_description!("[year]-[month]-[day]");
    match Date::parse(value, &format) {
        Ok(date) => Some(date),
        Err(_) => {
            errors.insert(field, "Must be a date in YYYY-MM-DD format");
            None
        }
    }
}

/// Validates an appointment booking submission.
///
/// # Errors
///
/// Returns the field-scoped violations if any rule fails. The appointment
/// date must be at least 2 calendar days after `today`.
pub fn validate_appointment(
    details: &AppointmentDetails,
    today: Date,
) -> Result<(), ValidationErrors> {
    let mut errors: ValidationErrors = ValidationErrors::new();
    check_name(&mut errors, "fullName", &details.full_name);
    check_mobile(&mut errors, "mobile", &details.mobile);
    check_email(&mut errors, "email", &details.email);
    check_min_length(&mut errors, "purpose", &details.purpose, 10);
    check_required(&mut errors, "timeSlot", &details.time_slot);
    if let Some(date) = parse_date(&mut errors, "appointmentDate", &details.appointment_date) {
        let earliest: Option<Date> = today.checked_add(Duration::days(APPOINTMENT_MIN_NOTICE_DAYS));
        if earliest.is_none_or(|earliest| date < earliest) {
            errors.insert(
                "appointmentDate",
                format!("Must be at least {APPOINTMENT_MIN_NOTICE_DAYS} days from today"),
            );
        }
    }
    errors.into_result()
}

/// Validates a grievance submission.
///
/// # Errors
///
/// Returns the field-scoped violations if any rule fails.
pub fn validate_grievance(details: &GrievanceDetails) -> Result<(), ValidationErrors> {
    let mut errors: ValidationErrors = ValidationErrors::new();
    check_name(&mut errors, "fullName", &details.full_name);
    check_mobile(&mut errors, "mobile", &details.mobile);
    check_email(&mut errors, "email", &details.email);
    check_required(&mut errors, "category", &details.category);
    check_min_length(&mut errors, "description", &details.description, 10);
    errors.into_result()
}

/// Validates a health support submission.
///
/// # Errors
///
/// Returns the field-scoped violations if any rule fails.
pub fn validate_health(details: &HealthDetails) -> Result<(), ValidationErrors> {
    let mut errors: ValidationErrors = ValidationErrors::new();
    check_name(&mut errors, "fullName", &details.full_name);
    check_mobile(&mut errors, "mobile", &details.mobile);
    check_email(&mut errors, "email", &details.email);
    check_required(&mut errors, "assistanceType", &details.assistance_type);
    check_min_length(&mut errors, "description", &details.description, 10);
    errors.into_result()
}

/// Validates an education support submission.
///
/// # Errors
///
/// Returns the field-scoped violations if any rule fails. Justifications
/// need 20 characters to filter low-effort submissions.
pub fn validate_education(details: &EducationDetails) -> Result<(), ValidationErrors> {
    let mut errors: ValidationErrors = ValidationErrors::new();
    check_name(&mut errors, "studentName", &details.student_name);
    check_mobile(&mut errors, "mobile", &details.mobile);
    check_email(&mut errors, "email", &details.email);
    check_required(&mut errors, "requestType", &details.request_kind);
    check_name(&mut errors, "institution", &details.institution);
    check_min_length(&mut errors, "justification", &details.justification, 20);
    errors.into_result()
}

/// Validates a real estate consultancy submission.
///
/// # Errors
///
/// Returns the field-scoped violations if any rule fails.
pub fn validate_real_estate(details: &RealEstateDetails) -> Result<(), ValidationErrors> {
    let mut errors: ValidationErrors = ValidationErrors::new();
    check_name(&mut errors, "fullName", &details.full_name);
    check_mobile(&mut errors, "mobile", &details.mobile);
    check_email(&mut errors, "email", &details.email);
    check_required(&mut errors, "consultationType", &details.consultation_type);
    check_name(&mut errors, "propertyLocation", &details.property_location);
    check_min_length(&mut errors, "description", &details.description, 10);
    errors.into_result()
}

/// Validates an invitation request submission.
///
/// # Errors
///
/// Returns the field-scoped violations if any rule fails. The event date
/// must not be before `today`.
pub fn validate_invitation(
    details: &InvitationDetails,
    today: Date,
) -> Result<(), ValidationErrors> {
    let mut errors: ValidationErrors = ValidationErrors::new();
    check_name(&mut errors, "organizationName", &details.organization_name);
    check_mobile(&mut errors, "mobile", &details.mobile);
    check_email(&mut errors, "email", &details.email);
    check_name(&mut errors, "eventName", &details.event_name);
    check_name(&mut errors, "venue", &details.venue);
    check_min_length(&mut errors, "description", &details.description, 10);
    if let Some(date) = parse_date(&mut errors, "eventDate", &details.event_date) {
        if date < today {
            errors.insert("eventDate", "Must not be in the past");
        }
    }
    errors.into_result()
}

/// Validates attachment metadata before any upload is attempted.
///
/// # Errors
///
/// Returns a violation against the `document` field if the file format is
/// not allow-listed or the file exceeds the size limit.
pub fn validate_attachment(meta: &AttachmentMeta) -> Result<(), ValidationErrors> {
    let mut errors: ValidationErrors = ValidationErrors::new();
    let extension: Option<String> = meta
        .file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase());
    let allowed: bool = extension
        .as_deref()
        .is_some_and(|ext| ALLOWED_ATTACHMENT_EXTENSIONS.contains(&ext));
    if !allowed {
        errors.insert(
            "document",
            format!(
                "File format must be one of: {}",
                ALLOWED_ATTACHMENT_EXTENSIONS.join(", ")
            ),
        );
    }
    if meta.size_bytes > MAX_ATTACHMENT_BYTES {
        errors.insert("document", "File must not exceed 5 MB");
    }
    errors.into_result()
}
