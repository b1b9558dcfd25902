// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

mod repository_tests;

use crate::{MemoryStore, RequestRepository};
use seva_portal_diagnostics::BufferSink;
use seva_portal_domain::{
    AppointmentDetails, GrievanceDetails, RequestDetails, UserId,
};
use std::sync::Arc;

pub(crate) struct TestHarness {
    pub store: Arc<MemoryStore>,
    pub diagnostics: Arc<BufferSink>,
    pub repository: RequestRepository<MemoryStore>,
}

pub(crate) fn harness() -> TestHarness {
    let store: Arc<MemoryStore> = Arc::new(MemoryStore::new());
    let diagnostics: Arc<BufferSink> = Arc::new(BufferSink::new());
    let repository: RequestRepository<MemoryStore> =
        RequestRepository::new(Arc::clone(&store), diagnostics.clone());
    TestHarness {
        store,
        diagnostics,
        repository,
    }
}

pub(crate) fn citizen() -> UserId {
    UserId::new("citizen-42")
}

pub(crate) fn appointment_details() -> RequestDetails {
    RequestDetails::Appointment(AppointmentDetails {
        full_name: String::from("Asha Verma"),
        mobile: String::from("9876543210"),
        email: String::from("asha.verma@example.com"),
        purpose: String::from("Property tax records correction"),
        appointment_date: String::from("2026-08-10"),
        time_slot: String::from("10:00-10:30"),
    })
}

pub(crate) fn grievance_details() -> RequestDetails {
    RequestDetails::Grievance(GrievanceDetails {
        full_name: String::from("Ravi Kumar"),
        mobile: String::from("9123456780"),
        email: String::from("ravi.kumar@example.com"),
        category: String::from("Sanitation"),
        description: String::from("Garbage has not been collected for two weeks"),
    })
}
