// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Grievance tracking ticket numbers.
//!
//! A ticket number is the citizen-facing tracking reference, distinct from
//! the store-assigned record id. The numeric suffix is derived from the
//! creation time at millisecond resolution; uniqueness is probabilistic,
//! not store-enforced.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// A grievance tracking reference, `GRV-` followed by digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TicketNumber {
    value: String,
}

impl TicketNumber {
    /// The fixed prefix shared by every ticket number.
    pub const PREFIX: &'static str = "GRV-";

    /// Generates a ticket number from a creation instant.
    ///
    /// The suffix is the Unix epoch millisecond count of `at`, which makes
    /// consecutive tickets look monotonically increasing to citizens.
    #[must_use]
    pub fn generate(at: OffsetDateTime) -> Self {
        let millis: i128 = at.unix_timestamp_nanos() / 1_000_000;
        Self {
            value: format!("{}{millis}", Self::PREFIX),
        }
    }

    /// Parses and validates a stored ticket number.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTicketNumber` if the value does not
    /// consist of the `GRV-` prefix followed by at least one digit.
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        let suffix: &str = value
            .strip_prefix(Self::PREFIX)
            .ok_or_else(|| DomainError::InvalidTicketNumber(value.to_string()))?;
        if suffix.is_empty() || !suffix.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::InvalidTicketNumber(value.to_string()));
        }
        Ok(Self {
            value: value.to_string(),
        })
    }

    /// Returns the full ticket number, prefix included.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for TicketNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}
