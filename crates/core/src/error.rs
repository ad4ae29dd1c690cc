// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use gic_cinemas_domain::{BookingId, DomainError};

/// Errors that can occur during state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// The referenced booking does not exist.
    BookingNotFound {
        /// The unknown identifier.
        booking_id: BookingId,
    },
    /// The referenced booking is already confirmed and immutable.
    BookingAlreadyConfirmed {
        /// The confirmed booking's identifier.
        booking_id: BookingId,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::BookingNotFound { booking_id } => {
                write!(f, "Booking '{booking_id}' not found")
            }
            Self::BookingAlreadyConfirmed { booking_id } => {
                write!(f, "Booking '{booking_id}' is already confirmed")
            }
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
