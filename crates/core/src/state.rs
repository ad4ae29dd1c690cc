// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::ledger::BookingLedger;
use gic_cinemas_domain::{BookingId, DomainError, SeatGrid};

/// The complete state of one screening: its title, seating map, and
/// booking ledger.
///
/// There is exactly one screening per session. It is constructed once
/// from the opening input and then flows through `apply` by value; no
/// component holds a shared or static instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screening {
    /// The movie title shown in menus and availability summaries.
    pub title: String,
    /// The seating map occupancy.
    pub grid: SeatGrid,
    /// All bookings taken during this session.
    pub ledger: BookingLedger,
}

impl Screening {
    /// Creates a screening with a fully vacant seating map and no
    /// bookings.
    ///
    /// # Arguments
    ///
    /// * `title` - The movie title
    /// * `rows` - Number of seat rows
    /// * `seats_per_row` - Number of seats in every row
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDimensions` if either dimension is
    /// zero.
    pub fn new(title: String, rows: usize, seats_per_row: usize) -> Result<Self, DomainError> {
        Ok(Self {
            title,
            grid: SeatGrid::new(rows, seats_per_row)?,
            ledger: BookingLedger::new(),
        })
    }
}

/// What a successful transition did, for callers that log or display it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A booking was created with a default seat selection.
    BookingCreated {
        /// The identifier assigned to the new booking.
        booking_id: BookingId,
        /// The ticket count reserved.
        tickets: usize,
    },
    /// An unconfirmed booking received a new seat selection.
    SeatsChanged {
        /// The reseated booking.
        booking_id: BookingId,
    },
    /// A booking was confirmed onto the seating map.
    BookingConfirmed {
        /// The confirmed booking.
        booking_id: BookingId,
    },
}

/// The result of a successful state transition.
///
/// Transitions are atomic: they either succeed completely or fail without
/// side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The new state after the transition.
    pub new_state: Screening,
    /// What the transition did.
    pub outcome: Outcome,
}
