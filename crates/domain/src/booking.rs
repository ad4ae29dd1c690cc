// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::selection::Selection;
use serde::{Deserialize, Serialize};

const BOOKING_ID_PREFIX: &str = "GIC";

/// A booking identifier such as "GIC0001".
///
/// Identifiers are assigned from a sequence starting at 1, rendered as a
/// fixed prefix plus the sequence number zero-padded to four digits. The
/// sequence keeps growing past 9999 without truncation.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BookingId {
    /// The full identifier text.
    value: String,
}

impl BookingId {
    /// Creates a `BookingId` from raw text, typically user input.
    ///
    /// No validation is applied: an identifier that matches no booking is
    /// a recoverable "not found" at lookup time, not a malformed value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Formats the identifier for a 1-based sequence number.
    #[must_use]
    pub fn from_sequence(sequence: usize) -> Self {
        Self {
            value: format!("{BOOKING_ID_PREFIX}{sequence:04}"),
        }
    }

    /// Returns the identifier text.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for BookingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// One reservation against a screening.
///
/// A booking is created unconfirmed, holding the seats proposed for it.
/// While unconfirmed its selection may be replaced wholesale; the ledger
/// enforces that a confirmed booking is never mutated again. The seat
/// count of the selection always equals the ticket count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    /// The assigned identifier.
    id: BookingId,
    /// The requested ticket count.
    tickets: usize,
    /// The seats currently proposed or held for this booking.
    selection: Selection,
    /// Whether the booking has been confirmed onto the seating map.
    confirmed: bool,
}

impl Booking {
    /// Creates an unconfirmed booking.
    ///
    /// # Arguments
    ///
    /// * `id` - The assigned identifier
    /// * `tickets` - The requested ticket count
    /// * `selection` - The initial proposed seats
    #[must_use]
    pub const fn new(id: BookingId, tickets: usize, selection: Selection) -> Self {
        Self {
            id,
            tickets,
            selection,
            confirmed: false,
        }
    }

    /// Returns the booking identifier.
    #[must_use]
    pub const fn id(&self) -> &BookingId {
        &self.id
    }

    /// Returns the requested ticket count.
    #[must_use]
    pub const fn tickets(&self) -> usize {
        self.tickets
    }

    /// Returns the seats currently held by this booking.
    #[must_use]
    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Returns whether the booking has been confirmed.
    #[must_use]
    pub const fn is_confirmed(&self) -> bool {
        self.confirmed
    }

    /// Replaces the proposed seats wholesale.
    ///
    /// The ledger only calls this for unconfirmed bookings.
    pub fn set_selection(&mut self, selection: Selection) {
        self.selection = selection;
    }

    /// Marks the booking confirmed.
    pub const fn confirm(&mut self) {
        self.confirmed = true;
    }
}
