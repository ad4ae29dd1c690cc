// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use gic_cinemas_domain::BookingId;

/// A command represents user intent as data only.
///
/// Commands are the only way to request state changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Create a booking with a default seat selection.
    CreateBooking {
        /// The number of tickets to reserve. Must be at least 1.
        tickets: usize,
    },
    /// Replace an unconfirmed booking's seats, anchored at a seat.
    ChangeSeats {
        /// The booking to reseat.
        booking_id: BookingId,
        /// The 0-based row of the anchor seat.
        row: usize,
        /// The 0-based column of the anchor seat.
        col: usize,
    },
    /// Confirm a booking onto the seating map.
    ConfirmBooking {
        /// The booking to confirm.
        booking_id: BookingId,
    },
}
