// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Command, Outcome, Screening, TransitionResult, apply};
use gic_cinemas_domain::BookingId;

/// An 8 row by 10 seat screening, fully vacant.
pub fn create_test_screening() -> Screening {
    Screening::new(String::from("Inception"), 8, 10).expect("dimensions should be valid")
}

/// Creates a booking and returns the new state with its identifier.
pub fn create_booking(state: &Screening, tickets: usize) -> (Screening, BookingId) {
    let result: TransitionResult =
        apply(state, Command::CreateBooking { tickets }).expect("booking should succeed");
    let Outcome::BookingCreated { booking_id, .. } = result.outcome else {
        panic!("expected BookingCreated, got {:?}", result.outcome);
    };
    (result.new_state, booking_id)
}

/// Confirms a booking and returns the new state.
pub fn confirm_booking(state: &Screening, booking_id: &BookingId) -> Screening {
    apply(
        state,
        Command::ConfirmBooking {
            booking_id: booking_id.clone(),
        },
    )
    .expect("confirmation should succeed")
    .new_state
}
