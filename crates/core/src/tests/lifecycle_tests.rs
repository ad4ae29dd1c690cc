// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! End-to-end booking flows against a single screening, mirroring the
//! interactive session: create, reseat, confirm, repeat.

use crate::{Command, CoreError, Screening, TransitionResult, apply};
use gic_cinemas_domain::{BookingId, DomainError};

use super::helpers::{confirm_booking, create_booking, create_test_screening};

fn change_seats(state: &Screening, booking_id: &BookingId, row: usize, col: usize) -> Screening {
    apply(
        state,
        Command::ChangeSeats {
            booking_id: booking_id.clone(),
            row,
            col,
        },
    )
    .expect("reseat should succeed")
    .new_state
}

fn booking_seats(state: &Screening, booking_id: &BookingId) -> Vec<(usize, usize)> {
    state
        .ledger
        .get(booking_id)
        .expect("booking should exist")
        .selection()
        .iter_seats()
        .collect()
}

#[test]
fn test_default_booking_confirmation_scenario() {
    // 8 rows x 10 seats: four tickets land in the farthest row around
    // its center, and confirming them drops the vacancy to 76.
    let state: Screening = create_test_screening();
    let (state, booking_id) = create_booking(&state, 4);

    assert_eq!(booking_id.value(), "GIC0001");
    assert_eq!(
        booking_seats(&state, &booking_id),
        vec![(7, 3), (7, 4), (7, 5), (7, 6)]
    );

    let state: Screening = confirm_booking(&state, &booking_id);
    assert_eq!(state.grid.vacancy(), 76);
    assert_eq!(state.grid.count_free_cells(), 76);
}

#[test]
fn test_scripted_session_with_reseats_and_capacity_refusal() {
    let state: Screening = create_test_screening();

    // First booking: 4 tickets, reseated to B3, confirmed.
    let (state, first) = create_booking(&state, 4);
    let state: Screening = change_seats(&state, &first, 1, 2);
    assert_eq!(
        booking_seats(&state, &first),
        vec![(1, 2), (1, 3), (1, 4), (1, 5)]
    );
    let state: Screening = confirm_booking(&state, &first);
    assert_eq!(state.grid.vacancy(), 76);

    // 77 tickets against 76 free seats is refused outright.
    let err: CoreError = apply(&state, Command::CreateBooking { tickets: 77 }).unwrap_err();
    assert_eq!(
        err,
        CoreError::DomainViolation(DomainError::InsufficientVacancy {
            requested: 77,
            available: 76
        })
    );

    // Second booking: 12 tickets, reseated to B5. The anchor row holds
    // only its free right side; the rest spills toward the screen.
    let (state, second) = create_booking(&state, 12);
    assert_eq!(second.value(), "GIC0002");
    let state: Screening = change_seats(&state, &second, 1, 4);
    assert_eq!(
        booking_seats(&state, &second),
        vec![
            (0, 1),
            (0, 2),
            (0, 3),
            (0, 4),
            (0, 5),
            (0, 6),
            (0, 7),
            (0, 8),
            (1, 6),
            (1, 7),
            (1, 8),
            (1, 9)
        ]
    );

    let state: Screening = confirm_booking(&state, &second);
    assert_eq!(state.grid.vacancy(), 64);
    assert_eq!(state.grid.count_free_cells(), 64);

    // Both bookings stay visible and confirmed in the ledger.
    assert!(
        state
            .ledger
            .get(&first)
            .is_some_and(gic_cinemas_domain::Booking::is_confirmed)
    );
    assert!(
        state
            .ledger
            .get(&second)
            .is_some_and(gic_cinemas_domain::Booking::is_confirmed)
    );
}

#[test]
fn test_reseating_repeatedly_keeps_the_count_stable() {
    let state: Screening = create_test_screening();
    let (state, booking_id) = create_booking(&state, 6);

    let state: Screening = change_seats(&state, &booking_id, 1, 2);
    let state: Screening = change_seats(&state, &booking_id, 3, 7);
    let state: Screening = change_seats(&state, &booking_id, 0, 0);

    let booking = state.ledger.get(&booking_id).expect("booking should exist");
    assert_eq!(booking.selection().seat_count(), 6);
    assert_eq!(state.grid.vacancy(), 80);
}

#[test]
fn test_abandoned_bookings_never_occupy_seats() {
    let state: Screening = create_test_screening();
    let (state, abandoned) = create_booking(&state, 10);

    // The unconfirmed booking stays in the ledger but holds nothing on
    // the map, so a later booking may claim the same seats.
    let (state, kept) = create_booking(&state, 10);
    assert_eq!(
        booking_seats(&state, &abandoned),
        booking_seats(&state, &kept)
    );

    let state: Screening = confirm_booking(&state, &kept);
    assert_eq!(state.grid.vacancy(), 70);
    assert!(
        !state
            .ledger
            .get(&abandoned)
            .expect("booking should exist")
            .is_confirmed()
    );
}
