// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Command, CoreError, Outcome, Screening, TransitionResult, apply};
use gic_cinemas_domain::{BookingId, DomainError};

use super::helpers::{confirm_booking, create_booking, create_test_screening};

// ============================================================================
// CreateBooking
// ============================================================================

#[test]
fn test_create_booking_assigns_the_first_identifier() {
    let state: Screening = create_test_screening();
    let result: TransitionResult =
        apply(&state, Command::CreateBooking { tickets: 4 }).expect("should succeed");

    assert_eq!(
        result.outcome,
        Outcome::BookingCreated {
            booking_id: BookingId::new("GIC0001"),
            tickets: 4
        }
    );

    let booking = result
        .new_state
        .ledger
        .get(&BookingId::new("GIC0001"))
        .expect("booking should exist");
    assert_eq!(booking.tickets(), 4);
    assert_eq!(booking.selection().seat_count(), 4);
    assert!(!booking.is_confirmed());
}

#[test]
fn test_create_booking_does_not_touch_occupancy() {
    let state: Screening = create_test_screening();
    let result: TransitionResult =
        apply(&state, Command::CreateBooking { tickets: 4 }).expect("should succeed");

    // Selections hold no seats on the map until confirmation.
    assert_eq!(result.new_state.grid.vacancy(), 80);
    assert_eq!(result.new_state.grid.count_free_cells(), 80);
}

#[test]
fn test_create_booking_leaves_the_input_state_unchanged() {
    let state: Screening = create_test_screening();
    let before: Screening = state.clone();

    let _ = apply(&state, Command::CreateBooking { tickets: 4 }).expect("should succeed");
    assert_eq!(state, before);
}

#[test]
fn test_create_booking_rejects_zero_tickets() {
    let state: Screening = create_test_screening();
    let err: CoreError = apply(&state, Command::CreateBooking { tickets: 0 }).unwrap_err();

    assert_eq!(
        err,
        CoreError::DomainViolation(DomainError::InvalidTicketCount { tickets: 0 })
    );
}

#[test]
fn test_create_booking_rejects_demand_above_vacancy() {
    let state: Screening = create_test_screening();
    let err: CoreError = apply(&state, Command::CreateBooking { tickets: 81 }).unwrap_err();

    assert_eq!(
        err,
        CoreError::DomainViolation(DomainError::InsufficientVacancy {
            requested: 81,
            available: 80
        })
    );
}

// ============================================================================
// ChangeSeats
// ============================================================================

#[test]
fn test_change_seats_replaces_the_selection_wholesale() {
    let state: Screening = create_test_screening();
    let (state, booking_id) = create_booking(&state, 4);

    let result: TransitionResult = apply(
        &state,
        Command::ChangeSeats {
            booking_id: booking_id.clone(),
            row: 1,
            col: 2,
        },
    )
    .expect("should succeed");

    assert_eq!(result.outcome, Outcome::SeatsChanged { booking_id });

    let booking = result
        .new_state
        .ledger
        .get(&BookingId::new("GIC0001"))
        .expect("booking should exist");
    let seats: Vec<(usize, usize)> = booking.selection().iter_seats().collect();
    assert_eq!(seats, vec![(1, 2), (1, 3), (1, 4), (1, 5)]);
}

#[test]
fn test_change_seats_rejects_an_unknown_booking() {
    let state: Screening = create_test_screening();
    let err: CoreError = apply(
        &state,
        Command::ChangeSeats {
            booking_id: BookingId::new("GIC0009"),
            row: 0,
            col: 0,
        },
    )
    .unwrap_err();

    assert_eq!(
        err,
        CoreError::BookingNotFound {
            booking_id: BookingId::new("GIC0009")
        }
    );
}

#[test]
fn test_change_seats_rejects_a_confirmed_booking() {
    let state: Screening = create_test_screening();
    let (state, booking_id) = create_booking(&state, 4);
    let state: Screening = confirm_booking(&state, &booking_id);

    let err: CoreError = apply(
        &state,
        Command::ChangeSeats {
            booking_id: booking_id.clone(),
            row: 0,
            col: 0,
        },
    )
    .unwrap_err();

    assert_eq!(err, CoreError::BookingAlreadyConfirmed { booking_id });
}

#[test]
fn test_change_seats_rejects_an_out_of_bounds_anchor() {
    let state: Screening = create_test_screening();
    let (state, booking_id) = create_booking(&state, 4);

    let err: CoreError = apply(
        &state,
        Command::ChangeSeats {
            booking_id,
            row: 8,
            col: 0,
        },
    )
    .unwrap_err();

    assert_eq!(
        err,
        CoreError::DomainViolation(DomainError::SeatOutOfBounds {
            row: 8,
            col: 0,
            rows: 8,
            seats_per_row: 10
        })
    );
}

// ============================================================================
// ConfirmBooking
// ============================================================================

#[test]
fn test_confirm_booking_writes_the_selection_onto_the_map() {
    let state: Screening = create_test_screening();
    let (state, booking_id) = create_booking(&state, 4);

    let result: TransitionResult = apply(
        &state,
        Command::ConfirmBooking {
            booking_id: booking_id.clone(),
        },
    )
    .expect("should succeed");

    assert_eq!(result.outcome, Outcome::BookingConfirmed { booking_id });
    assert_eq!(result.new_state.grid.vacancy(), 76);
    assert_eq!(result.new_state.grid.count_free_cells(), 76);
    assert!(result.new_state.grid.is_occupied(7, 4));

    let booking = result
        .new_state
        .ledger
        .get(&BookingId::new("GIC0001"))
        .expect("booking should exist");
    assert!(booking.is_confirmed());
}

#[test]
fn test_confirm_booking_rejects_an_unknown_booking() {
    let state: Screening = create_test_screening();
    let err: CoreError = apply(
        &state,
        Command::ConfirmBooking {
            booking_id: BookingId::new("GIC0001"),
        },
    )
    .unwrap_err();

    assert_eq!(
        err,
        CoreError::BookingNotFound {
            booking_id: BookingId::new("GIC0001")
        }
    );
}

#[test]
fn test_confirm_booking_rejects_a_second_confirmation() {
    let state: Screening = create_test_screening();
    let (state, booking_id) = create_booking(&state, 4);
    let state: Screening = confirm_booking(&state, &booking_id);

    let err: CoreError = apply(
        &state,
        Command::ConfirmBooking {
            booking_id: booking_id.clone(),
        },
    )
    .unwrap_err();

    assert_eq!(err, CoreError::BookingAlreadyConfirmed { booking_id });
}

#[test]
fn test_failed_commands_leave_no_side_effects() {
    let state: Screening = create_test_screening();
    let (state, booking_id) = create_booking(&state, 80);
    let state: Screening = confirm_booking(&state, &booking_id);
    let before: Screening = state.clone();

    assert!(apply(&state, Command::CreateBooking { tickets: 1 }).is_err());
    assert!(
        apply(
            &state,
            Command::ChangeSeats {
                booking_id,
                row: 0,
                col: 0
            }
        )
        .is_err()
    );
    assert_eq!(state, before);
}
