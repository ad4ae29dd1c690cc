// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::state::{Outcome, Screening, TransitionResult};
use gic_cinemas_domain::{DomainError, plan_anchored, plan_default};

/// Applies a command to a screening, producing the next state.
///
/// The input state is never mutated: validation runs against it, then a
/// clone receives the changes. A failed command leaves the caller holding
/// the unchanged original.
///
/// # Arguments
///
/// * `state` - The current screening state
/// * `command` - The requested change
///
/// # Returns
///
/// The new state and an outcome describing what happened.
///
/// # Errors
///
/// Returns an error if:
/// - The ticket count is zero or exceeds the current vacancy
/// - The anchor seat lies outside the seating map
/// - The referenced booking does not exist or is already confirmed
pub fn apply(state: &Screening, command: Command) -> Result<TransitionResult, CoreError> {
    match command {
        Command::CreateBooking { tickets } => {
            if tickets == 0 {
                return Err(CoreError::DomainViolation(DomainError::InvalidTicketCount {
                    tickets,
                }));
            }
            let selection = plan_default(&state.grid, tickets)?;

            let mut new_state = state.clone();
            let booking_id = new_state.ledger.create(tickets, selection);

            Ok(TransitionResult {
                new_state,
                outcome: Outcome::BookingCreated {
                    booking_id,
                    tickets,
                },
            })
        }
        Command::ChangeSeats {
            booking_id,
            row,
            col,
        } => {
            if !state.grid.is_valid_coord(row, col) {
                return Err(CoreError::DomainViolation(DomainError::SeatOutOfBounds {
                    row,
                    col,
                    rows: state.grid.rows(),
                    seats_per_row: state.grid.seats_per_row(),
                }));
            }
            let booking = state
                .ledger
                .get(&booking_id)
                .ok_or_else(|| CoreError::BookingNotFound {
                    booking_id: booking_id.clone(),
                })?;
            if booking.is_confirmed() {
                return Err(CoreError::BookingAlreadyConfirmed { booking_id });
            }
            let selection = plan_anchored(&state.grid, booking.tickets(), row, col)?;

            let mut new_state = state.clone();
            new_state.ledger.update_selection(&booking_id, selection)?;

            Ok(TransitionResult {
                new_state,
                outcome: Outcome::SeatsChanged { booking_id },
            })
        }
        Command::ConfirmBooking { booking_id } => {
            let booking = state
                .ledger
                .get(&booking_id)
                .ok_or_else(|| CoreError::BookingNotFound {
                    booking_id: booking_id.clone(),
                })?;
            if booking.is_confirmed() {
                return Err(CoreError::BookingAlreadyConfirmed { booking_id });
            }

            let mut new_state = state.clone();
            let selection = new_state.ledger.confirm(&booking_id)?.selection().clone();
            new_state.grid.occupy_selection(&selection);

            Ok(TransitionResult {
                new_state,
                outcome: Outcome::BookingConfirmed { booking_id },
            })
        }
    }
}
