// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use gic_cinemas::{Command, CoreError, Outcome, Screening, TransitionResult, apply};
use gic_cinemas_domain::{Booking, BookingId, DomainError, Selection, seat_label_to_coord};
use thiserror::Error;
use tracing::{debug, info, warn};

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
/// Recoverable conditions (`InvalidInput`, `InsufficientVacancy`) are meant
/// to be reported and re-prompted; the remaining variants signal misuse of
/// the booking lifecycle or a broken internal invariant.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input was provided.
    #[error("Invalid input for field '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },

    /// More tickets were requested than there are free seats.
    #[error("Requested {requested} tickets but only {available} seats are available")]
    InsufficientVacancy {
        /// The requested ticket count.
        requested: usize,
        /// The current free seat count.
        available: usize,
    },

    /// The referenced booking does not exist.
    #[error("Booking '{booking_id}' not found")]
    BookingNotFound {
        /// The unknown identifier.
        booking_id: String,
    },

    /// The referenced booking is already confirmed and immutable.
    #[error("Booking '{booking_id}' is already confirmed")]
    BookingAlreadyConfirmed {
        /// The confirmed booking's identifier.
        booking_id: String,
    },

    /// An internal error occurred.
    #[error("Internal error: {message}")]
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked
/// directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidDimensions {
            rows,
            seats_per_row,
        } => ApiError::InvalidInput {
            field: String::from("dimensions"),
            message: format!(
                "Invalid seating dimensions: {rows} rows x {seats_per_row} seats per row. Both must be at least 1"
            ),
        },
        DomainError::InvalidRowLabel(label) => ApiError::InvalidInput {
            field: String::from("row_label"),
            message: format!("Invalid row label '{label}'. Must be letters A-Z"),
        },
        DomainError::InvalidSeatNumber { seat_number } => ApiError::InvalidInput {
            field: String::from("seat_number"),
            message: format!("Invalid seat number {seat_number}. Seat numbers start at 1"),
        },
        DomainError::SeatOutOfBounds {
            row,
            col,
            rows,
            seats_per_row,
        } => ApiError::InvalidInput {
            field: String::from("seating_position"),
            message: format!(
                "Seat at row {row}, column {col} is outside the {rows} x {seats_per_row} seating map"
            ),
        },
        DomainError::InvalidTicketCount { tickets } => ApiError::InvalidInput {
            field: String::from("tickets"),
            message: format!("Invalid ticket count {tickets}. Must be at least 1"),
        },
        DomainError::InsufficientVacancy {
            requested,
            available,
        } => ApiError::InsufficientVacancy {
            requested,
            available,
        },
        DomainError::AllocationStalled { remaining } => ApiError::Internal {
            message: format!("Seat allocation made no progress with {remaining} tickets remaining"),
        },
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked
/// directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::BookingNotFound { booking_id } => ApiError::BookingNotFound {
            booking_id: booking_id.value().to_string(),
        },
        CoreError::BookingAlreadyConfirmed { booking_id } => ApiError::BookingAlreadyConfirmed {
            booking_id: booking_id.value().to_string(),
        },
    }
}

/// API request to create a booking with a default seat selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateBookingRequest {
    /// The number of tickets to reserve. Must be at least 1.
    pub tickets: usize,
}

/// API response for a successful booking creation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CreateBookingResponse {
    /// The identifier assigned to the new booking.
    pub booking_id: String,
    /// The ticket count reserved.
    pub tickets: usize,
    /// The seating map with the pending selection overlaid.
    pub seat_map: String,
}

/// API request to reseat an unconfirmed booking from an anchor seat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeSeatsRequest {
    /// The booking to reseat.
    pub booking_id: String,
    /// The alphabetic row label of the anchor seat (e.g. "B").
    pub row_label: String,
    /// The 1-based seat number of the anchor seat.
    pub seat_number: usize,
}

/// API response for a successful reseat.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ChangeSeatsResponse {
    /// The reseated booking.
    pub booking_id: String,
    /// The seating map with the new pending selection overlaid.
    pub seat_map: String,
}

/// API request to confirm a booking onto the seating map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmBookingRequest {
    /// The booking to confirm.
    pub booking_id: String,
}

/// API response for a successful confirmation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ConfirmBookingResponse {
    /// The confirmed booking.
    pub booking_id: String,
}

/// API request to look up a booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckBookingRequest {
    /// The booking identifier to look up.
    pub booking_id: String,
}

/// API response for a booking lookup.
///
/// Lookups never fail: an unknown identifier yields `found: None` and a
/// seating map without an overlay.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CheckBookingResponse {
    /// The identifier of the booking, if it exists.
    pub found: Option<String>,
    /// The seating map, with the booking's seats overlaid when found.
    pub seat_map: String,
}

/// The result of a state-changing API operation.
///
/// Operations never mutate the state they are given; the caller replaces
/// its state with `new_state` on success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResult<T> {
    /// The API response.
    pub response: T,
    /// The new state after the operation.
    pub new_state: Screening,
}

/// Renders the seating map with a booking's pending selection overlaid.
fn map_for_booking(state: &Screening, booking_id: &BookingId) -> Result<String, ApiError> {
    let booking: &Booking = state
        .ledger
        .get(booking_id)
        .ok_or_else(|| ApiError::Internal {
            message: format!("Booking '{booking_id}' missing after transition"),
        })?;
    Ok(render_seat_map(state, booking.selection()))
}

/// Creates a booking with a default seat selection.
///
/// This function:
/// - Translates the API request into a core command
/// - Applies the command to the current state
/// - Translates any errors to API errors
/// - Returns the new booking's identifier and rendered seating map
///
/// # Arguments
///
/// * `state` - The current screening state
/// * `request` - The API request to create a booking
///
/// # Returns
///
/// * `Ok(ApiResult<CreateBookingResponse>)` on success with the new state
/// * `Err(ApiError)` if the request is invalid or capacity is exceeded
///
/// # Errors
///
/// Returns an error if:
/// - The ticket count is zero (`InvalidInput`)
/// - The ticket count exceeds current vacancy (`InsufficientVacancy`)
pub fn create_booking(
    state: &Screening,
    request: &CreateBookingRequest,
) -> Result<ApiResult<CreateBookingResponse>, ApiError> {
    debug!(tickets = request.tickets, "creating booking");

    // Translate the API request into a core command
    let command: Command = Command::CreateBooking {
        tickets: request.tickets,
    };

    // Apply command via core transition
    let transition: TransitionResult = apply(state, command)
        .map_err(translate_core_error)
        .inspect_err(|err| warn!(error = %err, "booking creation rejected"))?;

    let Outcome::BookingCreated {
        booking_id,
        tickets,
    } = transition.outcome
    else {
        return Err(ApiError::Internal {
            message: String::from("Booking creation produced an unexpected outcome"),
        });
    };

    let seat_map: String = map_for_booking(&transition.new_state, &booking_id)?;

    info!(booking_id = %booking_id, tickets, "booking created");

    Ok(ApiResult {
        response: CreateBookingResponse {
            booking_id: booking_id.value().to_string(),
            tickets,
            seat_map,
        },
        new_state: transition.new_state,
    })
}

/// Replaces an unconfirmed booking's seats, anchored at a seating position.
///
/// This function:
/// - Translates the seating position into grid coordinates
/// - Applies the reseat command to the current state
/// - Translates any errors to API errors
/// - Returns the booking's identifier and updated seating map
///
/// # Arguments
///
/// * `state` - The current screening state
/// * `request` - The API request with the booking id and anchor position
///
/// # Returns
///
/// * `Ok(ApiResult<ChangeSeatsResponse>)` on success with the new state
/// * `Err(ApiError)` if the position is invalid or the booking cannot change
///
/// # Errors
///
/// Returns an error if:
/// - The row label or seat number is malformed (`InvalidInput`)
/// - The anchor lies outside the seating map (`InvalidInput`)
/// - The booking does not exist (`BookingNotFound`)
/// - The booking is already confirmed (`BookingAlreadyConfirmed`)
pub fn change_seats(
    state: &Screening,
    request: ChangeSeatsRequest,
) -> Result<ApiResult<ChangeSeatsResponse>, ApiError> {
    debug!(
        booking_id = %request.booking_id,
        row_label = %request.row_label,
        seat_number = request.seat_number,
        "reseating booking"
    );

    // Translate the seating position into grid coordinates
    let (row, col): (usize, usize) = seat_label_to_coord(&request.row_label, request.seat_number)
        .map_err(translate_domain_error)?;

    let booking_id: BookingId = BookingId::new(request.booking_id);
    let command: Command = Command::ChangeSeats {
        booking_id: booking_id.clone(),
        row,
        col,
    };

    // Apply command via core transition
    let transition: TransitionResult = apply(state, command)
        .map_err(translate_core_error)
        .inspect_err(|err| warn!(error = %err, "reseat rejected"))?;

    let seat_map: String = map_for_booking(&transition.new_state, &booking_id)?;

    info!(booking_id = %booking_id, row, col, "booking reseated");

    Ok(ApiResult {
        response: ChangeSeatsResponse {
            booking_id: booking_id.value().to_string(),
            seat_map,
        },
        new_state: transition.new_state,
    })
}

/// Confirms a booking, committing its seats to the seating map.
///
/// # Arguments
///
/// * `state` - The current screening state
/// * `request` - The API request with the booking id to confirm
///
/// # Returns
///
/// * `Ok(ApiResult<ConfirmBookingResponse>)` on success with the new state
/// * `Err(ApiError)` if the booking cannot be confirmed
///
/// # Errors
///
/// Returns an error if:
/// - The booking does not exist (`BookingNotFound`)
/// - The booking is already confirmed (`BookingAlreadyConfirmed`)
pub fn confirm_booking(
    state: &Screening,
    request: ConfirmBookingRequest,
) -> Result<ApiResult<ConfirmBookingResponse>, ApiError> {
    debug!(booking_id = %request.booking_id, "confirming booking");

    let booking_id: BookingId = BookingId::new(request.booking_id);
    let command: Command = Command::ConfirmBooking {
        booking_id: booking_id.clone(),
    };

    // Apply command via core transition
    let transition: TransitionResult = apply(state, command)
        .map_err(translate_core_error)
        .inspect_err(|err| warn!(error = %err, "confirmation rejected"))?;

    info!(
        booking_id = %booking_id,
        vacancy = transition.new_state.grid.vacancy(),
        "booking confirmed"
    );

    Ok(ApiResult {
        response: ConfirmBookingResponse {
            booking_id: booking_id.value().to_string(),
        },
        new_state: transition.new_state,
    })
}

/// Looks up a booking and renders its seats over the seating map.
///
/// Unknown identifiers are not an error: the response carries `found: None`
/// and the seating map without an overlay.
#[must_use]
pub fn check_booking(state: &Screening, request: CheckBookingRequest) -> CheckBookingResponse {
    debug!(booking_id = %request.booking_id, "checking booking");

    let booking_id: BookingId = BookingId::new(request.booking_id);

    state.ledger.get(&booking_id).map_or_else(
        || CheckBookingResponse {
            found: None,
            seat_map: render_seat_map(state, &Selection::new()),
        },
        |booking| CheckBookingResponse {
            found: Some(booking.id().value().to_string()),
            seat_map: render_seat_map(state, booking.selection()),
        },
    )
}

/// Returns the current count of free seats.
#[must_use]
pub const fn get_vacancy(state: &Screening) -> usize {
    state.grid.vacancy()
}

/// Returns the availability summary shown in the main menu.
///
/// Format: `<title> (<n> seat[s] available)` with singular/plural handling.
#[must_use]
pub fn get_title_availability(state: &Screening) -> String {
    let vacancy: usize = state.grid.vacancy();
    let noun: &str = if vacancy == 1 { "seat" } else { "seats" };
    format!("{} ({vacancy} {noun} available)", state.title)
}

/// Renders the seating map with the given selection overlaid.
#[must_use]
pub fn render_seat_map(state: &Screening, overlay: &Selection) -> String {
    gic_cinemas_domain::render_seat_map(&state.grid, overlay)
}
