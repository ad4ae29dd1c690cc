// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The interactive booking shell.
//!
//! A finite-state trampoline drives the session: each stage reads one
//! line, acts on it, and yields the next stage. Generic reader/writer
//! parameters let tests drive a full session from in-memory buffers.

use std::io::{BufRead, Write};

use gic_cinemas::Screening;
use gic_cinemas_api::{
    ApiError, ApiResult, ChangeSeatsRequest, CheckBookingRequest, CheckBookingResponse,
    ConfirmBookingRequest, ConfirmBookingResponse, CreateBookingRequest, change_seats,
    check_booking, confirm_booking, create_booking, get_title_availability,
    translate_domain_error,
};
use thiserror::Error;
use tracing::{debug, info};

use crate::input::{parse_screening_setup, parse_seat_position};

/// Fatal session failures.
///
/// Recoverable input problems are handled in-stage with a message and a
/// fresh prompt; these variants end the session with a nonzero exit.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The terminal stream failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The booking lifecycle was misused or an internal invariant broke.
    #[error("booking system failure: {0}")]
    Api(#[from] ApiError),
}

/// The states of the booking shell.
///
/// The screening flows through the stages by value; no stage holds a
/// shared or global instance.
enum Stage {
    /// Capture the movie title and seating map dimensions.
    Start,
    /// Show the menu and dispatch on the selection.
    MainMenu(Screening),
    /// Prompt for a ticket count and create a booking.
    BookTickets(Screening),
    /// Accept or reseat a pending booking.
    SelectSeats {
        /// The current screening state.
        state: Screening,
        /// The unconfirmed booking being seated.
        booking_id: String,
    },
    /// Look up bookings by id.
    CheckBookings(Screening),
    /// Print the farewell and end the session.
    Exit,
}

/// An interactive booking session over line-based streams.
pub struct Session<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session reading from `reader` and writing to `writer`.
    #[must_use]
    pub const fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Runs the session until the user exits or input ends.
    ///
    /// # Errors
    ///
    /// Returns an error if a terminal stream fails or the booking
    /// lifecycle reports a usage or invariant violation.
    pub fn run(&mut self) -> Result<(), SessionError> {
        let mut stage: Stage = Stage::Start;
        loop {
            stage = match stage {
                Stage::Start => self.start()?,
                Stage::MainMenu(state) => self.main_menu(state)?,
                Stage::BookTickets(state) => self.book_tickets(state)?,
                Stage::SelectSeats { state, booking_id } => {
                    self.select_seats(state, booking_id)?
                }
                Stage::CheckBookings(state) => self.check_bookings(state)?,
                Stage::Exit => {
                    writeln!(self.writer, "Thank you for using GIC Cinemas system. Bye!")?;
                    self.writer.flush()?;
                    return Ok(());
                }
            };
        }
    }

    fn start(&mut self) -> Result<Stage, SessionError> {
        loop {
            writeln!(
                self.writer,
                "Please define movie title and seating map in [Title] [Row] [SeatsPerRow] format:"
            )?;
            let Some(line) = self.read_line()? else {
                return Ok(Stage::Exit);
            };
            match parse_screening_setup(&line) {
                Ok(setup) => {
                    info!(
                        rows = setup.rows,
                        seats_per_row = setup.seats_per_row,
                        "screening initialized"
                    );
                    let screening: Screening =
                        Screening::new(setup.title, setup.rows, setup.seats_per_row)
                            .map_err(|err| SessionError::Api(translate_domain_error(err)))?;
                    return Ok(Stage::MainMenu(screening));
                }
                Err(err) => writeln!(self.writer, "{err}")?,
            }
        }
    }

    fn main_menu(&mut self, state: Screening) -> Result<Stage, SessionError> {
        loop {
            writeln!(self.writer, "Welcome to GIC Cinemas")?;
            writeln!(
                self.writer,
                "[1] Book tickets for {}",
                get_title_availability(&state)
            )?;
            writeln!(self.writer, "[2] Check bookings")?;
            writeln!(self.writer, "[3] Exit")?;
            writeln!(self.writer, "Please enter your selection:")?;
            let Some(line) = self.read_line()? else {
                return Ok(Stage::Exit);
            };
            match line.trim() {
                "1" => return Ok(Stage::BookTickets(state)),
                "2" => return Ok(Stage::CheckBookings(state)),
                "3" => return Ok(Stage::Exit),
                _ => {}
            }
        }
    }

    fn book_tickets(&mut self, state: Screening) -> Result<Stage, SessionError> {
        loop {
            writeln!(
                self.writer,
                "Enter number of tickets to book, or enter blank to go back to main menu:"
            )?;
            let Some(line) = self.read_line()? else {
                return Ok(Stage::Exit);
            };
            let trimmed: &str = line.trim();
            if trimmed.is_empty() {
                return Ok(Stage::MainMenu(state));
            }
            let Ok(tickets) = trimmed.parse::<usize>() else {
                continue;
            };
            if tickets == 0 {
                continue;
            }
            match create_booking(&state, &CreateBookingRequest { tickets }) {
                Ok(result) => {
                    writeln!(
                        self.writer,
                        "Successfully reserved {tickets} {} tickets.",
                        result.new_state.title
                    )?;
                    writeln!(self.writer, "Booking id: {}", result.response.booking_id)?;
                    writeln!(self.writer, "Selected seats:")?;
                    writeln!(self.writer, "{}", result.response.seat_map)?;
                    return Ok(Stage::SelectSeats {
                        state: result.new_state,
                        booking_id: result.response.booking_id,
                    });
                }
                Err(ApiError::InsufficientVacancy { available, .. }) => {
                    writeln!(
                        self.writer,
                        "Sorry, there are only {available} seats available."
                    )?;
                }
                Err(err @ ApiError::InvalidInput { .. }) => {
                    writeln!(self.writer, "{err}")?;
                }
                Err(err) => return Err(SessionError::Api(err)),
            }
        }
    }

    fn select_seats(
        &mut self,
        mut state: Screening,
        booking_id: String,
    ) -> Result<Stage, SessionError> {
        loop {
            writeln!(
                self.writer,
                "Enter blank to accept seat selection, or enter new seating position:"
            )?;
            let Some(line) = self.read_line()? else {
                return Ok(Stage::Exit);
            };
            let trimmed: &str = line.trim();
            if trimmed.is_empty() {
                let result: ApiResult<ConfirmBookingResponse> = confirm_booking(
                    &state,
                    ConfirmBookingRequest {
                        booking_id: booking_id.clone(),
                    },
                )?;
                writeln!(
                    self.writer,
                    "Booking id: {} confirmed.",
                    result.response.booking_id
                )?;
                return Ok(Stage::MainMenu(result.new_state));
            }
            let (row_label, seat_number): (String, usize) = match parse_seat_position(trimmed) {
                Ok(position) => position,
                Err(err) => {
                    writeln!(self.writer, "{err}")?;
                    continue;
                }
            };
            match change_seats(
                &state,
                ChangeSeatsRequest {
                    booking_id: booking_id.clone(),
                    row_label,
                    seat_number,
                },
            ) {
                Ok(result) => {
                    writeln!(self.writer, "Booking id: {}", result.response.booking_id)?;
                    writeln!(self.writer, "Selected seats:")?;
                    writeln!(self.writer, "{}", result.response.seat_map)?;
                    state = result.new_state;
                }
                Err(err @ (ApiError::InvalidInput { .. } | ApiError::InsufficientVacancy { .. })) => {
                    writeln!(self.writer, "{err}")?;
                }
                Err(err) => return Err(SessionError::Api(err)),
            }
        }
    }

    fn check_bookings(&mut self, state: Screening) -> Result<Stage, SessionError> {
        loop {
            writeln!(
                self.writer,
                "Enter booking id, or enter blank to go back to main menu:"
            )?;
            let Some(line) = self.read_line()? else {
                return Ok(Stage::Exit);
            };
            let trimmed: &str = line.trim();
            if trimmed.is_empty() {
                return Ok(Stage::MainMenu(state));
            }
            let response: CheckBookingResponse = check_booking(
                &state,
                CheckBookingRequest {
                    booking_id: trimmed.to_string(),
                },
            );
            match response.found {
                Some(found_id) => {
                    writeln!(self.writer, "Booking id: {found_id}")?;
                    writeln!(self.writer, "Selected seats:")?;
                    writeln!(self.writer, "{}", response.seat_map)?;
                }
                None => {
                    writeln!(self.writer, "Booking id: {trimmed} not found.")?;
                }
            }
        }
    }

    /// Reads one line with the prompt flushed, or `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>, SessionError> {
        self.writer.flush()?;
        let mut line: String = String::new();
        let read: usize = self.reader.read_line(&mut line)?;
        if read == 0 {
            debug!("end of input, exiting");
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
