// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation and seat allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Seating map dimensions are zero in either direction.
    InvalidDimensions {
        /// The requested row count.
        rows: usize,
        /// The requested seats per row.
        seats_per_row: usize,
    },
    /// Row label is empty or contains characters outside A-Z.
    InvalidRowLabel(String),
    /// Seat number is zero. Seat numbers are 1-based.
    InvalidSeatNumber {
        /// The invalid seat number.
        seat_number: usize,
    },
    /// Seat coordinate lies outside the seating map.
    SeatOutOfBounds {
        /// The 0-based row index.
        row: usize,
        /// The 0-based column index.
        col: usize,
        /// The seating map's row count.
        rows: usize,
        /// The seating map's seats per row.
        seats_per_row: usize,
    },
    /// Ticket count is zero.
    InvalidTicketCount {
        /// The invalid ticket count.
        tickets: usize,
    },
    /// More tickets were requested than there are free seats.
    InsufficientVacancy {
        /// The requested ticket count.
        requested: usize,
        /// The current free seat count.
        available: usize,
    },
    /// A full allocation pass failed to place any seat.
    ///
    /// The planner checks vacancy before scanning, so a stalled pass means
    /// occupancy and selection bookkeeping disagree. This is an internal
    /// invariant violation, not a recoverable condition.
    AllocationStalled {
        /// The demand still unmet when the pass stalled.
        remaining: usize,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDimensions {
                rows,
                seats_per_row,
            } => {
                write!(
                    f,
                    "Invalid seating dimensions: {rows} rows x {seats_per_row} seats per row. Both must be at least 1"
                )
            }
            Self::InvalidRowLabel(label) => {
                write!(f, "Invalid row label '{label}'. Must be letters A-Z")
            }
            Self::InvalidSeatNumber { seat_number } => {
                write!(f, "Invalid seat number {seat_number}. Seat numbers start at 1")
            }
            Self::SeatOutOfBounds {
                row,
                col,
                rows,
                seats_per_row,
            } => {
                write!(
                    f,
                    "Seat at row {row}, column {col} is outside the {rows} x {seats_per_row} seating map"
                )
            }
            Self::InvalidTicketCount { tickets } => {
                write!(f, "Invalid ticket count {tickets}. Must be at least 1")
            }
            Self::InsufficientVacancy {
                requested,
                available,
            } => {
                write!(
                    f,
                    "Requested {requested} tickets but only {available} seats are available"
                )
            }
            Self::AllocationStalled { remaining } => {
                write!(
                    f,
                    "Seat allocation made no progress with {remaining} tickets remaining"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
