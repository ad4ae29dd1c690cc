// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Parsing and validation of raw terminal input.
//!
//! The shell reads whole lines; this module turns them into typed values
//! and rejects anything the booking flow cannot use.

use thiserror::Error;

/// Highest row count the shell accepts. Keeps every row label a single
/// letter A-Z.
pub const MAX_ROWS: usize = 26;

/// Highest seats-per-row count the shell accepts.
pub const MAX_SEATS_PER_ROW: usize = 50;

/// Errors from parsing raw shell input.
///
/// Display strings are user-facing; the shell prints them verbatim before
/// re-prompting.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    /// The screening setup line is not `<title> <rows> <seats per row>`.
    #[error("\"{input}\" does not adhere to the format specified!")]
    MalformedScreeningSetup {
        /// The rejected input line.
        input: String,
    },

    /// The seating position is not an alphabetic row label followed by a
    /// seat number.
    #[error("\"{input}\" is not a valid seating position!")]
    MalformedSeatPosition {
        /// The rejected input line.
        input: String,
    },
}

/// A parsed screening setup line: title plus seating map dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreeningSetup {
    /// The movie title. May contain spaces.
    pub title: String,
    /// Number of seat rows, in `1..=MAX_ROWS`.
    pub rows: usize,
    /// Number of seats in every row, in `1..=MAX_SEATS_PER_ROW`.
    pub seats_per_row: usize,
}

/// Parses the opening `[Title] [Row] [SeatsPerRow]` line.
///
/// The last two whitespace-separated tokens are the dimensions; everything
/// before them is the title, joined with single spaces.
///
/// # Errors
///
/// Returns `InputError::MalformedScreeningSetup` if fewer than three tokens
/// are present, a dimension is not a number, or a dimension is outside its
/// accepted range.
pub fn parse_screening_setup(input: &str) -> Result<ScreeningSetup, InputError> {
    let malformed = || InputError::MalformedScreeningSetup {
        input: input.to_string(),
    };

    let tokens: Vec<&str> = input.split_whitespace().collect();
    let [title_tokens @ .., rows_token, seats_token] = tokens.as_slice() else {
        return Err(malformed());
    };
    if title_tokens.is_empty() {
        return Err(malformed());
    }

    let rows: usize = rows_token.parse().map_err(|_| malformed())?;
    let seats_per_row: usize = seats_token.parse().map_err(|_| malformed())?;
    if !(1..=MAX_ROWS).contains(&rows) || !(1..=MAX_SEATS_PER_ROW).contains(&seats_per_row) {
        return Err(malformed());
    }

    Ok(ScreeningSetup {
        title: title_tokens.join(" "),
        rows,
        seats_per_row,
    })
}

/// Parses a seating position like `B3` or `b03` into its row label and
/// 1-based seat number.
///
/// # Errors
///
/// Returns `InputError::MalformedSeatPosition` if the input is not an
/// alphabetic prefix followed by digits.
pub fn parse_seat_position(input: &str) -> Result<(String, usize), InputError> {
    let malformed = || InputError::MalformedSeatPosition {
        input: input.to_string(),
    };

    let trimmed: &str = input.trim();
    let label_end: usize = trimmed
        .find(|c: char| !c.is_ascii_alphabetic())
        .unwrap_or(trimmed.len());
    let (label, digits): (&str, &str) = trimmed.split_at(label_end);
    if label.is_empty() || digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }
    let seat_number: usize = digits.parse().map_err(|_| malformed())?;

    Ok((label.to_string(), seat_number))
}
