// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Row label codec between 0-based row indices and alphabetic labels.
//!
//! Labels follow spreadsheet column naming: row 0 is "A", row 25 is "Z",
//! row 26 is "AA". This is bijective base-26 over the letters A-Z, not
//! positional base-26 with a zero digit, so every index has exactly one
//! label and every label one index.
//!
//! ## Invariants
//!
//! - `label_to_row(&row_to_label(r)) == Ok(r)` for every row index
//! - Labels are always uppercase; parsing accepts lowercase input
//!
//! ## Usage
//!
//! This codec is used by:
//! - Seat map rendering (row headings)
//! - Seat position input parsing (the "B" in "B03")

use crate::error::DomainError;

const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Converts a 0-based row index to its alphabetic label.
///
/// # Arguments
///
/// * `row` - The 0-based row index
///
/// # Returns
///
/// The label: "A" for row 0, "Z" for row 25, "AA" for row 26, and so on.
#[must_use]
pub fn row_to_label(row: usize) -> String {
    let mut remaining = row + 1;
    let mut letters: Vec<u8> = Vec::new();

    while remaining > 0 {
        remaining -= 1;
        letters.push(ALPHABET[remaining % ALPHABET.len()]);
        remaining /= ALPHABET.len();
    }

    letters.iter().rev().map(|&letter| char::from(letter)).collect()
}

/// Converts an alphabetic row label back to its 0-based row index.
///
/// Lowercase input is accepted and treated as uppercase.
///
/// # Arguments
///
/// * `label` - The alphabetic label (e.g. "A", "z", "AA")
///
/// # Returns
///
/// The 0-based row index.
///
/// # Errors
///
/// Returns `DomainError::InvalidRowLabel` if the label is empty, contains
/// a character outside A-Z, or encodes an index too large for `usize`.
pub fn label_to_row(label: &str) -> Result<usize, DomainError> {
    if label.is_empty() {
        return Err(DomainError::InvalidRowLabel(label.to_string()));
    }

    let mut value: usize = 0;
    for &byte in label.as_bytes() {
        let upper = byte.to_ascii_uppercase();
        if !upper.is_ascii_uppercase() {
            return Err(DomainError::InvalidRowLabel(label.to_string()));
        }
        let position = usize::from(upper - b'A') + 1;
        value = value
            .checked_mul(ALPHABET.len())
            .and_then(|scaled| scaled.checked_add(position))
            .ok_or_else(|| DomainError::InvalidRowLabel(label.to_string()))?;
    }

    Ok(value - 1)
}

/// Converts a user-facing seat position to a 0-based coordinate pair.
///
/// Seat numbers are 1-based, so seat 1 maps to column 0.
///
/// # Arguments
///
/// * `label` - The alphabetic row label
/// * `seat_number` - The 1-based seat number within the row
///
/// # Returns
///
/// The `(row, col)` coordinate pair.
///
/// # Errors
///
/// Returns an error if the label is invalid or the seat number is zero.
/// The coordinate is not checked against any particular seating map.
pub fn seat_label_to_coord(label: &str, seat_number: usize) -> Result<(usize, usize), DomainError> {
    let row = label_to_row(label)?;
    if seat_number == 0 {
        return Err(DomainError::InvalidSeatNumber { seat_number });
    }
    Ok((row, seat_number - 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_rows_use_single_letters() {
        assert_eq!(row_to_label(0), "A");
        assert_eq!(row_to_label(1), "B");
        assert_eq!(row_to_label(25), "Z");
    }

    #[test]
    fn test_labels_grow_after_z() {
        assert_eq!(row_to_label(26), "AA");
        assert_eq!(row_to_label(27), "AB");
        assert_eq!(row_to_label(51), "AZ");
        assert_eq!(row_to_label(52), "BA");
        assert_eq!(row_to_label(701), "ZZ");
        assert_eq!(row_to_label(702), "AAA");
    }

    #[test]
    fn test_label_parsing_matches_known_indices() {
        assert_eq!(label_to_row("A"), Ok(0));
        assert_eq!(label_to_row("Z"), Ok(25));
        assert_eq!(label_to_row("AA"), Ok(26));
        assert_eq!(label_to_row("ZZ"), Ok(701));
    }

    #[test]
    fn test_lowercase_labels_are_accepted() {
        assert_eq!(label_to_row("b"), Ok(1));
        assert_eq!(label_to_row("aa"), Ok(26));
    }

    #[test]
    fn test_round_trip_over_ten_thousand_rows() {
        for row in 0..10_000 {
            let label: String = row_to_label(row);
            assert_eq!(label_to_row(&label), Ok(row), "round trip failed for row {row}");
        }
    }

    #[test]
    fn test_empty_label_is_rejected() {
        assert_eq!(
            label_to_row(""),
            Err(DomainError::InvalidRowLabel(String::new()))
        );
    }

    #[test]
    fn test_non_alphabetic_labels_are_rejected() {
        assert!(label_to_row("B3").is_err());
        assert!(label_to_row("4").is_err());
        assert!(label_to_row("A-").is_err());
    }

    #[test]
    fn test_seat_position_converts_to_coordinates() {
        assert_eq!(seat_label_to_coord("B", 3), Ok((1, 2)));
        assert_eq!(seat_label_to_coord("a", 1), Ok((0, 0)));
    }

    #[test]
    fn test_seat_number_zero_is_rejected() {
        assert_eq!(
            seat_label_to_coord("A", 0),
            Err(DomainError::InvalidSeatNumber { seat_number: 0 })
        );
    }
}
