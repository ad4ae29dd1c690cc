// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Seating map occupancy for a single screening.
//!
//! Row 0 is the row nearest the screen; higher row indices are farther
//! away. Column 0 is the leftmost seat. The vacancy count is cached and
//! kept in step with occupancy at every mutation, so reads never scan the
//! map. A full scan exists only as a verification fallback.
//!
//! ## Invariants
//!
//! - `vacancy() == count_free_cells()` at all times
//! - Dimensions never change after construction
//! - Cells only ever transition free to occupied; bookings are never undone

use crate::error::DomainError;
use crate::selection::Selection;
use serde::{Deserialize, Serialize};

/// The rows-by-columns occupancy matrix of one screening.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatGrid {
    /// Number of rows, at least 1.
    rows: usize,
    /// Number of seats in every row, at least 1.
    seats_per_row: usize,
    /// Occupancy flags in row-major order.
    occupied: Vec<bool>,
    /// Cached count of free cells.
    vacancy: usize,
}

impl SeatGrid {
    /// Creates a fully vacant seating map.
    ///
    /// # Arguments
    ///
    /// * `rows` - Number of rows
    /// * `seats_per_row` - Number of seats in every row
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDimensions` if either dimension is zero.
    pub fn new(rows: usize, seats_per_row: usize) -> Result<Self, DomainError> {
        if rows == 0 || seats_per_row == 0 {
            return Err(DomainError::InvalidDimensions {
                rows,
                seats_per_row,
            });
        }
        Ok(Self {
            rows,
            seats_per_row,
            occupied: vec![false; rows * seats_per_row],
            vacancy: rows * seats_per_row,
        })
    }

    /// Returns the number of rows.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of seats in every row.
    #[must_use]
    pub const fn seats_per_row(&self) -> usize {
        self.seats_per_row
    }

    /// Returns the cached count of free seats.
    #[must_use]
    pub const fn vacancy(&self) -> usize {
        self.vacancy
    }

    /// Checks whether a 0-based coordinate lies inside the seating map.
    #[must_use]
    pub const fn is_valid_coord(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.seats_per_row
    }

    /// Checks whether a seat is occupied.
    ///
    /// Coordinates outside the seating map report as occupied, so callers
    /// scanning past an edge never treat missing seats as bookable.
    #[must_use]
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.cell_index(row, col).is_none_or(|index| self.occupied[index])
    }

    /// Marks every seat of a confirmed selection as occupied.
    ///
    /// The vacancy count drops by the number of cells actually flipped.
    /// Seats already occupied and coordinates outside the map are left
    /// untouched, keeping the cached vacancy equal to the free cell count
    /// no matter what selection is applied.
    pub fn occupy_selection(&mut self, selection: &Selection) {
        for (row, col) in selection.iter_seats() {
            if let Some(index) = self.cell_index(row, col)
                && !self.occupied[index]
            {
                self.occupied[index] = true;
                self.vacancy -= 1;
            }
        }
    }

    /// Counts free cells by scanning the whole map.
    ///
    /// O(rows * seats per row). Kept as a verification fallback for the
    /// cached vacancy count; production reads use `vacancy()`.
    #[must_use]
    pub fn count_free_cells(&self) -> usize {
        self.occupied.iter().filter(|&&occupied| !occupied).count()
    }

    const fn cell_index(&self, row: usize, col: usize) -> Option<usize> {
        if self.is_valid_coord(row, col) {
            Some(row * self.seats_per_row + col)
        } else {
            None
        }
    }
}
