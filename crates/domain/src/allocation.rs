// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Seat allocation planning against a seating map snapshot.
//!
//! Planners are pure: they read occupancy, never mutate it, and return a
//! [`Selection`] proposing seats for one booking. The same occupancy and
//! request always produce the same selection.
//!
//! ## Placement policy
//!
//! Default placement starts in the row farthest from the screen and works
//! toward it. A row that can hold the whole remaining demand is filled
//! middle-out from its center; a row that cannot is emptied entirely and
//! the demand overflows to the next row. Anchored placement instead starts
//! at a caller-supplied seat, fills rightward to the end of that row, then
//! falls back to the default policy for the rows nearer the screen.
//!
//! ## Invariants
//!
//! - A returned selection holds exactly the requested number of seats
//! - A seat is never claimed twice and never claimed while occupied
//! - Demand strictly decreases every full scan pass; a pass that places
//!   nothing aborts with `AllocationStalled` rather than looping
//!
//! ## Usage
//!
//! This logic is used by:
//! - Booking creation (default placement)
//! - Seat reselection (anchored placement)

use crate::error::DomainError;
use crate::grid::SeatGrid;
use crate::selection::Selection;

/// Plans seats for a ticket request with no anchor.
///
/// # Arguments
///
/// * `grid` - The seating map occupancy to plan against
/// * `tickets` - The number of seats to place
///
/// # Returns
///
/// A selection holding exactly `tickets` seats. Zero tickets yield an
/// empty selection without scanning.
///
/// # Errors
///
/// Returns an error if:
/// - `tickets` exceeds the current vacancy (occupancy is left untouched)
/// - a scan pass places no seat, which indicates corrupted bookkeeping
///
/// # Placement
///
/// Rows are scanned from the farthest row toward the screen. Within the
/// first row that can hold the whole remaining demand, seats spread
/// middle-out: for an even row of length L the pivots are `L/2 - 1` and
/// `L/2` scanned left, right, left, right; for an odd row the center
/// `L/2` comes first, then left, right alternating. Occupied or already
/// claimed seats are skipped but still consume a scan slot.
///
/// # Example
///
/// ```text
/// 3 rows x 10 seats, all free, 4 tickets
///
/// row 2 (farthest):  . . . o o o o . . .    pivots 4,5 then 3,6
/// row 1:             . . . . . . . . . .
/// row 0 (screen):    . . . . . . . . . .
/// ```
pub fn plan_default(grid: &SeatGrid, tickets: usize) -> Result<Selection, DomainError> {
    if tickets == 0 {
        return Ok(Selection::new());
    }
    if tickets > grid.vacancy() {
        return Err(DomainError::InsufficientVacancy {
            requested: tickets,
            available: grid.vacancy(),
        });
    }

    let mut selection: Selection = Selection::new();
    let mut remaining = tickets;

    while remaining > 0 {
        let after_pass = sweep_toward_screen(grid, &mut selection, remaining, grid.rows());
        if after_pass >= remaining {
            return Err(DomainError::AllocationStalled { remaining });
        }
        remaining = after_pass;
    }

    Ok(selection)
}

/// Plans seats for a ticket request starting at an explicit seat.
///
/// # Arguments
///
/// * `grid` - The seating map occupancy to plan against
/// * `tickets` - The number of seats to place
/// * `anchor_row` - The 0-based row of the starting seat
/// * `anchor_col` - The 0-based column of the starting seat
///
/// # Returns
///
/// A selection holding exactly `tickets` seats. Zero tickets yield an
/// empty selection without scanning.
///
/// # Errors
///
/// Returns an error if:
/// - `tickets` exceeds the current vacancy (occupancy is left untouched)
/// - a scan pass places no seat, which indicates corrupted bookkeeping
///
/// # Placement
///
/// The anchor row fills rightward only, from the anchor column to the end
/// of the row; free seats left of the anchor are not touched by this
/// sweep. Remaining demand then moves to the rows nearer the screen under
/// the default policy. Demand still unmet after the nearest row re-scans
/// the whole map from the farthest row, which may claim seats left of the
/// anchor.
pub fn plan_anchored(
    grid: &SeatGrid,
    tickets: usize,
    anchor_row: usize,
    anchor_col: usize,
) -> Result<Selection, DomainError> {
    if tickets == 0 {
        return Ok(Selection::new());
    }
    if tickets > grid.vacancy() {
        return Err(DomainError::InsufficientVacancy {
            requested: tickets,
            available: grid.vacancy(),
        });
    }

    let mut selection: Selection = Selection::new();
    let mut remaining = tickets;

    for col in anchor_col..grid.seats_per_row() {
        if remaining == 0 {
            break;
        }
        if !grid.is_occupied(anchor_row, col) {
            selection.insert(anchor_row, col);
            remaining -= 1;
        }
    }

    if remaining > 0 {
        remaining = sweep_toward_screen(grid, &mut selection, remaining, anchor_row);
    }

    while remaining > 0 {
        let after_pass = sweep_toward_screen(grid, &mut selection, remaining, grid.rows());
        if after_pass >= remaining {
            return Err(DomainError::AllocationStalled { remaining });
        }
        remaining = after_pass;
    }

    Ok(selection)
}

/// Scans rows `row_count - 1` down to 0, filling each in turn.
///
/// Returns the demand still unmet after the scan.
fn sweep_toward_screen(
    grid: &SeatGrid,
    selection: &mut Selection,
    mut remaining: usize,
    row_count: usize,
) -> usize {
    for row in (0..row_count).rev() {
        if remaining == 0 {
            break;
        }
        remaining = fill_row(grid, selection, remaining, row);
    }
    remaining
}

/// Fills one row under the default policy and returns the unmet demand.
///
/// A row with enough free seats for the whole remaining demand fills
/// middle-out. A row with fewer free seats than the demand is taken whole,
/// but only if the selection holds nothing in it yet; a row already
/// holding part of this selection is left for a later pass.
fn fill_row(grid: &SeatGrid, selection: &mut Selection, remaining: usize, row: usize) -> usize {
    let free_cols: Vec<usize> = (0..grid.seats_per_row())
        .filter(|&col| !grid.is_occupied(row, col) && !selection.contains_seat(row, col))
        .collect();

    if free_cols.is_empty() {
        return remaining;
    }

    if free_cols.len() < remaining {
        if selection.contains_row(row) {
            return remaining;
        }
        for &col in &free_cols {
            selection.insert(row, col);
        }
        return remaining - free_cols.len();
    }

    let mut taken: usize = 0;
    for col in middle_out_order(grid.seats_per_row()) {
        if taken == remaining {
            break;
        }
        if grid.is_occupied(row, col) || selection.contains_seat(row, col) {
            continue;
        }
        selection.insert(row, col);
        taken += 1;
    }
    remaining - taken
}

/// Column scan order for middle-out placement in a row of `len` seats.
///
/// Even length: the pivot pair `len/2 - 1` (left) and `len/2` (right)
/// comes first, then the order alternates left, right stepping outward.
/// Odd length: the center `len/2` comes first, then left, right
/// alternating. A length of 10 yields 4, 5, 3, 6, 2, 7, 1, 8, 0, 9.
fn middle_out_order(len: usize) -> Vec<usize> {
    let mut order: Vec<usize> = Vec::with_capacity(len);
    if len == 0 {
        return order;
    }

    let center = len / 2;
    let mut left = center;
    let mut right = center;
    if len % 2 == 1 {
        order.push(center);
        right += 1;
    }

    while left > 0 || right < len {
        if left > 0 {
            left -= 1;
            order.push(left);
        }
        if right < len {
            order.push(right);
            right += 1;
        }
    }

    order
}
