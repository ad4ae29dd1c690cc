// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Seat map rendering for terminal display.
//!
//! The map shows the screen at the top and the rows back-to-front below
//! it, matching how a theatre reads from the entrance: the farthest row
//! prints first and row A, nearest the screen, prints last before the
//! seat number footer.
//!
//! ## Glyphs
//!
//! - `.` free seat
//! - `#` occupied seat
//! - `o` seat in the overlay selection, shown over either state

use crate::grid::SeatGrid;
use crate::row_label::row_to_label;
use crate::selection::Selection;
use std::fmt::Write;

const SCREEN_BANNER: &str = "S C R E E N";

const GLYPH_FREE: char = '.';
const GLYPH_OCCUPIED: char = '#';
const GLYPH_SELECTED: char = 'o';

/// Renders the seating map as terminal text.
///
/// # Arguments
///
/// * `grid` - The seating map occupancy to draw
/// * `overlay` - Seats drawn as selected on top of their occupancy state
///
/// # Returns
///
/// The rendered map without a trailing newline: a centered screen banner,
/// a rule, one line per row from the farthest row down to row A, and a
/// footer of 1-based seat numbers.
#[must_use]
pub fn render_seat_map(grid: &SeatGrid, overlay: &Selection) -> String {
    let label_width = row_to_label(grid.rows() - 1).len();
    let line_width = label_width + 3 * grid.seats_per_row();

    let banner_pad = line_width.saturating_sub(SCREEN_BANNER.len()) / 2;
    let mut out = String::new();
    let _ = writeln!(out, "{:banner_pad$}{SCREEN_BANNER}", "");
    let _ = writeln!(out, "{}", "-".repeat(line_width));

    for row in (0..grid.rows()).rev() {
        let _ = write!(out, "{:<label_width$}", row_to_label(row));
        for col in 0..grid.seats_per_row() {
            let glyph = if overlay.contains_seat(row, col) {
                GLYPH_SELECTED
            } else if grid.is_occupied(row, col) {
                GLYPH_OCCUPIED
            } else {
                GLYPH_FREE
            };
            let _ = write!(out, "  {glyph}");
        }
        out.push('\n');
    }

    let _ = write!(out, "{:label_width$}", "");
    for seat_number in 1..=grid.seats_per_row() {
        let _ = write!(out, "  {seat_number}");
    }

    out
}
