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
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod allocation;
mod booking;
mod error;
mod grid;
mod render;
mod row_label;
mod selection;

#[cfg(test)]
mod tests;

pub use allocation::{plan_anchored, plan_default};
pub use render::render_seat_map;
pub use row_label::{label_to_row, row_to_label, seat_label_to_coord};

// Re-export public types
pub use booking::{Booking, BookingId};
pub use error::DomainError;
pub use grid::SeatGrid;
pub use selection::Selection;
