// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// A tentative set of seats chosen for one allocation attempt.
///
/// A selection maps row indices to the column indices chosen in that row.
/// It is not occupancy: seats in a selection stay free on the seating map
/// until the owning booking is confirmed. Ordered collections keep row and
/// column iteration deterministic, with columns ascending within a row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Chosen column indices keyed by row index.
    seats: BTreeMap<usize, BTreeSet<usize>>,
}

impl Selection {
    /// Creates an empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            seats: BTreeMap::new(),
        }
    }

    /// Adds a seat to the selection. Adding a seat twice has no effect.
    pub fn insert(&mut self, row: usize, col: usize) {
        self.seats.entry(row).or_default().insert(col);
    }

    /// Checks whether a specific seat is part of the selection.
    #[must_use]
    pub fn contains_seat(&self, row: usize, col: usize) -> bool {
        self.seats.get(&row).is_some_and(|cols| cols.contains(&col))
    }

    /// Checks whether any seat in the given row is part of the selection.
    #[must_use]
    pub fn contains_row(&self, row: usize) -> bool {
        self.seats.contains_key(&row)
    }

    /// Returns the total number of seats across all rows.
    #[must_use]
    pub fn seat_count(&self) -> usize {
        self.seats.values().map(BTreeSet::len).sum()
    }

    /// Checks whether the selection holds no seats.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    /// Iterates all `(row, col)` pairs, rows ascending and columns
    /// ascending within each row.
    pub fn iter_seats(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.seats
            .iter()
            .flat_map(|(&row, cols)| cols.iter().map(move |&col| (row, col)))
    }
}
