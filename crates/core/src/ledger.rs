// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The booking ledger: every booking taken against one screening.
//!
//! ## Invariants
//!
//! - Identifiers come from a sequence that only counts up; an identifier
//!   is never reused, even if bookings could one day be discarded
//! - A confirmed booking is immutable; mutation attempts are rejected
//! - Lookups never fail; an unknown identifier is simply absent

use crate::error::CoreError;
use gic_cinemas_domain::{Booking, BookingId, Selection};
use std::collections::BTreeMap;

/// All bookings of one screening, keyed by identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingLedger {
    /// Bookings by identifier.
    bookings: BTreeMap<BookingId, Booking>,
    /// The sequence number the next booking will receive.
    next_sequence: usize,
}

impl BookingLedger {
    /// Creates an empty ledger. The first booking receives "GIC0001".
    #[must_use]
    pub const fn new() -> Self {
        Self {
            bookings: BTreeMap::new(),
            next_sequence: 1,
        }
    }

    /// Creates an unconfirmed booking holding the given selection and
    /// returns its identifier.
    ///
    /// # Arguments
    ///
    /// * `tickets` - The requested ticket count
    /// * `selection` - The seats proposed for the booking
    pub fn create(&mut self, tickets: usize, selection: Selection) -> BookingId {
        let booking_id = BookingId::from_sequence(self.next_sequence);
        self.next_sequence += 1;
        self.bookings.insert(
            booking_id.clone(),
            Booking::new(booking_id.clone(), tickets, selection),
        );
        booking_id
    }

    /// Looks up a booking. An unknown identifier returns `None`.
    #[must_use]
    pub fn get(&self, booking_id: &BookingId) -> Option<&Booking> {
        self.bookings.get(booking_id)
    }

    /// Replaces the selection of an unconfirmed booking wholesale.
    ///
    /// # Errors
    ///
    /// Returns an error if the booking does not exist or is already
    /// confirmed. Callers look bookings up before reseating them, so
    /// either failure indicates a sequencing bug in the caller.
    pub fn update_selection(
        &mut self,
        booking_id: &BookingId,
        selection: Selection,
    ) -> Result<(), CoreError> {
        let booking = self
            .bookings
            .get_mut(booking_id)
            .ok_or_else(|| CoreError::BookingNotFound {
                booking_id: booking_id.clone(),
            })?;
        if booking.is_confirmed() {
            return Err(CoreError::BookingAlreadyConfirmed {
                booking_id: booking_id.clone(),
            });
        }
        booking.set_selection(selection);
        Ok(())
    }

    /// Marks a booking confirmed and returns it.
    ///
    /// The caller owns writing the confirmed selection into the seating
    /// map; the ledger only tracks the flag.
    ///
    /// # Errors
    ///
    /// Returns an error if the booking does not exist or is already
    /// confirmed.
    pub fn confirm(&mut self, booking_id: &BookingId) -> Result<&Booking, CoreError> {
        let booking = self
            .bookings
            .get_mut(booking_id)
            .ok_or_else(|| CoreError::BookingNotFound {
                booking_id: booking_id.clone(),
            })?;
        if booking.is_confirmed() {
            return Err(CoreError::BookingAlreadyConfirmed {
                booking_id: booking_id.clone(),
            });
        }
        booking.confirm();
        Ok(booking)
    }
}

impl Default for BookingLedger {
    fn default() -> Self {
        Self::new()
    }
}
