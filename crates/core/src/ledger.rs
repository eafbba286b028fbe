// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use innkeep_domain::{Booking, BookingId, CustomerId, DateRange};
use std::collections::HashMap;

/// First booking ID handed out by a fresh ledger.
const INITIAL_BOOKING_ID: u32 = 1;

/// The authoritative store of all bookings ever created.
///
/// The ledger assigns booking IDs (sequential from 1, monotonic for the
/// process lifetime, never reused - not even after cancellation) and owns
/// the booking records. Rooms reference these records by ID only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingLedger {
    /// All bookings ever created, cancelled or not.
    bookings: HashMap<BookingId, Booking>,
    /// The next booking ID to hand out.
    next_id: u32,
}

impl BookingLedger {
    /// Creates a new empty `BookingLedger`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            bookings: HashMap::new(),
            next_id: INITIAL_BOOKING_ID,
        }
    }

    /// Creates a new active booking and returns its ID.
    ///
    /// # Arguments
    ///
    /// * `customer_id` - The owning customer
    /// * `range` - The booked period
    pub fn create(&mut self, customer_id: CustomerId, range: DateRange) -> BookingId {
        let booking_id: BookingId = BookingId::new(self.next_id);
        self.next_id += 1;
        self.bookings
            .insert(booking_id, Booking::new(booking_id, customer_id, range));
        booking_id
    }

    /// Returns the booking with the given ID, if it was ever created.
    #[must_use]
    pub fn get(&self, booking_id: BookingId) -> Option<&Booking> {
        self.bookings.get(&booking_id)
    }

    /// Marks the booking cancelled if it exists and is still active.
    ///
    /// Absent IDs and already-cancelled bookings are a no-op at this
    /// layer; the command layer decides whether that is an error.
    pub fn cancel(&mut self, booking_id: BookingId) {
        if let Some(booking) = self.bookings.get_mut(&booking_id) {
            booking.cancel();
        }
    }

    /// Returns all non-cancelled bookings, sorted ascending by booking ID.
    #[must_use]
    pub fn active_bookings(&self) -> Vec<&Booking> {
        let mut active: Vec<&Booking> = self
            .bookings
            .values()
            .filter(|booking| !booking.is_cancelled())
            .collect();
        active.sort_by_key(|booking| booking.booking_id());
        active
    }

    /// Returns the number of bookings ever created.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    /// Checks whether the ledger has never created a booking.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }
}

impl Default for BookingLedger {
    fn default() -> Self {
        Self::new()
    }
}
