// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::ledger::BookingLedger;
use innkeep_domain::{BookingId, DateRange, Price, RoomCategory};

/// Represents a room in a hotel.
///
/// Each room has a number (unique within its hotel), a category, a price
/// per night and the IDs of the bookings attached to it. The room stores
/// booking IDs only; the records themselves live in the booking ledger,
/// so the two indices can never hold divergent copies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    /// The room number (unique within a hotel).
    number: u32,
    /// The room category.
    category: RoomCategory,
    /// The price per night.
    price: Price,
    /// IDs of bookings attached to this room, in insertion order.
    bookings: Vec<BookingId>,
}

impl Room {
    /// Creates a new `Room` with no bookings.
    ///
    /// # Arguments
    ///
    /// * `number` - The room number (unique within a hotel)
    /// * `category` - The room category
    /// * `price` - The price per night
    #[must_use]
    pub const fn new(number: u32, category: RoomCategory, price: Price) -> Self {
        Self {
            number,
            category,
            price,
            bookings: Vec::new(),
        }
    }

    /// Returns the room number.
    #[must_use]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Returns the room category.
    #[must_use]
    pub const fn category(&self) -> RoomCategory {
        self.category
    }

    /// Returns the price per night.
    #[must_use]
    pub const fn price(&self) -> Price {
        self.price
    }

    /// Returns the IDs of the bookings attached to this room.
    #[must_use]
    pub fn booking_ids(&self) -> &[BookingId] {
        &self.bookings
    }

    /// Checks if a booking with the given ID is attached to this room.
    #[must_use]
    pub fn has_booking(&self, booking_id: BookingId) -> bool {
        self.bookings.contains(&booking_id)
    }

    /// Checks if the room is available for the given date range.
    ///
    /// A room is available iff no booking attached to it overlaps the
    /// range. Attached IDs whose ledger entry is cancelled (or gone) do
    /// not block; cancellation detaches the ID anyway, keeping the two
    /// mechanisms equivalent.
    ///
    /// # Arguments
    ///
    /// * `ledger` - The booking ledger used to resolve attached IDs
    /// * `range` - The date range to check
    #[must_use]
    pub fn is_available(&self, ledger: &BookingLedger, range: &DateRange) -> bool {
        self.bookings.iter().all(|booking_id| {
            ledger
                .get(*booking_id)
                .is_none_or(|booking| booking.is_cancelled() || !booking.range().overlaps(range))
        })
    }

    /// Attaches a booking to the room.
    pub fn attach_booking(&mut self, booking_id: BookingId) {
        self.bookings.push(booking_id);
    }

    /// Detaches the booking with the given ID.
    ///
    /// Detaching an ID that is not attached is a no-op.
    pub fn detach_booking(&mut self, booking_id: BookingId) {
        self.bookings.retain(|id| *id != booking_id);
    }
}
