// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::hotel::Hotel;
use innkeep_domain::{BookingId, HotelId};
use std::collections::HashMap;

/// The top-level collection of all hotels, keyed by hotel ID.
///
/// The inventory exclusively owns its hotels (and, through them, their
/// rooms); it is the root of every query and mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    /// All registered hotels.
    hotels: HashMap<HotelId, Hotel>,
}

impl Inventory {
    /// Creates a new empty `Inventory`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            hotels: HashMap::new(),
        }
    }

    /// Checks whether a hotel with the given ID exists.
    #[must_use]
    pub fn has_hotel(&self, hotel_id: HotelId) -> bool {
        self.hotels.contains_key(&hotel_id)
    }

    /// Returns the hotel with the given ID, if present.
    #[must_use]
    pub fn hotel(&self, hotel_id: HotelId) -> Option<&Hotel> {
        self.hotels.get(&hotel_id)
    }

    /// Returns the hotel with the given ID for mutation, if present.
    #[must_use]
    pub fn hotel_mut(&mut self, hotel_id: HotelId) -> Option<&mut Hotel> {
        self.hotels.get_mut(&hotel_id)
    }

    /// Returns an iterator over all hotels.
    pub fn hotels(&self) -> impl Iterator<Item = &Hotel> {
        self.hotels.values()
    }

    /// Adds a hotel if its ID is unused.
    ///
    /// # Returns
    ///
    /// `true` if the hotel was inserted, `false` if the ID was taken.
    pub fn add_hotel(&mut self, hotel: Hotel) -> bool {
        match self.hotels.entry(hotel.id()) {
            std::collections::hash_map::Entry::Occupied(_) => false,
            std::collections::hash_map::Entry::Vacant(entry) => {
                entry.insert(hotel);
                true
            }
        }
    }

    /// Removes and returns the hotel with the given ID, if present.
    pub fn remove_hotel(&mut self, hotel_id: HotelId) -> Option<Hotel> {
        self.hotels.remove(&hotel_id)
    }

    /// Detaches a booking from whichever room holds it, if any.
    ///
    /// Scans all hotels; at most one room ever references a booking.
    ///
    /// # Returns
    ///
    /// `true` if a room-side reference was found and removed.
    pub fn detach_booking(&mut self, booking_id: BookingId) -> bool {
        for hotel in self.hotels.values_mut() {
            if let Some(room) = hotel.find_room_with_booking_mut(booking_id) {
                room.detach_booking(booking_id);
                return true;
            }
        }
        false
    }
}
