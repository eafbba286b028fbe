// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::room::Room;
use innkeep_domain::{BookingId, CityName, HotelId};
use std::collections::HashMap;

/// Represents a hotel with a unique ID, a city and a set of rooms.
///
/// Rooms are keyed by their number, which is unique within the hotel.
/// Map iteration order is not meaningful; listings sort explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hotel {
    /// The unique hotel identifier.
    id: HotelId,
    /// The city where the hotel is located.
    city: CityName,
    /// The hotel's rooms, keyed by room number.
    rooms: HashMap<u32, Room>,
}

impl Hotel {
    /// Creates a new `Hotel` with no rooms.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique hotel identifier
    /// * `city` - The city where the hotel is located
    #[must_use]
    pub fn new(id: HotelId, city: CityName) -> Self {
        Self {
            id,
            city,
            rooms: HashMap::new(),
        }
    }

    /// Returns the hotel identifier.
    #[must_use]
    pub const fn id(&self) -> HotelId {
        self.id
    }

    /// Returns the city where the hotel is located.
    #[must_use]
    pub const fn city(&self) -> &CityName {
        &self.city
    }

    /// Returns the room with the given number, if present.
    #[must_use]
    pub fn room(&self, number: u32) -> Option<&Room> {
        self.rooms.get(&number)
    }

    /// Returns the room with the given number for mutation, if present.
    #[must_use]
    pub fn room_mut(&mut self, number: u32) -> Option<&mut Room> {
        self.rooms.get_mut(&number)
    }

    /// Returns an iterator over the hotel's rooms.
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }

    /// Checks whether a room with the given number exists.
    #[must_use]
    pub fn has_room(&self, number: u32) -> bool {
        self.rooms.contains_key(&number)
    }

    /// Adds a room if no room with the same number exists.
    ///
    /// # Returns
    ///
    /// `true` if the room was inserted, `false` if the number was taken.
    pub fn add_room(&mut self, room: Room) -> bool {
        match self.rooms.entry(room.number()) {
            std::collections::hash_map::Entry::Occupied(_) => false,
            std::collections::hash_map::Entry::Vacant(entry) => {
                entry.insert(room);
                true
            }
        }
    }

    /// Removes and returns the room with the given number, if present.
    pub fn remove_room(&mut self, number: u32) -> Option<Room> {
        self.rooms.remove(&number)
    }

    /// Searches for the room that has the given booking attached.
    ///
    /// Linear scan over the hotel's rooms.
    #[must_use]
    pub fn find_room_with_booking(&self, booking_id: BookingId) -> Option<&Room> {
        self.rooms.values().find(|room| room.has_booking(booking_id))
    }

    /// Searches for the room that has the given booking attached, for mutation.
    pub fn find_room_with_booking_mut(&mut self, booking_id: BookingId) -> Option<&mut Room> {
        self.rooms
            .values_mut()
            .find(|room| room.has_booking(booking_id))
    }
}
