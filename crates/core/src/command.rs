// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use innkeep_domain::{
    BookingId, CityName, CustomerId, DateRange, GuestName, HotelId, Price, RoomCategory,
};

/// A command represents user intent as data only.
///
/// Arguments arrive as already-validated domain types; the parsing layer
/// is responsible for turning raw tokens into them. Commands are the only
/// way to query or change system state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Register a new hotel.
    AddHotel {
        /// The hotel identifier.
        hotel_id: HotelId,
        /// The city where the hotel is located.
        city: CityName,
    },
    /// Remove a hotel, cancelling every booking on its rooms.
    RemoveHotel {
        /// The hotel identifier.
        hotel_id: HotelId,
    },
    /// Add a room to an existing hotel.
    AddRoom {
        /// The hotel to add the room to.
        hotel_id: HotelId,
        /// The room number (unique within the hotel).
        number: u32,
        /// The room category.
        category: RoomCategory,
        /// The price per night.
        price: Price,
    },
    /// Remove a room from a hotel.
    RemoveRoom {
        /// The hotel to remove the room from.
        hotel_id: HotelId,
        /// The room number.
        number: u32,
    },
    /// Book a room for a customer.
    Book {
        /// The hotel of the requested room.
        hotel_id: HotelId,
        /// The requested room number.
        number: u32,
        /// The requested period.
        range: DateRange,
        /// The booking customer's name.
        guest: GuestName,
    },
    /// Cancel a booking on behalf of its owning customer.
    Cancel {
        /// The booking to cancel.
        booking_id: BookingId,
        /// The customer claiming the booking.
        customer_id: CustomerId,
    },
    /// List available rooms in a city for a category and period.
    FindAvailable {
        /// The city to search (exact, case-sensitive match).
        city: CityName,
        /// The requested room category.
        category: RoomCategory,
        /// The requested period.
        range: DateRange,
    },
    /// Find the cheapest available room in a city for a category and period.
    FindCheapest {
        /// The city to search (exact, case-sensitive match).
        city: CityName,
        /// The requested room category.
        category: RoomCategory,
        /// The requested period.
        range: DateRange,
    },
    /// List every room of every hotel.
    ListRooms,
    /// List all active bookings.
    ListBookings,
}
