// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Availability and price queries over the inventory.
//!
//! All queries are read-only and deterministic:
//!
//! - Room listings are sorted ascending by `(hotel ID, room number)`,
//!   a total order since both keys are unique at their level.
//! - The cheapest-room search minimizes `(total price, hotel ID, room
//!   number)` with exact integer-cent comparison, so equal-priced rooms
//!   tie-break without floating-point surprises.

use crate::state::SystemState;
use innkeep_domain::{
    BookingId, CityName, CustomerId, DateRange, DomainError, HotelId, Price, RoomCategory,
};

/// One row of a find-available result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvailableRoom {
    /// The hotel offering the room.
    pub hotel_id: HotelId,
    /// The room number.
    pub number: u32,
    /// The price per night.
    pub price: Price,
}

/// The single best result of a find-cheapest query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheapestQuote {
    /// The hotel offering the room.
    pub hotel_id: HotelId,
    /// The room number.
    pub number: u32,
    /// The total price for the whole stay.
    pub total: Price,
}

/// One row of a list-rooms result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomListing {
    /// The hotel owning the room.
    pub hotel_id: HotelId,
    /// The room number.
    pub number: u32,
    /// The room category.
    pub category: RoomCategory,
    /// The price per night.
    pub price: Price,
}

/// One row of a list-bookings result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingListing {
    /// The booking identifier.
    pub booking_id: BookingId,
    /// The owning customer.
    pub customer_id: CustomerId,
    /// The booked period.
    pub range: DateRange,
}

/// Collects every available room in a city for a category and period.
///
/// A room qualifies when its hotel's city matches exactly
/// (case-sensitive), its category matches and no booking attached to it
/// overlaps the range.
///
/// # Arguments
///
/// * `state` - The system state to query
/// * `city` - The city to search
/// * `category` - The requested room category
/// * `range` - The requested period
///
/// # Returns
///
/// Matching rooms sorted ascending by `(hotel ID, room number)`.
#[must_use]
pub fn find_available(
    state: &SystemState,
    city: &CityName,
    category: RoomCategory,
    range: &DateRange,
) -> Vec<AvailableRoom> {
    let mut rows: Vec<AvailableRoom> = state
        .inventory
        .hotels()
        .filter(|hotel| hotel.city() == city)
        .flat_map(|hotel| hotel.rooms().map(move |room| (hotel.id(), room)))
        .filter(|(_, room)| {
            room.category() == category && room.is_available(&state.ledger, range)
        })
        .map(|(hotel_id, room)| AvailableRoom {
            hotel_id,
            number: room.number(),
            price: room.price(),
        })
        .collect();

    rows.sort_by_key(|row| (row.hotel_id, row.number));
    rows
}

/// Finds the single cheapest available room in a city for a category and
/// period.
///
/// The total price is `price per night x nights`. On an exact total-price
/// tie the lower hotel ID wins, then the lower room number. An empty
/// candidate set yields `Ok(None)`, not an error.
///
/// # Arguments
///
/// * `state` - The system state to query
/// * `city` - The city to search
/// * `category` - The requested room category
/// * `range` - The requested period
///
/// # Errors
///
/// Returns `DomainError::ArithmeticOverflow` if a total price does not
/// fit in 64-bit cents.
pub fn find_cheapest(
    state: &SystemState,
    city: &CityName,
    category: RoomCategory,
    range: &DateRange,
) -> Result<Option<CheapestQuote>, DomainError> {
    let nights: i64 = range.nights();
    let mut best: Option<(Price, HotelId, u32)> = None;

    for row in find_available(state, city, category, range) {
        let total: Price = row.price.total_for_nights(nights)?;
        let key: (Price, HotelId, u32) = (total, row.hotel_id, row.number);
        if best.is_none_or(|current| key < current) {
            best = Some(key);
        }
    }

    Ok(best.map(|(total, hotel_id, number)| CheapestQuote {
        hotel_id,
        number,
        total,
    }))
}

/// Lists every room of every hotel.
///
/// # Returns
///
/// All rooms sorted ascending by `(hotel ID, room number)`.
#[must_use]
pub fn list_rooms(state: &SystemState) -> Vec<RoomListing> {
    let mut rows: Vec<RoomListing> = state
        .inventory
        .hotels()
        .flat_map(|hotel| {
            hotel.rooms().map(move |room| RoomListing {
                hotel_id: hotel.id(),
                number: room.number(),
                category: room.category(),
                price: room.price(),
            })
        })
        .collect();

    rows.sort_by_key(|row| (row.hotel_id, row.number));
    rows
}

/// Lists all active bookings, sorted ascending by booking ID.
///
/// Cancelled bookings are filtered out.
#[must_use]
pub fn list_bookings(state: &SystemState) -> Vec<BookingListing> {
    state
        .ledger
        .active_bookings()
        .into_iter()
        .map(|booking| BookingListing {
            booking_id: booking.booking_id(),
            customer_id: booking.customer_id(),
            range: booking.range(),
        })
        .collect()
}
