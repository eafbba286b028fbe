// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::hotel::Hotel;
use crate::room::Room;
use crate::search::{
    AvailableRoom, BookingListing, CheapestQuote, RoomListing, find_available, find_cheapest,
    list_bookings, list_rooms,
};
use crate::state::SystemState;
use innkeep_domain::{Booking, BookingId, CustomerId, DomainError, HotelId};

/// The successful result of applying a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The mutation completed; there is nothing to report beyond success.
    Done,
    /// A booking was created.
    Booked {
        /// The new booking's identifier.
        booking_id: BookingId,
        /// The booking customer's identifier.
        customer_id: CustomerId,
    },
    /// Rows of a find-available query.
    AvailableRooms(Vec<AvailableRoom>),
    /// Result of a find-cheapest query; `None` when nothing matched.
    Cheapest(Option<CheapestQuote>),
    /// Rows of a list-rooms query.
    Rooms(Vec<RoomListing>),
    /// Rows of a list-bookings query.
    Bookings(Vec<BookingListing>),
}

/// Applies a command to the system state.
///
/// Every mutating command validates completely before its first write, so
/// a returned error guarantees the state is unchanged. The compound
/// commands (`RemoveHotel`, `Cancel`) update the inventory and the ledger
/// inside this one call; no caller can observe the containers disagreeing.
///
/// # Arguments
///
/// * `state` - The system state to query or mutate
/// * `command` - The command to apply
///
/// # Errors
///
/// Returns a `CoreError` wrapping the specific domain rule that failed;
/// see `DomainError` for the taxonomy.
pub fn apply(state: &mut SystemState, command: Command) -> Result<CommandOutcome, CoreError> {
    match command {
        Command::AddHotel { hotel_id, city } => {
            if !state.inventory.add_hotel(Hotel::new(hotel_id, city)) {
                return Err(CoreError::DomainViolation(DomainError::DuplicateHotel(
                    hotel_id,
                )));
            }
            Ok(CommandOutcome::Done)
        }
        Command::RemoveHotel { hotel_id } => remove_hotel(state, hotel_id),
        Command::AddRoom {
            hotel_id,
            number,
            category,
            price,
        } => {
            let hotel: &mut Hotel = state
                .inventory
                .hotel_mut(hotel_id)
                .ok_or(DomainError::HotelNotFound(hotel_id))?;
            if !hotel.add_room(Room::new(number, category, price)) {
                return Err(CoreError::DomainViolation(DomainError::DuplicateRoom {
                    hotel_id,
                    number,
                }));
            }
            Ok(CommandOutcome::Done)
        }
        Command::RemoveRoom { hotel_id, number } => {
            let hotel: &mut Hotel = state
                .inventory
                .hotel_mut(hotel_id)
                .ok_or(DomainError::HotelNotFound(hotel_id))?;
            hotel
                .remove_room(number)
                .ok_or(DomainError::RoomNotFound { hotel_id, number })?;
            Ok(CommandOutcome::Done)
        }
        Command::Book {
            hotel_id,
            number,
            range,
            guest,
        } => {
            let room: &mut Room = state
                .inventory
                .hotel_mut(hotel_id)
                .ok_or(DomainError::HotelNotFound(hotel_id))?
                .room_mut(number)
                .ok_or(DomainError::RoomNotFound { hotel_id, number })?;
            if !room.is_available(&state.ledger, &range) {
                return Err(CoreError::DomainViolation(DomainError::RoomUnavailable {
                    hotel_id,
                    number,
                }));
            }

            // All checks passed; the customer counter only moves now.
            let customer_id: CustomerId = state.customers.get_or_add(guest);
            let booking_id: BookingId = state.ledger.create(customer_id, range);
            room.attach_booking(booking_id);

            Ok(CommandOutcome::Booked {
                booking_id,
                customer_id,
            })
        }
        Command::Cancel {
            booking_id,
            customer_id,
        } => {
            let booking: &Booking = state
                .ledger
                .get(booking_id)
                .filter(|booking| !booking.is_cancelled())
                .ok_or(DomainError::BookingNotFound(booking_id))?;
            // Ownership is checked strictly after existence.
            if booking.customer_id() != customer_id {
                return Err(CoreError::DomainViolation(DomainError::CustomerMismatch {
                    booking_id,
                    customer_id,
                }));
            }

            // Detach the room-side reference and mark the ledger entry in
            // the same call, so the two indices never diverge.
            state.inventory.detach_booking(booking_id);
            state.ledger.cancel(booking_id);
            Ok(CommandOutcome::Done)
        }
        Command::FindAvailable {
            city,
            category,
            range,
        } => Ok(CommandOutcome::AvailableRooms(find_available(
            state, &city, category, &range,
        ))),
        Command::FindCheapest {
            city,
            category,
            range,
        } => {
            let quote: Option<CheapestQuote> = find_cheapest(state, &city, category, &range)?;
            Ok(CommandOutcome::Cheapest(quote))
        }
        Command::ListRooms => Ok(CommandOutcome::Rooms(list_rooms(state))),
        Command::ListBookings => Ok(CommandOutcome::Bookings(list_bookings(state))),
    }
}

/// Removes a hotel, cancelling every booking attached to its rooms.
///
/// Cancellation is idempotent per booking (already-cancelled entries stay
/// cancelled); the hotel is removed in the same call, so the ledger and
/// the inventory cannot be observed disagreeing.
fn remove_hotel(state: &mut SystemState, hotel_id: HotelId) -> Result<CommandOutcome, CoreError> {
    let hotel: &Hotel = state
        .inventory
        .hotel(hotel_id)
        .ok_or(DomainError::HotelNotFound(hotel_id))?;

    let booking_ids: Vec<BookingId> = hotel
        .rooms()
        .flat_map(|room| room.booking_ids().iter().copied())
        .collect();

    for booking_id in booking_ids {
        state.ledger.cancel(booking_id);
    }
    state.inventory.remove_hotel(hotel_id);
    Ok(CommandOutcome::Done)
}
