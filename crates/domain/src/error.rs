// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{BookingId, CustomerId, HotelId};
use chrono::NaiveDate;

/// Errors that can occur during domain validation and booking operations.
///
/// Every error kind is distinguishable; callers never receive a generic
/// failure. No variant implies partial mutation - all checks run before
/// the first write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Date range start is not strictly before its end.
    InvalidDateRange {
        /// The requested start date.
        start: NaiveDate,
        /// The requested end date.
        end: NaiveDate,
    },
    /// Price is zero, negative or malformed.
    InvalidPrice(String),
    /// Room category string is not a known category.
    InvalidCategory(String),
    /// Hotel ID is outside `[1, 99999]`.
    InvalidHotelId(u32),
    /// City name is empty or contains whitespace.
    InvalidCity(String),
    /// Customer name component is empty or contains whitespace.
    InvalidGuestName(String),
    /// Arithmetic overflow while computing a derived value.
    ArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
    /// Hotel does not exist.
    HotelNotFound(HotelId),
    /// Room does not exist in the specified hotel.
    RoomNotFound {
        /// The hotel that was searched.
        hotel_id: HotelId,
        /// The missing room number.
        number: u32,
    },
    /// Booking does not exist or is already cancelled.
    BookingNotFound(BookingId),
    /// Hotel already exists.
    DuplicateHotel(HotelId),
    /// Room number already exists in the hotel.
    DuplicateRoom {
        /// The hotel that already has the room.
        hotel_id: HotelId,
        /// The duplicate room number.
        number: u32,
    },
    /// Room has an overlapping booking for the requested range.
    RoomUnavailable {
        /// The hotel of the requested room.
        hotel_id: HotelId,
        /// The requested room number.
        number: u32,
    },
    /// Booking is not owned by the given customer.
    CustomerMismatch {
        /// The booking being cancelled.
        booking_id: BookingId,
        /// The customer ID supplied by the caller.
        customer_id: CustomerId,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDateRange { start, end } => {
                write!(f, "Invalid date range: {start} must be before {end}")
            }
            Self::InvalidPrice(value) => {
                write!(f, "Invalid price '{value}': must be greater than 0 with at most two decimals")
            }
            Self::InvalidCategory(value) => write!(f, "Unknown room category '{value}'"),
            Self::InvalidHotelId(value) => {
                write!(
                    f,
                    "Invalid hotel ID {value}: must be between {} and {}",
                    HotelId::MIN,
                    HotelId::MAX
                )
            }
            Self::InvalidCity(value) => {
                write!(f, "Invalid city '{value}': must be a single non-empty token")
            }
            Self::InvalidGuestName(value) => {
                write!(f, "Invalid name '{value}': must be a single non-empty token")
            }
            Self::ArithmeticOverflow { operation } => {
                write!(f, "Arithmetic overflow while {operation}")
            }
            Self::HotelNotFound(hotel_id) => {
                write!(f, "Hotel {} not found", hotel_id.value())
            }
            Self::RoomNotFound { hotel_id, number } => {
                write!(f, "Room {number} not found in hotel {}", hotel_id.value())
            }
            Self::BookingNotFound(booking_id) => {
                write!(f, "Booking {booking_id} not found")
            }
            Self::DuplicateHotel(hotel_id) => {
                write!(f, "Hotel {} already exists", hotel_id.value())
            }
            Self::DuplicateRoom { hotel_id, number } => {
                write!(
                    f,
                    "Room {number} already exists in hotel {}",
                    hotel_id.value()
                )
            }
            Self::RoomUnavailable { hotel_id, number } => {
                write!(
                    f,
                    "Room {number} in hotel {} is not available for the requested range",
                    hotel_id.value()
                )
            }
            Self::CustomerMismatch {
                booking_id,
                customer_id,
            } => {
                write!(
                    f,
                    "Booking {booking_id} is not owned by customer {customer_id}"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
