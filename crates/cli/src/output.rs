// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Console formatting for command responses.
//!
//! Hotel IDs print zero-padded to five digits and prices with two
//! decimals and a trailing euro sign, matching the line protocol:
//!
//! ```text
//! 00011 101 Single 11.99€
//! ```

use innkeep::CommandOutcome;
use innkeep_domain::DomainError;

/// Prints the response rows for a successful command.
pub fn print_outcome(outcome: &CommandOutcome) {
    match outcome {
        CommandOutcome::Done => println!("OK"),
        CommandOutcome::Booked {
            booking_id,
            customer_id,
        } => println!("{booking_id} {customer_id}"),
        CommandOutcome::AvailableRooms(rows) => {
            for row in rows {
                println!("{} {} {}€", row.hotel_id, row.number, row.price);
            }
        }
        CommandOutcome::Cheapest(quote) => {
            // No candidates means no output, not an error.
            if let Some(quote) = quote {
                println!("{} {} {}€", quote.hotel_id, quote.number, quote.total);
            }
        }
        CommandOutcome::Rooms(rows) => {
            for row in rows {
                println!(
                    "{} {} {} {}€",
                    row.hotel_id, row.number, row.category, row.price
                );
            }
        }
        CommandOutcome::Bookings(rows) => {
            for row in rows {
                println!(
                    "{} {} {} {}",
                    row.booking_id,
                    row.customer_id,
                    row.range.start(),
                    row.range.end()
                );
            }
        }
    }
}

/// Maps a rejected command to its console message.
///
/// One message per error kind, regardless of which command tripped it.
#[must_use]
pub const fn failure_message(err: &DomainError) -> &'static str {
    match err {
        DomainError::HotelNotFound(_) => "Error, hotel not found",
        DomainError::RoomNotFound { .. } => "Error, room not found",
        DomainError::BookingNotFound(_) => "Error, booking not found",
        DomainError::DuplicateHotel(_) => "Error, hotel already exists",
        DomainError::DuplicateRoom { .. } => "Error, room already exists",
        DomainError::RoomUnavailable { .. } => "Error, room not available",
        DomainError::CustomerMismatch { .. } => "Error, customer mismatch",
        DomainError::InvalidHotelId(_) => "Error, invalid HotelID",
        DomainError::InvalidPrice(_) => "Error, price must be greater than 0",
        DomainError::InvalidCategory(_) => "Error, unknown category",
        DomainError::InvalidDateRange { .. } => "Error, invalid date range",
        DomainError::InvalidCity(_) | DomainError::InvalidGuestName(_) => "Error, invalid input",
        DomainError::ArithmeticOverflow { .. } => "Error, invalid numbers",
    }
}
