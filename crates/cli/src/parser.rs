// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Line parsing for the interactive console.
//!
//! A command keyword is one or two tokens; two-token keywords are matched
//! first (`add hotel`, `find available`, ...), then single-token ones
//! (`book`, `cancel`, `quit`). All argument validation happens here so
//! the engine only ever sees typed domain values.

use chrono::NaiveDate;
use innkeep::Command;
use innkeep_domain::{
    BookingId, CityName, CustomerId, DateRange, GuestName, HotelId, Price, RoomCategory,
};
use thiserror::Error;

/// A successfully parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine {
    /// A command for the booking engine.
    Command(Command),
    /// The session-ending `quit` keyword.
    Quit,
}

/// Parse failures, each carrying its console message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Input does not start with a known keyword.
    #[error("Error, unknown command")]
    UnknownCommand,
    /// Wrong shape for `add hotel`.
    #[error("Error, usage: add hotel <HotelID> <City>")]
    UsageAddHotel,
    /// Wrong shape for `remove hotel`.
    #[error("Error, usage: remove hotel <HotelID>")]
    UsageRemoveHotel,
    /// Wrong shape for `add room`.
    #[error("Error, usage: add room <HotelID> <RoomId> <Category> <Price>")]
    UsageAddRoom,
    /// Wrong shape for `remove room`.
    #[error("Error, usage: remove room <HotelID> <RoomId>")]
    UsageRemoveRoom,
    /// Wrong shape for `find available`.
    #[error("Error, find available <City> <Category> <Start> <End>")]
    UsageFindAvailable,
    /// Wrong shape for `find cheapest`.
    #[error("Error, find cheapest <City> <Category> <Start> <End>")]
    UsageFindCheapest,
    /// Wrong shape for `book`.
    #[error("Error, invalid format")]
    InvalidBookFormat,
    /// Wrong shape for `cancel`.
    #[error("Error, invalid cancel format")]
    InvalidCancelFormat,
    /// Wrong shape for `list rooms`.
    #[error("Error, invalid input")]
    InvalidListRoomsCommand,
    /// Wrong shape for `list bookings`.
    #[error("Error, invalid list bookings command")]
    InvalidListBookingsCommand,
    /// Wrong shape for `quit`.
    #[error("Error, invalid quit command")]
    InvalidQuitCommand,
    /// A numeric argument failed to parse.
    #[error("Error, invalid number format")]
    InvalidNumberFormat,
    /// A cancel argument failed to parse.
    #[error("Error, invalid numbers")]
    InvalidNumbers,
    /// Hotel ID is malformed or out of range.
    #[error("Error, invalid HotelID")]
    InvalidHotelId,
    /// Room category is not Single, Double or Suite.
    #[error("Error, unknown category")]
    UnknownCategory,
    /// Price is malformed or not positive.
    #[error("Error, price must be greater than 0")]
    InvalidPrice,
    /// A date is not of the form YYYY-MM-DD.
    #[error("Error, invalid date format")]
    InvalidDateFormat,
    /// Booking period start is not before its end.
    #[error("Error, invalid date range")]
    InvalidDateRange,
    /// Search period start is not before its end.
    #[error("Error, start date must be before end date")]
    StartNotBeforeEnd,
}

/// Parses one input line into a command.
///
/// # Errors
///
/// Returns the `ParseError` whose message the console should print; the
/// message set follows the one-error-per-cause taxonomy of the engine.
pub fn parse_line(line: &str) -> Result<ParsedLine, ParseError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    match (tokens.first().copied(), tokens.get(1).copied()) {
        (Some("add"), Some("hotel")) => parse_add_hotel(&tokens),
        (Some("remove"), Some("hotel")) => parse_remove_hotel(&tokens),
        (Some("add"), Some("room")) => parse_add_room(&tokens),
        (Some("remove"), Some("room")) => parse_remove_room(&tokens),
        (Some("list"), Some("rooms")) => parse_list_rooms(&tokens),
        (Some("list"), Some("bookings")) => parse_list_bookings(&tokens),
        (Some("find"), Some("available")) => parse_find(&tokens, FindKind::Available),
        (Some("find"), Some("cheapest")) => parse_find(&tokens, FindKind::Cheapest),
        (Some("book"), _) => parse_book(&tokens),
        (Some("cancel"), _) => parse_cancel(&tokens),
        (Some("quit"), _) => parse_quit(&tokens),
        _ => Err(ParseError::UnknownCommand),
    }
}

fn parse_hotel_id(token: &str) -> Result<HotelId, ParseError> {
    let value: u32 = token.parse().map_err(|_| ParseError::InvalidNumberFormat)?;
    HotelId::new(value).map_err(|_| ParseError::InvalidHotelId)
}

fn parse_date(token: &str) -> Result<NaiveDate, ParseError> {
    token.parse().map_err(|_| ParseError::InvalidDateFormat)
}

fn parse_add_hotel(tokens: &[&str]) -> Result<ParsedLine, ParseError> {
    let &[_, _, id, city] = tokens else {
        return Err(ParseError::UsageAddHotel);
    };
    let hotel_id: HotelId = parse_hotel_id(id)?;
    let city: CityName = CityName::new(city).map_err(|_| ParseError::UsageAddHotel)?;
    Ok(ParsedLine::Command(Command::AddHotel { hotel_id, city }))
}

fn parse_remove_hotel(tokens: &[&str]) -> Result<ParsedLine, ParseError> {
    let &[_, _, id] = tokens else {
        return Err(ParseError::UsageRemoveHotel);
    };
    let value: u32 = id.parse().map_err(|_| ParseError::InvalidHotelId)?;
    let hotel_id: HotelId = HotelId::new(value).map_err(|_| ParseError::InvalidHotelId)?;
    Ok(ParsedLine::Command(Command::RemoveHotel { hotel_id }))
}

fn parse_add_room(tokens: &[&str]) -> Result<ParsedLine, ParseError> {
    let &[_, _, id, number, category, price] = tokens else {
        return Err(ParseError::UsageAddRoom);
    };
    let hotel_id: HotelId = parse_hotel_id(id)?;
    let number: u32 = number.parse().map_err(|_| ParseError::InvalidNumberFormat)?;
    let category: RoomCategory =
        RoomCategory::parse(category).map_err(|_| ParseError::UnknownCategory)?;
    let price: Price = price.parse().map_err(|_| ParseError::InvalidPrice)?;
    Ok(ParsedLine::Command(Command::AddRoom {
        hotel_id,
        number,
        category,
        price,
    }))
}

fn parse_remove_room(tokens: &[&str]) -> Result<ParsedLine, ParseError> {
    let &[_, _, id, number] = tokens else {
        return Err(ParseError::UsageRemoveRoom);
    };
    let hotel_id: HotelId = parse_hotel_id(id)?;
    let number: u32 = number.parse().map_err(|_| ParseError::InvalidNumberFormat)?;
    Ok(ParsedLine::Command(Command::RemoveRoom { hotel_id, number }))
}

fn parse_book(tokens: &[&str]) -> Result<ParsedLine, ParseError> {
    let &[_, id, number, start, end, first, last] = tokens else {
        return Err(ParseError::InvalidBookFormat);
    };
    let value: u32 = id.parse().map_err(|_| ParseError::InvalidNumberFormat)?;
    let hotel_id: HotelId = HotelId::new(value).map_err(|_| ParseError::InvalidHotelId)?;
    let number: u32 = number.parse().map_err(|_| ParseError::InvalidNumberFormat)?;
    let start: NaiveDate = parse_date(start)?;
    let end: NaiveDate = parse_date(end)?;
    let range: DateRange =
        DateRange::new(start, end).map_err(|_| ParseError::InvalidDateRange)?;
    let guest: GuestName =
        GuestName::new(first, last).map_err(|_| ParseError::InvalidBookFormat)?;
    Ok(ParsedLine::Command(Command::Book {
        hotel_id,
        number,
        range,
        guest,
    }))
}

fn parse_cancel(tokens: &[&str]) -> Result<ParsedLine, ParseError> {
    let &[_, booking, customer] = tokens else {
        return Err(ParseError::InvalidCancelFormat);
    };
    let booking: u32 = booking.parse().map_err(|_| ParseError::InvalidNumbers)?;
    let customer: u32 = customer.parse().map_err(|_| ParseError::InvalidNumbers)?;
    Ok(ParsedLine::Command(Command::Cancel {
        booking_id: BookingId::new(booking),
        customer_id: CustomerId::new(customer),
    }))
}

/// Which of the two search commands is being parsed; they share a shape
/// but not their usage messages.
#[derive(Debug, Clone, Copy)]
enum FindKind {
    Available,
    Cheapest,
}

fn parse_find(tokens: &[&str], kind: FindKind) -> Result<ParsedLine, ParseError> {
    let usage = match kind {
        FindKind::Available => ParseError::UsageFindAvailable,
        FindKind::Cheapest => ParseError::UsageFindCheapest,
    };
    let &[_, _, city, category, start, end] = tokens else {
        return Err(usage);
    };
    let city: CityName = CityName::new(city).map_err(|_| usage)?;
    let category: RoomCategory =
        RoomCategory::parse(category).map_err(|_| ParseError::UnknownCategory)?;
    let start: NaiveDate = parse_date(start)?;
    let end: NaiveDate = parse_date(end)?;
    let range: DateRange =
        DateRange::new(start, end).map_err(|_| ParseError::StartNotBeforeEnd)?;
    Ok(ParsedLine::Command(match kind {
        FindKind::Available => Command::FindAvailable {
            city,
            category,
            range,
        },
        FindKind::Cheapest => Command::FindCheapest {
            city,
            category,
            range,
        },
    }))
}

fn parse_list_rooms(tokens: &[&str]) -> Result<ParsedLine, ParseError> {
    if tokens.len() == 2 {
        Ok(ParsedLine::Command(Command::ListRooms))
    } else {
        Err(ParseError::InvalidListRoomsCommand)
    }
}

fn parse_list_bookings(tokens: &[&str]) -> Result<ParsedLine, ParseError> {
    if tokens.len() == 2 {
        Ok(ParsedLine::Command(Command::ListBookings))
    } else {
        Err(ParseError::InvalidListBookingsCommand)
    }
}

fn parse_quit(tokens: &[&str]) -> Result<ParsedLine, ParseError> {
    if tokens.len() == 1 {
        Ok(ParsedLine::Quit)
    } else {
        Err(ParseError::InvalidQuitCommand)
    }
}
