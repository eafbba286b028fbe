// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Command, CommandOutcome, SystemState, apply};
use chrono::NaiveDate;
use innkeep_domain::{CityName, DateRange, GuestName, HotelId, Price, RoomCategory};

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// A range of nights within August 2025.
pub fn august(from_day: u32, to_day: u32) -> DateRange {
    DateRange::new(date(2025, 8, from_day), date(2025, 8, to_day)).unwrap()
}

pub fn hotel_id(value: u32) -> HotelId {
    HotelId::new(value).unwrap()
}

pub fn city(value: &str) -> CityName {
    CityName::new(value).unwrap()
}

pub fn guest(first: &str, last: &str) -> GuestName {
    GuestName::new(first, last).unwrap()
}

pub fn price(value: &str) -> Price {
    value.parse().unwrap()
}

pub fn add_hotel(state: &mut SystemState, id: u32, city_name: &str) {
    let outcome: CommandOutcome = apply(
        state,
        Command::AddHotel {
            hotel_id: hotel_id(id),
            city: city(city_name),
        },
    )
    .unwrap();
    assert_eq!(outcome, CommandOutcome::Done);
}

pub fn add_room(state: &mut SystemState, id: u32, number: u32, category: RoomCategory, rate: &str) {
    let outcome: CommandOutcome = apply(
        state,
        Command::AddRoom {
            hotel_id: hotel_id(id),
            number,
            category,
            price: price(rate),
        },
    )
    .unwrap();
    assert_eq!(outcome, CommandOutcome::Done);
}

pub fn book(
    state: &mut SystemState,
    id: u32,
    number: u32,
    range: DateRange,
    first: &str,
    last: &str,
) -> CommandOutcome {
    apply(
        state,
        Command::Book {
            hotel_id: hotel_id(id),
            number,
            range,
            guest: guest(first, last),
        },
    )
    .unwrap()
}

/// A state with hotel 11 in Berlin carrying room 101 (Single, 11.99).
pub fn create_test_state() -> SystemState {
    let mut state: SystemState = SystemState::new();
    add_hotel(&mut state, 11, "Berlin");
    add_room(&mut state, 11, 101, RoomCategory::Single, "11.99");
    state
}
