// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    add_hotel, add_room, august, book, city, create_test_state, hotel_id, price,
};
use crate::{
    AvailableRoom, BookingListing, CheapestQuote, RoomListing, SystemState, find_available,
    find_cheapest, list_bookings, list_rooms,
};
use innkeep_domain::{BookingId, CustomerId, RoomCategory};

#[test]
fn test_find_available_matches_city_and_category() {
    let mut state: SystemState = create_test_state();
    add_room(&mut state, 11, 102, RoomCategory::Double, "20.00");
    add_hotel(&mut state, 12, "Hamburg");
    add_room(&mut state, 12, 101, RoomCategory::Single, "9.99");

    let rows: Vec<AvailableRoom> = find_available(
        &state,
        &city("Berlin"),
        RoomCategory::Single,
        &august(1, 5),
    );

    assert_eq!(
        rows,
        vec![AvailableRoom {
            hotel_id: hotel_id(11),
            number: 101,
            price: price("11.99"),
        }]
    );
}

#[test]
fn test_find_available_city_match_is_case_sensitive() {
    let state: SystemState = create_test_state();

    let rows: Vec<AvailableRoom> = find_available(
        &state,
        &city("berlin"),
        RoomCategory::Single,
        &august(1, 5),
    );

    assert!(rows.is_empty());
}

#[test]
fn test_find_available_excludes_booked_rooms() {
    let mut state: SystemState = create_test_state();
    book(&mut state, 11, 101, august(1, 12), "Alice", "Smith");

    let overlapping: Vec<AvailableRoom> = find_available(
        &state,
        &city("Berlin"),
        RoomCategory::Single,
        &august(11, 14),
    );
    assert!(overlapping.is_empty());

    // The adjacent range starting at the checkout day is free.
    let adjacent: Vec<AvailableRoom> = find_available(
        &state,
        &city("Berlin"),
        RoomCategory::Single,
        &august(12, 14),
    );
    assert_eq!(adjacent.len(), 1);
}

#[test]
fn test_find_available_sorts_by_hotel_then_room() {
    let mut state: SystemState = SystemState::new();
    add_hotel(&mut state, 20, "Berlin");
    add_hotel(&mut state, 3, "Berlin");
    add_room(&mut state, 20, 5, RoomCategory::Single, "10.00");
    add_room(&mut state, 3, 9, RoomCategory::Single, "10.00");
    add_room(&mut state, 3, 2, RoomCategory::Single, "10.00");

    let rows: Vec<AvailableRoom> = find_available(
        &state,
        &city("Berlin"),
        RoomCategory::Single,
        &august(1, 5),
    );

    let order: Vec<(u32, u32)> = rows
        .iter()
        .map(|row| (row.hotel_id.value(), row.number))
        .collect();
    assert_eq!(order, vec![(3, 2), (3, 9), (20, 5)]);
}

#[test]
fn test_find_cheapest_multiplies_price_by_nights() {
    let state: SystemState = create_test_state();

    let quote: Option<CheapestQuote> = find_cheapest(
        &state,
        &city("Berlin"),
        RoomCategory::Single,
        &august(1, 12),
    )
    .unwrap();

    // 11 nights at 11.99 is 131.89.
    assert_eq!(
        quote,
        Some(CheapestQuote {
            hotel_id: hotel_id(11),
            number: 101,
            total: price("131.89"),
        })
    );
}

#[test]
fn test_find_cheapest_prefers_lower_total() {
    let mut state: SystemState = create_test_state();
    add_room(&mut state, 11, 102, RoomCategory::Single, "10.50");

    let quote: Option<CheapestQuote> = find_cheapest(
        &state,
        &city("Berlin"),
        RoomCategory::Single,
        &august(1, 5),
    )
    .unwrap();

    assert_eq!(
        quote,
        Some(CheapestQuote {
            hotel_id: hotel_id(11),
            number: 102,
            total: price("42.00"),
        })
    );
}

#[test]
fn test_find_cheapest_tie_breaks_on_hotel_then_room() {
    let mut state: SystemState = SystemState::new();
    add_hotel(&mut state, 5, "Berlin");
    add_hotel(&mut state, 3, "Berlin");
    add_room(&mut state, 5, 10, RoomCategory::Double, "50.00");
    add_room(&mut state, 3, 1, RoomCategory::Double, "50.00");

    let quote: Option<CheapestQuote> = find_cheapest(
        &state,
        &city("Berlin"),
        RoomCategory::Double,
        &august(1, 3),
    )
    .unwrap();

    // Equal totals: the lower hotel ID wins.
    assert_eq!(
        quote,
        Some(CheapestQuote {
            hotel_id: hotel_id(3),
            number: 1,
            total: price("100.00"),
        })
    );
}

#[test]
fn test_find_cheapest_tie_breaks_on_room_within_hotel() {
    let mut state: SystemState = SystemState::new();
    add_hotel(&mut state, 3, "Berlin");
    add_room(&mut state, 3, 10, RoomCategory::Double, "50.00");
    add_room(&mut state, 3, 1, RoomCategory::Double, "50.00");

    let quote: Option<CheapestQuote> = find_cheapest(
        &state,
        &city("Berlin"),
        RoomCategory::Double,
        &august(1, 3),
    )
    .unwrap();

    assert_eq!(quote.unwrap().number, 1);
}

#[test]
fn test_find_cheapest_empty_set_yields_none() {
    let state: SystemState = SystemState::new();

    let quote: Option<CheapestQuote> = find_cheapest(
        &state,
        &city("Berlin"),
        RoomCategory::Single,
        &august(1, 5),
    )
    .unwrap();

    assert_eq!(quote, None);
}

#[test]
fn test_list_rooms_covers_all_hotels_sorted() {
    let mut state: SystemState = SystemState::new();
    add_hotel(&mut state, 12, "Hamburg");
    add_hotel(&mut state, 11, "Berlin");
    add_room(&mut state, 12, 1, RoomCategory::Suite, "99.00");
    add_room(&mut state, 11, 102, RoomCategory::Double, "20.00");
    add_room(&mut state, 11, 101, RoomCategory::Single, "11.99");

    let rows: Vec<RoomListing> = list_rooms(&state);

    let order: Vec<(u32, u32)> = rows
        .iter()
        .map(|row| (row.hotel_id.value(), row.number))
        .collect();
    assert_eq!(order, vec![(11, 101), (11, 102), (12, 1)]);
    assert_eq!(rows[0].category, RoomCategory::Single);
    assert_eq!(rows[2].price, price("99.00"));
}

#[test]
fn test_list_bookings_filters_cancelled_and_sorts() {
    let mut state: SystemState = create_test_state();
    add_room(&mut state, 11, 102, RoomCategory::Single, "12.00");
    add_room(&mut state, 11, 103, RoomCategory::Single, "13.00");
    book(&mut state, 11, 101, august(1, 5), "Alice", "Smith");
    book(&mut state, 11, 102, august(1, 5), "Bob", "Jones");
    book(&mut state, 11, 103, august(1, 5), "Cara", "Miles");

    crate::apply(
        &mut state,
        crate::Command::Cancel {
            booking_id: BookingId::new(2),
            customer_id: CustomerId::new(2),
        },
    )
    .unwrap();

    let rows: Vec<BookingListing> = list_bookings(&state);

    let ids: Vec<u32> = rows.iter().map(|row| row.booking_id.value()).collect();
    assert_eq!(ids, vec![1, 3]);
    assert_eq!(rows[0].customer_id, CustomerId::new(1));
    assert_eq!(rows[0].range, august(1, 5));
}
