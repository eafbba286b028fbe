// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DateRange, DomainError};
use chrono::NaiveDate;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn test_valid_range_construction_succeeds() {
    let range: DateRange = DateRange::new(date(2025, 8, 1), date(2025, 8, 12)).unwrap();
    assert_eq!(range.start(), date(2025, 8, 1));
    assert_eq!(range.end(), date(2025, 8, 12));
}

#[test]
fn test_empty_range_construction_fails() {
    let result: Result<DateRange, DomainError> =
        DateRange::new(date(2025, 8, 1), date(2025, 8, 1));
    assert_eq!(
        result,
        Err(DomainError::InvalidDateRange {
            start: date(2025, 8, 1),
            end: date(2025, 8, 1),
        })
    );
}

#[test]
fn test_inverted_range_construction_fails() {
    let result: Result<DateRange, DomainError> =
        DateRange::new(date(2025, 8, 12), date(2025, 8, 1));
    assert!(result.is_err());
}

#[test]
fn test_overlaps_is_symmetric() {
    let a: DateRange = DateRange::new(date(2025, 8, 1), date(2025, 8, 10)).unwrap();
    let b: DateRange = DateRange::new(date(2025, 8, 5), date(2025, 8, 15)).unwrap();
    let c: DateRange = DateRange::new(date(2025, 9, 1), date(2025, 9, 2)).unwrap();

    assert!(a.overlaps(&b));
    assert!(b.overlaps(&a));
    assert!(!a.overlaps(&c));
    assert!(!c.overlaps(&a));
}

#[test]
fn test_adjacent_half_open_ranges_do_not_overlap() {
    let first: DateRange = DateRange::new(date(2025, 8, 1), date(2025, 8, 5)).unwrap();
    let second: DateRange = DateRange::new(date(2025, 8, 5), date(2025, 8, 9)).unwrap();

    assert!(!first.overlaps(&second));
    assert!(!second.overlaps(&first));
}

#[test]
fn test_contained_range_overlaps() {
    let outer: DateRange = DateRange::new(date(2025, 8, 1), date(2025, 8, 31)).unwrap();
    let inner: DateRange = DateRange::new(date(2025, 8, 10), date(2025, 8, 11)).unwrap();

    assert!(outer.overlaps(&inner));
    assert!(inner.overlaps(&outer));
}

#[test]
fn test_identical_ranges_overlap() {
    let a: DateRange = DateRange::new(date(2025, 8, 1), date(2025, 8, 5)).unwrap();
    let b: DateRange = DateRange::new(date(2025, 8, 1), date(2025, 8, 5)).unwrap();

    assert!(a.overlaps(&b));
}

#[test]
fn test_nights_counts_whole_days() {
    let one_night: DateRange = DateRange::new(date(2025, 8, 1), date(2025, 8, 2)).unwrap();
    assert_eq!(one_night.nights(), 1);

    let eleven_nights: DateRange = DateRange::new(date(2025, 8, 1), date(2025, 8, 12)).unwrap();
    assert_eq!(eleven_nights.nights(), 11);
}

#[test]
fn test_nights_across_month_boundary() {
    let range: DateRange = DateRange::new(date(2025, 8, 30), date(2025, 9, 2)).unwrap();
    assert_eq!(range.nights(), 3);
}
