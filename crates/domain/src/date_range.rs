// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A half-open date interval `[start, end)`.
///
/// The start date is included, the end date is excluded. A guest staying
/// `[2025-08-01, 2025-08-03)` occupies the nights of the 1st and the 2nd
/// and the room is free again on the 3rd.
///
/// ## Invariants
///
/// - `start < end` strictly; construction fails otherwise
/// - Immutable value type with no side effects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    /// First occupied date (inclusive).
    start: NaiveDate,
    /// First free date (exclusive).
    end: NaiveDate,
}

impl DateRange {
    /// Creates a new `DateRange`.
    ///
    /// # Arguments
    ///
    /// * `start` - The first occupied date (inclusive)
    /// * `end` - The first free date (exclusive)
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDateRange` unless `start < end` strictly.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DomainError> {
        if start < end {
            Ok(Self { start, end })
        } else {
            Err(DomainError::InvalidDateRange { start, end })
        }
    }

    /// Returns the first occupied date.
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Returns the first free date.
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Checks whether two half-open ranges share at least one day.
    ///
    /// Adjacent ranges such as `[1, 5)` and `[5, 9)` do NOT overlap.
    /// The predicate is commutative.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Returns the number of nights covered by this range.
    ///
    /// Always at least 1 for a successfully constructed range.
    #[must_use]
    pub const fn nights(&self) -> i64 {
        self.end.signed_duration_since(self.start).num_days()
    }
}
