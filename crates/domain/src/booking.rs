// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::date_range::DateRange;
use crate::types::{BookingId, CustomerId};
use serde::{Deserialize, Serialize};

/// Represents a booking made by a customer.
///
/// A booking is created only by the booking ledger and referenced by
/// exactly one room, which stores the booking ID rather than the record
/// itself. The customer is likewise referenced by ID and resolved through
/// the customer registry.
///
/// ## Lifecycle
///
/// `Active -> Cancelled`, one-way. Once cancelled, a booking is never
/// reactivated and its ID is never reused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    /// The unique booking identifier.
    booking_id: BookingId,
    /// The owning customer.
    customer_id: CustomerId,
    /// The booked period.
    range: DateRange,
    /// Whether the booking has been cancelled.
    cancelled: bool,
}

impl Booking {
    /// Creates a new active booking.
    ///
    /// # Arguments
    ///
    /// * `booking_id` - The unique booking identifier
    /// * `customer_id` - The owning customer
    /// * `range` - The booked period
    #[must_use]
    pub const fn new(booking_id: BookingId, customer_id: CustomerId, range: DateRange) -> Self {
        Self {
            booking_id,
            customer_id,
            range,
            cancelled: false,
        }
    }

    /// Returns the booking identifier.
    #[must_use]
    pub const fn booking_id(&self) -> BookingId {
        self.booking_id
    }

    /// Returns the owning customer's identifier.
    #[must_use]
    pub const fn customer_id(&self) -> CustomerId {
        self.customer_id
    }

    /// Returns the booked period.
    #[must_use]
    pub const fn range(&self) -> DateRange {
        self.range
    }

    /// Checks whether the booking has been cancelled.
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Cancels the booking. The transition is permanent.
    pub const fn cancel(&mut self) {
        self.cancelled = true;
    }
}
