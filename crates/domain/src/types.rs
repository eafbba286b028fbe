// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::validation::{validate_city_token, validate_name_token};
use serde::{Deserialize, Serialize};

/// Represents a hotel identifier.
///
/// Hotel IDs are bounded integers in `[1, 99999]` and are displayed
/// zero-padded to five digits.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct HotelId {
    /// The numeric identifier (1-99999).
    value: u32,
}

impl HotelId {
    /// Smallest valid hotel ID.
    pub const MIN: u32 = 1;
    /// Largest valid hotel ID.
    pub const MAX: u32 = 99_999;

    /// Creates a new `HotelId`.
    ///
    /// # Arguments
    ///
    /// * `value` - The numeric identifier (must be between 1 and 99999 inclusive)
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidHotelId` if the value is out of range.
    pub const fn new(value: u32) -> Result<Self, DomainError> {
        if value >= Self::MIN && value <= Self::MAX {
            Ok(Self { value })
        } else {
            Err(DomainError::InvalidHotelId(value))
        }
    }

    /// Returns the numeric identifier.
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.value
    }
}

impl std::fmt::Display for HotelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:05}", self.value)
    }
}

/// Represents a customer identifier.
///
/// Customer IDs are assigned sequentially by the customer registry,
/// starting at 1, in first-seen order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct CustomerId {
    /// The numeric identifier.
    value: u32,
}

impl CustomerId {
    /// Creates a new `CustomerId`.
    ///
    /// # Arguments
    ///
    /// * `value` - The numeric identifier
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self { value }
    }

    /// Returns the numeric identifier.
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.value
    }
}

impl std::fmt::Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Represents a booking identifier.
///
/// Booking IDs are assigned sequentially by the booking ledger, starting
/// at 1, and are never reused - not even after cancellation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct BookingId {
    /// The numeric identifier.
    value: u32,
}

impl BookingId {
    /// Creates a new `BookingId`.
    ///
    /// # Arguments
    ///
    /// * `value` - The numeric identifier
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self { value }
    }

    /// Returns the numeric identifier.
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.value
    }
}

impl std::fmt::Display for BookingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Represents a room category.
///
/// Categories are a fixed closed set. Parsing ignores case; output uses
/// the canonical labels `Single`, `Double` and `Suite`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomCategory {
    /// One-person room.
    Single,
    /// Two-person room.
    Double,
    /// Multi-room unit.
    Suite,
}

impl RoomCategory {
    /// Parses a room category from a string, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCategory` if the string does not match
    /// a valid category.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s.to_lowercase().as_str() {
            "single" => Ok(Self::Single),
            "double" => Ok(Self::Double),
            "suite" => Ok(Self::Suite),
            _ => Err(DomainError::InvalidCategory(s.to_string())),
        }
    }

    /// Returns the canonical label of this category.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "Single",
            Self::Double => "Double",
            Self::Suite => "Suite",
        }
    }
}

impl std::fmt::Display for RoomCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Represents a city name.
///
/// City names are single tokens with no embedded whitespace. This is a
/// formatting contract the domain validates itself, not just the parser.
/// Comparison is case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CityName {
    /// The city name (single token).
    value: String,
}

impl CityName {
    /// Creates a new `CityName`.
    ///
    /// # Arguments
    ///
    /// * `value` - The city name (single token, no whitespace)
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCity` if the name is empty or contains
    /// whitespace.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        validate_city_token(value)?;
        Ok(Self {
            value: value.to_string(),
        })
    }

    /// Returns the city name.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for CityName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Represents a customer name pair.
///
/// The `(first, last)` pair is the customer identity key: two customers
/// with identical names are the same customer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GuestName {
    /// The customer's first name.
    first: String,
    /// The customer's last name.
    last: String,
}

impl GuestName {
    /// Creates a new `GuestName`.
    ///
    /// # Arguments
    ///
    /// * `first` - The customer's first name (non-empty single token)
    /// * `last` - The customer's last name (non-empty single token)
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidGuestName` if either name component is
    /// empty or contains whitespace.
    pub fn new(first: &str, last: &str) -> Result<Self, DomainError> {
        validate_name_token(first)?;
        validate_name_token(last)?;
        Ok(Self {
            first: first.to_string(),
            last: last.to_string(),
        })
    }

    /// Returns the first name.
    #[must_use]
    pub fn first(&self) -> &str {
        &self.first
    }

    /// Returns the last name.
    #[must_use]
    pub fn last(&self) -> &str {
        &self.last
    }
}

impl std::fmt::Display for GuestName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.first, self.last)
    }
}

/// Represents a registered customer.
///
/// A customer record is created exactly once per distinct name pair by the
/// customer registry, is immutable thereafter and is never deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    /// The stable numeric identifier assigned on first sight.
    customer_id: CustomerId,
    /// The identity key.
    name: GuestName,
}

// Customer equality is based solely on the name pair. The ID is assigned
// state, not identity.
impl PartialEq for Customer {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Customer {}

impl std::hash::Hash for Customer {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl Customer {
    /// Creates a new `Customer`.
    ///
    /// # Arguments
    ///
    /// * `customer_id` - The stable numeric identifier
    /// * `name` - The identity key
    #[must_use]
    pub const fn new(customer_id: CustomerId, name: GuestName) -> Self {
        Self { customer_id, name }
    }

    /// Returns the customer's identifier.
    #[must_use]
    pub const fn customer_id(&self) -> CustomerId {
        self.customer_id
    }

    /// Returns the customer's name.
    #[must_use]
    pub const fn name(&self) -> &GuestName {
        &self.name
    }
}
