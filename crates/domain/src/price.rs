// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Fixed-point money representation.
//!
//! Prices are stored as integer cents so that total-price comparisons in
//! the cheapest-room search are exact. Floating point never enters the
//! domain; two decimals appear only when formatting for display.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A money amount in integer cents.
///
/// Used both for per-night room prices (always greater than zero) and for
/// derived stay totals.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Price {
    /// The amount in cents.
    cents: u64,
}

impl Price {
    /// Creates a `Price` from a cent amount.
    ///
    /// # Arguments
    ///
    /// * `cents` - The amount in cents (must be greater than 0)
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPrice` if the amount is zero.
    pub fn from_cents(cents: u64) -> Result<Self, DomainError> {
        if cents == 0 {
            return Err(DomainError::InvalidPrice(String::from("0")));
        }
        Ok(Self { cents })
    }

    /// Returns the amount in cents.
    #[must_use]
    pub const fn cents(&self) -> u64 {
        self.cents
    }

    /// Computes the total price for a stay of the given number of nights.
    ///
    /// # Arguments
    ///
    /// * `nights` - The number of nights (at least 1 for any valid range)
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ArithmeticOverflow` if the multiplication does
    /// not fit in 64 bits.
    pub fn total_for_nights(self, nights: i64) -> Result<Self, DomainError> {
        let overflow = || DomainError::ArithmeticOverflow {
            operation: format!("multiplying {} cents by {nights} nights", self.cents),
        };
        let nights: u64 = u64::try_from(nights).map_err(|_| overflow())?;
        let cents: u64 = self.cents.checked_mul(nights).ok_or_else(overflow)?;
        Ok(Self { cents })
    }
}

impl FromStr for Price {
    type Err = DomainError;

    /// Parses a decimal price string such as `"11.99"`, `"120"` or `"120.5"`.
    ///
    /// At most two fraction digits are accepted and the amount must be
    /// greater than zero.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::InvalidPrice(s.to_string());

        let (euros_part, cents_part) = match s.split_once('.') {
            Some((euros, cents)) => (euros, cents),
            None => (s, ""),
        };

        if euros_part.is_empty() || !euros_part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        if cents_part.len() > 2 || !cents_part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let euros: u64 = euros_part.parse().map_err(|_| invalid())?;
        // "120.5" means 120 euros and 50 cents
        let fraction: u64 = match cents_part.len() {
            0 => 0,
            1 => cents_part.parse::<u64>().map_err(|_| invalid())? * 10,
            _ => cents_part.parse().map_err(|_| invalid())?,
        };

        let cents: u64 = euros
            .checked_mul(100)
            .and_then(|c| c.checked_add(fraction))
            .ok_or_else(invalid)?;

        Self::from_cents(cents).map_err(|_| invalid())
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{:02}", self.cents / 100, self.cents % 100)
    }
}
