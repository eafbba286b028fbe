// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use innkeep_domain::{Customer, CustomerId, GuestName};
use std::collections::HashMap;

/// First customer ID handed out by a fresh registry.
const INITIAL_CUSTOMER_ID: u32 = 1;

/// Deduplicates customers by name and assigns stable numeric IDs.
///
/// The `(first, last)` name pair is the identity key: repeated bookings
/// under the same name resolve to the same customer record. Records are
/// created once, are immutable and are never deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerRegistry {
    /// All registered customers, keyed by name.
    customers: HashMap<GuestName, Customer>,
    /// The next customer ID to hand out.
    next_id: u32,
}

impl CustomerRegistry {
    /// Creates a new empty `CustomerRegistry`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            customers: HashMap::new(),
            next_id: INITIAL_CUSTOMER_ID,
        }
    }

    /// Returns the existing customer ID for the name, or assigns a new one.
    ///
    /// Idempotent for repeated identical name pairs; distinct pairs
    /// receive distinct, increasing IDs in first-seen order.
    pub fn get_or_add(&mut self, name: GuestName) -> CustomerId {
        if let Some(customer) = self.customers.get(&name) {
            return customer.customer_id();
        }
        let customer_id: CustomerId = CustomerId::new(self.next_id);
        self.next_id += 1;
        self.customers
            .insert(name.clone(), Customer::new(customer_id, name));
        customer_id
    }

    /// Returns the stored customer for the given name, if registered.
    #[must_use]
    pub fn get(&self, name: &GuestName) -> Option<&Customer> {
        self.customers.get(name)
    }

    /// Returns the number of registered customers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.customers.len()
    }

    /// Checks whether no customer has been registered yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }
}

impl Default for CustomerRegistry {
    fn default() -> Self {
        Self::new()
    }
}
