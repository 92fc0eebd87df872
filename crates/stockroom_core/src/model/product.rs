//! Product record model.
//!
//! # Responsibility
//! - Hold one inventory line item (id, name, quantity, price).
//! - Provide stock adjustment helpers and the console display line.
//!
//! # Invariants
//! - `decrease_quantity` never makes `quantity` negative; oversized requests
//!   leave the record untouched.
//! - Construction performs no validation.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Caller-supplied product identifier.
pub type ProductId = i32;

/// One inventory line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Operator-chosen id. Duplicates are allowed by the store.
    pub id: ProductId,
    pub name: String,
    /// Units on hand. Non-negative by convention only.
    pub quantity: i32,
    /// Unit price.
    pub price: f64,
}

impl Product {
    /// Creates a product record exactly as given.
    pub fn new(id: ProductId, name: impl Into<String>, quantity: i32, price: f64) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
            price,
        }
    }

    /// Adds `amount` units unconditionally.
    ///
    /// Zero and negative amounts are applied as-is. Overflow wraps.
    pub fn increase_quantity(&mut self, amount: i32) {
        self.quantity = self.quantity.wrapping_add(amount);
    }

    /// Removes `amount` units when enough stock is on hand.
    ///
    /// When `amount > quantity` nothing changes and nothing is reported.
    pub fn decrease_quantity(&mut self, amount: i32) {
        if amount <= self.quantity {
            self.quantity = self.quantity.wrapping_sub(amount);
        }
    }
}

impl Display for Product {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ID: {} | Name: {} | Quantity: {} | Price: {:.2}",
            self.id, self.name, self.quantity, self.price
        )
    }
}
