//! Inventory domain model.
//!
//! # Responsibility
//! - Define the product record owned by the inventory store.
//! - Keep stock arithmetic next to the data it mutates.
//!
//! # Invariants
//! - `quantity` is never driven below zero by `decrease_quantity`.
//! - Product ids are caller-supplied and not guaranteed unique.

pub mod product;
