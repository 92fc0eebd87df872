//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the load/save contract the inventory service persists through.
//! - Isolate file and encoding details from service orchestration.
//!
//! # Invariants
//! - Saves always write the full product sequence, replacing prior content.
//! - Loads return the full sequence or an error, never a partial sequence.

pub mod product_repo;
