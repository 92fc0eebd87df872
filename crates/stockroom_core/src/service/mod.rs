//! Core use-case services.
//!
//! # Responsibility
//! - Own the in-memory inventory and expose operator-level operations.
//! - Keep CLI callers decoupled from storage details.

pub mod inventory_service;
