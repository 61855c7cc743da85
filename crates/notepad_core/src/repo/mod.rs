//! Persistence adapter for the note collection.
//!
//! # Responsibility
//! - Define the durable key-value store contract and its implementations.
//! - Map the note collection onto one JSON slot of that store.
//!
//! # Invariants
//! - The whole collection is the unit of persistence; writes replace the slot.
//! - An absent slot is reported as `None`, never as an empty collection.

pub mod kv_repo;
pub mod note_repo;
