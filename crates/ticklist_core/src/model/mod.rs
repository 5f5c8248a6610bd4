//! Domain model for ticklist task records.
//!
//! # Responsibility
//! - Define the canonical data structures used by core business logic.
//! - Keep one record shape shared by the in-memory list and the persisted
//!   slot.
//!
//! # Invariants
//! - Every item is identified by a stable `TodoId`, unique within a list.
//! - Item text is non-empty after whitespace trimming.

pub mod todo;
