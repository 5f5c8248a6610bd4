//! Todo list state and persistence orchestration.
//!
//! # Responsibility
//! - Own the ordered todo list and every mutation applied to it.
//! - Mirror the full list into the key-value slot after each mutation.
//!
//! # Invariants
//! - Ids are unique within the list and strictly increase over the store
//!   lifetime.
//! - A failed save never rolls back the in-memory mutation.

pub mod todo_store;
