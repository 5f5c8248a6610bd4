//! Todo item domain model.
//!
//! # Responsibility
//! - Define the canonical record persisted to the key-value slot.
//! - Provide validation shared by write and restore paths.
//!
//! # Invariants
//! - `id` is stable and never reused for another item in the same list.
//! - `text` is immutable after creation; there is no edit operation.
//! - The serialized field names (`id`, `text`, `completed`) are the
//!   persisted record format and must not change silently.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier for a todo item.
///
/// Ids are epoch-millisecond timestamps bumped to stay strictly increasing,
/// so later items always carry larger ids. Kept as a type alias to make
/// semantic intent explicit in signatures.
pub type TodoId = i64;

/// Validation failures for todo item state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TodoValidationError {
    /// Item text is empty after trimming whitespace.
    EmptyText,
}

impl Display for TodoValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyText => write!(f, "todo text cannot be empty"),
        }
    }
}

impl Error for TodoValidationError {}

/// Canonical task record.
///
/// This struct is serialized as-is into the persisted slot, one record per
/// item, so its serde shape is the on-disk format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Stable id assigned at creation, immutable.
    pub id: TodoId,
    /// User-supplied text, immutable after creation.
    pub text: String,
    /// Completion flag, flipped by toggle.
    pub completed: bool,
}

impl TodoItem {
    /// Creates a new item with `completed = false`.
    ///
    /// The caller supplies the id; id allocation lives in the store so it
    /// can enforce uniqueness across the whole list.
    pub fn new(id: TodoId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }

    /// Checks record-level invariants.
    ///
    /// Called before any write and on every record restored from the slot,
    /// so invalid persisted state is rejected instead of masked.
    pub fn validate(&self) -> Result<(), TodoValidationError> {
        if self.text.trim().is_empty() {
            return Err(TodoValidationError::EmptyText);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{TodoItem, TodoValidationError};

    #[test]
    fn new_item_starts_uncompleted() {
        let item = TodoItem::new(1, "water plants");
        assert_eq!(item.id, 1);
        assert_eq!(item.text, "water plants");
        assert!(!item.completed);
    }

    #[test]
    fn validate_rejects_blank_text() {
        let item = TodoItem::new(2, "   ");
        assert_eq!(item.validate(), Err(TodoValidationError::EmptyText));
    }

    #[test]
    fn validate_accepts_text_with_surrounding_whitespace() {
        let item = TodoItem::new(3, "  call dentist  ");
        assert!(item.validate().is_ok());
    }
}
