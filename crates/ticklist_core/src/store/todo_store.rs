//! The todo store: list state plus full-slot persistence.
//!
//! # Responsibility
//! - Expose the add/toggle/delete/list/count surface used by callers.
//! - Serialize the whole list into the `todos` slot after every mutation.
//!
//! # Invariants
//! - New items are inserted at the head; the list is newest first.
//! - `load` leaves the list empty when the slot is absent or unreadable.
//! - Save failures are reported, not propagated; memory and slot may
//!   diverge until the next successful save.

use crate::model::todo::{TodoId, TodoItem, TodoValidationError};
use crate::report::ErrorReporter;
use crate::storage::{KvStore, StorageError};
use log::{error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};

/// Slot key the full list is serialized under.
const TODOS_KEY: &str = "todos";

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level error for todo operations.
#[derive(Debug)]
pub enum StoreError {
    Validation(TodoValidationError),
    NotFound(TodoId),
    Storage(StorageError),
    InvalidData(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "todo not found: {id}"),
            Self::Storage(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted todo data: {message}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) => None,
            Self::Storage(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<TodoValidationError> for StoreError {
    fn from(value: TodoValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StorageError> for StoreError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

/// Ordered todo list with write-through persistence.
///
/// Owns the list exclusively; callers hold only transient references
/// returned by [`TodoStore::list`].
pub struct TodoStore<K: KvStore, R: ErrorReporter> {
    items: Vec<TodoItem>,
    kv: K,
    reporter: R,
    last_id: TodoId,
}

impl<K: KvStore, R: ErrorReporter> TodoStore<K, R> {
    /// Creates an empty store over the given collaborators.
    pub fn new(kv: K, reporter: R) -> Self {
        Self {
            items: Vec::new(),
            kv,
            reporter,
            last_id: 0,
        }
    }

    /// Restores the list from the persisted slot.
    ///
    /// # Contract
    /// - Absent slot: list stays empty, returns `Ok`.
    /// - Unreadable or invalid slot: list stays empty, returns the error
    ///   for caller-side reporting; no retry.
    pub fn load(&mut self) -> StoreResult<()> {
        let raw = match self.kv.get(TODOS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                info!("event=load module=store status=ok items=0 slot=absent");
                return Ok(());
            }
            Err(err) => {
                error!("event=load module=store status=error error={err}");
                return Err(err.into());
            }
        };

        let items: Vec<TodoItem> = serde_json::from_str(&raw).map_err(|err| {
            error!("event=load module=store status=error error={err}");
            StoreError::InvalidData(format!("slot `{TODOS_KEY}` failed to decode: {err}"))
        })?;

        for item in &items {
            item.validate()
                .map_err(|err| StoreError::InvalidData(format!("item {}: {err}", item.id)))?;
        }

        self.last_id = items.iter().map(|item| item.id).max().unwrap_or(0);
        info!(
            "event=load module=store status=ok items={}",
            items.len()
        );
        self.items = items;
        Ok(())
    }

    /// Adds a new item at the head of the list and persists.
    ///
    /// # Contract
    /// - Text is trimmed; empty input fails validation with no mutation.
    /// - The created item carries a fresh unique id and `completed = false`.
    pub fn add(&mut self, text: &str) -> StoreResult<TodoItem> {
        let trimmed = text.trim();
        let item = TodoItem::new(self.next_id(), trimmed);
        item.validate()?;

        info!("event=add module=store status=ok id={}", item.id);
        self.items.insert(0, item.clone());
        self.persist();
        Ok(item)
    }

    /// Flips the completion flag of the item with `id` and persists.
    ///
    /// Returns the updated item, or `NotFound` without mutating anything.
    pub fn toggle(&mut self, id: TodoId) -> StoreResult<TodoItem> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(StoreError::NotFound(id))?;

        item.completed = !item.completed;
        let updated = item.clone();
        info!(
            "event=toggle module=store status=ok id={id} completed={}",
            updated.completed
        );
        self.persist();
        Ok(updated)
    }

    /// Removes the item with `id` and persists.
    ///
    /// Returns `NotFound` without mutating anything when `id` is absent.
    pub fn delete(&mut self, id: TodoId) -> StoreResult<()> {
        let position = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or(StoreError::NotFound(id))?;

        self.items.remove(position);
        info!("event=delete module=store status=ok id={id}");
        self.persist();
        Ok(())
    }

    /// Current ordered list, newest first. No side effects.
    pub fn list(&self) -> &[TodoItem] {
        &self.items
    }

    /// Number of items. No side effects.
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Allocates the next item id.
    ///
    /// The candidate is the current wall clock in epoch milliseconds; two
    /// additions inside one clock tick would collide, so the candidate is
    /// bumped past the last issued or restored id.
    fn next_id(&mut self) -> TodoId {
        let now_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as TodoId)
            .unwrap_or(0);

        let id = now_ms.max(self.last_id + 1);
        self.last_id = id;
        id
    }

    /// Overwrites the slot with the full serialized list.
    ///
    /// A failed save is logged and relayed to the reporter; the in-memory
    /// mutation stands and the next successful mutation re-saves everything.
    fn persist(&self) {
        let serialized = match serde_json::to_string(&self.items) {
            Ok(serialized) => serialized,
            Err(err) => {
                error!("event=save module=store status=error error={err}");
                self.reporter.report("Failed to save todos");
                return;
            }
        };

        if let Err(err) = self.kv.set(TODOS_KEY, &serialized) {
            warn!(
                "event=save module=store status=error items={} error={err}",
                self.items.len()
            );
            self.reporter.report("Failed to save todos");
        }
    }
}
