//! In-process key-value backend.
//!
//! # Responsibility
//! - Provide a zero-setup `KvStore` for tests and scratch sessions.
//!
//! # Invariants
//! - Values survive only for the lifetime of the process.

use super::{KvStore, StorageResult};
use std::cell::RefCell;
use std::collections::HashMap;

/// `HashMap`-backed store; nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryKvStore {
    slots: RefCell<HashMap<String, String>>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryKvStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.slots.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
