//! Core domain logic for Ticklist.
//! This crate is the single source of truth for list invariants and the
//! persistence contract.

pub mod logging;
pub mod model;
pub mod report;
pub mod storage;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::todo::{TodoId, TodoItem, TodoValidationError};
pub use report::{ErrorReporter, LogReporter};
pub use storage::{KvStore, MemoryKvStore, SqliteKvStore, StorageError, StorageResult};
pub use store::todo_store::{StoreError, StoreResult, TodoStore};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
