//! Key-value persistence contract and backends.
//!
//! # Responsibility
//! - Define the `KvStore` contract the todo store persists through.
//! - Keep SQLite details inside the core persistence boundary.
//!
//! # Invariants
//! - `get`/`set` are synchronous and all-or-nothing per call.
//! - Backends must not hand out a usable store before schema setup succeeds.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod memory;
mod sqlite;

pub use memory::MemoryKvStore;
pub use sqlite::SqliteKvStore;

pub type StorageResult<T> = Result<T, StorageError>;

/// Transport-level persistence error.
#[derive(Debug)]
pub enum StorageError {
    Sqlite(rusqlite::Error),
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
    /// Backend refused the read or write (quota exhausted, I/O failure).
    Unavailable(String),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "storage schema version {db_version} is newer than supported {latest_supported}"
            ),
            Self::Unavailable(message) => write!(f, "storage unavailable: {message}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
            Self::Unavailable(_) => None,
        }
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// Key-value persistence collaborator.
///
/// The todo store treats each call as atomic: a `set` either replaces the
/// whole slot or leaves it untouched.
pub trait KvStore {
    /// Reads the value stored under `key`, `None` when the slot is absent.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Overwrites the slot under `key` with `value`.
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}

impl<K: KvStore + ?Sized> KvStore for &K {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }
}
