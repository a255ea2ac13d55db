//! Durable key-value storage port for the cart
//!
//! # Tables
//!
//! | Table | Key | Value | Purpose |
//! |-------|-----|-------|---------|
//! | `cart_state` | logical key | JSON bytes | Cart lines + pending selections |
//!
//! The engine owns (de)serialization; backends move opaque bytes under
//! fixed logical keys. Two backends are provided: [`RedbStore`] for the
//! session's durable store and [`MemoryStore`] for tests and ephemeral
//! sessions. An absent key means "empty" and is never an error.
//!
//! # Durability
//!
//! redb commits with immediate durability: once `put` returns the value
//! survives process death. If the same key is written from two sessions
//! the last write wins; there is no merge.

use redb::{Database, ReadableDatabase, TableDefinition};
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Single table holding all cart state, keyed by logical key
const CART_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("cart_state");

/// Logical key for the serialized cart line list
pub const CART_LINES_KEY: &str = "cart_lines";

/// Logical key for the per-item pending size selection map
pub const PENDING_VARIATIONS_KEY: &str = "pending_variations";

/// Storage errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Store poisoned")]
    Poisoned,
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Durable key-value store the cart persists through
///
/// Implementations must treat a missing key as `Ok(None)`, never as an
/// error.
pub trait KeyValueStore: Send + Sync {
    /// Read the bytes under `key`, if any
    fn get(&self, key: &str) -> StoreResult<Option<Vec<u8>>>;

    /// Write `value` under `key`, replacing any previous value
    fn put(&self, key: &str, value: &[u8]) -> StoreResult<()>;

    /// Remove `key` if present
    fn remove(&self, key: &str) -> StoreResult<()>;
}

// ========== In-memory backend ==========

/// Volatile store for tests and ephemeral sessions
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    map: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<Vec<u8>>> {
        let map = self.map.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(map.get(key).cloned())
    }

    fn put(&self, key: &str, value: &[u8]) -> StoreResult<()> {
        let mut map = self.map.lock().map_err(|_| StoreError::Poisoned)?;
        map.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        let mut map = self.map.lock().map_err(|_| StoreError::Poisoned)?;
        map.remove(key);
        Ok(())
    }
}

// ========== redb backend ==========

/// Cart storage backed by redb
#[derive(Clone)]
pub struct RedbStore {
    db: Arc<Database>,
}

impl RedbStore {
    /// Open or create the database at the given path
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let db = Database::create(path)?;
        Self::init(db)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> StoreResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        Self::init(db)
    }

    fn init(db: Database) -> StoreResult<Self> {
        // Create the table up front so reads on a fresh database succeed
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(CART_TABLE)?;
        }
        write_txn.commit()?;
        Ok(Self { db: Arc::new(db) })
    }
}

impl KeyValueStore for RedbStore {
    fn get(&self, key: &str) -> StoreResult<Option<Vec<u8>>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(CART_TABLE)?;
        Ok(table.get(key)?.map(|guard| guard.value().to_vec()))
    }

    fn put(&self, key: &str, value: &[u8]) -> StoreResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(CART_TABLE)?;
            table.insert(key, value)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(CART_TABLE)?;
            table.remove(key)?;
        }
        write_txn.commit()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roundtrip(store: &dyn KeyValueStore) {
        assert!(store.get("missing").unwrap().is_none());

        store.put("k", b"v1").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some(&b"v1"[..]));

        // Overwrite replaces
        store.put("k", b"v2").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some(&b"v2"[..]));

        store.remove("k").unwrap();
        assert!(store.get("k").unwrap().is_none());

        // Removing an absent key is a no-op
        store.remove("k").unwrap();
    }

    #[test]
    fn test_memory_store_roundtrip() {
        roundtrip(&MemoryStore::new());
    }

    #[test]
    fn test_redb_store_roundtrip() {
        roundtrip(&RedbStore::open_in_memory().unwrap());
    }
}
