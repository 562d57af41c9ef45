use async_trait::async_trait;
use thiserror::Error;

use crate::models::Item;

/// Errors raised by an item store
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store could not be reached at all (connection failure, timeout)
    #[error("store unavailable during {operation}: {message}")]
    Unavailable {
        operation: &'static str,
        message: String,
    },
    /// The store was reached but the operation failed
    #[error("{operation} failed: {message}")]
    Operation {
        operation: &'static str,
        message: String,
    },
    /// A stored record does not have the shape of an item
    #[error("invalid record: {0}")]
    InvalidRecord(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Key-value storage for items, keyed by `id`
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Point lookup. `Ok(None)` when no record has this id.
    async fn get(&self, id: &str) -> Result<Option<Item>>;

    /// Unconditional write; an existing record with the same id is replaced.
    async fn put(&self, item: &Item) -> Result<()>;

    /// Every record the store returns for a single scan request, in store order.
    async fn scan(&self) -> Result<Vec<Item>>;

    /// Read-only check that the backing table is reachable.
    async fn describe(&self) -> Result<()>;
}

#[cfg(test)]
pub use memory::InMemoryStore;
