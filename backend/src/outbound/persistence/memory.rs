//! Shared in-memory record collection.
//!
//! Each repository adapter owns one [`MemoryCollection`] keyed by record id.
//! Mutations take the write lock for the whole read-modify-write, so toggle
//! and merge operations are atomic with respect to concurrent handlers.

use std::collections::HashMap;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::ports::StoreError;

/// A keyed set of records behind an async lock.
#[derive(Debug)]
pub struct MemoryCollection<T> {
    records: RwLock<HashMap<Uuid, T>>,
}

impl<T> Default for MemoryCollection<T> {
    fn default() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }
}

impl<T: Clone> MemoryCollection<T> {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }

    pub async fn get(&self, id: Uuid) -> Option<T> {
        self.records.read().await.get(&id).cloned()
    }

    /// Records passing the predicate, in no particular order.
    pub async fn filtered(&self, keep: impl Fn(&T) -> bool) -> Vec<T> {
        self.records
            .read()
            .await
            .values()
            .filter(|record| keep(record))
            .cloned()
            .collect()
    }

    pub async fn insert(&self, id: Uuid, record: T) -> T {
        self.records.write().await.insert(id, record.clone());
        record
    }

    /// Insert guarded by a uniqueness predicate over existing records.
    pub async fn insert_unique(
        &self,
        id: Uuid,
        record: T,
        duplicate: impl Fn(&T) -> bool,
        message: &str,
    ) -> Result<T, StoreError> {
        let mut records = self.records.write().await;
        if records.values().any(duplicate) {
            return Err(StoreError::conflict(message));
        }
        records.insert(id, record.clone());
        Ok(record)
    }

    /// Apply a closure to the record under the write lock and return the
    /// updated copy. `None` when no record has the id.
    pub async fn mutate(&self, id: Uuid, apply: impl FnOnce(&mut T)) -> Option<T> {
        let mut records = self.records.write().await;
        let record = records.get_mut(&id)?;
        apply(record);
        Some(record.clone())
    }

    /// `true` when a record was removed.
    pub async fn remove(&self, id: Uuid) -> bool {
        self.records.write().await.remove(&id).is_some()
    }
}
