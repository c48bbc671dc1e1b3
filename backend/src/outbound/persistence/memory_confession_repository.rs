//! In-memory adapter for the confession port.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::confession::{Confession, ConfessionFilter};
use crate::domain::identity::CallerId;
use crate::domain::ports::{ConfessionRepository, StoreError};
use crate::domain::votes;

use super::memory::MemoryCollection;

#[derive(Debug, Default)]
pub struct MemoryConfessionRepository {
    records: MemoryCollection<Confession>,
}

impl MemoryConfessionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ConfessionRepository for MemoryConfessionRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Confession>, StoreError> {
        Ok(self.records.get(id).await)
    }

    async fn list(&self, filter: ConfessionFilter) -> Result<Vec<Confession>, StoreError> {
        let mut confessions = self.records.filtered(|c| filter.matches(c)).await;
        confessions.sort_by(Confession::newest_first);
        Ok(confessions)
    }

    async fn insert(&self, confession: Confession) -> Result<Confession, StoreError> {
        Ok(self.records.insert(confession.id, confession).await)
    }

    async fn toggle_like(
        &self,
        id: Uuid,
        caller: CallerId,
    ) -> Result<Option<Confession>, StoreError> {
        Ok(self
            .records
            .mutate(id, |confession| {
                votes::toggle(confession, caller);
            })
            .await)
    }

    async fn set_approved(
        &self,
        id: Uuid,
        approved: bool,
    ) -> Result<Option<Confession>, StoreError> {
        Ok(self
            .records
            .mutate(id, |confession| confession.is_approved = approved)
            .await)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        Ok(self.records.remove(id).await)
    }
}
