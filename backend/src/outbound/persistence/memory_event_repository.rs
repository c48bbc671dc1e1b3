//! In-memory adapter for the event port.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::event::{Event, EventFilter, EventPatch};
use crate::domain::ports::{EventRepository, StoreError};

use super::memory::MemoryCollection;

#[derive(Debug, Default)]
pub struct MemoryEventRepository {
    records: MemoryCollection<Event>,
}

impl MemoryEventRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EventRepository for MemoryEventRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Event>, StoreError> {
        Ok(self.records.get(id).await)
    }

    async fn list(&self, filter: EventFilter) -> Result<Vec<Event>, StoreError> {
        let mut events = self.records.filtered(|event| filter.matches(event)).await;
        filter.sort(&mut events);
        Ok(events)
    }

    async fn insert(&self, event: Event) -> Result<Event, StoreError> {
        Ok(self.records.insert(event.id, event).await)
    }

    async fn update(&self, id: Uuid, patch: EventPatch) -> Result<Option<Event>, StoreError> {
        Ok(self.records.mutate(id, |event| event.apply(patch)).await)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        Ok(self.records.remove(id).await)
    }
}
