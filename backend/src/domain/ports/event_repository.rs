//! Driven port for the events calendar.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::event::{Event, EventFilter, EventPatch};

use super::StoreError;

/// Port for event storage.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Event>, StoreError>;

    /// Matching events in the filter's order.
    async fn list(&self, filter: EventFilter) -> Result<Vec<Event>, StoreError>;

    async fn insert(&self, event: Event) -> Result<Event, StoreError>;

    async fn update(&self, id: Uuid, patch: EventPatch) -> Result<Option<Event>, StoreError>;

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError>;
}
