//! Driven port for anonymous confessions.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::confession::{Confession, ConfessionFilter};
use crate::domain::identity::CallerId;

use super::StoreError;

/// Port for confession storage. Like toggles and approval flips are
/// atomic read-modify-write operations against the current record.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConfessionRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Confession>, StoreError>;

    /// Matching confessions, newest first.
    async fn list(&self, filter: ConfessionFilter) -> Result<Vec<Confession>, StoreError>;

    async fn insert(&self, confession: Confession) -> Result<Confession, StoreError>;

    /// Flip the caller's like and return the updated record. `None` when
    /// no record has the id.
    async fn toggle_like(
        &self,
        id: Uuid,
        caller: CallerId,
    ) -> Result<Option<Confession>, StoreError>;

    /// Set the moderation flag and return the updated record.
    async fn set_approved(
        &self,
        id: Uuid,
        approved: bool,
    ) -> Result<Option<Confession>, StoreError>;

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError>;
}
