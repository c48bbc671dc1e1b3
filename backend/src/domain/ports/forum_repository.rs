//! Driven port for forum posts.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::forum::{ForumPost, ForumPostFilter, ForumPostPatch, Reply};
use crate::domain::identity::CallerId;

use super::StoreError;

/// Port for forum post storage. View bumps, reply pushes, upvote toggles
/// and solved flips are atomic read-modify-write operations against the
/// current record.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ForumRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<ForumPost>, StoreError>;

    /// Matching posts in the filter's order.
    async fn list(&self, filter: ForumPostFilter) -> Result<Vec<ForumPost>, StoreError>;

    async fn insert(&self, post: ForumPost) -> Result<ForumPost, StoreError>;

    /// Merge a patch and bump `updatedAt`.
    async fn update(
        &self,
        id: Uuid,
        patch: ForumPostPatch,
        now: DateTime<Utc>,
    ) -> Result<Option<ForumPost>, StoreError>;

    /// Count one view and return the updated record.
    async fn record_view(&self, id: Uuid) -> Result<Option<ForumPost>, StoreError>;

    /// Append a reply and return the updated record.
    async fn add_reply(&self, id: Uuid, reply: Reply) -> Result<Option<ForumPost>, StoreError>;

    /// Flip the caller's upvote and return the updated record.
    async fn toggle_upvote(
        &self,
        id: Uuid,
        caller: CallerId,
    ) -> Result<Option<ForumPost>, StoreError>;

    /// Flip the solved marker and return the updated record.
    async fn toggle_solved(
        &self,
        id: Uuid,
        now: DateTime<Utc>,
    ) -> Result<Option<ForumPost>, StoreError>;

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError>;
}
