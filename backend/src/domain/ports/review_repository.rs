//! Driven port for facility reviews.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::identity::CallerId;
use crate::domain::review::{Review, ReviewFilter, ReviewPatch};

use super::StoreError;

/// Port for review storage.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Review>, StoreError>;

    /// Matching reviews, newest first.
    async fn list(&self, filter: ReviewFilter) -> Result<Vec<Review>, StoreError>;

    async fn insert(&self, review: Review) -> Result<Review, StoreError>;

    async fn update(&self, id: Uuid, patch: ReviewPatch) -> Result<Option<Review>, StoreError>;

    /// Flip the caller's helpful vote and return the updated record.
    async fn toggle_helpful(
        &self,
        id: Uuid,
        caller: CallerId,
    ) -> Result<Option<Review>, StoreError>;

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError>;
}
