//! In-memory adapter for the review port.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::identity::CallerId;
use crate::domain::ports::{ReviewRepository, StoreError};
use crate::domain::review::{Review, ReviewFilter, ReviewPatch};
use crate::domain::votes;

use super::memory::MemoryCollection;

#[derive(Debug, Default)]
pub struct MemoryReviewRepository {
    records: MemoryCollection<Review>,
}

impl MemoryReviewRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReviewRepository for MemoryReviewRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Review>, StoreError> {
        Ok(self.records.get(id).await)
    }

    async fn list(&self, filter: ReviewFilter) -> Result<Vec<Review>, StoreError> {
        let mut reviews = self.records.filtered(|review| filter.matches(review)).await;
        reviews.sort_by(Review::newest_first);
        Ok(reviews)
    }

    async fn insert(&self, review: Review) -> Result<Review, StoreError> {
        Ok(self.records.insert(review.id, review).await)
    }

    async fn update(&self, id: Uuid, patch: ReviewPatch) -> Result<Option<Review>, StoreError> {
        Ok(self.records.mutate(id, |review| review.apply(patch)).await)
    }

    async fn toggle_helpful(
        &self,
        id: Uuid,
        caller: CallerId,
    ) -> Result<Option<Review>, StoreError> {
        Ok(self
            .records
            .mutate(id, |review| {
                votes::toggle(review, caller);
            })
            .await)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        Ok(self.records.remove(id).await)
    }
}
