//! Facility review service.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::domain::authorization::{Action, ResourceKind, authorize};
use crate::domain::error::Error;
use crate::domain::identity::Caller;
use crate::domain::ports::ReviewRepository;
use crate::domain::review::{NewReview, Review, ReviewFilter, ReviewPatch};

fn not_found() -> Error {
    Error::not_found("Review not found")
}

/// Orchestrates gate checks and store calls for reviews.
#[derive(Clone)]
pub struct ReviewService {
    repo: Arc<dyn ReviewRepository>,
}

impl ReviewService {
    pub fn new(repo: Arc<dyn ReviewRepository>) -> Self {
        Self { repo }
    }

    /// Matching reviews, newest first.
    pub async fn list(&self, filter: ReviewFilter) -> Result<Vec<Review>, Error> {
        Ok(self.repo.list(filter).await?)
    }

    pub async fn get(&self, id: Uuid) -> Result<Review, Error> {
        self.repo.find_by_id(id).await?.ok_or_else(not_found)
    }

    pub async fn create(&self, caller: &Caller, new: NewReview) -> Result<Review, Error> {
        authorize(ResourceKind::Review, None, caller, Action::Create)?;
        let review = Review::new(new, caller.id, Utc::now())?;
        Ok(self.repo.insert(review).await?)
    }

    pub async fn update(
        &self,
        caller: &Caller,
        id: Uuid,
        patch: ReviewPatch,
    ) -> Result<Review, Error> {
        let review = self.repo.find_by_id(id).await?.ok_or_else(not_found)?;
        authorize(
            ResourceKind::Review,
            Some(&review.author),
            caller,
            Action::Update,
        )?;
        self.repo.update(id, patch).await?.ok_or_else(not_found)
    }

    /// Flip the caller's helpful mark. No role restriction.
    pub async fn toggle_helpful(&self, caller: &Caller, id: Uuid) -> Result<Review, Error> {
        self.repo
            .toggle_helpful(id, caller.id)
            .await?
            .ok_or_else(not_found)
    }

    pub async fn delete(&self, caller: &Caller, id: Uuid) -> Result<(), Error> {
        let review = self.repo.find_by_id(id).await?.ok_or_else(not_found)?;
        authorize(
            ResourceKind::Review,
            Some(&review.author),
            caller,
            Action::Delete,
        )?;
        if self.repo.delete(id).await? {
            Ok(())
        } else {
            Err(not_found())
        }
    }
}
