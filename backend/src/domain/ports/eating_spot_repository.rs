//! Driven port for the eating spot directory.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::eating_spot::{EatingSpot, EatingSpotFilter, EatingSpotPatch};

use super::StoreError;

/// Port for eating spot storage. Spot names are unique; inserting a
/// duplicate raises [`StoreError::Conflict`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EatingSpotRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<EatingSpot>, StoreError>;

    /// Matching spots, best rated first.
    async fn list(&self, filter: EatingSpotFilter) -> Result<Vec<EatingSpot>, StoreError>;

    async fn insert(&self, spot: EatingSpot) -> Result<EatingSpot, StoreError>;

    async fn update(
        &self,
        id: Uuid,
        patch: EatingSpotPatch,
    ) -> Result<Option<EatingSpot>, StoreError>;

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError>;
}
