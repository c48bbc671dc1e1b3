//! In-memory adapter for the eating spot port.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::eating_spot::{EatingSpot, EatingSpotFilter, EatingSpotPatch};
use crate::domain::ports::{EatingSpotRepository, StoreError};

use super::memory::MemoryCollection;

const DUPLICATE_NAME: &str = "An eating spot with this name already exists";

#[derive(Debug, Default)]
pub struct MemoryEatingSpotRepository {
    records: MemoryCollection<EatingSpot>,
}

impl MemoryEatingSpotRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EatingSpotRepository for MemoryEatingSpotRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<EatingSpot>, StoreError> {
        Ok(self.records.get(id).await)
    }

    async fn list(&self, filter: EatingSpotFilter) -> Result<Vec<EatingSpot>, StoreError> {
        let mut spots = self.records.filtered(|spot| filter.matches(spot)).await;
        spots.sort_by(EatingSpot::top_rated);
        Ok(spots)
    }

    async fn insert(&self, spot: EatingSpot) -> Result<EatingSpot, StoreError> {
        self.records
            .insert_unique(
                spot.id,
                spot.clone(),
                |existing| existing.name.eq_ignore_ascii_case(&spot.name),
                DUPLICATE_NAME,
            )
            .await
    }

    async fn update(
        &self,
        id: Uuid,
        patch: EatingSpotPatch,
    ) -> Result<Option<EatingSpot>, StoreError> {
        Ok(self.records.mutate(id, |spot| spot.apply(patch)).await)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        Ok(self.records.remove(id).await)
    }
}
