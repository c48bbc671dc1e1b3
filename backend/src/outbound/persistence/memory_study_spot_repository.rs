//! In-memory adapter for the study spot port.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::ports::{StoreError, StudySpotRepository};
use crate::domain::study_spot::{StudySpot, StudySpotPatch};

use super::memory::MemoryCollection;

#[derive(Debug, Default)]
pub struct MemoryStudySpotRepository {
    records: MemoryCollection<StudySpot>,
}

impl MemoryStudySpotRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StudySpotRepository for MemoryStudySpotRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<StudySpot>, StoreError> {
        Ok(self.records.get(id).await)
    }

    async fn list(&self) -> Result<Vec<StudySpot>, StoreError> {
        let mut spots = self.records.filtered(|_| true).await;
        spots.sort_by(StudySpot::newest_first);
        Ok(spots)
    }

    async fn insert(&self, spot: StudySpot) -> Result<StudySpot, StoreError> {
        Ok(self.records.insert(spot.id, spot).await)
    }

    async fn update(
        &self,
        id: Uuid,
        patch: StudySpotPatch,
    ) -> Result<Option<StudySpot>, StoreError> {
        Ok(self.records.mutate(id, |spot| spot.apply(patch)).await)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        Ok(self.records.remove(id).await)
    }
}
