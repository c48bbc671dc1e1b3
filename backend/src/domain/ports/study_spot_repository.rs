//! Driven port for the study spot catalogue.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::study_spot::{StudySpot, StudySpotPatch};

use super::StoreError;

/// Port for study spot storage.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StudySpotRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<StudySpot>, StoreError>;

    /// Every spot, newest first.
    async fn list(&self) -> Result<Vec<StudySpot>, StoreError>;

    /// Store a new spot and echo the stored record.
    async fn insert(&self, spot: StudySpot) -> Result<StudySpot, StoreError>;

    /// Merge a patch into the current record atomically. `None` when no
    /// record has the id.
    async fn update(&self, id: Uuid, patch: StudySpotPatch)
        -> Result<Option<StudySpot>, StoreError>;

    /// `true` when a record was removed.
    async fn delete(&self, id: Uuid) -> Result<bool, StoreError>;
}
